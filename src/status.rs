//! HTTP status codes as a typed enum.
//!
//! Only the codes the site actually answers with are listed, including the
//! ones the static file service produces for conditional and range requests.
//!
//! ```rust
//! use folio::{Response, Status};
//!
//! Response::error(Status::NotFound);
//!
//! Response::builder()
//!     .status(Status::SeeOther)
//!     .header("location", "/contact?success=true")
//!     .no_body();
//! ```

/// The HTTP status codes folio responds with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                            // 200
    PartialContent,                // 206

    // ── 3xx Redirection ───────────────────────────────────────────────────────
    SeeOther,                      // 303
    NotModified,                   // 304
    TemporaryRedirect,             // 307

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,                    // 400
    NotFound,                      // 404
    MethodNotAllowed,              // 405
    PreconditionFailed,            // 412
    RangeNotSatisfiable,           // 416

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,           // 500
}

impl Status {
    const ALL: [Status; 11] = [
        Self::Ok,
        Self::PartialContent,
        Self::SeeOther,
        Self::NotModified,
        Self::TemporaryRedirect,
        Self::BadRequest,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::PreconditionFailed,
        Self::RangeNotSatisfiable,
        Self::InternalServerError,
    ];

    pub fn code(self) -> u16 {
        match self {
            Self::Ok                  => 200,
            Self::PartialContent      => 206,
            Self::SeeOther            => 303,
            Self::NotModified         => 304,
            Self::TemporaryRedirect   => 307,
            Self::BadRequest          => 400,
            Self::NotFound            => 404,
            Self::MethodNotAllowed    => 405,
            Self::PreconditionFailed  => 412,
            Self::RangeNotSatisfiable => 416,
            Self::InternalServerError => 500,
        }
    }

    /// Canonical reason phrase, used as the body of bare error responses.
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok                  => "OK",
            Self::PartialContent      => "Partial Content",
            Self::SeeOther            => "See Other",
            Self::NotModified         => "Not Modified",
            Self::TemporaryRedirect   => "Temporary Redirect",
            Self::BadRequest          => "Bad Request",
            Self::NotFound            => "Not Found",
            Self::MethodNotAllowed    => "Method Not Allowed",
            Self::PreconditionFailed  => "Precondition Failed",
            Self::RangeNotSatisfiable => "Range Not Satisfiable",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        http::StatusCode::from_u16(s.code()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Fails for any code folio does not answer with.
impl TryFrom<http::StatusCode> for Status {
    type Error = http::StatusCode;

    fn try_from(code: http::StatusCode) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code.as_u16())
            .ok_or(code)
    }
}
