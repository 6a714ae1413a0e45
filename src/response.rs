//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Handlers build a [`Response`] and return it. The server turns it into a
//! hyper response at the edge; tests inspect it directly.

use bytes::Bytes;
use http_body_util::Full;

use crate::status::Status;

// ── ContentType ───────────────────────────────────────────────────────────────

/// Content-type values of the bodies folio renders itself. Static files
/// carry whatever type the file service assigns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentType {
    Html,
    Text,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK, no custom headers needed)
///
/// ```rust
/// use folio::{Response, Status};
///
/// Response::html("<p>hi</p>");
/// Response::text("OK");
/// Response::error(Status::NotFound);
/// Response::redirect("/contact?success=true");
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use folio::{Response, Status};
///
/// Response::builder()
///     .status(Status::InternalServerError)
///     .text("Failed to send message");
///
/// Response::builder()
///     .header("vary", "HX-Request")
///     .html("<p>fragment</p>");
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Bytes,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: Status,
}

impl Response {
    /// `200 OK`, `text/html; charset=utf-8`.
    pub fn html(body: impl Into<String>) -> Self {
        Self::builder().html(body)
    }

    /// `200 OK`, `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Plain-text response whose body is the status reason phrase. Used for
    /// 404 / 405 / 500 so no internal detail reaches the client.
    pub fn error(code: Status) -> Self {
        Self::builder().status(code).text(code.reason())
    }

    /// `303 See Other` to `location`: the browser follows with a GET, so a
    /// refresh never re-posts the form that produced this response.
    pub fn redirect(location: &str) -> Self {
        Self::builder()
            .status(Status::SeeOther)
            .header("location", location)
            .no_body()
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: Status::Ok }
    }

    /// Appends a header to a finished response.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// The answer to a `HEAD` request: same status and headers, no body.
    /// `content-length` still reports what a `GET` would have sent.
    pub(crate) fn into_head(mut self) -> Self {
        if self.header("content-length").is_none() {
            self.headers.push(("content-length".to_owned(), self.body.len().to_string()));
        }
        self.body = Bytes::new();
        self
    }

    pub fn status_code(&self) -> Status {
        self.status
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as UTF-8, lossily decoded.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Converts into the hyper response type written to the connection.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(http::StatusCode::from(self.status));
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(Full::new(self.body)).unwrap_or_else(|_| {
            // Only reachable with a header value that is not valid on the wire.
            let mut fallback = http::Response::new(Full::new(Bytes::from_static(b"Internal Server Error")));
            *fallback.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method, so you always know what you're sending.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: Status,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with an HTML body (`text/html; charset=utf-8`).
    pub fn html(self, body: impl Into<String>) -> Response {
        self.finish(ContentType::Html, Bytes::from(body.into()))
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish(ContentType::Text, Bytes::from(body.into()))
    }

    /// Terminate with a body whose headers were already set, content type
    /// included. Used for files handed over by the static file service.
    pub(crate) fn raw(self, body: Bytes) -> Response {
        Response { body, headers: self.headers, status: self.status }
    }

    /// Terminate with no body (e.g. `Status::SeeOther`).
    pub fn no_body(self) -> Response {
        Response { body: Bytes::new(), headers: self.headers, status: self.status }
    }

    fn finish(self, content_type: ContentType, body: Bytes) -> Response {
        let mut headers = vec![("content-type".to_owned(), content_type.as_str().to_owned())];
        headers.extend(self.headers);
        Response { body, headers, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_is_see_other_with_location() {
        let res = Response::redirect("/contact?success=true");
        assert_eq!(res.status_code(), Status::SeeOther);
        assert_eq!(res.header("Location"), Some("/contact?success=true"));
        assert!(res.body().is_empty());
    }

    #[test]
    fn error_body_is_only_the_reason_phrase() {
        let res = Response::error(Status::InternalServerError);
        assert_eq!(res.body_text(), "Internal Server Error");
        assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
    }

    #[test]
    fn head_keeps_headers_and_length_but_drops_body() {
        let res = Response::text("OK").with_header("vary", "HX-Request").into_head();
        assert!(res.body().is_empty());
        assert_eq!(res.header("content-length"), Some("2"));
        assert_eq!(res.header("Vary"), Some("HX-Request"));
        assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
    }

    #[test]
    fn into_http_keeps_status_and_headers() {
        let res = Response::builder()
            .status(Status::NotFound)
            .header("x-test", "1")
            .html("<p>gone</p>")
            .into_http();
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(res.headers()["x-test"], "1");
        assert_eq!(res.headers()["content-type"], "text/html; charset=utf-8");
    }
}
