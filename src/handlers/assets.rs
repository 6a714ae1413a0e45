//! Static files under `/static/`.
//!
//! The files themselves are served by `tower_http`'s [`ServeDir`]: it
//! percent-decodes the path, refuses anything that would leave the static
//! directory, picks the content type and answers conditional and range
//! requests. Its answer is buffered into a folio [`Response`].

use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use tower_http::services::ServeDir;
use tracing::error;

use crate::request::Request;
use crate::response::Response;
use crate::site::Site;
use crate::status::Status;

/// `GET /static/{*path}`
pub async fn serve(req: Request, site: Arc<Site>) -> Response {
    let Some(forwarded) = forward(&req) else {
        return Response::error(Status::NotFound);
    };

    // Directories are not listed and not redirected: they read as missing.
    let mut files = ServeDir::new(site.static_dir()).append_index_html_on_directories(false);
    let served = match files.try_call(forwarded).await {
        Ok(served) => served,
        Err(e) => {
            error!(path = req.path(), error = %e, "static file service failed");
            return Response::error(Status::InternalServerError);
        }
    };

    let (parts, body) = served.into_parts();
    let status = match Status::try_from(parts.status) {
        Ok(status) => status,
        Err(code) => {
            error!(path = req.path(), %code, "static file service answered with an unexpected status");
            return Response::error(Status::InternalServerError);
        }
    };
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            error!(path = req.path(), error = %e, "static read failed");
            return Response::error(Status::InternalServerError);
        }
    };

    let mut builder = Response::builder().status(status);
    for (name, value) in &parts.headers {
        if let Ok(value) = value.to_str() {
            builder = builder.header(name.as_str(), value);
        }
    }
    builder.raw(body)
}

/// The request as the file service sees it: the `/static` prefix stripped,
/// the rest of the path still percent-encoded, method and headers kept so
/// `HEAD`, `If-Modified-Since` and `Range` keep working.
fn forward(req: &Request) -> Option<http::Request<Empty<Bytes>>> {
    let uri = format!("/{}", req.param("path").unwrap_or_default()).parse().ok()?;
    let mut forwarded = http::Request::new(Empty::new());
    *forwarded.method_mut() = req.method().clone();
    *forwarded.uri_mut() = uri;
    *forwarded.headers_mut() = req.headers().clone();
    Some(forwarded)
}
