//! Liveness probe.
//!
//! ```text
//! GET /health  →  200 OK, body "OK"
//! ```
//!
//! If the process can answer HTTP at all it is alive, so the handler has no
//! dependencies: it never looks at the catalog or the notifier.

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;
use crate::site::Site;

pub async fn liveness(_req: Request, _site: Arc<Site>) -> Response {
    Response::text("OK")
}
