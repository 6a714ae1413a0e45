//! Home page.

use std::sync::Arc;

use crate::render::{self, HomePage};
use crate::request::Request;
use crate::response::Response;
use crate::site::Site;

/// `GET /`: the first entries of the catalog inside the page shell. Always a
/// full page.
pub async fn home(_req: Request, site: Arc<Site>) -> Response {
    render::html(&HomePage::new(site.catalog().home()))
}
