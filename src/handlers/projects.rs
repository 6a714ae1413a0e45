//! Project list and detail pages.

use std::sync::Arc;

use crate::render::{self, Mode, ProjectDetail, ProjectPage, ProjectsPage};
use crate::request::Request;
use crate::response::Response;
use crate::site::Site;
use crate::status::Status;

/// `GET /projects`: the whole catalog in catalog order. Always a full page.
pub async fn list(_req: Request, site: Arc<Site>) -> Response {
    render::html(&ProjectsPage::new(site.catalog().all()))
}

/// `GET /projects/{id}`: one project, as a fragment for partial-refresh
/// requests and as a full page otherwise.
///
/// An unknown id gets the same 404 as a missing one.
pub async fn detail(req: Request, site: Arc<Site>) -> Response {
    let Some(project) = req.param("id").and_then(|id| site.catalog().find(id)) else {
        return Response::error(Status::NotFound);
    };

    render::varies_by_mode(match Mode::of(&req) {
        Mode::Fragment => render::html(&ProjectDetail { project }),
        Mode::Full => render::html(&ProjectPage::new(project)),
    })
}
