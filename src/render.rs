//! Page rendering.
//!
//! Every page is an askama template checked at compile time. Pages that can
//! be swapped into an already loaded document come in two shapes: a
//! fragment holding only the inner content, and a full page that wraps the
//! same fragment in the shared shell (`base.html`: head, navigation, footer).

use askama::Template;
use tracing::error;

use crate::catalog::Project;
use crate::contact::ContactForm;
use crate::error::Result;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

const SITE_NAME: &str = "fdecono";

/// Which shape of response a request gets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Complete document inside the shared shell.
    Full,
    /// Inner content only, for splicing into the current page.
    Fragment,
}

impl Mode {
    /// Fragment when the origin signal is present, full page otherwise.
    pub fn of(req: &Request) -> Self {
        if req.is_partial() { Self::Fragment } else { Self::Full }
    }
}

/// Marks a response whose body depends on [`Mode`], so caches keep the
/// fragment and the full page apart.
pub fn varies_by_mode(response: Response) -> Response {
    response.with_header("vary", "HX-Request")
}

/// Navigation entry highlighted in the shell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Nav {
    Home,
    Projects,
    Contact,
}

impl Nav {
    pub fn is(self, name: &str) -> bool {
        let own = match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Contact => "contact",
        };
        own == name
    }
}

fn title(page: &str) -> String {
    format!("{page} - {SITE_NAME}")
}

/// Renders a template to a string.
pub fn to_string<T: Template>(template: &T) -> Result<String> {
    Ok(template.render()?)
}

/// Renders a template into a `200 text/html` response.
///
/// A render failure is logged and answered with an opaque 500.
pub fn html<T: Template>(template: &T) -> Response {
    match to_string(template) {
        Ok(body) => Response::html(body),
        Err(e) => {
            error!(template = std::any::type_name::<T>(), error = %e, "render failed");
            Response::error(Status::InternalServerError)
        }
    }
}

// ── Full pages ────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage<'a> {
    pub title: String,
    pub nav: Nav,
    pub projects: &'a [Project],
}

impl<'a> HomePage<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { title: "Federico Decono".to_owned(), nav: Nav::Home, projects }
    }
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsPage<'a> {
    pub title: String,
    pub nav: Nav,
    pub projects: &'a [Project],
}

impl<'a> ProjectsPage<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { title: title("Projects"), nav: Nav::Projects, projects }
    }
}

#[derive(Template)]
#[template(path = "project.html")]
pub struct ProjectPage<'a> {
    pub title: String,
    pub nav: Nav,
    pub project: &'a Project,
}

impl<'a> ProjectPage<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { title: title(&project.title), nav: Nav::Projects, project }
    }
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage<'a> {
    pub title: String,
    pub nav: Nav,
    pub form: &'a ContactForm,
    /// Show the one-time "message sent" banner above the form.
    pub success: bool,
}

impl<'a> ContactPage<'a> {
    pub fn new(form: &'a ContactForm, success: bool) -> Self {
        Self { title: title("Contact"), nav: Nav::Contact, form, success }
    }
}

// ── Fragments ─────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "partials/project_detail.html")]
pub struct ProjectDetail<'a> {
    pub project: &'a Project,
}

#[derive(Template)]
#[template(path = "partials/contact_form.html")]
pub struct ContactFormFragment<'a> {
    pub form: &'a ContactForm,
}

#[derive(Template)]
#[template(path = "partials/contact_success.html")]
pub struct ContactSuccess;
