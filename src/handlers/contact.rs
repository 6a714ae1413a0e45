//! Contact page and form submission.
//!
//! ```text
//! POST /contact/submit
//!   invalid            → 200, form again with values and inline errors
//!   valid, sent        → fragment: success message
//!                        full page: 303 → /contact?success=true
//!   valid, send failed → fragment: form again with a general error
//!                        full page: 500
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::contact::{ContactForm, SEND_FAILED};
use crate::render::{self, ContactFormFragment, ContactPage, ContactSuccess, Mode};
use crate::request::Request;
use crate::response::Response;
use crate::site::Site;
use crate::status::Status;

/// Where a full-page submission lands after a successful send.
pub const SUCCESS_REDIRECT: &str = "/contact?success=true";

/// `GET /contact`: the empty form inside the page shell. `?success=true`
/// adds the confirmation banner a successful full-page post redirects to.
pub async fn page(req: Request, _site: Arc<Site>) -> Response {
    let success = req.query_param("success").as_deref() == Some("true");
    render::html(&ContactPage::new(&ContactForm::default(), success))
}

/// `POST /contact/submit`: validate, hand off to the notifier, respond in
/// the shape the request asked for.
pub async fn submit(req: Request, site: Arc<Site>) -> Response {
    render::varies_by_mode(outcome(req, &site).await)
}

async fn outcome(req: Request, site: &Site) -> Response {
    let mode = Mode::of(&req);

    let submission = match ContactForm::from_form(&req.form()).validate() {
        Ok(submission) => submission,
        Err(rejected) => {
            debug!(fields = rejected.errors.len(), "contact form rejected");
            return form_again(mode, &rejected);
        }
    };

    match site.notifier().send(&submission).await {
        Ok(()) => match mode {
            Mode::Fragment => render::html(&ContactSuccess),
            Mode::Full => Response::redirect(SUCCESS_REDIRECT),
        },
        Err(e) => {
            warn!(error = %e, "contact notification failed");
            match mode {
                Mode::Fragment => form_again(mode, &submission.into_form_with_error(SEND_FAILED)),
                Mode::Full => Response::builder()
                    .status(Status::InternalServerError)
                    .text("Failed to send message"),
            }
        }
    }
}

/// The form re-rendered with its values and errors: just the form block for
/// partial requests, the whole contact page otherwise.
fn form_again(mode: Mode, form: &ContactForm) -> Response {
    match mode {
        Mode::Fragment => render::html(&ContactFormFragment { form }),
        Mode::Full => render::html(&ContactPage::new(form, false)),
    }
}
