#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use folio::{Catalog, ContactSubmission, Notifier, NotifyError, Request, Response, Router, Site};

/// Remembers every submission it is handed.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<ContactSubmission>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// Rejects every submission.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _submission: &ContactSubmission) -> Result<(), NotifyError> {
        Err(NotifyError("smtp unavailable".to_owned()))
    }
}

/// Three projects; the first two are *not* featured and the third is, so
/// the home page test can tell prefix selection from featured filtering.
pub const FIXTURE_CATALOG: &str = r#"
[[projects]]
id = "alpha"
title = "Alpha Tool"
short_description = "First entry"
long_description = "Alpha long description"
repository_url = "https://example.com/alpha"
technologies = ["Rust"]
created_at = "2024-03-01"
featured = false

[[projects]]
id = "beta"
title = "Beta Service"
short_description = "Second entry"
long_description = "Beta long description"
repository_url = "https://example.com/beta"
live_url = "https://beta.example.com"
technologies = ["Rust", "htmx"]
created_at = "2024-02-01"
featured = false

[[projects]]
id = "gamma"
title = "Gamma Library"
short_description = "Third entry"
long_description = "Gamma long description"
repository_url = "https://example.com/gamma"
technologies = ["Rust"]
created_at = "2024-01-01"
featured = true
"#;

pub fn app_with(catalog: Catalog, notifier: Arc<dyn Notifier>, static_dir: &Path) -> Router {
    Site::new(catalog, notifier).with_static_dir(static_dir).into_router()
}

/// The embedded catalog with a recording notifier.
pub fn app() -> (Router, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = app_with(Catalog::embedded().unwrap(), notifier.clone(), Path::new("static"));
    (app, notifier)
}

pub async fn get(app: &Router, path: &str) -> Response {
    send(app, "GET", path, false, Bytes::new()).await
}

pub async fn get_partial(app: &Router, path: &str) -> Response {
    send(app, "GET", path, true, Bytes::new()).await
}

pub async fn post_form(app: &Router, path: &str, partial: bool, fields: &[(&str, &str)]) -> Response {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    send(app, "POST", path, partial, Bytes::from(body)).await
}

pub async fn send(app: &Router, method: &str, path: &str, partial: bool, body: Bytes) -> Response {
    let mut builder = http::Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/x-www-form-urlencoded");
    if partial {
        builder = builder.header("HX-Request", "true");
    }
    app.handle(Request::from_http(builder.body(body).unwrap())).await
}
