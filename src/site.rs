//! Shared application state and the route table.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::handlers::{assets, contact, health, home, projects};
use crate::method::Method;
use crate::notify::Notifier;
use crate::router::Router;

/// Everything a handler may read. Immutable once built and shared behind an
/// `Arc`, so concurrent requests never coordinate.
pub struct Site {
    catalog: Catalog,
    notifier: Arc<dyn Notifier>,
    static_dir: PathBuf,
}

impl Site {
    pub fn new(catalog: Catalog, notifier: Arc<dyn Notifier>) -> Self {
        Self { catalog, notifier, static_dir: PathBuf::from("static") }
    }

    /// Directory served under `/static/`.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Builds the route table around this site.
    pub fn into_router(self) -> Router {
        Router::new(Arc::new(self))
            .on(Method::Get,  "/",                home::home)
            .on(Method::Get,  "/projects",        projects::list)
            .on(Method::Get,  "/projects/{id}",   projects::detail)
            .on(Method::Get,  "/contact",         contact::page)
            .on(Method::Post, "/contact/submit",  contact::submit)
            .on(Method::Get,  "/health",          health::liveness)
            .on(Method::Get,  "/static/{*path}",  assets::serve)
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self::new(Catalog::default(), Arc::new(crate::notify::LogNotifier))
    }
}
