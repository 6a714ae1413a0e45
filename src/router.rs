//! Radix-tree request router.
//!
//! One tree per HTTP method. A path that no tree knows is a 404; a path some
//! other method's tree knows is a 405. `HEAD` falls back to the `GET` tree
//! and is answered without a body.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::site::Site;
use crate::status::Status;

/// Result of resolving a method + path pair.
pub(crate) enum Route {
    Found(BoxedHandler, HashMap<String, String>),
    MethodNotAllowed,
    NotFound,
}

/// The application router.
///
/// Owns the route table and the shared [`Site`] every handler receives.
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve);
/// tests call [`Router::handle`] directly.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    site: Arc<Site>,
}

impl Router {
    pub fn new(site: Arc<Site>) -> Self {
        Self { routes: HashMap::new(), site }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and catch-alls `{*name}`;
    /// `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting route. Routes are fixed at
    /// startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.boxed())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn site(&self) -> &Arc<Site> {
        &self.site
    }

    fn at<'r, 'p>(&'r self, method: Method, path: &'p str) -> Option<matchit::Match<'r, 'p, &'r BoxedHandler>> {
        self.routes.get(&method)?.at(path).ok()
    }

    pub(crate) fn lookup(&self, method: &http::Method, path: &str) -> Route {
        let known = Method::try_from(method).ok();
        let matched = known.and_then(|m| match m {
            Method::Head => self.at(m, path).or_else(|| self.at(Method::Get, path)),
            _ => self.at(m, path),
        });
        if let Some(matched) = matched {
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Route::Found(Arc::clone(matched.value), params);
        }

        let elsewhere = self.routes.iter()
            .any(|(m, tree)| Some(*m) != known && tree.at(path).is_ok());
        if elsewhere || known.is_none() {
            Route::MethodNotAllowed
        } else {
            Route::NotFound
        }
    }

    /// Routes one request and produces one response.
    pub async fn handle(&self, mut req: Request) -> Response {
        let head = req.method == http::Method::HEAD;
        let response = match self.lookup(&req.method, &req.path) {
            Route::Found(handler, params) => {
                req.params = params;
                handler(req, Arc::clone(&self.site)).await
            }
            Route::MethodNotAllowed => Response::error(Status::MethodNotAllowed),
            Route::NotFound => Response::error(Status::NotFound),
        };
        if head { response.into_head() } else { response }
    }
}
