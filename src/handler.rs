//! Route handler erasure.
//!
//! Handlers are plain async functions:
//!
//! ```text
//! async fn detail(req: Request, site: Arc<Site>) -> impl IntoResponse
//! ```
//!
//! Each one has its own future type, so the router stores them as
//! [`BoxedHandler`]: a shared closure that boxes the future and converts the
//! output into a [`Response`]. Dispatch costs one `Arc` clone for the site
//! and one indirect call.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::site::Site;

/// Boxed future every stored handler returns.
pub(crate) type ResponseFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A handler as the router keeps it.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn Fn(Request, Arc<Site>) -> ResponseFuture + Send + Sync>;

/// Anything that can be registered on a route.
///
/// Implemented for every `Fn(Request, Arc<Site>) -> impl Future` whose output
/// implements [`IntoResponse`].
pub trait Handler: Send + Sync + 'static {
    #[doc(hidden)]
    fn boxed(self) -> BoxedHandler;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request, Arc<Site>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn boxed(self) -> BoxedHandler {
        let handler = self;
        Arc::new(move |req: Request, site: Arc<Site>| {
            let pending = handler(req, site);
            Box::pin(async move { pending.await.into_response() }) as ResponseFuture
        })
    }
}
