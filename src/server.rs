//! HTTP server and graceful shutdown.
//!
//! One tokio task per connection, HTTP/1.1 or HTTP/2 as the client
//! negotiates. On SIGTERM or Ctrl-C the listener is dropped at once, every
//! open connection is told to finish its in-flight request and close, and
//! [`Server::serve`] returns once they have, or after [`DRAIN_TIMEOUT`].

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::status::Status;

/// How long shutdown waits for open connections before dropping them.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

enum Listen {
    Addr(SocketAddr),
    Bound(TcpListener),
}

/// The HTTP server.
pub struct Server {
    listen: Listen,
}

impl Server {
    /// A server that will listen on `addr` once [`serve`](Server::serve) runs.
    pub fn bind(addr: SocketAddr) -> Self {
        Self { listen: Listen::Addr(addr) }
    }

    /// A server on a listener the caller already bound.
    pub fn from_listener(listener: TcpListener) -> Self {
        Self { listen: Listen::Bound(listener) }
    }

    /// Accepts connections until SIGTERM or Ctrl-C, then drains.
    pub async fn serve(self, router: Router) -> Result<()> {
        self.serve_with_shutdown(router, shutdown_signal()).await
    }

    /// Accepts connections until `signal` resolves, then drains.
    pub async fn serve_with_shutdown(
        self,
        router: Router,
        signal: impl Future<Output = ()>,
    ) -> Result<()> {
        let listener = match self.listen {
            Listen::Addr(addr) => TcpListener::bind(addr).await?,
            Listen::Bound(listener) => listener,
        };
        let router = Arc::new(router);
        let graceful = GracefulShutdown::new();
        let mut connections = JoinSet::new();

        info!(
            addr = %listener.local_addr()?,
            projects = router.site().catalog().len(),
            "folio listening"
        );

        tokio::pin!(signal);

        loop {
            tokio::select! {
                // Shutdown wins over queued connections.
                biased;

                () = &mut signal => break,

                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        connections.spawn(serve_connection(stream, peer, Arc::clone(&router), &graceful));
                    }
                    Err(e) => error!("accept error: {e}"),
                },

                // Reap finished tasks so the set stays small.
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
            }
        }

        drop(listener);
        info!(open = connections.len(), "shutting down, draining connections");
        tokio::select! {
            () = graceful.shutdown() => info!("folio stopped"),
            () = tokio::time::sleep(DRAIN_TIMEOUT) => {
                warn!(open = connections.len(), "drain timed out, dropping connections");
            }
        }
        connections.shutdown().await;
        Ok(())
    }
}

/// Builds the connection future. It is registered with `graceful` before it
/// is spawned, so a shutdown that starts right after accept still reaches it.
fn serve_connection(
    stream: TcpStream,
    peer: SocketAddr,
    router: Arc<Router>,
    graceful: &GracefulShutdown,
) -> impl Future<Output = ()> + Send + 'static {
    let service = service_fn(move |req| {
        let router = Arc::clone(&router);
        async move { Ok::<_, Infallible>(dispatch(&router, req).await) }
    });

    let conn = ConnBuilder::new(TokioExecutor::new())
        .serve_connection(TokioIo::new(stream), service)
        .into_owned();
    let conn = graceful.watch(conn);

    async move {
        if let Err(e) = conn.await {
            error!(%peer, "connection error: {e}");
        }
    }
}

/// Buffers the body, routes the request and writes the access-log line.
/// Every failure is already a status code by the time it leaves here.
async fn dispatch(router: &Router, req: hyper::Request<Incoming>) -> http::Response<Full<Bytes>> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();
    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();

    let response = match body.collect().await {
        Ok(collected) => {
            let req = http::Request::from_parts(parts, collected.to_bytes());
            router.handle(Request::from_http(req)).await
        }
        Err(e) => {
            warn!(%method, %path, error = %e, "failed to read request body");
            Response::error(Status::BadRequest)
        }
    };

    info!(
        %method,
        %path,
        status = response.status_code().code(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "request"
    );

    response.into_http()
}

/// Resolves on SIGTERM or SIGINT (Unix) or Ctrl-C (elsewhere). A signal
/// handler that fails to install is logged and simply never fires.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("cannot listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }
}
