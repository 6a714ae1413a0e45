//! # folio
//!
//! A small server-rendered portfolio site: a home page, a project list,
//! project detail pages and a contact form. Pages are askama templates;
//! project details and the contact form also render as bare fragments for
//! htmx requests (`HX-Request: true`) so the client can swap them in place.
//!
//! TLS, compression and body-size limits are left to the reverse proxy in
//! front of the site.
//!
//! ## Routes
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/` | home: first two catalog entries |
//! | GET | `/projects` | whole catalog |
//! | GET | `/projects/{id}` | detail, fragment or full page |
//! | GET | `/contact` | contact form |
//! | POST | `/contact/submit` | validate and hand to the [`Notifier`] |
//! | GET | `/health` | `OK` |
//! | GET | `/static/{*path}` | files from the static directory |
//!
//! Every `GET` route also answers `HEAD`, without a body.
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use folio::{Config, LogNotifier, Server, Site};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), folio::Error> {
//!     let config = Config::from_env()?;
//!     let app = Site::new(config.load_catalog()?, Arc::new(LogNotifier))
//!         .with_static_dir(&config.static_dir)
//!         .into_router();
//!
//!     Server::bind(config.addr).serve(app).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod site;
mod status;

pub mod catalog;
pub mod config;
pub mod contact;
pub mod handlers;
pub mod logging;
pub mod notify;
pub mod render;

pub use catalog::{Catalog, Project};
pub use config::{Config, LogFormat};
pub use contact::{ContactForm, ContactSubmission, FieldErrors};
pub use error::{Error, Result};
pub use handler::Handler;
pub use method::Method;
pub use notify::{LogNotifier, Notifier, NotifyError};
pub use request::{Form, Request};
pub use response::{ContentType, IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use site::Site;
pub use status::Status;
