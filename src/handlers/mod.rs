//! Route handlers.
//!
//! One module per area of the site. Every handler has the shape
//! `async fn(Request, Arc<Site>) -> Response`.

pub mod assets;
pub mod contact;
pub mod health;
pub mod home;
pub mod projects;
