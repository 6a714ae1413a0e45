//! Unified error type.

use thiserror::Error;

/// The error type returned by folio's fallible startup and rendering paths.
///
/// Request-level outcomes (404, 405, a rejected contact form) are expressed
/// as HTTP [`Response`](crate::Response) values, not as `Error`s. This type
/// surfaces infrastructure failures: reading configuration, loading the
/// catalog, binding the listener, or rendering a template.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("catalog: {0}")]
    Catalog(String),

    #[error("render: {0}")]
    Render(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
