//! Runtime configuration from environment variables.
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `PORT` | `8080` | listening port |
//! | `FOLIO_HOST` | `0.0.0.0` | listening address |
//! | `FOLIO_STATIC_DIR` | `static` | directory served under `/static/` |
//! | `FOLIO_CATALOG` | unset | TOML catalog file; unset uses the embedded one |
//! | `FOLIO_LOG_FORMAT` | `compact` | `compact` or `json` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

const DEFAULT_PORT: u16 = 8080;

/// Shape of the log output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    pub catalog: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            static_dir: PathBuf::from("static"),
            catalog: None,
            log_format: LogFormat::Compact,
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        let host = match var("FOLIO_HOST") {
            Some(h) => h.trim().parse::<IpAddr>()
                .map_err(|e| Error::Config(format!("FOLIO_HOST {h:?}: {e}")))?,
            None => config.addr.ip(),
        };
        let port = match var("PORT") {
            Some(p) => p.trim().parse::<u16>()
                .map_err(|e| Error::Config(format!("PORT {p:?}: {e}")))?,
            None => DEFAULT_PORT,
        };
        config.addr = SocketAddr::new(host, port);

        if let Some(dir) = var("FOLIO_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        config.catalog = var("FOLIO_CATALOG").map(PathBuf::from);
        config.log_format = match var("FOLIO_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(Error::Config(format!("FOLIO_LOG_FORMAT {other:?}: expected compact or json")));
            }
        };

        Ok(config)
    }

    /// The configured catalog file, or the embedded catalog when none is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Catalog::embedded(),
        }
    }
}
