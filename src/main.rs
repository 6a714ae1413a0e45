use std::sync::Arc;

use folio::{Config, LogNotifier, Server, Site, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), folio::Error> {
    let config = Config::from_env()?;
    logging::init(config.log_format);

    let catalog = config.load_catalog()?;
    info!(
        source = %config.catalog.as_deref().map_or("embedded".into(), |p| p.display().to_string()),
        projects = catalog.len(),
        "catalog loaded"
    );

    let app = Site::new(catalog, Arc::new(LogNotifier))
        .with_static_dir(&config.static_dir)
        .into_router();

    Server::bind(config.addr).serve(app).await
}
