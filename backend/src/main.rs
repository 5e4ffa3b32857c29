//! Service entry point: tracing, configuration, storage, HTTP server.

mod server;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    server::run(&settings).await
}
