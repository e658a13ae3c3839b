// Hospital management web server binary.

use anyhow::Result;
use hospital_web::{config, Config, Db, Views, WebServer};

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    config::init_env();

    let config = Config::from_env()?;

    let db = Db::connect_lazy(&config.db.url()?, config.db.max_conns)?;
    match db.ping().await {
        Ok(()) => tracing::info!(dsn = %config.db.redacted_url(), "connected to MySQL"),
        // Degraded mode: keep serving; query routes answer 500 until the
        // database comes back.
        Err(err) => tracing::error!(
            dsn = %config.db.redacted_url(),
            error = %format!("{err:#}"),
            "error connecting to the MySQL database"
        ),
    }

    let views = Views::new()?;

    WebServer::new(config).run(db, views).await
}
