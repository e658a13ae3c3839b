// HTTP server implementation using actix-web.

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};

use crate::config::Config;
use crate::db::Db;
use crate::views::Views;
use crate::web::models::SearchSettings;
use crate::web::{middleware, routes};

pub struct WebServer {
    config: Config,
}

impl WebServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Start the HTTP server. The database handle and view environment are
    /// owned here and injected into every handler as shared app data.
    pub async fn run(self, db: Db, views: Views) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.http_host, self.config.port);

        tracing::info!(
            host = %self.config.http_host,
            port = %self.config.port,
            "starting hospital-web server"
        );

        let db_data = web::Data::new(db);
        let views_data = web::Data::new(views);
        let search_data = web::Data::new(SearchSettings {
            empty_matches_all: self.config.search_empty_matches_all,
        });
        let allowed_origins = self.config.allowed_origins.clone();

        HttpServer::new(move || {
            let (logger, compress) = middleware::setup_middleware();
            let cors = middleware::setup_cors(allowed_origins.as_deref());

            App::new()
                .app_data(db_data.clone())
                .app_data(views_data.clone())
                .app_data(search_data.clone())
                .wrap(logger)
                .wrap(compress)
                .wrap(cors)
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .with_context(|| format!("Failed to bind to {}", bind_addr))?
        .run()
        .await
        .context("HTTP server error")?;

        Ok(())
    }
}
