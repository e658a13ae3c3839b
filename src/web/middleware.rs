// Logging, compression and CORS middleware.

use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};

pub fn setup_middleware() -> (Logger, Compress) {
    let logger = Logger::default();
    let compress = Compress::default();
    (logger, compress)
}

/// Permissive CORS by default; an explicit comma-separated allowlist
/// restricts origins when configured.
pub fn setup_cors(allowed_origins: Option<&str>) -> Cors {
    match allowed_origins {
        None => Cors::permissive(),
        Some(list) => {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET"])
                .max_age(3600);
            for origin in list.split(',') {
                cors = cors.allowed_origin(origin.trim());
            }
            cors
        }
    }
}
