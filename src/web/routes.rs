// Route table.

use actix_web::web;

use crate::web::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .route("/patients", web::get().to(handlers::list_patients))
        .route("/patients/search", web::get().to(handlers::search_patients))
        .route("/providers", web::get().to(handlers::list_providers))
        .route(
            "/providers/specialty/{specialty}",
            web::get().to(handlers::providers_by_specialty),
        );
}
