// HTTP request handlers, one per route. Each handler issues at most one
// query and hands the typed rows to the view renderer; any database error
// becomes a 500 with a fixed plain-text body and no template rendering.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use minijinja::context;

use crate::db::{Db, Patient};
use crate::views::{Views, HOME_MESSAGE};
use crate::web::models::{PatientSearchQuery, SearchSettings};

fn render_page(views: &Views, name: &str, ctx: minijinja::Value) -> HttpResponse {
    match views.render(name, ctx) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            tracing::error!(template = name, error = %format!("{err:#}"), "template rendering failed");
            plain_error("Error rendering page")
        }
    }
}

fn plain_error(message: &'static str) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body(message)
}

/// Home page; no database access.
pub async fn home(views: web::Data<Views>) -> HttpResponse {
    render_page(&views, "home", context! { message => HOME_MESSAGE })
}

pub async fn list_patients(db: web::Data<Db>, views: web::Data<Views>) -> HttpResponse {
    tracing::info!("GET /patients called");
    match db.all_patients().await {
        Ok(results) => render_page(&views, "patients", context! { results }),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "error retrieving patients");
            plain_error("Error retrieving patients data")
        }
    }
}

pub async fn list_providers(db: web::Data<Db>, views: web::Data<Views>) -> HttpResponse {
    tracing::info!("GET /providers called");
    match db.all_providers().await {
        Ok(results) => render_page(&views, "providers", context! { results }),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "error retrieving providers");
            plain_error("Error retrieving providers data")
        }
    }
}

/// Substring search on patient first name. A missing parameter is an empty
/// filter; whether that matches everything is a startup-time setting.
pub async fn search_patients(
    query: web::Query<PatientSearchQuery>,
    db: web::Data<Db>,
    views: web::Data<Views>,
    settings: web::Data<SearchSettings>,
) -> HttpResponse {
    let first_name = query.first_name.as_deref().unwrap_or("");
    tracing::info!(first_name, "GET /patients/search called");

    if first_name.is_empty() && !settings.empty_matches_all {
        let results: Vec<Patient> = Vec::new();
        return render_page(&views, "patients", context! { results });
    }

    match db.search_patients(first_name).await {
        Ok(results) => render_page(&views, "patients", context! { results }),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "error searching patients");
            plain_error("Error searching patients data")
        }
    }
}

/// Exact-match filter on provider specialty, taken from the path.
pub async fn providers_by_specialty(
    path: web::Path<String>,
    db: web::Data<Db>,
    views: web::Data<Views>,
) -> HttpResponse {
    let specialty = path.into_inner();
    tracing::info!(specialty = %specialty, "GET /providers/specialty called");
    match db.providers_by_specialty(&specialty).await {
        Ok(results) => render_page(&views, "providers", context! { results }),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "error retrieving providers by specialty");
            plain_error("Error retrieving providers by specialty")
        }
    }
}
