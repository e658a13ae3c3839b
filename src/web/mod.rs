// HTTP module: actix-web server, routes and handlers for the
// server-rendered patient/provider views.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use server::WebServer;
