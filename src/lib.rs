// Hospital management web application: server-rendered read/search views
// over the externally-owned patients and providers tables.

pub mod config;
pub mod db;
pub mod views;
pub mod web;

pub use config::Config;
pub use db::Db;
pub use views::Views;
pub use web::WebServer;
