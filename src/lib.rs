pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod selection;
pub mod source;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
