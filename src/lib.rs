pub mod api;
pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;
pub mod types;
pub mod ui;

pub use app::app;
pub use state::AppState;
