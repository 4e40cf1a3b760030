pub mod app;
pub mod checkin;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod selector;
pub mod state;
pub mod storage;
pub mod support;
pub mod ui;
pub mod view;

pub use app::router;
pub use client::SupportClient;
pub use config::Config;
pub use history::HistoryStore;
pub use state::AppState;
