pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod mood;
pub mod scoring;
pub mod state;
pub mod storage;
pub mod theme;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use history::HistoryStore;
pub use scoring::{calculate, calculate_at};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
