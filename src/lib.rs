pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod mutations;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use models::Store;
pub use state::AppState;
pub use storage::{load_store, spawn_saver};
