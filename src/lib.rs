pub mod app;
pub mod catalog;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod range;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use journal::Journal;
pub use state::AppState;
pub use storage::{FileStorage, resolve_data_path};
pub use store::DayRecordStore;
