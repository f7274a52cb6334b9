pub mod storage;
pub mod store;
pub mod types;

pub use storage::{get_history_path, load_history, save_history};
pub use store::{AssessmentStore, JsonFileStore, MemoryStore};
pub use types::{AssessmentRecord, HistoryState};
