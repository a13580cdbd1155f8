//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic and the
//! infrastructure implementations, so the store's business rules stay
//! independent of SQLite, the filesystem, and wall-clock time.

mod clock;
mod history_config;
mod history_repository;
mod settings;

pub use clock::ClockPort;
pub use history_config::HistoryConfigPort;
pub use history_repository::{HistoryRepositoryPort, ListQuery};
pub use settings::SettingsPort;
