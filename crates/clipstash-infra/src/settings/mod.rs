pub mod file_repo;
pub mod history_config;

pub use file_repo::FileSettingsRepository;
pub use history_config::SettingsHistoryConfig;
