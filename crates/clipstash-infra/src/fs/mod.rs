pub mod config_dir;

pub use config_dir::{config_dir, default_database_path, settings_path};
