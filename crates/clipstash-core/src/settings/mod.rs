pub mod defaults;
pub mod model;

pub use model::{
    GeneralSettings, HistorySettings, Settings, UiSettings, CURRENT_SCHEMA_VERSION,
};
