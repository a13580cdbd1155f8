pub mod record;
pub mod snapshot;

pub use record::{ClipboardRecord, RecordSummary, PREVIEW_LEN};
pub use snapshot::CapturedSnapshot;
