pub mod clipboard_record_row;

pub use clipboard_record_row::{ClipboardRecordRow, NewClipboardRecordRow};
