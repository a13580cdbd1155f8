/// Clipboard content as observed by the platform watcher, before it is
/// persisted.
///
/// Empty strings are normalized to `None` so "absent" and "empty" collapse
/// into one state; a snapshot with neither form present is not storable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedSnapshot {
    html: Option<String>,
    plain: Option<String>,
    source_app: Option<String>,
}

impl CapturedSnapshot {
    pub fn new(
        html: Option<String>,
        plain: Option<String>,
        source_app: Option<String>,
    ) -> Self {
        Self {
            html: normalize(html),
            plain: normalize(plain),
            source_app: normalize(source_app),
        }
    }

    /// Plain-text only snapshot, the common case for terminal copies.
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::new(None, Some(text.into()), None)
    }

    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn plain(&self) -> Option<&str> {
        self.plain.as_deref()
    }

    pub fn source_app(&self) -> Option<&str> {
        self.source_app.as_deref()
    }

    /// Combined UTF-8 byte length of both forms, the value checked against
    /// the configured record size cap before any write happens.
    pub fn size_bytes(&self) -> u64 {
        let html = self.html.as_deref().map_or(0, str::len);
        let plain = self.plain.as_deref().map_or(0, str::len);
        (html + plain) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.plain.is_none()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
