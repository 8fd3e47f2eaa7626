//! Styled text for titles and axis labels.

use crate::plotting::style::TextStyle;

/// Text whose position is decided by the owning axes at render time.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub style: TextStyle,
}

impl Text {
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Text {
            content: content.into(),
            style,
        }
    }
}
