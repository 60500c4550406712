use serde::{Deserialize, Serialize};

/// Presentation tag stored and returned unchanged.
///
/// The core never validates or interprets icon names or colors; they exist so
/// a list row can be rendered without a side lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconTag {
    pub name: String,
    #[serde(default)]
    pub bg_color: String,
}

impl IconTag {
    pub fn new(name: impl Into<String>, bg_color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bg_color: bg_color.into(),
        }
    }
}
