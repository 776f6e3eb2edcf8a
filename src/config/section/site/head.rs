//! `[[site.head]]` entries - extra elements injected into the document head.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An HTML-like head element, e.g. a favicon link:
///
/// ```toml
/// [[site.head]]
/// tag = "link"
/// attrs = { rel = "icon", href = "/favicon.ico" }
/// ```
///
/// The attribute set is deliberately an untyped bag: the generator emits
/// whatever is given, so the config layer only requires a tag name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadTag {
    /// Element name (e.g. "link", "meta", "script").
    pub tag: String,

    /// Attribute name/value pairs, emitted in sorted order.
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}
