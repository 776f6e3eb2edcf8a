//! `[[theme.sidebar]]` entries - grouped navigation shown in the side panel.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! text = "第一部分"
//! items = [
//!     { text = "介绍", link = "/intro" },
//!     { text = "纯函数", link = "/pure-functions" },
//! ]
//!
//! # Unlabeled group
//! [[theme.sidebar]]
//! items = [{ text = "附录", link = "/appendix" }]
//! ```

use crate::config::util::validate_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A labeled or unlabeled cluster of sidebar links.
///
/// Groups and their items render in declaration order; a group without
/// `text` renders as an unlabeled top-level group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroup {
    /// Group heading. Absent = unlabeled group.
    pub text: Option<String>,

    /// Initial collapsed state. Absent = group is not collapsible.
    pub collapsed: Option<bool>,

    /// Links in this group.
    pub items: Vec<SidebarItem>,
}

/// A single sidebar link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarItem {
    /// Visible label.
    pub text: String,

    /// Internal route (`/...`) or absolute URL.
    pub link: String,
}

impl SidebarGroup {
    /// Validate one sidebar group at position `index`.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        // An explicitly labeled group must not have an empty heading;
        // omit `text` entirely for an unlabeled group
        if let Some(text) = &self.text
            && text.is_empty()
        {
            diag.error_with_hint(
                FieldPath::indexed("theme.sidebar", index, "text"),
                "group heading is empty",
                "remove the field for an unlabeled group",
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.text.is_empty() {
                diag.error(
                    FieldPath::indexed("theme.sidebar", index, "items"),
                    format!("item {i} has no label"),
                );
            }
            validate_link(
                &item.link,
                FieldPath::indexed("theme.sidebar", index, "items"),
                diag,
            );
        }
    }
}
