//! `[[theme.social]]` entries - icon links shown in the page header.

use crate::config::util::{LinkKind, classify_link};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// An icon link pointing outside the site (repository, chat, feed, ...).
///
/// The icon is an identifier the theme resolves to an SVG ("github",
/// "twitter", "discord", ...); unknown identifiers are the theme's problem,
/// so the config layer only requires it to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Icon identifier.
    pub icon: String,

    /// Absolute URL the icon links to.
    pub link: String,
}

impl SocialLink {
    /// Validate one social entry at position `index`.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.icon.is_empty() {
            diag.error_with_hint(
                FieldPath::indexed("theme.social", index, "icon"),
                "social entry has no icon",
                "use an identifier like \"github\"",
            );
        }

        match classify_link(&self.link) {
            Ok(LinkKind::External) => {}
            Ok(LinkKind::Internal) => {
                diag.error_with_hint(
                    FieldPath::indexed("theme.social", index, "link"),
                    "social links must point outside the site",
                    "use an absolute URL like \"https://github.com/user/repo\"",
                );
            }
            Err(message) => {
                diag.error(FieldPath::indexed("theme.social", index, "link"), message);
            }
        }
    }
}
