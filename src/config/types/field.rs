//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each section struct exposes a `FIELDS` table of these so diagnostic
/// call sites never spell out dotted paths as bare strings.
///
/// # Example
///
/// ```ignore
/// diag.error(SiteSectionConfig::FIELDS.title, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Path for an entry of an array-of-tables section
    /// (e.g. `theme.nav[2].link`).
    ///
    /// Leaks the formatted string; only reached on the diagnostic path,
    /// which aborts the build shortly after.
    pub fn indexed(section: &'static str, index: usize, field: &'static str) -> Self {
        Self(Box::leak(
            format!("{section}[{index}].{field}").into_boxed_str(),
        ))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
