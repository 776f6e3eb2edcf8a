//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section | Purpose                                 |
//! |---------|--------------|-----------------------------------------|
//! | `site`  | `[site]`     | Site identity (base, title, head tags)  |
//! | `theme` | `[theme]`    | Nav, sidebar, social, footer, search    |

pub mod site;
pub mod theme;

// Re-export section configs
pub use site::{HeadTag, SiteSectionConfig};
pub use theme::{
    FooterConfig, NavItem, SearchConfig, SearchProvider, SidebarGroup, SidebarItem, SocialLink,
    ThemeSectionConfig,
};
