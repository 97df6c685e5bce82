//! Sidebar layout resolution.
//!
//! Chooses a page's [`LayoutMode`] from page-type predicates and per-page-type
//! configured overrides, falling back to a global default. Pure — no option
//! store access, no request globals; callers populate [`PageContext`] and
//! [`LayoutSettings`] explicitly (typically via [`crate::settings::load`]).
//!
//! # Example
//!
//! ```
//! use briarlayout::{LayoutMode, LayoutSetting, LayoutSettings, PageContext};
//!
//! let settings = LayoutSettings {
//!     search: LayoutSetting::Mode(LayoutMode::Right),
//!     ..LayoutSettings::default()
//! };
//!
//! let ctx = PageContext {
//!     is_search: true,
//!     ..PageContext::default()
//! };
//!
//! assert_eq!(settings.resolve(&ctx), LayoutMode::Right);
//! ```

use strum::{Display, EnumString};

/// Sidebar position for the current page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutMode {
    /// No sidebar; content spans the full width.
    None,
    /// Sidebar to the left of the content.
    #[default]
    Left,
    /// Sidebar to the right of the content.
    Right,
}

/// A configured per-page-type layout value.
///
/// `Disabled` is the sentinel administrators pick to mean "use the global
/// default for this page type".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutSetting {
    /// Defer to the global default.
    #[default]
    Disabled,
    /// Use this mode for the matching page type.
    Mode(LayoutMode),
}

impl LayoutSetting {
    /// The configured mode, or `None` when disabled.
    pub fn mode(self) -> Option<LayoutMode> {
        match self {
            Self::Disabled => None,
            Self::Mode(m) => Some(m),
        }
    }
}

impl From<LayoutMode> for LayoutSetting {
    fn from(mode: LayoutMode) -> Self {
        Self::Mode(mode)
    }
}

/// Page-type predicates for the current request.
///
/// Predicates are not mutually exclusive — a category listing is also an
/// archive, and a search result page can be both. The resolver relies on
/// evaluation order, not exclusivity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContext {
    /// The site front page.
    pub is_front_page: bool,
    /// The blog posts listing (the front page itself when the site shows
    /// latest posts there, a separate page otherwise).
    pub is_home: bool,
    /// Any archive (date, author, taxonomy, ...).
    pub is_archive: bool,
    /// A category archive.
    pub is_category: bool,
    /// Search results.
    pub is_search: bool,
    /// Not-found (404).
    pub is_not_found: bool,
    /// A single post.
    pub is_single: bool,
    /// A static page.
    pub is_page: bool,
    /// Host option: the front page shows a static page rather than the
    /// latest posts.
    pub static_front_page: bool,
}

/// Per-page-type layout configuration plus the global default.
///
/// Read fresh from the host's option store on every request; nothing here
/// is cached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSettings {
    /// Fallback when no page type matches or the matching value is disabled.
    pub global: LayoutMode,
    /// Front page (static) and posts-on-front blog listing.
    pub home: LayoutSetting,
    /// Blog listing when the front page is a static page.
    pub blog: LayoutSetting,
    /// Single posts.
    pub single: LayoutSetting,
    /// Archives.
    pub archive: LayoutSetting,
    /// Category archives.
    pub category_archive: LayoutSetting,
    /// Search results.
    pub search: LayoutSetting,
    /// Not-found pages.
    pub not_found: LayoutSetting,
    /// Static pages.
    pub page: LayoutSetting,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            global: LayoutMode::Left,
            home: LayoutSetting::Disabled,
            blog: LayoutSetting::Disabled,
            single: LayoutSetting::Disabled,
            archive: LayoutSetting::Disabled,
            category_archive: LayoutSetting::Disabled,
            search: LayoutSetting::Disabled,
            not_found: LayoutSetting::Disabled,
            page: LayoutSetting::Disabled,
        }
    }
}

impl LayoutSettings {
    /// Resolve the layout mode for a page.
    ///
    /// The cascade is an ordered list of `(predicate, setting)` pairs where
    /// the *last* true predicate wins. Order carries specificity: a category
    /// page is also an archive, so `category_archive` is listed after
    /// `archive` and overrides it. Do not collapse this into mutually
    /// exclusive branches.
    pub fn resolve(&self, ctx: &PageContext) -> LayoutMode {
        let home_listing = if ctx.static_front_page {
            self.blog
        } else {
            self.home
        };

        let cascade = [
            (ctx.is_front_page && ctx.static_front_page, self.home),
            (ctx.is_home, home_listing),
            (ctx.is_archive, self.archive),
            (ctx.is_category, self.category_archive),
            (ctx.is_search, self.search),
            (ctx.is_not_found, self.not_found),
            (ctx.is_single, self.single),
            (ctx.is_page, self.page),
        ];

        let mut chosen = LayoutSetting::Disabled;
        for (matched, setting) in cascade {
            if matched {
                chosen = setting;
            }
        }

        chosen.mode().unwrap_or(self.global)
    }
}
