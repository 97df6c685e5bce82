//! Option-store reads and layout settings parsing.
//!
//! Turns raw string options from the host's settings store into a typed
//! [`LayoutSettings`], collecting non-fatal warnings for anything it could
//! not understand. Invalid configuration never fails a request: per-page
//! values degrade to "disabled" (the global default applies) and an invalid
//! global default degrades to `left`.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use briarlayout::settings;
//! use briarlayout::{LayoutMode, LayoutSetting};
//!
//! let store = BTreeMap::from([
//!     ("global_layout".to_string(), "right".to_string()),
//!     ("search_layout".to_string(), "none".to_string()),
//! ]);
//!
//! let outcome = settings::load(&store);
//! assert!(outcome.warnings.is_empty());
//! assert_eq!(outcome.settings.global, LayoutMode::Right);
//! assert_eq!(outcome.settings.search, LayoutSetting::Mode(LayoutMode::None));
//! ```

mod parse;

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::layout::LayoutSettings;

/// Keyed read access to the host's option store.
///
/// Settings are read fresh on every [`load`]; administrators can change
/// them between requests and nothing here caches.
pub trait SettingsSource {
    /// The raw value for `key`, if set.
    fn get(&self, key: &str) -> Option<&str>;
}

impl SettingsSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl SettingsSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

/// Non-fatal warning from settings parsing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsWarning {
    /// A key was set but its value was not understood; the field keeps
    /// its default.
    #[error("invalid value `{value}` for `{key}`: expected {expected}")]
    ValueInvalid {
        /// Option key as stored.
        key: &'static str,
        /// The rejected raw value.
        value: String,
        /// Accepted forms, for diagnostics.
        expected: &'static str,
    },
}

/// Result of loading layout settings from an option store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsOutcome {
    /// Parsed settings, always usable.
    pub settings: LayoutSettings,
    /// Non-fatal parse warnings.
    pub warnings: Vec<SettingsWarning>,
}

/// Load layout settings from an option store.
///
/// Missing keys take their defaults; invalid values are reported in
/// [`SettingsOutcome::warnings`] and degraded, never propagated.
pub fn load(source: &impl SettingsSource) -> SettingsOutcome {
    let (settings, warnings) = parse::load_settings(source);
    SettingsOutcome { settings, warnings }
}
