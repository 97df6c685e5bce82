//! Per-key value parsing for layout options.

use super::{SettingsSource, SettingsWarning};
use crate::layout::{LayoutMode, LayoutSetting, LayoutSettings};

/// Option key for the global default layout.
pub(crate) const GLOBAL_LAYOUT: &str = "global_layout";

/// Per-page-type option keys, paired with field accessors below.
const HOME_LAYOUT: &str = "home_layout";
const BLOG_LAYOUT: &str = "blog_layout";
const SINGLE_LAYOUT: &str = "single_layout";
const ARCHIVE_LAYOUT: &str = "archive_layout";
const CATEGORY_ARCHIVE_LAYOUT: &str = "category_archive_layout";
const SEARCH_LAYOUT: &str = "search_layout";
const NOT_FOUND_LAYOUT: &str = "404_layout";
const PAGE_LAYOUT: &str = "page_layout";

pub(crate) fn load_settings(
    source: &impl SettingsSource,
) -> (LayoutSettings, Vec<SettingsWarning>) {
    let mut settings = LayoutSettings::default();
    let mut warnings = Vec::new();

    settings.global = parse_global(source.get(GLOBAL_LAYOUT), &mut warnings);

    let fields: [(&'static str, &mut LayoutSetting); 8] = [
        (HOME_LAYOUT, &mut settings.home),
        (BLOG_LAYOUT, &mut settings.blog),
        (SINGLE_LAYOUT, &mut settings.single),
        (ARCHIVE_LAYOUT, &mut settings.archive),
        (CATEGORY_ARCHIVE_LAYOUT, &mut settings.category_archive),
        (SEARCH_LAYOUT, &mut settings.search),
        (NOT_FOUND_LAYOUT, &mut settings.not_found),
        (PAGE_LAYOUT, &mut settings.page),
    ];

    for (key, field) in fields {
        *field = parse_setting(key, source.get(key), &mut warnings);
    }

    (settings, warnings)
}

/// Parse the global default. `disabled` is not meaningful here (there is
/// nothing further to defer to), so it warns like any other invalid value
/// and the hard default `left` applies.
fn parse_global(raw: Option<&str>, warnings: &mut Vec<SettingsWarning>) -> LayoutMode {
    match raw {
        None => LayoutMode::Left,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warnings.push(SettingsWarning::ValueInvalid {
                key: GLOBAL_LAYOUT,
                value: value.into(),
                expected: "none|left|right",
            });
            LayoutMode::Left
        }),
    }
}

/// Parse a per-page-type setting. `disabled` is the explicit defer
/// sentinel; unrecognized values warn and behave the same way.
fn parse_setting(
    key: &'static str,
    raw: Option<&str>,
    warnings: &mut Vec<SettingsWarning>,
) -> LayoutSetting {
    match raw {
        None => LayoutSetting::Disabled,
        Some("disabled") => LayoutSetting::Disabled,
        Some(value) => match value.parse::<LayoutMode>() {
            Ok(mode) => LayoutSetting::Mode(mode),
            Err(_) => {
                warnings.push(SettingsWarning::ValueInvalid {
                    key,
                    value: value.into(),
                    expected: "none|left|right|disabled",
                });
                LayoutSetting::Disabled
            }
        },
    }
}
