//! Menu, body-class, and excerpt markup decorators.
//!
//! Small filters the templates apply to host-rendered markup: extra classes
//! on nav menu items and links, a forced home link in the page-menu
//! fallback, conditional body classes, and the read-more link restyle.

use std::collections::BTreeMap;

/// Per-menu rendering options carrying optional extra classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuArgs {
    /// Extra class for each menu item (`<li>`).
    pub item_class: Option<String>,
    /// Class for each menu link (`<a>`), replacing any existing one.
    pub link_class: Option<String>,
}

/// Arguments for the page-menu fallback used when no menu is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMenuArgs {
    /// Whether the fallback menu starts with a home link.
    pub show_home: bool,
}

/// Facts about the current request that drive body classes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyContext {
    /// The site has more than one published author.
    pub multi_author: bool,
    /// Rendering inside the live customizer preview.
    pub customize_preview: bool,
    /// A single post or page.
    pub is_singular: bool,
    /// The queried item has a featured image.
    pub has_post_thumbnail: bool,
}

/// Force the page-menu fallback to show a home link.
pub fn page_menu_args(args: &mut PageMenuArgs) {
    args.show_home = true;
}

/// Append the configured item class to a menu item's class list.
pub fn nav_menu_item_classes(classes: &mut Vec<String>, args: &MenuArgs) {
    if let Some(item_class) = &args.item_class {
        classes.push(item_class.clone());
    }
}

/// Set the configured link class on a menu link's attribute map.
pub fn nav_menu_link_attributes(atts: &mut BTreeMap<String, String>, args: &MenuArgs) {
    if let Some(link_class) = &args.link_class {
        atts.insert("class".into(), link_class.clone());
    }
}

/// Restyle the read-more link emitted inside post content.
///
/// Textual substitution on the rendered snippet; only the quoted class
/// attribute value changes.
pub fn rewrite_more_link(link: &str) -> String {
    link.replace("\"more-link\"", "\"post-item__btn btn--transition\"")
}

/// Append conditional body classes.
///
/// Receives and returns the class list, filter-style.
pub fn body_classes(mut classes: Vec<String>, ctx: &BodyContext) -> Vec<String> {
    if ctx.multi_author {
        classes.push("group-blog".into());
    }

    if ctx.customize_preview {
        classes.push("customize-preview".into());
    }

    if ctx.is_singular && ctx.has_post_thumbnail {
        classes.push("single--featured".into());
    }

    classes
}
