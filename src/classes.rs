//! Grid column classes for the main content and sidebar elements.
//!
//! Maps a resolved [`LayoutMode`] to the Bootstrap-style column classes the
//! templates emit. In customizer preview the builders return fixed marker
//! classes instead, so live-preview scripts can swap column widths
//! client-side without a reload.
//!
//! # Example
//!
//! ```
//! use briarlayout::{LayoutMode, main_classes, sidebar_classes};
//!
//! let main = main_classes(LayoutMode::Left, false, false);
//! assert_eq!(main.to_string(), "col-md-8 col-md-push-4");
//!
//! assert!(sidebar_classes(LayoutMode::None, false).is_none());
//! ```

use core::fmt;

use crate::layout::LayoutMode;

/// Ordered list of CSS class names.
///
/// `Display` joins with single spaces, ready for a `class=""` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(Vec<&'static str>);

impl ClassList {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn push(&mut self, class: &'static str) {
        self.0.push(class);
    }

    /// The class names in emission order.
    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ClassList {
    type Item = &'a &'static str;
    type IntoIter = core::slice::Iter<'a, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<&'static str>> for ClassList {
    fn from(classes: Vec<&'static str>) -> Self {
        Self(classes)
    }
}

/// Column classes for the main content element.
///
/// Single posts without a sidebar get a narrower, centered column (the
/// offset pair); everything else without a sidebar spans the full row.
/// With a sidebar the content takes two thirds, pushed right when the
/// sidebar sits on the left.
pub fn main_classes(layout: LayoutMode, is_single: bool, preview: bool) -> ClassList {
    if preview {
        return vec!["col-md-12", "briar-main-class"].into();
    }

    let mut classes = ClassList::new();
    match layout {
        LayoutMode::None => {
            if is_single {
                classes.push("col-lg-8 col-md-10 col-lg-offset-2 col-md-offset-1");
            } else {
                classes.push("col-md-12");
            }
        }
        LayoutMode::Left | LayoutMode::Right => {
            classes.push("col-md-8");
            if layout == LayoutMode::Left {
                classes.push("col-md-push-4");
            }
        }
    }
    classes
}

/// Column classes for the sidebar element, or `None` when no sidebar
/// should render.
pub fn sidebar_classes(layout: LayoutMode, preview: bool) -> Option<ClassList> {
    if preview {
        return Some(vec!["col-md-4", "briar-sidebar-class"].into());
    }

    match layout {
        LayoutMode::None => None,
        LayoutMode::Left | LayoutMode::Right => {
            let mut classes = ClassList::new();
            classes.push("col-md-4");
            if layout == LayoutMode::Left {
                classes.push("col-md-pull-8");
            }
            Some(classes)
        }
    }
}

/// Substitute a wider post thumbnail when the content spans the full width.
///
/// Only the listing thumbnail key is remapped; every other size passes
/// through unchanged.
pub fn post_thumbnail_size(requested: &str, layout: LayoutMode) -> &str {
    if requested == "blog-post-image" && layout == LayoutMode::None {
        "full-width-blog-post-image"
    } else {
        requested
    }
}
