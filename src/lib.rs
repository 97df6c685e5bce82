//! Theme layout resolution and template helpers.
//!
//! Pure functions over explicit request context — no option-store globals,
//! no ambient query state.
//!
//! # Modules
//!
//! - [`layout`] — Layout modes, page-type predicates, and the resolution cascade
//! - [`classes`] — Grid column classes for main content and sidebar, thumbnail sizing
//! - [`markup`] — Menu, body-class, and read-more markup decorators
//! - [`compat`] — Legacy title composition and author-archive bootstrapping
//! - [`settings`] — Option-store reads and layout settings parsing

#![forbid(unsafe_code)]

pub mod classes;
pub mod compat;
pub mod layout;
pub mod markup;
pub mod settings;

// Re-exports: core types and builders
pub use classes::{ClassList, main_classes, post_thumbnail_size, sidebar_classes};
pub use compat::{TitleContext, compose_title, needs_title_shim};
pub use layout::{LayoutMode, LayoutSetting, LayoutSettings, PageContext};
pub use settings::{SettingsOutcome, SettingsSource, SettingsWarning};
