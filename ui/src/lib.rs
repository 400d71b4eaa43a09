//! Shared UI crate for Dabang. Controllers, views and locale handling used by
//! both the web and desktop shells live here.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod dashboard;
pub mod hooks;
pub mod i18n;
pub mod views;

/// Unified theme, served as an asset on the web and inlined on desktop.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
