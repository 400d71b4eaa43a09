#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the shared components rely on (sidebar drawer states,
  language menu, search modal, dashboard cards) remain present in the unified theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (the same file `ui::THEME_CSS_INLINE` embeds).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app-shell {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--light",
    ".visually-hidden",
    // Sidebar drawer
    ".sidebar--wide",
    ".sidebar--compact",
    ".sidebar--open",
    ".sidebar--closed",
    ".sidebar--rtl",
    ".sidebar__backdrop",
    ".sidebar-toggle",
    ".sidebar__item--active",
    ".sidebar__promo",
    // Header
    ".header {",
    ".header__search",
    ".header__search-button",
    ".header__actions",
    // Language menu
    ".lang-menu__trigger",
    ".lang-menu__backdrop",
    ".lang-menu__panel",
    ".lang-menu__option--highlighted",
    ".lang-menu__empty",
    ".toast--error",
    // Search modal
    ".search-modal",
    ".search-modal__backdrop",
    ".search-modal__input",
    // Dashboard
    ".card {",
    ".summary-card--pink",
    ".summary-card__trend--down",
    ".chart__legend-swatch",
    ".top-products__table",
    ".progress__bar--indigo",
    ".export__status--error",
    // Direction and compact breakpoint
    "[dir=\"rtl\"]",
    "@media (max-width: 767px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn drawer_states_cover_both_directions() {
    // A closed compact drawer must slide off the correct edge in LTR and RTL.
    let ltr = THEME_CSS.contains(".sidebar--compact.sidebar--closed");
    let rtl = THEME_CSS.contains(".sidebar--rtl.sidebar--compact.sidebar--closed");
    assert!(
        ltr && rtl,
        "Drawer slide rules missing (ltr: {ltr}, rtl: {rtl})"
    );
}
