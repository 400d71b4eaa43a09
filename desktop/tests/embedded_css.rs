#![cfg(test)]
//! Ensures the embedded desktop CSS (shared unified theme) remains present & non‑trivial.
//!
//! The desktop shell inlines `ui/assets/theme/main.css` through `ui::THEME_CSS_INLINE`.
//! An accidental truncation or path break would silently degrade styling only at
//! *runtime*; this test fails the build early instead.

const EMBEDDED_CSS: &str = ui::THEME_CSS_INLINE;

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    // Quick sanity tokens that should exist in our theme.
    let required = ["--color-bg", ".sidebar {", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
