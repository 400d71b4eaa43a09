//! Internationalization (i18n) and the locale service for `dabang-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/dabang-ui.ftl   (fallback/reference)
//!   fa-IR/dabang-ui.ftl   (right-to-left locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("dashboard");
//! let label = crate::i18n::tr(item.label_key);
//! ```
//!
//! Public API surface:
//! - `init()` – load bundles, honouring a persisted choice first (idempotent).
//! - `LANGUAGES` / `find_language()` – the supported set with display metadata.
//! - `current_language()` – resolved active language.
//! - `switch_language(code)` – async switch that persists the choice.
//! - `tr()` / `tr_or()` – dynamic-key lookups with a fallback string.
//! - `LOADER` – global `FluentLanguageLoader` consumed by helpers & `fl!` macro.
use std::future::Future;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use tracing::{info, warn};
use unic_langid::LanguageIdentifier;

use crate::core::document::TextDirection;
use crate::core::platform::Platform;
use crate::core::storage;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("dashboard")
///     t!("from-yesterday", percent = "8.0")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the fallback FTL filename).
pub(crate) const DOMAIN: &str = "dabang-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = ENGLISH
        .tag
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// A language the dashboard can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Short code used for persistence and comparisons.
    pub code: &'static str,
    /// BCP 47 tag of the embedded Fluent bundle.
    pub tag: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
    pub direction: TextDirection,
}

impl Language {
    pub fn langid(&self) -> Result<LanguageIdentifier, LocaleError> {
        self.tag.parse().map_err(|_| LocaleError::Unsupported {
            code: self.code.to_string(),
        })
    }
}

pub const ENGLISH: Language = Language {
    code: "en",
    tag: "en-US",
    label: "Eng (US)",
    flag: "https://flagcdn.com/us.svg",
    direction: TextDirection::Ltr,
};

pub const FARSI: Language = Language {
    code: "fa",
    tag: "fa-IR",
    label: "فارسی",
    flag: "https://flagcdn.com/ir.svg",
    direction: TextDirection::Rtl,
};

/// Supported languages in display order.
pub const LANGUAGES: &[Language] = &[ENGLISH, FARSI];

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Failure of the language switch; the previous language stays active.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("language `{code}` is not supported")]
    Unsupported { code: String },
    #[error("language `{code}` could not be activated")]
    NotActivated { code: String },
    #[error("failed to load translations: {0}")]
    Load(#[from] i18n_embed::I18nEmbedError),
}

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "i18n: failed selecting languages; continuing with fallback");
        }
        info!(
            lang = current_language().code,
            platform = ?Platform::current(),
            "i18n: initialized"
        );
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// The supported language matching the loader's active bundle, or English.
pub fn current_language() -> &'static Language {
    let active = LOADER.current_language();
    LANGUAGES
        .iter()
        .find(|lang| lang.code == active.language.as_str())
        .unwrap_or(&ENGLISH)
}

/// Activates `code`, persists the choice and returns the new language.
///
/// On error nothing changes: the previously active bundle stays loaded.
pub async fn switch_language(code: &str) -> Result<&'static Language, LocaleError> {
    switch_within(LANGUAGES, code)
}

fn switch_within(
    languages: &'static [Language],
    code: &str,
) -> Result<&'static Language, LocaleError> {
    let lang = languages
        .iter()
        .find(|lang| lang.code == code)
        .ok_or_else(|| LocaleError::Unsupported {
            code: code.to_string(),
        })?;
    let previous = current_language();

    i18n_embed::select(&*LOADER, &Localizations, &[lang.langid()?])?;
    if current_language() != lang {
        // Negotiation fell back to another bundle; restore what was showing.
        if let Err(err) = set_language(previous.tag) {
            warn!(%err, "i18n: failed to restore previous language");
        }
        return Err(LocaleError::NotActivated {
            code: code.to_string(),
        });
    }

    if let Err(err) = storage::remember_locale(lang.code) {
        warn!(%err, "i18n: language switched but the choice was not persisted");
    }
    info!(lang = lang.code, "i18n: language switched");
    Ok(lang)
}

/// Seam for the language switch so the dropdown commit flow can run
/// against a fake in tests.
pub trait LocaleSwitcher {
    fn switch(&self, code: &str)
        -> impl Future<Output = Result<&'static Language, LocaleError>>;
}

/// The real switcher backed by [`LOADER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentLocale;

impl LocaleSwitcher for FluentLocale {
    fn switch(&self, code: &str) -> impl Future<Output = Result<&'static Language, LocaleError>> {
        let code = code.to_string();
        async move { switch_language(&code).await }
    }
}

/// Looks up a message by dynamic id, falling back to the id itself.
pub fn tr(key: &str) -> String {
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        key.to_string()
    }
}

/// Looks up a message by dynamic id, falling back to `default`.
pub fn tr_or(key: &str, default: &str) -> String {
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        default.to_string()
    }
}

fn requested_languages() -> Vec<LanguageIdentifier> {
    let mut requested = Vec::new();
    match storage::load_settings() {
        Ok(settings) => {
            if let Some(lang) = settings.locale.as_deref().and_then(find_language) {
                if let Ok(id) = lang.langid() {
                    requested.push(id);
                }
            }
        }
        Err(err) => warn!(%err, "i18n: could not read persisted settings"),
    }
    requested.extend(platform_requested_languages());
    requested
}

#[cfg(target_arch = "wasm32")]
fn platform_requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
