//! Searchable language picker state machine.
//!
//! The controller never touches the document or the locale loader. Every
//! operation returns a [`DropdownEffect`] telling the view what to do next
//! (move focus, start a language switch); the view reports the outcome of a
//! switch back through [`LanguageDropdown::finish_switch`].

use tracing::{debug, warn};

use crate::i18n::{Language, LocaleError};

/// Keys the dropdown reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    OutsideClick,
    Escape,
    Committed,
}

/// Follow-up the view must perform after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEffect {
    None,
    FocusSearch,
    FocusTrigger,
    Switch(&'static Language),
}

/// Languages whose label contains `query`, ignoring case, in declared order.
pub fn filter_languages(languages: &'static [Language], query: &str) -> Vec<&'static Language> {
    let needle = query.to_lowercase();
    languages
        .iter()
        .filter(|lang| lang.label.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDropdown {
    languages: &'static [Language],
    is_open: bool,
    query: String,
    highlighted: Option<usize>,
    pending: Option<&'static Language>,
}

impl LanguageDropdown {
    pub fn new(languages: &'static [Language]) -> Self {
        Self {
            languages,
            is_open: false,
            query: String::new(),
            highlighted: None,
            pending: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Language currently being switched to, if a switch is in flight.
    pub fn pending(&self) -> Option<&'static Language> {
        self.pending
    }

    pub fn filtered(&self) -> Vec<&'static Language> {
        filter_languages(self.languages, &self.query)
    }

    pub fn open(&mut self) -> DropdownEffect {
        self.is_open = true;
        self.highlight_first();
        DropdownEffect::FocusSearch
    }

    pub fn toggle(&mut self) -> DropdownEffect {
        if self.is_open {
            self.close(CloseReason::Toggle)
        } else {
            self.open()
        }
    }

    pub fn close(&mut self, reason: CloseReason) -> DropdownEffect {
        if !self.is_open {
            return DropdownEffect::None;
        }
        debug!(?reason, "language dropdown closed");
        self.is_open = false;
        self.reset();
        DropdownEffect::FocusTrigger
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.highlight_first();
    }

    pub fn key(&mut self, key: DropdownKey, current: &Language) -> DropdownEffect {
        if !self.is_open {
            return DropdownEffect::None;
        }
        let filtered = self.filtered();
        let len = filtered.len();
        match key {
            DropdownKey::ArrowDown if len > 0 => {
                self.highlighted = Some(match self.highlighted {
                    Some(i) if i + 1 < len => i + 1,
                    _ => 0,
                });
                DropdownEffect::None
            }
            DropdownKey::ArrowUp if len > 0 => {
                self.highlighted = Some(match self.highlighted {
                    Some(i) if i > 0 && i <= len => i - 1,
                    _ => len - 1,
                });
                DropdownEffect::None
            }
            DropdownKey::Escape => self.close(CloseReason::Escape),
            DropdownKey::Enter => match self.highlighted.and_then(|i| filtered.get(i)) {
                Some(lang) => self.select(lang.code, current),
                None => DropdownEffect::None,
            },
            _ => DropdownEffect::None,
        }
    }

    /// Starts committing `code`. Selecting the current language, an unknown
    /// code, or anything while another switch is in flight is a no-op.
    pub fn select(&mut self, code: &str, current: &Language) -> DropdownEffect {
        if self.pending.is_some() || code == current.code {
            return DropdownEffect::None;
        }
        match self.languages.iter().find(|lang| lang.code == code) {
            Some(lang) => {
                self.pending = Some(lang);
                DropdownEffect::Switch(lang)
            }
            None => DropdownEffect::None,
        }
    }

    /// Applies the outcome of a switch started by [`Self::select`].
    ///
    /// On success the dropdown closes. On failure the error is handed back
    /// for the user notification and the dropdown is left exactly as it was
    /// before the attempt.
    pub fn finish_switch(
        &mut self,
        outcome: Result<&'static Language, LocaleError>,
    ) -> Result<DropdownEffect, LocaleError> {
        self.pending = None;
        match outcome {
            Ok(lang) => {
                debug!(lang = lang.code, "language committed");
                Ok(self.close(CloseReason::Committed))
            }
            Err(err) => {
                warn!(%err, "language switch failed");
                Err(err)
            }
        }
    }

    /// Highlights the first match, or clears the query and highlight when
    /// nothing matches.
    fn highlight_first(&mut self) {
        if self.filtered().is_empty() {
            self.reset();
        } else if self.is_open {
            self.highlighted = Some(0);
        } else {
            self.highlighted = None;
        }
    }

    fn reset(&mut self) {
        self.query.clear();
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleSwitcher, ENGLISH, FARSI, LANGUAGES};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::future::Future;

    struct FakeLocale {
        fail: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeLocale {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl LocaleSwitcher for FakeLocale {
        fn switch(
            &self,
            code: &str,
        ) -> impl Future<Output = Result<&'static Language, LocaleError>> {
            self.calls.borrow_mut().push(code.to_string());
            let outcome = if self.fail {
                Err(LocaleError::NotActivated {
                    code: code.to_string(),
                })
            } else {
                crate::i18n::find_language(code).ok_or(LocaleError::Unsupported {
                    code: code.to_string(),
                })
            };
            async move { outcome }
        }
    }

    fn codes(langs: &[&Language]) -> Vec<&'static str> {
        langs.iter().map(|l| l.code).collect()
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_order() {
        assert_eq!(codes(&filter_languages(LANGUAGES, "")), vec!["en", "fa"]);
        assert_eq!(codes(&filter_languages(LANGUAGES, "ار")), vec!["fa"]);
        // "فارسی" has no ain (U+0639), so this matches nothing.
        assert!(filter_languages(LANGUAGES, "ع").is_empty());
        assert_eq!(codes(&filter_languages(LANGUAGES, "ENG")), vec!["en"]);
        assert_eq!(codes(&filter_languages(LANGUAGES, "(us)")), vec!["en"]);
        assert!(filter_languages(LANGUAGES, "xyz").is_empty());
    }

    #[test]
    fn open_highlights_first_and_requests_search_focus() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        assert_eq!(dropdown.open(), DropdownEffect::FocusSearch);
        assert!(dropdown.is_open());
        assert_eq!(dropdown.highlighted(), Some(0));
    }

    #[test]
    fn arrows_wrap_in_both_directions() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        dropdown.key(DropdownKey::ArrowDown, &ENGLISH);
        assert_eq!(dropdown.highlighted(), Some(1));
        dropdown.key(DropdownKey::ArrowDown, &ENGLISH);
        assert_eq!(dropdown.highlighted(), Some(0));
        dropdown.key(DropdownKey::ArrowUp, &ENGLISH);
        assert_eq!(dropdown.highlighted(), Some(1));
        dropdown.key(DropdownKey::ArrowUp, &ENGLISH);
        assert_eq!(dropdown.highlighted(), Some(0));
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        assert_eq!(dropdown.key(DropdownKey::ArrowDown, &ENGLISH), DropdownEffect::None);
        assert_eq!(dropdown.key(DropdownKey::Enter, &ENGLISH), DropdownEffect::None);
        assert_eq!(dropdown.highlighted(), None);
    }

    #[test]
    fn query_change_rehighlights_first_match() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        dropdown.key(DropdownKey::ArrowDown, &ENGLISH);
        dropdown.set_query("فا");
        assert_eq!(codes(&dropdown.filtered()), vec!["fa"]);
        assert_eq!(dropdown.highlighted(), Some(0));
    }

    #[test]
    fn query_with_no_matches_resets_query_and_highlight() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        dropdown.set_query("klingon");
        assert_eq!(dropdown.query(), "");
        assert_eq!(dropdown.highlighted(), None);
        assert!(dropdown.is_open());
    }

    #[test]
    fn every_close_path_clears_query_and_highlight() {
        for reason in [
            CloseReason::Toggle,
            CloseReason::OutsideClick,
            CloseReason::Escape,
        ] {
            let mut dropdown = LanguageDropdown::new(LANGUAGES);
            dropdown.open();
            dropdown.set_query("eng");
            assert_eq!(dropdown.close(reason), DropdownEffect::FocusTrigger);
            assert!(!dropdown.is_open());
            assert_eq!(dropdown.query(), "");
            assert_eq!(dropdown.highlighted(), None);
        }
    }

    #[test]
    fn escape_closes_without_committing() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        dropdown.key(DropdownKey::ArrowDown, &ENGLISH);
        assert_eq!(
            dropdown.key(DropdownKey::Escape, &ENGLISH),
            DropdownEffect::FocusTrigger
        );
        assert_eq!(dropdown.pending(), None);
    }

    #[test]
    fn selecting_current_language_is_a_no_op() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        dropdown.set_query("eng");
        let before = dropdown.clone();
        assert_eq!(dropdown.select("en", &ENGLISH), DropdownEffect::None);
        assert_eq!(dropdown, before);

        let mut closed = LanguageDropdown::new(LANGUAGES);
        assert_eq!(closed.select("fa", &FARSI), DropdownEffect::None);
        assert!(!closed.is_open());
    }

    #[test]
    fn selecting_unknown_code_is_a_no_op() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        assert_eq!(dropdown.select("de", &ENGLISH), DropdownEffect::None);
        assert_eq!(dropdown.pending(), None);
    }

    #[test]
    fn enter_commits_highlighted_language_and_closes_on_success() {
        let locale = FakeLocale::new(false);
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        dropdown.key(DropdownKey::ArrowDown, &ENGLISH);

        let effect = dropdown.key(DropdownKey::Enter, &ENGLISH);
        assert_eq!(effect, DropdownEffect::Switch(&FARSI));
        assert_eq!(dropdown.pending(), Some(&FARSI));

        let outcome = block_on(locale.switch("fa"));
        let effect = dropdown.finish_switch(outcome).unwrap();
        assert_eq!(effect, DropdownEffect::FocusTrigger);
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.query(), "");
        assert_eq!(dropdown.highlighted(), None);
        assert_eq!(*locale.calls.borrow(), vec!["fa".to_string()]);
    }

    #[test]
    fn failed_switch_leaves_dropdown_untouched() {
        let locale = FakeLocale::new(true);
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        dropdown.set_query("ف");
        let before = dropdown.clone();

        let DropdownEffect::Switch(lang) = dropdown.select("fa", &ENGLISH) else {
            panic!("expected a switch request");
        };
        let outcome = block_on(locale.switch(lang.code));
        let err = dropdown.finish_switch(outcome).unwrap_err();
        assert!(matches!(err, LocaleError::NotActivated { .. }));
        assert_eq!(dropdown, before);
    }

    #[test]
    fn only_one_switch_is_in_flight() {
        let mut dropdown = LanguageDropdown::new(LANGUAGES);
        dropdown.open();
        assert_eq!(dropdown.select("fa", &ENGLISH), DropdownEffect::Switch(&FARSI));
        assert_eq!(dropdown.select("fa", &ENGLISH), DropdownEffect::None);
        assert_eq!(dropdown.key(DropdownKey::Enter, &ENGLISH), DropdownEffect::None);
    }
}
