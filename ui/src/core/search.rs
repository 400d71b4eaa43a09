//! Full-screen search overlay used on compact headers.

/// Where focus should go after a modal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Input,
    OpenButton,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchModal {
    is_open: bool,
    query: String,
}

impl SearchModal {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The open modal covers the page, so document scroll is suppressed.
    pub fn scroll_locked(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) -> Option<SearchFocus> {
        if self.is_open {
            return None;
        }
        self.is_open = true;
        Some(SearchFocus::Input)
    }

    pub fn close(&mut self) -> Option<SearchFocus> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        self.query.clear();
        Some(SearchFocus::OpenButton)
    }

    /// The overlay only exists in the compact header; leaving that layout
    /// closes it without moving focus. Returns whether it closed.
    pub fn fit_layout(&mut self, compact: bool) -> bool {
        if compact || !self.is_open {
            return false;
        }
        self.is_open = false;
        self.query.clear();
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_move_focus_and_scroll_lock() {
        let mut modal = SearchModal::default();
        assert!(!modal.scroll_locked());
        assert_eq!(modal.open(), Some(SearchFocus::Input));
        assert!(modal.scroll_locked());
        assert_eq!(modal.open(), None);

        modal.set_query("orders");
        assert_eq!(modal.close(), Some(SearchFocus::OpenButton));
        assert!(!modal.scroll_locked());
        assert_eq!(modal.query(), "");
        assert_eq!(modal.close(), None);
    }

    #[test]
    fn widening_past_the_breakpoint_closes_and_unlocks() {
        let mut modal = SearchModal::default();
        assert!(!modal.fit_layout(false));

        modal.open();
        modal.set_query("orders");
        assert!(!modal.fit_layout(true));
        assert!(modal.is_open());

        assert!(modal.fit_layout(false));
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
        assert_eq!(modal.query(), "");
        assert_eq!(modal.open(), Some(SearchFocus::Input));
    }
}
