//! Document-level presentation flags: scroll suppression and text direction.
//!
//! Both flags are global to the page, so components never write them
//! directly. Scroll suppression is acquired through [`ScrollLockGuard`]s and
//! is held while at least one guard is alive; direction is applied only when
//! it actually changes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Rtl)
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering host that owns the real document.
pub trait DocumentHost {
    fn apply_scroll_lock(&self, locked: bool);
    fn apply_direction(&self, direction: TextDirection, lang: &str);
}

struct Flags {
    host: Box<dyn DocumentHost>,
    scroll_holders: Cell<usize>,
    direction: RefCell<Option<(TextDirection, String)>>,
}

/// Shared handle to the document flags. Cloning is cheap; every clone talks to
/// the same host and the same holder count.
#[derive(Clone)]
pub struct DocumentFlags {
    inner: Rc<Flags>,
}

impl DocumentFlags {
    pub fn new(host: impl DocumentHost + 'static) -> Self {
        Self {
            inner: Rc::new(Flags {
                host: Box::new(host),
                scroll_holders: Cell::new(0),
                direction: RefCell::new(None),
            }),
        }
    }

    /// Suppresses document scroll until the returned guard is dropped.
    pub fn lock_scroll(&self) -> ScrollLockGuard {
        let holders = self.inner.scroll_holders.get();
        self.inner.scroll_holders.set(holders + 1);
        if holders == 0 {
            debug!("document: scroll suppressed");
            self.inner.host.apply_scroll_lock(true);
        }
        ScrollLockGuard {
            flags: self.clone(),
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.inner.scroll_holders.get() > 0
    }

    /// Applies `direction` and `lang` to the document unless they are already
    /// in effect. Returns whether the host was touched.
    pub fn set_direction(&self, direction: TextDirection, lang: &str) -> bool {
        let mut current = self.inner.direction.borrow_mut();
        if matches!(&*current, Some((dir, tag)) if *dir == direction && tag == lang) {
            return false;
        }
        debug!(%direction, lang, "document: direction updated");
        self.inner.host.apply_direction(direction, lang);
        *current = Some((direction, lang.to_string()));
        true
    }

    pub fn direction(&self) -> Option<TextDirection> {
        self.inner.direction.borrow().as_ref().map(|(dir, _)| *dir)
    }

    fn release_scroll(&self) {
        let holders = self.inner.scroll_holders.get().saturating_sub(1);
        self.inner.scroll_holders.set(holders);
        if holders == 0 {
            debug!("document: scroll restored");
            self.inner.host.apply_scroll_lock(false);
        }
    }
}

/// Keeps document scroll suppressed while alive.
pub struct ScrollLockGuard {
    flags: DocumentFlags,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.flags.release_scroll();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum HostCall {
        Scroll(bool),
        Direction(TextDirection, String),
    }

    #[derive(Clone, Default)]
    pub(crate) struct RecordingHost {
        pub calls: Rc<RefCell<Vec<HostCall>>>,
    }

    impl DocumentHost for RecordingHost {
        fn apply_scroll_lock(&self, locked: bool) {
            self.calls.borrow_mut().push(HostCall::Scroll(locked));
        }

        fn apply_direction(&self, direction: TextDirection, lang: &str) {
            self.calls
                .borrow_mut()
                .push(HostCall::Direction(direction, lang.to_string()));
        }
    }

    #[test]
    fn scroll_lock_is_held_until_last_guard_drops() {
        let host = RecordingHost::default();
        let flags = DocumentFlags::new(host.clone());

        let sidebar = flags.lock_scroll();
        let modal = flags.lock_scroll();
        assert!(flags.scroll_locked());
        drop(sidebar);
        assert!(flags.scroll_locked());
        drop(modal);
        assert!(!flags.scroll_locked());

        assert_eq!(
            *host.calls.borrow(),
            vec![HostCall::Scroll(true), HostCall::Scroll(false)]
        );
    }

    #[test]
    fn direction_is_applied_only_on_change() {
        let host = RecordingHost::default();
        let flags = DocumentFlags::new(host.clone());

        assert!(flags.set_direction(TextDirection::Ltr, "en-US"));
        assert!(!flags.set_direction(TextDirection::Ltr, "en-US"));
        assert!(flags.set_direction(TextDirection::Rtl, "fa-IR"));
        assert_eq!(flags.direction(), Some(TextDirection::Rtl));
        assert_eq!(host.calls.borrow().len(), 2);
    }
}
