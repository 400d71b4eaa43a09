//! Dioxus glue between the pure controllers in `crate::core` and the page:
//! the root window listener, scoped document flags, focus requests and the
//! shared locale context.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::document::{DocumentFlags, ScrollLockGuard};
use crate::core::navigation::MenuItemId;
use crate::core::platform::{sleep_ms, BrowserDocument};
use crate::core::window::{WindowChange, WindowEvent, WindowState};
use crate::i18n::{self, Language};

/// Listener script for [`use_window_events_provider`]. Installing it again
/// detaches the previous listeners first, so one pair is attached at most.
const WINDOW_EVENTS_SCRIPT: &str = r#"
    window.__dabangWindowEvents?.();
    const onResize = () => dioxus.send({ kind: "resize", width: window.innerWidth });
    const onKey = (e) => dioxus.send({ kind: "key", key: e.key });
    window.addEventListener("resize", onResize);
    window.addEventListener("keydown", onKey);
    window.__dabangWindowEvents = () => {
        window.removeEventListener("resize", onResize);
        window.removeEventListener("keydown", onKey);
    };
    onResize();
"#;

/// Window state shared through context by [`use_window_events_provider`].
#[derive(Clone, Copy)]
pub struct WindowEvents {
    /// `window.innerWidth`, `None` until the first report.
    pub width: Signal<Option<f64>>,
    /// Number of window-level Escape presses so far.
    pub escapes: Signal<u64>,
}

/// Installs the window resize/keydown listeners and provides their state.
/// Call once, at the root; components read it with [`use_viewport_width`]
/// and [`use_window_escape`].
pub fn use_window_events_provider() -> WindowEvents {
    let events = use_context_provider(|| WindowEvents {
        width: Signal::new(None),
        escapes: Signal::new(0),
    });

    use_future(move || async move {
        let WindowEvents {
            mut width,
            mut escapes,
        } = events;
        let mut state = WindowState::default();
        let mut eval = document::eval(WINDOW_EVENTS_SCRIPT);
        loop {
            match eval.recv::<WindowEvent>().await {
                Ok(event) => match state.apply(event) {
                    WindowChange::Width => width.set(state.width()),
                    WindowChange::Escape => escapes.set(state.escapes()),
                    WindowChange::None => {}
                },
                Err(err) => {
                    warn!(?err, "window listener stopped");
                    break;
                }
            }
        }
    });

    events
}

/// Current viewport width from the root window listener.
pub fn use_viewport_width() -> Signal<Option<f64>> {
    use_context::<WindowEvents>().width
}

/// Calls `on_escape` for every window-level Escape press after mount.
pub fn use_window_escape(mut on_escape: impl FnMut() + 'static) {
    let escapes = use_context::<WindowEvents>().escapes;
    let on_escape = use_callback(move |_: ()| on_escape());
    let mut seen = use_signal(|| *escapes.peek());

    use_effect(move || {
        let count = escapes();
        if count != *seen.peek() {
            seen.set(count);
            on_escape.call(());
        }
    });
}

/// Holds a document scroll lock while `locked` is true and releases it when
/// the value turns false or the component unmounts.
pub fn use_scroll_lock(locked: Memo<bool>) {
    let flags = use_context::<DocumentFlags>();
    let guard = use_hook(|| Rc::new(RefCell::new(None::<ScrollLockGuard>)));

    {
        let guard = guard.clone();
        use_effect(move || {
            let want = locked();
            let mut slot = guard.borrow_mut();
            match (want, slot.is_some()) {
                (true, false) => *slot = Some(flags.lock_scroll()),
                (false, true) => *slot = None,
                _ => {}
            }
        });
    }

    use_drop(move || {
        guard.borrow_mut().take();
    });
}

/// Element handle captured through `onmounted`.
pub type ElementRef = Signal<Option<Rc<MountedData>>>;

/// Moves focus to `target` once the current event has been handled.
pub fn request_focus(target: ElementRef) {
    request_focus_after(target, 0);
}

/// Moves focus to `target` after `delay_ms`, giving enter animations time
/// to mount the element.
pub fn request_focus_after(target: ElementRef, delay_ms: u32) {
    spawn(async move {
        if delay_ms > 0 {
            sleep_ms(delay_ms).await;
        }
        let Some(element) = target() else {
            debug!("focus request dropped: element not mounted");
            return;
        };
        if let Err(err) = element.set_focus(true).await {
            debug!(?err, "focus request failed");
        }
    });
}

/// Installs the app-wide locale and document contexts. Call once, at the root.
///
/// Keeps the document `dir`/`lang` attributes in sync with the active language.
pub fn use_locale_provider() -> Signal<&'static Language> {
    i18n::init();
    let language = use_context_provider(|| Signal::new(i18n::current_language()));
    let flags = use_context_provider(|| DocumentFlags::new(BrowserDocument));

    use_effect(move || {
        let lang = language();
        flags.set_direction(lang.direction, lang.tag);
    });

    language
}

/// The active language, provided by [`use_locale_provider`].
pub fn use_language() -> Signal<&'static Language> {
    use_context::<Signal<&'static Language>>()
}

/// Subscribes the calling component to the active language, so its `t!`
/// and `tr` strings are read again after a switch.
pub fn use_localized() -> &'static Language {
    let language = use_language();
    language()
}

/// Provides the active menu entry to the sidebar and the routed pages.
pub fn use_navigation_provider() -> Signal<MenuItemId> {
    use_context_provider(|| Signal::new(MenuItemId::Dashboard))
}
