//! Window-level events (resize, keydown) forwarded from the page.
//!
//! A single listener script reports every event as tagged JSON; the app
//! folds them into a [`WindowState`] that components read from context.

use serde::Deserialize;

/// One message from the window listener script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowEvent {
    Resize { width: f64 },
    Key { key: String },
}

/// What an applied event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChange {
    None,
    Width,
    Escape,
}

/// Latest viewport width plus a running count of Escape presses.
///
/// Consumers compare the count with the last value they handled, so a
/// press is seen once by every subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowState {
    width: Option<f64>,
    escapes: u64,
}

impl WindowState {
    /// `None` until the first resize report arrives.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn escapes(&self) -> u64 {
        self.escapes
    }

    pub fn apply(&mut self, event: WindowEvent) -> WindowChange {
        match event {
            WindowEvent::Resize { width } if self.width != Some(width) => {
                self.width = Some(width);
                WindowChange::Width
            }
            WindowEvent::Key { key } if key == "Escape" => {
                self.escapes += 1;
                WindowChange::Escape
            }
            _ => WindowChange::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> WindowEvent {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn listener_messages_decode() {
        assert_eq!(
            decode(r#"{"kind":"resize","width":1024}"#),
            WindowEvent::Resize { width: 1024.0 }
        );
        assert_eq!(
            decode(r#"{"kind":"key","key":"Escape"}"#),
            WindowEvent::Key {
                key: "Escape".into()
            }
        );
        assert!(serde_json::from_str::<WindowEvent>(r#"{"kind":"scroll"}"#).is_err());
    }

    #[test]
    fn resize_reports_only_real_changes() {
        let mut state = WindowState::default();
        assert_eq!(state.width(), None);
        assert_eq!(state.apply(WindowEvent::Resize { width: 500.0 }), WindowChange::Width);
        assert_eq!(state.apply(WindowEvent::Resize { width: 500.0 }), WindowChange::None);
        assert_eq!(state.apply(WindowEvent::Resize { width: 900.0 }), WindowChange::Width);
        assert_eq!(state.width(), Some(900.0));
    }

    #[test]
    fn only_escape_is_counted() {
        let mut state = WindowState::default();
        let key = |k: &str| WindowEvent::Key { key: k.into() };
        assert_eq!(state.apply(key("a")), WindowChange::None);
        assert_eq!(state.apply(key("Escape")), WindowChange::Escape);
        assert_eq!(state.apply(key("Enter")), WindowChange::None);
        assert_eq!(state.apply(key("Escape")), WindowChange::Escape);
        assert_eq!(state.escapes(), 2);
    }
}
