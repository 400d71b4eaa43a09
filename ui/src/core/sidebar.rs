//! Open/closed state machine for the navigation panel.
//!
//! The panel is always open on wide viewports. On compact viewports it is an
//! overlay that the user toggles, that closes on Escape, and that collapses
//! after a menu item is chosen. Crossing the breakpoint resets the panel to
//! the default for the new layout, discarding any manual toggle.

use tracing::debug;

use super::breakpoint::{BreakpointChange, BreakpointMonitor};
use super::navigation::{MenuItemId, NavigationModel};

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarController {
    monitor: BreakpointMonitor,
    navigation: NavigationModel,
    is_open: bool,
}

impl SidebarController {
    /// Initial state for a viewport of `width` pixels.
    pub fn new(width: f64) -> Self {
        Self::with_navigation(width, NavigationModel::default())
    }

    pub fn with_navigation(width: f64, navigation: NavigationModel) -> Self {
        let monitor = BreakpointMonitor::new(width);
        Self {
            is_open: !monitor.is_compact(),
            monitor,
            navigation,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_compact(&self) -> bool {
        self.monitor.is_compact()
    }

    pub fn active_item(&self) -> MenuItemId {
        self.navigation.active()
    }

    pub fn navigation(&self) -> &NavigationModel {
        &self.navigation
    }

    /// Document scroll must be suppressed while the overlay covers the page.
    pub fn scroll_locked(&self) -> bool {
        self.is_open && self.is_compact()
    }

    pub fn resize(&mut self, width: f64) -> BreakpointChange {
        let change = self.monitor.observe(width);
        match change {
            BreakpointChange::Unchanged => {}
            BreakpointChange::EnteredCompact => {
                debug!(width, "sidebar: entered compact layout");
                self.is_open = false;
            }
            BreakpointChange::EnteredWide => {
                debug!(width, "sidebar: entered wide layout");
                self.is_open = true;
            }
        }
        change
    }

    /// Flips the overlay. Ignored on wide layouts where the panel is pinned.
    pub fn toggle(&mut self) {
        if self.is_compact() {
            self.is_open = !self.is_open;
        }
    }

    /// Closes the overlay (backdrop click, close button). Ignored on wide layouts.
    pub fn close(&mut self) {
        if self.is_compact() {
            self.is_open = false;
        }
    }

    pub fn escape(&mut self) {
        if self.is_compact() && self.is_open {
            self.is_open = false;
        }
    }

    pub fn select(&mut self, id: MenuItemId) {
        self.navigation.select(id);
        if self.is_compact() {
            self.is_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::MENU_ITEMS;

    #[test]
    fn initial_state_follows_viewport() {
        assert!(SidebarController::new(1280.0).is_open());
        assert!(!SidebarController::new(375.0).is_open());
        assert_eq!(
            SidebarController::new(375.0).active_item(),
            MenuItemId::Dashboard
        );
    }

    #[test]
    fn entering_wide_layout_forces_open_over_manual_toggle() {
        for width in [768.0, 800.0, 1024.0, 2560.0] {
            let mut sidebar = SidebarController::new(400.0);
            sidebar.toggle();
            sidebar.toggle();
            assert!(!sidebar.is_open());
            sidebar.resize(width);
            assert!(sidebar.is_open(), "width {width}");
        }
    }

    #[test]
    fn selecting_on_compact_layout_always_closes() {
        for item in MENU_ITEMS {
            let mut sidebar = SidebarController::new(600.0);
            sidebar.toggle();
            assert!(sidebar.is_open());
            sidebar.select(item.id);
            assert!(!sidebar.is_open());
            assert_eq!(sidebar.active_item(), item.id);
        }
    }

    #[test]
    fn wide_layout_ignores_toggle_escape_and_close() {
        let mut sidebar = SidebarController::new(1024.0);
        sidebar.toggle();
        sidebar.escape();
        sidebar.close();
        sidebar.select(MenuItemId::Messages);
        assert!(sidebar.is_open());
        assert!(!sidebar.scroll_locked());
        assert_eq!(sidebar.active_item(), MenuItemId::Messages);
    }

    #[test]
    fn escape_closes_compact_overlay() {
        let mut sidebar = SidebarController::new(500.0);
        sidebar.escape();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        sidebar.escape();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn resize_then_toggle_then_select_scenario() {
        let mut sidebar = SidebarController::new(1024.0);
        assert!(sidebar.is_open());
        assert!(!sidebar.scroll_locked());

        assert_eq!(sidebar.resize(500.0), BreakpointChange::EnteredCompact);
        assert!(sidebar.is_compact());
        assert!(!sidebar.is_open());

        sidebar.toggle();
        assert!(sidebar.is_open());
        assert!(sidebar.scroll_locked());

        sidebar.select(MenuItemId::Order);
        assert_eq!(sidebar.active_item().as_str(), "order");
        assert!(!sidebar.is_open());
        assert!(!sidebar.scroll_locked());
    }

    #[test]
    fn resizing_within_a_layout_keeps_manual_state() {
        let mut sidebar = SidebarController::new(500.0);
        sidebar.toggle();
        assert_eq!(sidebar.resize(420.0), BreakpointChange::Unchanged);
        assert!(sidebar.is_open());
    }
}
