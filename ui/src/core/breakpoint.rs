//! Viewport width tracking and the compact-layout breakpoint.

/// Widths strictly below this value use the compact (mobile) layout.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Whether a viewport of `width` pixels uses the compact layout.
pub fn is_compact(width: f64) -> bool {
    width < COMPACT_BREAKPOINT_PX
}

/// Tracks the latest viewport width and reports breakpoint crossings.
///
/// Every resize event is fed through [`BreakpointMonitor::observe`]; no
/// debouncing is applied, so a drag across the breakpoint can flip the layout
/// several times in a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointMonitor {
    width: f64,
    compact: bool,
}

/// Result of feeding a new width into the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointChange {
    Unchanged,
    EnteredCompact,
    EnteredWide,
}

impl BreakpointMonitor {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            compact: is_compact(width),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn observe(&mut self, width: f64) -> BreakpointChange {
        self.width = width;
        let compact = is_compact(width);
        if compact == self.compact {
            return BreakpointChange::Unchanged;
        }
        self.compact = compact;
        if compact {
            BreakpointChange::EnteredCompact
        } else {
            BreakpointChange::EnteredWide
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive_at_768() {
        assert!(is_compact(0.0));
        assert!(is_compact(767.9));
        assert!(!is_compact(768.0));
        assert!(!is_compact(1920.0));
    }

    #[test]
    fn observe_reports_only_crossings() {
        let mut monitor = BreakpointMonitor::new(1024.0);
        assert!(!monitor.is_compact());
        assert_eq!(monitor.observe(900.0), BreakpointChange::Unchanged);
        assert_eq!(monitor.observe(500.0), BreakpointChange::EnteredCompact);
        assert_eq!(monitor.observe(320.0), BreakpointChange::Unchanged);
        assert_eq!(monitor.observe(768.0), BreakpointChange::EnteredWide);
        assert_eq!(monitor.width(), 768.0);
    }
}
