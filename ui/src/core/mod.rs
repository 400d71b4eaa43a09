//! Platform-agnostic building blocks: layout state machines, document flags,
//! persistence and formatting. Nothing in here renders; components in
//! `crate::components` drive these types from Dioxus event handlers.

pub mod breakpoint;
pub mod document;
pub mod dropdown;
pub mod format;
pub mod navigation;
pub mod platform;
pub mod search;
pub mod sidebar;
pub mod storage;
pub mod window;
