//! Page chrome shared by every platform shell.

pub mod header;
pub mod language_menu;
pub mod sidebar;

pub use header::Header;
pub use language_menu::LanguageMenu;
pub use sidebar::Sidebar;
