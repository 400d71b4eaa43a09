mod dashboard;
pub use dashboard::{AppShell, Dashboard};
