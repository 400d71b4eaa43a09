//! Dashboard content: static sample data, chart geometry and the cards that
//! render them.

pub mod chart;
pub mod data;

mod cards;
pub use cards::TodaySales;

mod charts;
pub use charts::{ChartCard, ChartKind};

mod products;
pub use products::TopProducts;

mod map;
pub use map::SalesMap;

mod export;
pub use export::{DashboardSnapshot, ExportError, ExportReport};
