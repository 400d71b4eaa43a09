//! Static sample datasets shown on the dashboard.

use serde::Serialize;

use super::chart::{ChartData, Series};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum CardValue {
    Currency(f64),
    Count(u32),
}

/// One of the "Today's Sales" summary tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryCard {
    pub id: &'static str,
    #[serde(skip)]
    pub title_key: &'static str,
    #[serde(skip)]
    pub icon: &'static str,
    /// Colour family used for the tile (`pink`, `orange`, ...).
    #[serde(skip)]
    pub tone: &'static str,
    pub value: CardValue,
    /// Change since yesterday, in percent.
    pub change_pct: f64,
}

impl SummaryCard {
    pub fn is_positive(&self) -> bool {
        self.change_pct >= 0.0
    }
}

pub const SUMMARY_CARDS: &[SummaryCard] = &[
    SummaryCard {
        id: "total_sales",
        title_key: "card-total-sales",
        icon: "▮",
        tone: "pink",
        value: CardValue::Currency(1_000.0),
        change_pct: 8.0,
    },
    SummaryCard {
        id: "total_order",
        title_key: "card-total-order",
        icon: "🛒",
        tone: "orange",
        value: CardValue::Count(300),
        change_pct: 5.0,
    },
    SummaryCard {
        id: "product_sold",
        title_key: "card-product-sold",
        icon: "🏷",
        tone: "green",
        value: CardValue::Count(5),
        change_pct: 2.0,
    },
    SummaryCard {
        id: "new_customers",
        title_key: "card-new-customers",
        icon: "👥",
        tone: "purple",
        value: CardValue::Count(8),
        change_pct: -5.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Product {
    pub rank: &'static str,
    pub name: &'static str,
    /// Share of the popularity bar, 0–100.
    pub popularity: u8,
    /// Share of sales, 0–100.
    pub sales: u8,
    #[serde(skip)]
    pub tone: &'static str,
}

pub const TOP_PRODUCTS: &[Product] = &[
    Product { rank: "01", name: "Home Decor Range", popularity: 75, sales: 45, tone: "indigo" },
    Product { rank: "02", name: "Disney Princess Pink Bag 18'", popularity: 60, sales: 29, tone: "green" },
    Product { rank: "03", name: "Bathroom Essentials", popularity: 40, sales: 18, tone: "purple" },
    Product { rank: "04", name: "Apple Smartwatches", popularity: 50, sales: 25, tone: "orange" },
];

/// Illustrative blobs on the placeholder world map.
pub const MAP_REGIONS: &[(&str, &str)] = &[
    ("#fbb650", "M100 200 Q150 150 200 200 T300 250 Q250 300 150 280 Q50 260 100 200z"),
    ("#60a5fa", "M700 100 Q750 50 800 100 T900 150 Q850 200 750 180 Q650 160 700 100z"),
    ("#a78bfa", "M600 400 Q650 350 700 400 T800 450 Q750 500 650 480 Q550 460 600 400z"),
    ("#ef4444", "M200 450 Q250 400 300 450 T400 500 Q350 550 250 530 Q150 510 200 450z"),
];

const WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn series(id: &'static str, label_key: &'static str, color: &'static str, values: &[f64]) -> Series {
    Series {
        id,
        label_key,
        color,
        values: values.to_vec(),
    }
}

pub fn revenue() -> ChartData {
    ChartData {
        categories: WEEKDAYS.to_vec(),
        series: vec![
            series(
                "OnlineSales",
                "series-online-sales",
                "#4ade80",
                &[13_000.0, 17_000.0, 6_000.0, 15_000.0, 11_000.0, 16_000.0, 20_000.0],
            ),
            series(
                "OfflineSales",
                "series-offline-sales",
                "#60a5fa",
                &[9_000.0, 12_000.0, 21_000.0, 5_000.0, 13_000.0, 14_000.0, 11_000.0],
            ),
        ],
    }
}

pub fn visitors() -> ChartData {
    ChartData {
        categories: MONTHS.to_vec(),
        series: vec![
            series(
                "LoyalCustomers",
                "series-loyal-customers",
                "#8884d8",
                &[250.0, 280.0, 320.0, 200.0, 180.0, 300.0, 350.0, 320.0, 280.0, 250.0, 220.0, 180.0],
            ),
            series(
                "NewCustomers",
                "series-new-customers",
                "#ff0000",
                &[300.0, 320.0, 350.0, 220.0, 200.0, 340.0, 380.0, 350.0, 300.0, 270.0, 240.0, 200.0],
            ),
            series(
                "UniqueCustomers",
                "series-unique-customers",
                "#4caf50",
                &[350.0, 380.0, 400.0, 250.0, 230.0, 380.0, 420.0, 390.0, 340.0, 300.0, 270.0, 230.0],
            ),
        ],
    }
}

pub fn satisfaction() -> ChartData {
    ChartData {
        categories: MONTHS.to_vec(),
        series: vec![
            series(
                "ThisMonth",
                "series-this-month",
                "#4ade80",
                &[75.0, 80.0, 70.0, 78.0, 72.0, 85.0, 92.0, 88.0, 80.0, 75.0, 82.0, 88.0],
            ),
            series(
                "LastMonth",
                "series-last-month",
                "#60a5fa",
                &[70.0, 72.0, 75.0, 68.0, 70.0, 78.0, 80.0, 82.0, 75.0, 70.0, 78.0, 85.0],
            ),
        ],
    }
}

pub fn target_vs_reality() -> ChartData {
    ChartData {
        categories: vec!["Jan", "Feb", "Mar", "Apr", "May", "June", "July"],
        series: vec![
            series(
                "Target",
                "series-target",
                "#fbbf24",
                &[8_000.0, 6_000.0, 9_000.0, 7_000.0, 8_500.0, 6_500.0, 9_500.0],
            ),
            series(
                "Reality",
                "series-reality",
                "#34d399",
                &[7_500.0, 6_500.0, 8_200.0, 7_800.0, 7_900.0, 7_000.0, 8_823.0],
            ),
        ],
    }
}

pub fn volume_service_level() -> ChartData {
    ChartData {
        categories: vec!["Jan", "Feb", "Mar", "Apr"],
        series: vec![
            series(
                "Volume",
                "series-volume",
                "#60a5fa",
                &[2_400.0, 2_210.0, 2_290.0, 2_000.0],
            ),
            series(
                "ServiceLevel",
                "series-service-level",
                "#4ade80",
                &[80.0, 75.0, 78.0, 82.0],
            ),
        ],
    }
}
