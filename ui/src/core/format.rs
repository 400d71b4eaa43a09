//! Formatting helpers for dashboard figures.

/// Percentage magnitude with one decimal, e.g. `8.0`. The trend arrow carries the sign.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", value.abs())
}

/// Compact money figure: `$950`, `$1k`, `$12.5k`, `$2.1M`.
pub fn format_currency_compact(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{sign}${}M", trim_decimal(abs / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{sign}${}k", trim_decimal(abs / 1_000.0))
    } else {
        format!("{sign}${abs:.0}")
    }
}

/// Axis tick label: `20000` → `20k`, `85` → `85`.
pub fn format_tick(value: f64) -> String {
    if value.abs() >= 1_000.0 {
        format!("{}k", trim_decimal(value / 1_000.0))
    } else {
        format!("{value:.0}")
    }
}

fn trim_decimal(value: f64) -> String {
    let rounded = format!("{value:.1}");
    rounded
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(rounded)
}
