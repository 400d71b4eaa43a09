//! Pure SVG geometry for the dashboard charts.
//!
//! Components hand a [`ChartData`] and a [`ChartFrame`] to these helpers and
//! get back path strings and rectangles in view-box coordinates, so the maths
//! can be tested without rendering anything.

use serde::Serialize;

/// One named series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Stable identifier used in exports.
    pub id: &'static str,
    /// Fluent message id of the legend label.
    #[serde(skip)]
    pub label_key: &'static str,
    #[serde(skip)]
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Categories on the X axis plus one or more series sharing them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub categories: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

/// Drawing area inside an SVG view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 250.0,
            pad_left: 40.0,
            pad_right: 10.0,
            pad_top: 10.0,
            pad_bottom: 28.0,
        }
    }
}

impl ChartFrame {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.pad_top + self.plot_height()
    }

    /// X of the `index`-th of `count` evenly spread points.
    pub fn point_x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.pad_left + self.plot_width() / 2.0;
        }
        self.pad_left + self.plot_width() * index as f64 / (count - 1) as f64
    }

    /// Centre X of the `index`-th of `count` equal-width bands.
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        let band = self.plot_width() / count.max(1) as f64;
        self.pad_left + band * (index as f64 + 0.5)
    }

    pub fn value_y(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        let ratio = (value / max).clamp(0.0, 1.0);
        self.baseline() - self.plot_height() * ratio
    }
}

/// Rounds `max` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced tick values from zero to `max`.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// `M x y L x y ...` polyline through `values`.
pub fn line_path(frame: &ChartFrame, values: &[f64], max: f64) -> String {
    let mut path = String::new();
    for (i, value) in values.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let x = frame.point_x(i, values.len());
        let y = frame.value_y(*value, max);
        if !path.is_empty() {
            path.push(' ');
        }
        path.push_str(&format!("{cmd}{x:.1} {y:.1}"));
    }
    path
}

/// Closed path filling the area between the line and the baseline.
pub fn area_path(frame: &ChartFrame, values: &[f64], max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let line = line_path(frame, values, max);
    let first_x = frame.point_x(0, values.len());
    let last_x = frame.point_x(values.len() - 1, values.len());
    let base = frame.baseline();
    format!("{line} L{last_x:.1} {base:.1} L{first_x:.1} {base:.1} Z")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Side-by-side bars, one group per category and one bar per series.
/// The outer vector is indexed by series so each series keeps its colour.
pub fn grouped_bars(
    frame: &ChartFrame,
    data: &ChartData,
    max: f64,
    bar_width: f64,
) -> Vec<Vec<BarRect>> {
    let categories = data.categories.len();
    let series_count = data.series.len();
    let group_width = bar_width * series_count as f64;

    data.series
        .iter()
        .enumerate()
        .map(|(s, series)| {
            series
                .values
                .iter()
                .take(categories)
                .enumerate()
                .map(|(c, value)| {
                    let left = frame.band_center(c, categories) - group_width / 2.0;
                    let y = frame.value_y(*value, max);
                    BarRect {
                        x: left + bar_width * s as f64,
                        y,
                        width: bar_width,
                        height: frame.baseline() - y,
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> ChartFrame {
        ChartFrame {
            width: 110.0,
            height: 60.0,
            pad_left: 10.0,
            pad_right: 0.0,
            pad_top: 0.0,
            pad_bottom: 10.0,
        }
    }

    #[test]
    fn nice_max_rounds_up_to_friendly_steps() {
        assert_eq!(nice_max(21_000.0), 25_000.0);
        assert_eq!(nice_max(420.0), 500.0);
        assert_eq!(nice_max(92.0), 100.0);
        assert_eq!(nice_max(100.0), 100.0);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(f64::NAN), 1.0);
    }

    #[test]
    fn ticks_span_zero_to_max() {
        assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn line_path_maps_values_into_plot_area() {
        let path = line_path(&frame(), &[0.0, 50.0, 100.0], 100.0);
        assert_eq!(path, "M10.0 50.0 L60.0 25.0 L110.0 0.0");
    }

    #[test]
    fn area_path_closes_on_baseline() {
        let path = area_path(&frame(), &[0.0, 100.0], 100.0);
        assert!(path.starts_with("M10.0 50.0 L110.0 0.0"));
        assert!(path.ends_with("L110.0 50.0 L10.0 50.0 Z"));
        assert!(area_path(&frame(), &[], 100.0).is_empty());
    }

    #[test]
    fn grouped_bars_stay_inside_their_band() {
        let data = ChartData {
            categories: vec!["a", "b"],
            series: vec![
                Series { id: "x", label_key: "x", color: "#000", values: vec![50.0, 100.0] },
                Series { id: "y", label_key: "y", color: "#fff", values: vec![25.0, 0.0] },
            ],
        };
        let bars = grouped_bars(&frame(), &data, 100.0, 10.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0][0], BarRect { x: 25.0, y: 25.0, width: 10.0, height: 25.0 });
        assert_eq!(bars[1][0].x, 35.0);
        assert_eq!(bars[0][1].height, 50.0);
        assert_eq!(bars[1][1].height, 0.0);
        assert_eq!(data.max_value(), 100.0);
    }

    #[test]
    fn values_above_max_are_clamped() {
        assert_eq!(frame().value_y(150.0, 100.0), 0.0);
        assert_eq!(frame().value_y(-5.0, 100.0), 50.0);
    }
}
