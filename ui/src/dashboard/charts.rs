use dioxus::prelude::*;

use super::chart::{area_path, grouped_bars, line_path, nice_max, ticks, ChartData, ChartFrame};
use crate::core::format::format_tick;
use crate::hooks::use_localized;
use crate::i18n::tr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
    Bars,
}

const TICK_COUNT: usize = 4;
const BAR_WIDTH: f64 = 10.0;

struct GridLine {
    y: String,
    label_y: String,
    label: String,
}

struct AxisLabel {
    x: String,
    text: &'static str,
}

struct Mark {
    d: String,
    stroke: &'static str,
    fill: String,
}

struct Bar {
    x: String,
    y: String,
    width: String,
    height: String,
    fill: &'static str,
}

#[component]
pub fn ChartCard(title: String, data: ChartData, kind: ChartKind) -> Element {
    use_localized();
    let frame = ChartFrame::default();
    let max = nice_max(data.max_value());
    let view_box = frame.view_box();
    let left = format!("{:.1}", frame.pad_left);
    let tick_x = format!("{:.1}", frame.pad_left - 6.0);
    let right = format!("{:.1}", frame.width - frame.pad_right);
    let label_y = format!("{:.1}", frame.height - 8.0);

    let grid: Vec<GridLine> = ticks(max, TICK_COUNT)
        .into_iter()
        .map(|value| {
            let y = frame.value_y(value, max);
            GridLine {
                y: format!("{y:.1}"),
                label_y: format!("{:.1}", y + 3.0),
                label: format_tick(value),
            }
        })
        .collect();

    let count = data.categories.len();
    let axis: Vec<AxisLabel> = data
        .categories
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let x = match kind {
                ChartKind::Bars => frame.band_center(i, count),
                ChartKind::Line | ChartKind::Area => frame.point_x(i, count),
            };
            AxisLabel {
                x: format!("{x:.1}"),
                text,
            }
        })
        .collect();

    let marks: Vec<Mark> = match kind {
        ChartKind::Bars => Vec::new(),
        ChartKind::Line => data
            .series
            .iter()
            .map(|s| Mark {
                d: line_path(&frame, &s.values, max),
                stroke: s.color,
                fill: "none".to_string(),
            })
            .collect(),
        ChartKind::Area => data
            .series
            .iter()
            .map(|s| Mark {
                d: area_path(&frame, &s.values, max),
                stroke: s.color,
                fill: s.color.to_string(),
            })
            .collect(),
    };

    let bars: Vec<Bar> = match kind {
        ChartKind::Bars => grouped_bars(&frame, &data, max, BAR_WIDTH)
            .into_iter()
            .zip(&data.series)
            .flat_map(|(rects, series)| {
                rects.into_iter().map(move |r| Bar {
                    x: format!("{:.1}", r.x),
                    y: format!("{:.1}", r.y),
                    width: format!("{:.1}", r.width),
                    height: format!("{:.1}", r.height),
                    fill: series.color,
                })
            })
            .collect(),
        ChartKind::Line | ChartKind::Area => Vec::new(),
    };

    let legend: Vec<(String, &'static str)> = data
        .series
        .iter()
        .map(|s| (tr(s.label_key), s.color))
        .collect();

    rsx! {
        section { class: "card chart",
            h2 { class: "card__title", "{title}" }
            svg {
                class: "chart__svg",
                view_box: "{view_box}",
                "role": "img",
                "aria-label": "{title}",
                for grid_line in grid {
                    line {
                        x1: "{left}",
                        x2: "{right}",
                        y1: "{grid_line.y}",
                        y2: "{grid_line.y}",
                        class: "chart__grid",
                    }
                    text {
                        x: "{tick_x}",
                        y: "{grid_line.label_y}",
                        class: "chart__tick chart__tick--y",
                        "{grid_line.label}"
                    }
                }
                for label in axis {
                    text {
                        x: "{label.x}",
                        y: "{label_y}",
                        class: "chart__tick chart__tick--x",
                        "{label.text}"
                    }
                }
                for mark in marks {
                    path {
                        d: "{mark.d}",
                        stroke: "{mark.stroke}",
                        fill: "{mark.fill}",
                        class: "chart__mark",
                    }
                }
                for bar in bars {
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: "{bar.fill}",
                        rx: "2",
                    }
                }
            }
            ul { class: "chart__legend",
                for (label, color) in legend {
                    li { class: "chart__legend-item",
                        span {
                            class: "chart__legend-swatch",
                            style: "background:{color}",
                        }
                        "{label}"
                    }
                }
            }
        }
    }
}
