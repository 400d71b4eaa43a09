use dioxus::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::chart::ChartData;
use super::data::{self, CardValue, Product, SummaryCard, SUMMARY_CARDS, TOP_PRODUCTS};
use crate::hooks::use_localized;
use crate::t;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("no export directory available")]
    NoExportDir,
    #[error("{0}")]
    Browser(String),
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Json,
    Csv,
}

/// Named chart in an exported report.
#[derive(Debug, Clone, Serialize)]
pub struct NamedChart {
    pub id: &'static str,
    #[serde(flatten)]
    pub data: ChartData,
}

/// Everything shown on the dashboard, in export form.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub exported_at: String,
    pub summary: &'static [SummaryCard],
    pub top_products: &'static [Product],
    pub charts: Vec<NamedChart>,
}

impl DashboardSnapshot {
    pub fn capture(exported_at: String) -> Self {
        Self {
            exported_at,
            summary: SUMMARY_CARDS,
            top_products: TOP_PRODUCTS,
            charts: vec![
                NamedChart { id: "visitor_insights", data: data::visitors() },
                NamedChart { id: "total_revenue", data: data::revenue() },
                NamedChart { id: "customer_satisfaction", data: data::satisfaction() },
                NamedChart { id: "target_vs_reality", data: data::target_vs_reality() },
                NamedChart { id: "volume_service_level", data: data::volume_service_level() },
            ],
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Long-format CSV: one `dataset,category,series,value` row per figure.
    pub fn to_csv(&self) -> String {
        let mut rows: Vec<[String; 4]> = vec![[
            "dataset".into(),
            "category".into(),
            "series".into(),
            "value".into(),
        ]];

        for card in self.summary {
            let value = match card.value {
                CardValue::Currency(amount) => amount.to_string(),
                CardValue::Count(count) => count.to_string(),
            };
            rows.push(["summary".into(), card.id.into(), "value".into(), value]);
            rows.push([
                "summary".into(),
                card.id.into(),
                "change_pct".into(),
                card.change_pct.to_string(),
            ]);
        }

        for product in self.top_products {
            rows.push([
                "top_products".into(),
                product.name.into(),
                "popularity".into(),
                product.popularity.to_string(),
            ]);
            rows.push([
                "top_products".into(),
                product.name.into(),
                "sales".into(),
                product.sales.to_string(),
            ]);
        }

        for chart in &self.charts {
            for series in &chart.data.series {
                for (category, value) in chart.data.categories.iter().zip(&series.values) {
                    rows.push([
                        chart.id.into(),
                        (*category).into(),
                        series.id.into(),
                        value.to_string(),
                    ]);
                }
            }
        }

        let mut csv = String::new();
        for row in rows {
            let line = row
                .iter()
                .map(|field| escape_csv(field))
                .collect::<Vec<_>>()
                .join(",");
            csv.push_str(&line);
            csv.push('\n');
        }
        csv
    }
}

#[component]
pub fn ExportReport() -> Element {
    use_localized();
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("export__status".to_string(), t!("export-working"))),
        ExportStatus::Done(message) => Some((
            "export__status export__status--success".to_string(),
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "export__status export__status--error".to_string(),
            t!("export-failed", error = err.as_str()),
        )),
    };

    let start = move |format: ExportFormat| {
        let mut status_signal = status;
        let mut busy_signal = busy;
        if busy_signal() {
            return;
        }
        busy_signal.set(true);
        status_signal.set(ExportStatus::Working);
        spawn(async move {
            match perform_export(format).await {
                Ok(Some(path)) => {
                    status_signal.set(ExportStatus::Done(t!("export-saved", path = path)))
                }
                Ok(None) => status_signal.set(ExportStatus::Done(t!("export-downloaded"))),
                Err(err) => {
                    warn!(%err, "export failed");
                    status_signal.set(ExportStatus::Error(err.to_string()));
                }
            }
            busy_signal.set(false);
        });
    };

    rsx! {
        div {
            class: "export",
            role: "group",
            aria_label: t!("export-report"),
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: busy(),
                onclick: move |_| start(ExportFormat::Json),
                span { class: "button__icon", aria_hidden: "true", "▮" }
                {t!("export-json")}
            }
            button {
                r#type: "button",
                class: "button",
                disabled: busy(),
                onclick: move |_| start(ExportFormat::Csv),
                {t!("export-csv")}
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", role: "status", "{message}" }
            }
        }
    }
}

async fn perform_export(format: ExportFormat) -> Result<Option<String>, ExportError> {
    let snapshot = DashboardSnapshot::capture(timestamp_rfc3339());
    let (payload, ext, mime) = match format {
        ExportFormat::Json => (snapshot.to_json()?, "json", "application/json"),
        ExportFormat::Csv => (snapshot.to_csv(), "csv", "text/csv"),
    };
    let filename = format!("dabang-report-{}.{ext}", timestamp_slug());
    let delivery = download_bytes(&filename, mime, payload.into_bytes()).await?;
    info!(%filename, ?format, "report exported");
    Ok(delivery)
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

fn timestamp_rfc3339() -> String {
    use time::{format_description::well_known::Rfc3339, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let browser = |msg: &str| ExportError::Browser(msg.to_string());

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| browser("Failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| browser("Unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| browser("Document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| browser("Unable to create anchor"))?
            .dyn_into()
            .map_err(|_| browser("Anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| browser("Missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = desktop_export_dir()?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        std::fs::write(&path, &bytes)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "Dabang", "Dabang")
        .ok_or(ExportError::NoExportDir)?;
    Ok(dirs.data_dir().join("exports"))
}
