//! Platform detection and the concrete document host.

use super::document::{DocumentHost, TextDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// Writes document flags into the page the app is rendered in.
///
/// Web builds go through `web-sys`; the desktop webview has no direct DOM
/// handle, so the same writes are evaluated as script.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

impl DocumentHost for BrowserDocument {
    fn apply_scroll_lock(&self, locked: bool) {
        let overflow = if locked { "hidden" } else { "auto" };

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                if body.style().set_property("overflow", overflow).is_err() {
                    tracing::warn!("document: failed to set body overflow");
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dioxus::document::eval(&format!(
                "document.body.style.overflow = '{overflow}';"
            ));
        }
    }

    fn apply_direction(&self, direction: TextDirection, lang: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let applied = root
                    .set_attribute("dir", direction.as_str())
                    .and_then(|_| root.set_attribute("lang", lang));
                if applied.is_err() {
                    tracing::warn!("document: failed to set direction attributes");
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dioxus::document::eval(&format!(
                "document.documentElement.dir = '{}'; document.documentElement.lang = '{}';",
                direction.as_str(),
                lang
            ));
        }
    }
}

/// Suspends the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}
