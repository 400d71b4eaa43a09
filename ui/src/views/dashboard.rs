use dioxus::prelude::*;

use crate::components::{Header, Sidebar};
use crate::dashboard::{data, ChartCard, ChartKind, ExportReport, SalesMap, TodaySales, TopProducts};
use crate::hooks::use_localized;
use crate::t;

/// Sidebar plus header around the routed page.
#[component]
pub fn AppShell(children: Element) -> Element {
    let lang = use_localized();

    rsx! {
        div {
            class: "app-shell",
            dir: lang.direction.as_str(),
            lang: lang.tag,
            Sidebar {}
            div { class: "app-shell__main",
                Header {}
                main { class: "app-shell__content", {children} }
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    use_localized();
    rsx! {
        section { class: "page dashboard",
            div { class: "dashboard__toolbar",
                ExportReport {}
            }
            div { class: "dashboard__row dashboard__row--top",
                TodaySales {}
                ChartCard {
                    title: t!("visitor-insights"),
                    data: data::visitors(),
                    kind: ChartKind::Line,
                }
            }
            div { class: "dashboard__row",
                ChartCard {
                    title: t!("total-revenue"),
                    data: data::revenue(),
                    kind: ChartKind::Bars,
                }
                ChartCard {
                    title: t!("customer-satisfaction"),
                    data: data::satisfaction(),
                    kind: ChartKind::Area,
                }
                ChartCard {
                    title: t!("target-vs-reality"),
                    data: data::target_vs_reality(),
                    kind: ChartKind::Bars,
                }
            }
            div { class: "dashboard__row",
                TopProducts {}
                SalesMap {}
                ChartCard {
                    title: t!("volume-vs-service"),
                    data: data::volume_service_level(),
                    kind: ChartKind::Bars,
                }
            }
        }
    }
}
