use dioxus::prelude::*;

use super::data::MAP_REGIONS;
use crate::hooks::use_localized;
use crate::t;

/// Placeholder world map with illustrative sales regions.
#[component]
pub fn SalesMap() -> Element {
    use_localized();
    rsx! {
        section { class: "card sales-map",
            h2 { class: "card__title", {t!("sales-mapping")} }
            div { class: "sales-map__canvas",
                svg { view_box: "0 0 1000 600", class: "sales-map__svg",
                    path { fill: "#e0e0e0", d: "M0,0h1000v600H0z" }
                    for (fill, d) in MAP_REGIONS.iter().copied() {
                        path { fill: "{fill}", d: "{d}" }
                    }
                }
            }
            p { class: "card__subtitle", {t!("map-caption")} }
        }
    }
}
