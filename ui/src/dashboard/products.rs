use dioxus::prelude::*;

use super::data::TOP_PRODUCTS;
use crate::hooks::use_localized;
use crate::t;

#[component]
pub fn TopProducts() -> Element {
    use_localized();
    rsx! {
        section { class: "card top-products",
            h2 { class: "card__title", {t!("top-products")} }
            div { class: "top-products__scroll",
                table { class: "top-products__table",
                    thead {
                        tr {
                            th { {t!("col-index")} }
                            th { {t!("col-name")} }
                            th { {t!("col-popularity")} }
                            th { {t!("col-sales")} }
                        }
                    }
                    tbody {
                        for product in TOP_PRODUCTS.iter() {
                            tr { key: "{product.rank}",
                                td { class: "top-products__rank", "{product.rank}" }
                                td { "{product.name}" }
                                td {
                                    div { class: "progress",
                                        div {
                                            class: "progress__bar progress__bar--{product.tone}",
                                            style: "width: {product.popularity}%",
                                        }
                                    }
                                }
                                td {
                                    span { class: "badge badge--{product.tone}", "{product.sales}%" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
