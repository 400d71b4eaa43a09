use dioxus::prelude::*;

use super::data::{CardValue, SummaryCard, SUMMARY_CARDS};
use crate::core::format::{format_currency_compact, format_percent};
use crate::hooks::use_localized;
use crate::i18n::tr;
use crate::t;

fn display_value(value: CardValue) -> String {
    match value {
        CardValue::Currency(amount) => format_currency_compact(amount),
        CardValue::Count(count) => count.to_string(),
    }
}

#[component]
pub fn TodaySales() -> Element {
    use_localized();
    rsx! {
        section { class: "card todays-sales",
            h2 { class: "card__title", {t!("todays-sales")} }
            p { class: "card__subtitle", {t!("sales-summary")} }
            div { class: "todays-sales__grid",
                for card in SUMMARY_CARDS.iter().copied() {
                    SalesSummaryCard { key: "{card.id}", card: card }
                }
            }
        }
    }
}

#[component]
fn SalesSummaryCard(card: SummaryCard) -> Element {
    use_localized();
    let value = display_value(card.value);
    let percent = format_percent(card.change_pct);
    let trend = if card.is_positive() { "up" } else { "down" };
    let arrow = if card.is_positive() { "↑" } else { "↓" };

    rsx! {
        div { class: "summary-card summary-card--{card.tone}",
            div { class: "summary-card__icon", aria_hidden: "true", "{card.icon}" }
            div {
                p { class: "summary-card__title", {tr(card.title_key)} }
                h3 { class: "summary-card__value", "{value}" }
                p { class: "summary-card__trend summary-card__trend--{trend}",
                    span { aria_hidden: "true", "{arrow} " }
                    {t!("from-yesterday", percent = percent)}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_values_render_like_the_mockup() {
        let rendered: Vec<_> = SUMMARY_CARDS.iter().map(|c| display_value(c.value)).collect();
        assert_eq!(rendered, vec!["$1k", "300", "5", "8"]);
    }
}
