use dioxus::prelude::*;

use crate::components::{GlowCard, Icon};
use crate::shared::mock;
use crate::shared::site::SITE_CITY;
use crate::shared::types::{Metric, StatusCardData};

#[allow(non_snake_case)]
#[component]
fn MetricRow(metric: Metric) -> Element {
    rsx! {
        div { class: "flex items-center justify-between text-xs text-slate-400",
            span { "{metric.label}" }
            span { class: "text-slate-100 font-light",
                "{metric.value}"
                if let Some(unit) = &metric.unit {
                    span { class: "text-xs ml-1 text-slate-400", "{unit}" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn StatusCard(card: StatusCardData) -> Element {
    rsx! {
        GlowCard {
            div { class: "flex flex-col items-center justify-between mb-4",
                h3 { class: "text-lg font-semibold text-white", "{card.title}" }
                div { class: "text-white transition-all duration-300 group-hover:text-[#a2ff62]",
                    Icon { kind: card.icon, class: "w-20 h-20" }
                }
            }
            div { class: "space-y-2",
                for (i, m) in card.metrics.iter().enumerate() {
                    MetricRow { key: "{i}", metric: m.clone() }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn StatusOverviewSection(#[props(default = mock::status_cards())] cards: Vec<StatusCardData>) -> Element {
    rsx! {
        div { class: "text-sm px-2 py-1 text-slate-300", "SITE LOCATION : {SITE_CITY}" }
        div { class: "grid grid-cols-3 gap-4",
            for (i, card) in cards.iter().enumerate() {
                StatusCard { key: "{i}", card: card.clone() }
            }
        }
    }
}
