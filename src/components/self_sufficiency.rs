use dioxus::prelude::*;

use crate::components::{GlowCard, Icon};
use crate::shared::mock;
use crate::shared::types::{SufficiencyCard, SufficiencyDay};
use crate::utils::chart::{category_positions, LinearScale};
use crate::utils::format::trim_number;

const GRID_COLOR: &str = "#334155";

/// Solar share stacked under grid share, one bar per day, on a 0–100 axis.
#[allow(non_snake_case)]
#[component]
fn StackedBars(days: Vec<SufficiencyDay>, color: String) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let (w, h) = (240.0f32, 80.0f32);
    let (top, bottom) = (4.0f32, 14.0f32);
    let base = h - bottom;
    let y = LinearScale::new((0.0, 100.0), (base, top));
    let xs = category_positions(days.len(), 0.0, w, true);
    let band = if days.is_empty() { w } else { w / days.len() as f32 };
    let bar_w = band * 0.6;
    let view_box = format!("0 0 {w} {h}");

    rsx! {
        div { class: "relative h-16",
            svg { class: "block w-full h-full", view_box: "{view_box}",
                {
                    xs.iter().zip(days.iter()).enumerate().map(|(i, (x, d))| {
                        let solar_top = y.map(d.solar as f32);
                        let grid_top = y.map((d.solar + d.grid) as f32);
                        rsx! {
                            g { key: "{i}",
                                rect { x: "{x - bar_w / 2.0}", y: "{solar_top}", width: "{bar_w}", height: "{base - solar_top}", fill: "{color}" }
                                rect { x: "{x - bar_w / 2.0}", y: "{grid_top}", width: "{bar_w}", height: "{solar_top - grid_top}", fill: GRID_COLOR }
                                text { x: "{x}", y: "{h - 2.0}", fill: "#ccc", font_size: "8", text_anchor: "middle", "{d.date}" }
                                rect {
                                    x: "{x - band / 2.0}", y: "0", width: "{band}", height: "{h}", fill: "transparent",
                                    onmouseenter: move |_| hovered.set(Some(i)),
                                    onmouseleave: move |_| hovered.set(None),
                                    ontouchstart: move |_| hovered.set(Some(i)),
                                    ontouchend: move |_| hovered.set(None),
                                }
                            }
                        }
                    })
                }
            }
            if let Some(d) = hovered().and_then(|i| days.get(i)) {
                div {
                    class: "absolute -top-14 left-1/2 -translate-x-1/2 rounded-md border bg-[#111] px-2 py-1 text-xs text-white whitespace-nowrap pointer-events-none",
                    style: "border-color:{color}",
                    strong { "{d.date}" }
                    div { "Solar: {trim_number(d.solar)}%" }
                    div { "Grid: {trim_number(d.grid)}%" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn SelfCard(card: SufficiencyCard) -> Element {
    let glow = card.glow.clone();
    rsx! {
        GlowCard { glow: glow.clone(), class: "flex flex-col justify-between",
            div { class: "flex items-center justify-between mb-4",
                h3 { class: "text-sm font-medium text-white", "{card.title}" }
                div { class: "text-white", style: "filter:drop-shadow(0 0 6px {glow})",
                    Icon { kind: card.icon, class: "w-8 h-8" }
                }
            }
            div {
                div { class: "text-2xl font-bold text-white", "{card.value}" }
                p { class: "text-xs text-slate-400 mt-1", "{card.subtext}" }
            }
            div { class: "mt-2 space-y-1 text-xs text-slate-400",
                for (i, m) in card.metrics.iter().enumerate() {
                    div { key: "{i}", class: "flex justify-between",
                        span { "{m.label}" }
                        span { class: "text-white font-medium", "{m.value}" }
                    }
                }
            }
            div { class: "mt-3",
                StackedBars { days: card.days.clone(), color: glow.clone() }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn SelfSufficiencySection(#[props(default = mock::sufficiency_cards())] cards: Vec<SufficiencyCard>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 gap-4 h-full",
            for (i, card) in cards.iter().enumerate() {
                SelfCard { key: "{i}", card: card.clone() }
            }
        }
    }
}
