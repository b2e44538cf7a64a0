use dioxus::prelude::*;

use crate::components::{GlowCard, Icon};
use crate::shared::mock;
use crate::shared::types::TrendCard;
use crate::utils::chart::{area_path, category_positions, smooth_path, LinearScale};
use crate::utils::format::trim_number;

/// Small smoothed trend line with markers and a hover readout.
#[allow(non_snake_case)]
#[component]
fn Sparkline(values: Vec<f64>, color: String) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let (w, h, pad) = (240.0f32, 64.0f32, 6.0f32);
    let max = values.iter().cloned().fold(0.0f64, f64::max).max(1.0) as f32;
    let xs = category_positions(values.len(), pad, w - pad, true);
    let y = LinearScale::new((0.0, max), (h - pad, pad + 4.0));
    let pts: Vec<(f32, f32)> = xs
        .iter()
        .zip(values.iter())
        .map(|(x, v)| (*x, y.map(*v as f32)))
        .collect();
    let line = smooth_path(&pts);
    let area = area_path(&pts, h - pad, true);
    let band = if values.is_empty() { w } else { (w - pad * 2.0) / values.len() as f32 };
    let view_box = format!("0 0 {w} {h}");

    rsx! {
        div { class: "relative h-16",
            svg { class: "block w-full h-full", view_box: "{view_box}",
                path { d: "{area}", fill: "{color}", fill_opacity: "0.15" }
                path { d: "{line}", fill: "none", stroke: "{color}", stroke_width: "2" }
                for (i, (px, py)) in pts.iter().enumerate() {
                    circle { key: "dot-{i}", cx: "{px}", cy: "{py}", r: "3", fill: "{color}" }
                }
                for (i, px) in xs.iter().enumerate() {
                    rect {
                        key: "hit-{i}", x: "{px - band / 2.0}", y: "0", width: "{band}", height: "{h}", fill: "transparent",
                        onmouseenter: move |_| hovered.set(Some(i)),
                        onmouseleave: move |_| hovered.set(None),
                        ontouchstart: move |_| hovered.set(Some(i)),
                        ontouchend: move |_| hovered.set(None),
                    }
                }
            }
            if let Some(i) = hovered() {
                if let Some(v) = values.get(i) {
                    div {
                        class: "absolute -top-8 left-1/2 -translate-x-1/2 rounded-md border bg-[#111] px-2 py-1 text-xs text-white pointer-events-none",
                        style: "border-color:{color}",
                        "Value: "
                        strong { "{trim_number(*v)}" }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn TrendCardView(card: TrendCard) -> Element {
    let glow = card.glow.clone();
    rsx! {
        GlowCard { glow: glow.clone(), class: "flex flex-col justify-between",
            div { class: "flex items-center justify-between mb-4",
                h3 { class: "text-sm font-medium text-white", "{card.title}" }
                div { class: "text-white group-hover:text-[#a2ff62]", style: "filter:drop-shadow(0 0 6px {glow})",
                    Icon { kind: card.icon, class: "w-10 h-10" }
                }
            }
            div {
                div { class: "text-2xl font-bold text-white", "{card.value}" }
                p { class: "text-xs text-slate-400 mt-1", "{card.subtext}" }
                if !card.extra_metrics.is_empty() {
                    div { class: "mt-2 space-y-1 text-xs text-slate-400",
                        for (i, m) in card.extra_metrics.iter().enumerate() {
                            div { key: "{i}", class: "flex justify-between",
                                span { "{m.label}" }
                                span { class: "text-white font-medium", "{m.value}" }
                            }
                        }
                    }
                }
            }
            div { class: "mt-3",
                Sparkline { values: card.series.clone(), color: glow.clone() }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn SavingsAndRevenueSection(#[props(default = mock::trend_cards())] cards: Vec<TrendCard>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 gap-4 h-full",
            for (i, card) in cards.iter().enumerate() {
                TrendCardView { key: "{i}", card: card.clone() }
            }
        }
    }
}
