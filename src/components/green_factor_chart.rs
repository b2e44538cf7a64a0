use dioxus::prelude::*;

use crate::shared::mock;
use crate::shared::types::{EnergyCategory, EnergyMix};
use crate::utils::chart::{ring_segment, slices};
use crate::utils::format::{percent_share, trim_number};

const GREEN: &str = "#00c49a";
const OTHER: &str = "#2f2f2f";

/// One drawable slice of either ring.
#[derive(Clone, PartialEq)]
struct RingSlice {
    name: String,
    value: f64,
    share: String,
    color: String,
    d: String,
}

fn ring(cats: &[(String, f64, String)], cx: f32, cy: f32, r0: f32, r1: f32) -> Vec<RingSlice> {
    let values: Vec<f64> = cats.iter().map(|(_, v, _)| *v).collect();
    let total: f64 = values.iter().sum();
    cats.iter()
        .zip(slices(&values, -90.0))
        .map(|((name, value, color), s)| RingSlice {
            name: name.clone(),
            value: *value,
            share: percent_share(*value, total),
            color: color.clone(),
            d: ring_segment(cx, cy, r0, r1, s),
        })
        .collect()
}

fn as_slices(cats: &[EnergyCategory]) -> Vec<(String, f64, String)> {
    cats.iter().map(|c| (c.label.clone(), c.value, c.color.clone())).collect()
}

#[allow(non_snake_case)]
#[component]
fn Legend(title: String, items: Vec<EnergyCategory>) -> Element {
    let total: f64 = items.iter().map(|c| c.value).sum();
    rsx! {
        div { class: "flex-1",
            h4 { class: "text-xs font-semibold text-white mb-2", "{title}" }
            ul { class: "space-y-1 text-xs",
                for (i, c) in items.iter().enumerate() {
                    li { key: "{i}", class: "flex items-center justify-between gap-2",
                        span { class: "flex items-center gap-2",
                            span { class: "inline-block w-2.5 h-2.5 rounded-full", style: "background:{c.color}" }
                            span { class: "text-slate-300", "{c.label}" }
                        }
                        span { class: "text-white tabular-nums",
                            "{trim_number(c.value)} MW "
                            span { class: "text-slate-400", "({percent_share(c.value, total)}%)" }
                        }
                    }
                }
            }
        }
    }
}

/// Two concentric donuts: the green factor inside, usage and supply categories outside.
#[allow(non_snake_case)]
#[component]
pub fn GreenFactorChart(#[props(default = mock::energy_mix())] mix: EnergyMix) -> Element {
    let mut hovered = use_signal(|| Option::<RingSlice>::None);

    let size = 260.0f32;
    let c = size / 2.0;
    let half = size / 2.0;
    let green = mix.green_factor.clamp(0.0, 100.0);
    let inner = ring(
        &[
            ("Green".to_string(), green, GREEN.to_string()),
            ("Other".to_string(), 100.0 - green, OTHER.to_string()),
        ],
        c,
        c,
        half * 0.28,
        half * 0.38,
    );
    let outer_cats: Vec<(String, f64, String)> = as_slices(&mix.usage)
        .into_iter()
        .chain(as_slices(&mix.supply))
        .collect();
    let outer = ring(&outer_cats, c, c, half * 0.48, half * 0.68);
    let view_box = format!("0 0 {size} {size}");
    let green_label = trim_number(mix.green_factor);

    rsx! {
        div { class: "flex flex-col h-full",
            h3 { class: "text-xs font-semibold text-white mb-2", "TOTAL GREEN FACTOR TODAY" }
            div { class: "relative flex justify-center",
                svg { class: "w-full max-w-[260px] h-auto", view_box: "{view_box}",
                    {
                        inner.iter().chain(outer.iter()).enumerate().map(|(i, s)| {
                            let slice = s.clone();
                            rsx! {
                                path {
                                    key: "{i}", d: "{s.d}", fill: "{s.color}", stroke: "#0f172a", stroke_width: "1",
                                    onmouseenter: move |_| hovered.set(Some(slice.clone())),
                                    onmouseleave: move |_| hovered.set(None),
                                }
                            }
                        })
                    }
                    text { x: "{c}", y: "{c - 2.0}", fill: "#fff", font_size: "20", font_weight: "bold", text_anchor: "middle", "{green_label}%" }
                    text { x: "{c}", y: "{c + 14.0}", fill: "#aaa", font_size: "10", text_anchor: "middle", "Green factor" }
                }
                if let Some(s) = hovered() {
                    div {
                        class: "absolute top-0 right-0 rounded-md border border-slate-700 bg-[#111] px-2 py-1 text-xs text-white pointer-events-none",
                        "{s.name}: {trim_number(s.value)} MW ({s.share}%)"
                    }
                }
            }
            div { class: "flex gap-4 mt-4",
                Legend { title: "ENERGY USAGE", items: mix.usage.clone() }
                Legend { title: "ENERGY SUPPLY", items: mix.supply.clone() }
            }
        }
    }
}
