use dioxus::prelude::*;

use crate::components::{Gauge, GlowCard, Icon};
use crate::shared::icons::IconKind;
use crate::shared::mock;
use crate::shared::types::{BatteryOverview, LabeledValue};
use crate::utils::chart::{polar, ring_segment, slices};
use crate::utils::format::{percent_share, trim_number};

const GREEN: &str = "#7bff62";
const CYAN: &str = "#00e0ff";

#[allow(non_snake_case)]
#[component]
fn StatList(items: Vec<LabeledValue>) -> Element {
    rsx! {
        div { class: "text-xs space-y-1",
            for (i, it) in items.iter().enumerate() {
                div { key: "{i}", class: "flex justify-between",
                    span { "{it.label}" }
                    span { "{it.value}" }
                }
            }
        }
    }
}

struct SliceLabel {
    ring: String,
    leader: String,
    x: f32,
    y: f32,
    anchor: &'static str,
    text: String,
    color: &'static str,
}

/// Green vs grid share as a labelled donut.
#[allow(non_snake_case)]
#[component]
fn EnergySplit(green: f64, grid: f64) -> Element {
    let (w, h) = (320.0f32, 190.0f32);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let outer = h / 2.0 * 0.7;
    let inner = h / 2.0 * 0.5;
    let total = green + grid;
    let parts = [("Green Energy", green, GREEN), ("Grid Energy", grid, CYAN)];
    let labels: Vec<SliceLabel> = parts
        .into_iter()
        .zip(slices(&[green, grid], -90.0))
        .map(|((name, v, color), s)| {
            let (x0, y0) = polar(cx, cy, outer + 2.0, s.mid());
            let (x1, y1) = polar(cx, cy, outer + 14.0, s.mid());
            let right = x1 >= cx;
            let x2 = if right { x1 + 10.0 } else { x1 - 10.0 };
            let pct = percent_share(v, total);
            let pct = pct.trim_end_matches('0').trim_end_matches('.');
            SliceLabel {
                ring: ring_segment(cx, cy, inner, outer, s),
                leader: format!("M {x0:.1} {y0:.1} L {x1:.1} {y1:.1} L {x2:.1} {y1:.1}"),
                x: if right { x2 + 3.0 } else { x2 - 3.0 },
                y: y1 + 4.0,
                anchor: if right { "start" } else { "end" },
                text: format!("{name}: {pct}%"),
                color,
            }
        })
        .collect();
    let view_box = format!("0 0 {w} {h}");

    rsx! {
        svg { class: "w-full h-48", view_box: "{view_box}",
            for (i, l) in labels.iter().enumerate() {
                g { key: "{i}",
                    path { d: "{l.ring}", fill: "{l.color}" }
                    path { d: "{l.leader}", fill: "none", stroke: "{l.color}", stroke_width: "1" }
                    text { x: "{l.x}", y: "{l.y}", fill: "#fff", font_size: "12", text_anchor: "{l.anchor}", "{l.text}" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn BatteryOverviewSection(#[props(default = mock::battery_overview())] data: BatteryOverview) -> Element {
    let capacity = trim_number(data.capacity_kw);
    rsx! {
        div { class: "grid grid-cols-2 gap-4 h-full text-sm text-white",
            // Battery status
            GlowCard { glow: GREEN,
                div { class: "flex justify-between items-center mb-2",
                    h3 { class: "text-lg font-semibold", "Battery Status" }
                    span { class: "text-[#7bff62]", Icon { kind: IconKind::BatteryCharging, class: "w-6 h-6" } }
                }
                div { class: "text-3xl font-bold text-[#7bff62] mb-1",
                    "{capacity} "
                    span { class: "text-base text-white font-medium", "kW" }
                }
                p { class: "text-xs text-slate-400 mb-4", "25% of Max Capacity" }
                div { class: "w-full flex justify-center mb-4",
                    Gauge {
                        value: data.percentage as f64,
                        start_angle: 0.0,
                        stop_angle: 360.0,
                        size: 170,
                        stroke: 8,
                        track_color: "#333".to_string(),
                        progress_color: GREEN.to_string(),
                        div { class: "flex flex-col items-center gap-2",
                            Icon { kind: IconKind::BatteryCharging, class: "w-9 h-9 text-white" }
                            span { class: "text-lg font-semibold tabular-nums", "{data.percentage}%" }
                        }
                    }
                }
                p { class: "text-xs text-center text-slate-400 mt-2", "Battery is {data.percentage}% charged" }
                div { class: "mt-2",
                    StatList { items: data.inflow_stats.clone() }
                }
            }

            // Energy source & health
            GlowCard { glow: CYAN,
                div { class: "flex justify-end items-center gap-2 mb-2",
                    h3 { class: "text-lg font-semibold", "Energy Source & Health" }
                    span { class: "text-[#00e0ff]", Icon { kind: IconKind::BatteryFull, class: "w-6 h-6" } }
                }
                div { class: "flex flex-col justify-between mt-12",
                    div { class: "w-full mb-4",
                        EnergySplit { green: data.energy_source.green, grid: data.energy_source.grid }
                    }
                    div { class: "mt-8",
                        StatList { items: data.health_metrics.clone() }
                    }
                }
            }
        }
    }
}
