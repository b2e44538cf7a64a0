use dioxus::prelude::*;

use crate::api::day_ahead_prices;
use crate::components::{use_client_now, ChartPlaceholder};
use crate::shared::partition::{partition_prices, reference_instant};
use crate::shared::site::price_reference_shift;
use crate::shared::types::PricePoint;
use crate::utils::chart::{area_path, category_positions, extent, line_path, padded_extent, segments, ticks, LinearScale};
use crate::utils::format::{format_euro, site_day_time_label, site_hour_label};

const LINE: &str = "#FFA500";
const MARKER: &str = "#FFD700";

/// Day-ahead prices. Renders `data` when given, otherwise a fresh mock series from the server.
#[allow(non_snake_case)]
#[component]
pub fn DayAheadPriceChart(#[props(default)] data: Option<Vec<PricePoint>>, #[props(default)] is_loading: bool) -> Element {
    if is_loading {
        return rsx! { ChartPlaceholder {} };
    }
    rsx! {
        div { class: "font-semibold text-xs text-white mb-2", "Day Ahead Prices" }
        {
            match &data {
                Some(points) => rsx! { PriceChartView { points: points.clone() } },
                None => rsx! { MockPriceChart {} },
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn MockPriceChart() -> Element {
    let prices = use_server_future(day_ahead_prices)?;
    let prices_v = prices.read_unchecked();
    match &*prices_v {
        Some(Ok(points)) => rsx! { PriceChartView { points: points.clone() } },
        Some(Err(_e)) => rsx! {
            div { class: "text-center text-sm text-slate-300", "Failed to load prices." }
        },
        None => rsx! { ChartPlaceholder {} },
    }
}

#[allow(non_snake_case)]
#[component]
fn PriceChartView(points: Vec<PricePoint>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let Some(now) = use_client_now() else {
        return rsx! { ChartPlaceholder {} };
    };

    // Split around "now" on the shared index axis
    let reference = reference_instant(now, price_reference_shift());
    let split = partition_prices(&points, reference);
    let past = split.aligned_past();
    let future = split.aligned_future();

    // Visual params
    let (width, height) = (520.0f32, 200.0f32);
    let (left, right, top, bottom) = (44.0f32, 12.0f32, 20.0f32, 24.0f32);
    let base = height - bottom;
    let xs = category_positions(points.len(), left, width - right, false);
    let (lo, hi) = extent(points.iter().map(|p| p.price as f32)).unwrap_or((0.0, 1.0));
    let (lo, hi) = padded_extent(lo, hi, 5.0);
    let y = LinearScale::new((lo, hi), (base, top));
    let y_ticks = ticks(lo, hi, 5);
    let label_every = points.len().div_ceil(8).max(1);
    let step = if points.len() > 1 { xs[1] - xs[0] } else { width - left - right };

    let to_xy = |run: &[(usize, f64)]| -> Vec<(f32, f32)> {
        run.iter().map(|(i, v)| (xs[*i], y.map(*v as f32))).collect()
    };
    let past_runs: Vec<Vec<(f32, f32)>> = segments(&past).iter().map(|r| to_xy(r)).collect();
    let future_runs: Vec<Vec<(f32, f32)>> = segments(&future).iter().map(|r| to_xy(r)).collect();
    let view_box = format!("0 0 {width} {height}");

    rsx! {
        div { class: "w-full",
            svg { class: "block w-full", view_box: "{view_box}", height: "200",
                // Grid lines and y labels
                for (i, t) in y_ticks.iter().enumerate() {
                    g { key: "y-{i}",
                        line { x1: "{left}", y1: "{y.map(*t)}", x2: "{width - right}", y2: "{y.map(*t)}", stroke: "#333", stroke_width: "1" }
                        text { x: "{left - 6.0}", y: "{y.map(*t) + 3.0}", fill: "#ccc", font_size: "10", text_anchor: "end", "{format_euro(*t as f64)}" }
                    }
                }
                line { x1: "{left}", y1: "{base}", x2: "{width - right}", y2: "{base}", stroke: "#888", stroke_width: "1" }
                // Past: solid with a light fill
                for (i, run) in past_runs.iter().enumerate() {
                    g { key: "past-{i}",
                        path { d: "{area_path(run, base, false)}", fill: "rgba(255, 215, 0, 0.15)" }
                        path { d: "{line_path(run)}", fill: "none", stroke: LINE, stroke_width: "2" }
                    }
                }
                // Future: dashed with markers
                for (i, run) in future_runs.iter().enumerate() {
                    g { key: "future-{i}",
                        path { d: "{area_path(run, base, false)}", fill: "rgba(255, 165, 0, 0.1)" }
                        path { d: "{line_path(run)}", fill: "none", stroke: LINE, stroke_width: "2", stroke_dasharray: "6 4" }
                        for (j, (px, py)) in run.iter().enumerate() {
                            circle { key: "{j}", cx: "{px}", cy: "{py}", r: "3", fill: MARKER }
                        }
                    }
                }
                // x labels
                {
                    points.iter().enumerate().filter(|(i, _)| i % label_every == 0).map(|(i, p)| {
                        rsx! {
                            text { key: "x-{i}", x: "{xs[i]}", y: "{base + 14.0}", fill: "#ccc", font_size: "10", text_anchor: "middle", "{site_hour_label(p.timestamp)}" }
                        }
                    })
                }
                // Hover columns
                {
                    xs.iter().enumerate().map(|(i, x)| {
                        rsx! {
                            rect {
                                key: "hit-{i}", x: "{x - step / 2.0}", y: "{top}", width: "{step}", height: "{base - top}", fill: "transparent",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }
                        }
                    })
                }
                {
                    match *hovered.read() {
                        Some(i) if i < points.len() => {
                            let p = &points[i];
                            let x = xs[i];
                            let value = past[i].or(future[i]);
                            let date_label = site_day_time_label(p.timestamp);
                            let value_label = match value {
                                Some(v) => format!("Price: {}", format_euro(v)),
                                None => "Price: -".to_string(),
                            };
                            let cw = 6.5f32; // approx char width at 11px
                            let tip_w = (date_label.chars().count().max(value_label.chars().count()) as f32) * cw + 16.0;
                            let tip_h = 36.0f32;
                            let tip_x = (x + 8.0).min(width - right - tip_w).max(left);
                            let tip_y = top;
                            rsx! { g { key: "tooltip",
                                line { x1: "{x}", y1: "{top}", x2: "{x}", y2: "{base}", stroke: "#888", stroke_width: "1", stroke_dasharray: "3 3" }
                                rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 15.0}", fill: "#cbd5e1", font_size: "11", "{date_label}" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 29.0}", fill: "#e2e8f0", font_size: "11", "{value_label}" }
                            }}
                        }
                        _ => rsx! { Fragment {} },
                    }
                }
            }
        }
    }
}
