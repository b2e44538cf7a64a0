use dioxus::prelude::*;

use crate::api::solar_forecast;
use crate::components::{use_client_now, ChartPlaceholder};
use crate::shared::mock::site_hour;
use crate::shared::types::{SolarForecast, SolarPoint};
use crate::utils::chart::{area_path, category_positions, padded_extent, smooth_path, ticks, LinearScale};
use crate::utils::format::{format_watts, hour_label, site_hour_minute};

struct Series {
    name: &'static str,
    line: &'static str,
    fill: &'static str,
}

const ESTIMATION: Series = Series {
    name: "Estimation",
    line: "#32CD32",
    fill: "rgba(0, 255, 0, 0.3)",
};
const REALISATION: Series = Series {
    name: "Realisation",
    line: "#FFA500",
    fill: "rgba(255, 165, 0, 0.4)",
};

/// kW samples to whole watts.
fn to_watts(points: &[SolarPoint]) -> Vec<f64> {
    points.iter().map(|p| (p.value * 1000.0).round()).collect()
}

/// Estimated vs realised solar output for today, with a marker at the current hour.
#[allow(non_snake_case)]
#[component]
pub fn SolarForecastChart(#[props(default)] data: Option<SolarForecast>, #[props(default)] is_loading: bool) -> Element {
    if is_loading {
        return rsx! { ChartPlaceholder { class: "h-60" } };
    }
    match data {
        Some(data) => rsx! { SolarChartView { data } },
        None => rsx! { MockSolarChart {} },
    }
}

#[allow(non_snake_case)]
#[component]
fn MockSolarChart() -> Element {
    let forecast = use_server_future(solar_forecast)?;
    let forecast_v = forecast.read_unchecked();
    match &*forecast_v {
        Some(Ok(data)) => rsx! { SolarChartView { data: data.clone() } },
        Some(Err(_e)) => rsx! {
            div { class: "text-center text-sm text-slate-300", "Failed to load solar forecast." }
        },
        None => rsx! { ChartPlaceholder { class: "h-60" } },
    }
}

#[allow(non_snake_case)]
#[component]
fn SolarChartView(data: SolarForecast) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let Some(now) = use_client_now() else {
        return rsx! { ChartPlaceholder { class: "h-60" } };
    };
    let current_hour = site_hour(now);

    let hours: Vec<String> = data.forecast.iter().map(|p| hour_label(p.hour as u32)).collect();
    let forecast_w = to_watts(&data.forecast);
    let actual_w = to_watts(&data.actual);

    // Visual params
    let (width, height) = (520.0f32, 260.0f32);
    let (left, right, top, bottom) = (40.0f32, 20.0f32, 60.0f32, 30.0f32);
    let base = height - bottom;
    let xs = category_positions(hours.len(), left, width - right, true);
    let max = forecast_w.iter().chain(actual_w.iter()).cloned().fold(0.0f64, f64::max) as f32;
    let (lo, hi) = padded_extent(0.0, max, 1000.0);
    let y = LinearScale::new((lo, hi), (base, top));
    let y_ticks = ticks(lo, hi, ((hi - lo) / 1000.0) as usize + 1);
    let band = if hours.is_empty() { 0.0 } else { (width - left - right) / hours.len() as f32 };

    let series: Vec<(&Series, Vec<(f32, f32)>)> = [(&ESTIMATION, &forecast_w), (&REALISATION, &actual_w)]
        .into_iter()
        .map(|(s, values)| {
            let pts = xs.iter().zip(values.iter()).map(|(x, v)| (*x, y.map(*v as f32))).collect();
            (s, pts)
        })
        .collect();
    let marker_x = hours
        .iter()
        .position(|h| *h == hour_label(current_hour))
        .map(|i| xs[i]);
    let title = format!("SOLAR POWER \u{00a0}\u{00a0}\u{00a0} Today - {}", site_hour_minute(now));
    let view_box = format!("0 0 {width} {height}");

    rsx! {
        div { class: "w-full",
            svg { class: "block w-full", view_box: "{view_box}", height: "260",
                text { x: "10", y: "17", fill: "#fff", font_size: "12", font_weight: "bold", "{title}" }
                // Legend
                for (i, s) in [&ESTIMATION, &REALISATION].iter().enumerate() {
                    g { key: "legend-{i}",
                        rect { x: "{width - 170.0 + i as f32 * 85.0}", y: "8", width: "14", height: "8", rx: "2", fill: "{s.line}" }
                        text { x: "{width - 152.0 + i as f32 * 85.0}", y: "16", fill: "#aaa", font_size: "10", "{s.name}" }
                    }
                }
                text { x: "{left}", y: "{top - 10.0}", fill: "#999", font_size: "10", text_anchor: "middle", "X 1000" }
                for (i, t) in y_ticks.iter().enumerate() {
                    g { key: "y-{i}",
                        line { x1: "{left}", y1: "{y.map(*t)}", x2: "{width - right}", y2: "{y.map(*t)}", stroke: "#333", stroke_width: "1" }
                        text { x: "{left - 6.0}", y: "{y.map(*t) + 3.0}", fill: "#999", font_size: "10", text_anchor: "end", "{t / 1000.0:.1}" }
                    }
                }
                line { x1: "{left}", y1: "{base}", x2: "{width - right}", y2: "{base}", stroke: "#555", stroke_width: "1" }
                for (i, (s, pts)) in series.iter().enumerate() {
                    g { key: "series-{i}",
                        path { d: "{area_path(pts, base, true)}", fill: "{s.fill}" }
                        path { d: "{smooth_path(pts)}", fill: "none", stroke: "{s.line}", stroke_width: "2" }
                    }
                }
                {
                    hours.iter().enumerate().filter(|(i, _)| i % 3 == 0).map(|(i, h)| {
                        rsx! {
                            text { key: "x-{i}", x: "{xs[i]}", y: "{base + 14.0}", fill: "#999", font_size: "10", text_anchor: "middle", "{h}" }
                        }
                    })
                }
                if let Some(mx) = marker_x {
                    line { x1: "{mx}", y1: "{top}", x2: "{mx}", y2: "{base}", stroke: "#fff", stroke_width: "1" }
                    text { x: "{mx + 4.0}", y: "{top + 10.0}", fill: "#fff", font_size: "10", "{hour_label(current_hour)}" }
                }
                {
                    xs.iter().enumerate().map(|(i, x)| {
                        rsx! {
                            rect {
                                key: "hit-{i}", x: "{x - band / 2.0}", y: "{top}", width: "{band}", height: "{base - top}", fill: "transparent",
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
                        Some(i) if i < hours.len() => {
                            let x = xs[i];
                            let rows = [
                                format!("{}: {}", ESTIMATION.name, format_watts(forecast_w.get(i).copied().unwrap_or(0.0))),
                                format!("{}: {}", REALISATION.name, format_watts(actual_w.get(i).copied().unwrap_or(0.0))),
                            ];
                            let tip_w = 150.0f32;
                            let tip_x = if x + 8.0 + tip_w > width - right { x - 8.0 - tip_w } else { x + 8.0 };
                            rsx! { g { key: "tooltip",
                                line { x1: "{x}", y1: "{top}", x2: "{x}", y2: "{base}", stroke: "#666", stroke_width: "1" }
                                rect { x: "{tip_x}", y: "{top}", width: "{tip_w}", height: "52", rx: "6", fill: "#222", stroke: "#333", stroke_width: "1" }
                                text { x: "{tip_x + 8.0}", y: "{top + 15.0}", fill: "#fff", font_size: "11", font_weight: "bold", "{hours[i]}" }
                                text { x: "{tip_x + 8.0}", y: "{top + 30.0}", fill: "#fff", font_size: "11", "{rows[0]}" }
                                text { x: "{tip_x + 8.0}", y: "{top + 44.0}", fill: "#fff", font_size: "11", "{rows[1]}" }
                            }}
                        }
                        _ => rsx! { Fragment {} },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilowatts_round_to_watts() {
        let pts = [
            SolarPoint { hour: 0, value: 0.0 },
            SolarPoint { hour: 1, value: 2.8804 },
        ];
        assert_eq!(to_watts(&pts), vec![0.0, 2880.0]);
    }
}
