use dioxus::prelude::*;

use crate::components::Icon;
use crate::shared::icons::IconKind;
use crate::shared::types::{ForecastDay, WeatherReport};
use crate::shared::weather::{humidity_rows, temperature_range, weather_icon};

#[allow(non_snake_case)]
#[component]
fn DayDetails(label: String, day: ForecastDay) -> Element {
    rsx! {
        div { class: "rounded-xl border border-slate-800 bg-slate-950/60 p-3 space-y-1",
            div { class: "flex items-center justify-between",
                span { class: "text-sm font-semibold", "{label}" }
                span { class: "text-[#ffd700]", Icon { kind: weather_icon(&day.description), class: "w-6 h-6" } }
            }
            div { class: "text-xs text-slate-400", "{day.date}" }
            div { class: "flex items-center gap-2 text-sm",
                Icon { kind: IconKind::Thermometer, class: "w-4 h-4" }
                "{temperature_range(&day)}"
            }
            div { class: "text-xs text-slate-300", "{day.description}" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn DetailRow(icon: IconKind, label: String, value: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-between text-sm",
            span { class: "flex items-center gap-2 text-slate-300",
                Icon { kind: icon, class: "w-4 h-4" }
                "{label}"
            }
            span { class: "text-white", "{value}" }
        }
    }
}

/// Full two-day report. Closing happens via the button or a click on the backdrop.
#[allow(non_snake_case)]
#[component]
pub fn WeatherModal(report: WeatherReport, on_close: EventHandler<()>) -> Element {
    let a = &report.astronomy;
    let humidity = humidity_rows(&report.humidity);
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/70",
            onclick: move |_| on_close.call(()),
            div {
                class: "w-full max-w-md rounded-2xl border border-slate-800 bg-slate-900 p-6 text-white shadow-xl space-y-4",
                onclick: move |e| e.stop_propagation(),
                div { class: "flex items-center justify-between",
                    h2 { class: "text-lg font-semibold tracking-wide", "{report.city.to_uppercase()}" }
                    button {
                        class: "text-slate-400 hover:text-white",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        Icon { kind: IconKind::Close }
                    }
                }
                div { class: "grid grid-cols-2 gap-3",
                    DayDetails { label: "Today", day: report.today.clone() }
                    DayDetails { label: "Tomorrow", day: report.tomorrow.clone() }
                }
                div { class: "space-y-2",
                    DetailRow { icon: IconKind::Sun, label: "Sunrise", value: a.sunrise.clone() }
                    DetailRow { icon: IconKind::Sun, label: "Sunset", value: a.sunset.clone() }
                    DetailRow { icon: IconKind::Moon, label: "Moonrise", value: a.moonrise.clone() }
                    DetailRow { icon: IconKind::Moon, label: "Moonset", value: a.moonset.clone() }
                    for (i, row) in humidity.iter().enumerate() {
                        div { key: "humidity-{i}", class: "flex items-center gap-2 text-sm text-slate-300",
                            span { class: "text-sky-400", Icon { kind: IconKind::Droplets, class: "w-4 h-4" } }
                            "{row}"
                        }
                    }
                }
            }
        }
    }
}
