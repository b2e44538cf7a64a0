use dioxus::prelude::*;

use crate::api::weather_report;
use crate::components::{GlowCard, Icon, WeatherModal};
use crate::shared::types::ForecastDay;
use crate::shared::weather::{rounded_temp, weather_icon};

#[allow(non_snake_case)]
#[component]
fn DayRow(label: String, day: ForecastDay) -> Element {
    rsx! {
        div { class: "flex items-center justify-between gap-2",
            span { class: "text-xs text-slate-400", "{label}" }
            span { class: "flex items-center gap-1 text-lg font-bold",
                span { class: "text-[#ffd700]", Icon { kind: weather_icon(&day.description), class: "w-5 h-5" } }
                "{rounded_temp(&day.max_temp)}°C"
            }
        }
    }
}

/// Today/tomorrow highs; opens the full report on click. Empty until the report arrives.
#[allow(non_snake_case)]
#[component]
pub fn WeatherBox() -> Element {
    // Client-only fetch so a slow provider never holds up the page
    let report = use_resource(|| async move { weather_report().await.ok().flatten() });
    let report_v = report.read_unchecked();
    let mut open = use_signal(|| false);

    let Some(Some(r)) = &*report_v else {
        return rsx! { Fragment {} };
    };

    rsx! {
        div { class: "cursor-pointer h-full", onclick: move |_| open.set(true),
            GlowCard { glow: "#ffd700", class: "flex flex-col justify-center gap-2 text-white",
                DayRow { label: "Today", day: r.today.clone() }
                DayRow { label: "Tomorrow", day: r.tomorrow.clone() }
            }
        }
        if open() {
            WeatherModal { report: r.clone(), on_close: move |_| open.set(false) }
        }
    }
}
