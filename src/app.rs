use dioxus::prelude::*;

use crate::components::{
    BatteryOverviewSection, Co2SavedBox, DateTimeBox, DayAheadPriceChart, GlowCard, GreenFactorChart, LastUpdated, Logo,
    SavingsAndRevenueSection, SelfSufficiencySection, SolarForecastChart, StatusOverviewSection, WeatherBox,
};
use crate::{FAVICON, LOGO, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Site Energy Dashboard" }
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        div { class: "min-h-screen bg-slate-950 text-slate-100 p-4 space-y-4",
            header { class: "flex items-center justify-between",
                h1 { class: "text-lg font-semibold tracking-tight text-slate-200", "Energy Dashboard" }
                LastUpdated {}
            }
            Dashboard {}
        }
    }
}

/// Three columns on an 8-column grid: 2 / 3 / 3.
#[allow(non_snake_case)]
#[component]
fn Dashboard() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-8 gap-4",
            // Generation and mix
            section { class: "md:col-span-2 grid auto-rows-min gap-4",
                Logo { src: LOGO, alt: "Site logo", priority: true }
                GlowCard { glow: "#32CD32", SolarForecastChart {} }
                GlowCard { glow: "#00c49a", GreenFactorChart {} }
            }
            // Site state
            section { class: "md:col-span-3 grid auto-rows-min gap-4",
                div { class: "grid grid-cols-3 gap-4",
                    DateTimeBox {}
                    WeatherBox {}
                    Co2SavedBox {}
                }
                StatusOverviewSection {}
                BatteryOverviewSection {}
            }
            // Money
            section { class: "md:col-span-3 grid auto-rows-min gap-4",
                GlowCard { glow: "#FFA500", DayAheadPriceChart {} }
                SavingsAndRevenueSection {}
                SelfSufficiencySection {}
            }
        }
    }
}
