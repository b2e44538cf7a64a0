use dioxus::prelude::*;

use crate::components::{GlowCard, Icon};
use crate::shared::icons::IconKind;
use crate::shared::mock::CO2_SAVED_TONS;
use crate::utils::format::trim_number;

#[allow(non_snake_case)]
#[component]
pub fn Co2SavedBox(#[props(default = CO2_SAVED_TONS)] tons: f64) -> Element {
    rsx! {
        GlowCard { glow: "#7bff62", class: "flex flex-col justify-center gap-1 text-white",
            div { class: "flex items-center gap-2 text-sm",
                span { class: "text-[#7bff62]", Icon { kind: IconKind::Leaf } }
                "CO₂ Saved"
            }
            div { class: "text-2xl font-bold", "{trim_number(tons)} tons" }
            p { class: "text-xs text-slate-400", "Compared to baseline usage" }
        }
    }
}
