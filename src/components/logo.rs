use dioxus::prelude::*;

use crate::components::GlowCard;

#[allow(non_snake_case)]
#[component]
pub fn Logo(
    src: Asset,
    #[props(into, default = "Site logo".to_string())] alt: String,
    #[props(default)] priority: bool,
) -> Element {
    let loading = if priority { "eager" } else { "lazy" };
    rsx! {
        GlowCard { class: "flex items-center justify-center",
            img { class: "max-h-20 w-auto object-contain", src: src, alt: "{alt}", loading: loading }
        }
    }
}
