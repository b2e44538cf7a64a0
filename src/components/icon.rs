use dioxus::prelude::*;

use crate::shared::icons::IconKind;

#[allow(non_snake_case)]
#[component]
pub fn Icon(kind: IconKind, #[props(into, default = "w-5 h-5".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for (i, d) in kind.paths().iter().enumerate() {
                path { key: "{i}", d: "{d}" }
            }
        }
    }
}
