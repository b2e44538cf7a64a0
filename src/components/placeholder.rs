use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn ChartPlaceholder(#[props(into, default = "h-48".to_string())] class: String) -> Element {
    rsx! {
        div { class: "w-full {class} flex items-center justify-center text-sm text-slate-400", "Loading..." }
    }
}
