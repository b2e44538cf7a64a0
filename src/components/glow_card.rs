use dioxus::prelude::*;

/// Dark card that lights up with a neon ring in `glow` on hover.
#[allow(non_snake_case)]
#[component]
pub fn GlowCard(
    #[props(into, default = "#7bff62".to_string())] glow: String,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let ring_style = format!("border:2px solid {glow};box-shadow:0 0 12px {glow},0 0 24px {glow}");
    rsx! {
        div { class: "relative group h-full transition-all duration-300 hover:scale-[1.01]",
            // Neon ring, only visible on hover
            div { class: "absolute inset-0 rounded-2xl opacity-0 group-hover:opacity-100 pointer-events-none transition-all duration-300", style: "{ring_style}" }
            div { class: "relative z-10 h-full rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-4 {class}",
                {children}
            }
        }
    }
}
