use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;

use crate::utils::format::format_local_time;

/// `Last updated: hh:mm AM/PM`. Without an instant, reports a refresh 15 minutes ago.
#[allow(non_snake_case)]
#[component]
pub fn LastUpdated(#[props(default)] updated_at: Option<DateTime<Utc>>) -> Element {
    let at = use_signal(move || updated_at.unwrap_or_else(|| Utc::now() - Duration::minutes(15)));

    // Force one rerender after hydration so the browser's zone applies
    let mut hydrated = use_signal(|| false);
    use_effect(move || {
        hydrated.set(true);
    });

    let ts = *at.read();
    let shown = if *hydrated.read() {
        format_local_time(ts)
    } else {
        String::new()
    };

    rsx! {
        time { class: "text-xs text-slate-400", datetime: "{ts.to_rfc3339()}",
            "Last updated: {shown}"
        }
    }
}
