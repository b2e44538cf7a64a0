use chrono::Utc;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{GlowCard, Icon};
use crate::shared::icons::IconKind;
use crate::utils::format::{site_clock, site_date_long};

const TICK_MS: u32 = 1_000;

/// One clock period on the renderer's own timer.
#[cfg(feature = "web")]
async fn tick() {
    gloo_timers::future::TimeoutFuture::new(TICK_MS).await;
}

#[cfg(all(not(feature = "web"), any(feature = "server", feature = "desktop", feature = "mobile")))]
async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(TICK_MS as u64)).await;
}

// No renderer, nothing to drive
#[cfg(not(any(feature = "web", feature = "server", feature = "desktop", feature = "mobile")))]
async fn tick() {
    std::future::pending::<()>().await;
}

/// Site-local date and a ticking clock.
#[allow(non_snake_case)]
#[component]
pub fn DateTimeBox() -> Element {
    let mut now = use_signal(Utc::now);

    // The server-rendered seconds never match the client's, so the clock
    // only shows once the client has taken over.
    let mut hydrated = use_signal(|| false);
    use_effect(move || {
        hydrated.set(true);
    });

    // The task belongs to this scope and is dropped with it
    use_future(move || async move {
        info!("[clock] ticking every {TICK_MS} ms");
        loop {
            tick().await;
            now.set(Utc::now());
        }
    });

    let current = *now.read();
    let date = site_date_long(current);
    let clock = if *hydrated.read() {
        site_clock(current)
    } else {
        "--:--:--".to_string()
    };

    rsx! {
        GlowCard { glow: "#00e0ff", class: "flex flex-col justify-center gap-3 text-white",
            div { class: "flex items-center gap-2 text-sm",
                span { class: "text-[#00e0ff]", Icon { kind: IconKind::Calendar } }
                span { "{date}" }
            }
            div { class: "flex items-center gap-2",
                span { class: "text-[#00e0ff]", Icon { kind: IconKind::Clock } }
                time { class: "text-2xl font-bold tabular-nums", "{clock}" }
            }
        }
    }
}

#[cfg(all(test, not(feature = "web"), any(feature = "server", feature = "desktop", feature = "mobile")))]
mod tests {
    use super::*;
    use tokio::time::{Duration, Instant};

    #[tokio::test(start_paused = true)]
    async fn tick_waits_one_period() {
        let start = Instant::now();
        tick().await;
        assert!(start.elapsed() >= Duration::from_millis(TICK_MS as u64));
    }

    #[tokio::test(start_paused = true)]
    async fn clock_keeps_ticking() {
        let start = Instant::now();
        for _ in 0..3 {
            tick().await;
        }
        assert_eq!(start.elapsed().as_secs(), 3);
    }
}
