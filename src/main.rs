use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
pub const LOGO: Asset = asset!("/assets/logo.svg");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        if let Err(e) = backend::init_tracing() {
            eprintln!("[tracing] failed to init: {e}");
        }

        let settings = &*backend::SETTINGS;
        if settings.weather_api_key.is_none() {
            dioxus::logger::tracing::warn!("[weather] WEATHER_API_KEY is not set; the weather box will stay empty");
        }
        dioxus::logger::tracing::info!(
            "[weather] using {} for {}",
            settings.weather_api_url,
            settings.weather_city
        );
    }
    dioxus::launch(app::App);
}
