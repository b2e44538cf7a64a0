#![cfg(feature = "server")]
use once_cell::sync::Lazy;
use std::env;

use crate::shared::site::SITE_CITY;

pub const DEFAULT_WEATHER_API_URL: &str = "https://weather.indianapi.in";

/// Server settings, read once from the environment (and `.env`, if present).
pub static SETTINGS: Lazy<Settings> = Lazy::new(|| {
    dotenvy::dotenv().ok();
    Settings::from_lookup(|k| env::var(k).ok())
});

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub weather_api_url: String,
    pub weather_api_key: Option<String>,
    pub weather_city: String,
}

impl Settings {
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let non_empty = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            weather_api_url: non_empty("WEATHER_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_WEATHER_API_URL.to_string()),
            weather_api_key: non_empty("WEATHER_API_KEY"),
            weather_city: non_empty("WEATHER_CITY").unwrap_or_else(|| SITE_CITY.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let m: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| m.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let s = Settings::from_lookup(lookup(&[]));
        assert_eq!(s.weather_api_url, DEFAULT_WEATHER_API_URL);
        assert_eq!(s.weather_api_key, None);
        assert_eq!(s.weather_city, "Delhi");
    }

    #[test]
    fn reads_overrides_and_ignores_blank() {
        let s = Settings::from_lookup(lookup(&[
            ("WEATHER_API_URL", "http://127.0.0.1:9000/"),
            ("WEATHER_API_KEY", "  "),
            ("WEATHER_CITY", "Mumbai"),
        ]));
        assert_eq!(s.weather_api_url, "http://127.0.0.1:9000");
        assert_eq!(s.weather_api_key, None);
        assert_eq!(s.weather_city, "Mumbai");
    }
}
