use serde::{Deserialize, Deserializer};

use crate::shared::icons::IconKind;
use crate::shared::types::{Astronomy, ForecastDay, Humidity, WeatherReport};

// Wire format of the weather API. The provider sends most readings as strings
// but occasionally as bare numbers, so both are accepted.

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    pub weather: WeatherBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherBody {
    pub current: CurrentWeather,
    pub astronomical: AstronomicalWire,
    pub forecast: Vec<ForecastDayWire>,
}

// Only the parts the dashboard shows are decoded; anything else in
// `current` (temperature, rainfall, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub humidity: HumidityWire,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HumidityWire {
    #[serde(deserialize_with = "string_or_number")]
    pub morning: String,
    #[serde(deserialize_with = "string_or_number")]
    pub evening: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AstronomicalWire {
    pub sunset: String,
    pub sunrise: String,
    pub moonset: String,
    pub moonrise: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDayWire {
    pub date: String,
    #[serde(deserialize_with = "string_or_number")]
    pub min_temp: String,
    #[serde(deserialize_with = "string_or_number")]
    pub max_temp: String,
    pub description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Num(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(v: StringOrNumber) -> Self {
        match v {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Num(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(d).map(String::from)
}

impl From<ForecastDayWire> for ForecastDay {
    fn from(w: ForecastDayWire) -> Self {
        ForecastDay {
            date: w.date,
            min_temp: w.min_temp,
            max_temp: w.max_temp,
            description: w.description,
        }
    }
}

impl WeatherResponse {
    /// Keep what the dashboard shows: the first two forecast days, sun/moon
    /// times and humidity. `None` when the forecast has fewer than two days.
    pub fn into_report(self) -> Option<WeatherReport> {
        let mut days = self.weather.forecast.into_iter();
        let today = days.next()?.into();
        let tomorrow = days.next()?.into();
        let a = self.weather.astronomical;
        let h = self.weather.current.humidity;
        Some(WeatherReport {
            city: self.city,
            today,
            tomorrow,
            astronomy: Astronomy {
                sunrise: a.sunrise,
                sunset: a.sunset,
                moonrise: a.moonrise,
                moonset: a.moonset,
            },
            humidity: Humidity {
                morning: h.morning,
                evening: h.evening,
            },
        })
    }
}

/// First keyword found in the (lower-cased) description wins.
const WEATHER_ICONS: &[(&str, IconKind)] = &[("thunder", IconKind::Zap), ("cloud", IconKind::CloudSun)];

pub fn weather_icon(description: &str) -> IconKind {
    let d = description.to_lowercase();
    WEATHER_ICONS
        .iter()
        .find(|(kw, _)| d.contains(kw))
        .map(|(_, icon)| *icon)
        .unwrap_or(IconKind::Sun)
}

/// Details row for one forecast day; readings are shown as sent.
pub fn temperature_range(day: &ForecastDay) -> String {
    format!("Max: {}°C / Min: {}°C", day.max_temp, day.min_temp)
}

/// Morning and evening humidity rows. Only the morning reading carries a unit.
pub fn humidity_rows(h: &Humidity) -> [String; 2] {
    [
        format!("Morning Humidity: {}%", h.morning),
        format!("Evening Humidity: {}", h.evening),
    ]
}

/// `"34.6"` -> `"35"`; anything unparsable is shown as-is.
pub fn rounded_temp(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(v) => format!("{}", v.round() as i64),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "city": "Delhi",
        "weather": {
            "current": {
                "temperature": {
                    "max": { "value": "38.2", "departure": "1.1" },
                    "min": { "value": 27, "departure": "-0.4" }
                },
                "rainfall": null,
                "humidity": { "morning": "62", "evening": 41 }
            },
            "astronomical": {
                "sunset": "19:05",
                "sunrise": "05:24",
                "moonset": "02:11",
                "moonrise": "14:48"
            },
            "forecast": [
                { "date": "2025-04-05", "min_temp": "27", "max_temp": "38.6", "description": "Partly cloudy sky" },
                { "date": "2025-04-06", "min_temp": 26, "max_temp": 37, "description": "Thunderstorm with rain" },
                { "date": "2025-04-07", "min_temp": "25", "max_temp": "36", "description": "Mainly clear sky" }
            ]
        }
    }"#;

    #[test]
    fn decodes_and_trims_report() {
        let resp: WeatherResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.weather.current.humidity.morning, "62");
        let report = resp.into_report().unwrap();
        assert_eq!(report.city, "Delhi");
        assert_eq!(report.today.max_temp, "38.6");
        assert_eq!(report.tomorrow.min_temp, "26");
        assert_eq!(report.humidity.evening, "41");
        assert_eq!(report.astronomy.moonrise, "14:48");
    }

    #[test]
    fn decodes_body_with_only_displayed_fields() {
        let body = r#"{
            "city": "Delhi",
            "weather": {
                "current": { "humidity": { "morning": 70, "evening": "55" } },
                "astronomical": { "sunset": "19:05", "sunrise": "05:24", "moonset": "02:11", "moonrise": "14:48" },
                "forecast": [
                    { "date": "2025-04-05", "min_temp": 27, "max_temp": 38, "description": "Clear sky" },
                    { "date": "2025-04-06", "min_temp": "26", "max_temp": "37", "description": "Haze" }
                ]
            }
        }"#;
        let report = serde_json::from_str::<WeatherResponse>(body)
            .unwrap()
            .into_report()
            .unwrap();
        assert_eq!(report.humidity.morning, "70");
        assert_eq!(report.humidity.evening, "55");
        assert_eq!(report.today.max_temp, "38");
        assert_eq!(report.tomorrow.description, "Haze");
    }

    #[test]
    fn short_forecast_has_no_report() {
        let mut resp: WeatherResponse = serde_json::from_str(SAMPLE).unwrap();
        resp.weather.forecast.truncate(1);
        assert!(resp.into_report().is_none());
    }

    #[test]
    fn missing_section_fails_to_decode() {
        let bad = r#"{ "city": "Delhi", "weather": { "forecast": [] } }"#;
        assert!(serde_json::from_str::<WeatherResponse>(bad).is_err());
    }

    #[test]
    fn icon_lookup_by_keyword() {
        assert_eq!(weather_icon("Thunderstorm with rain"), IconKind::Zap);
        assert_eq!(weather_icon("Partly CLOUDY sky"), IconKind::CloudSun);
        // thunder is checked before cloud
        assert_eq!(weather_icon("cloudy with thunder"), IconKind::Zap);
        assert_eq!(weather_icon("Mainly clear sky"), IconKind::Sun);
        assert_eq!(weather_icon(""), IconKind::Sun);
    }

    #[test]
    fn modal_rows_keep_raw_readings() {
        let report = serde_json::from_str::<WeatherResponse>(SAMPLE)
            .unwrap()
            .into_report()
            .unwrap();
        assert_eq!(temperature_range(&report.today), "Max: 38.6°C / Min: 27°C");
        assert_eq!(
            humidity_rows(&report.humidity),
            ["Morning Humidity: 62%".to_string(), "Evening Humidity: 41".to_string()]
        );
    }

    #[test]
    fn temps_round_to_whole_degrees() {
        assert_eq!(rounded_temp("38.6"), "39");
        assert_eq!(rounded_temp(" 27 "), "27");
        assert_eq!(rounded_temp("n/a"), "n/a");
    }
}
