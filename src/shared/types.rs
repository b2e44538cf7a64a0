use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::icons::IconKind;

/// One hourly day-ahead price sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarPoint {
    pub hour: u8,   // 0..=23
    pub value: f64, // kW
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarForecast {
    pub forecast: Vec<SolarPoint>,
    pub actual: Vec<SolarPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyCategory {
    pub label: String,
    pub value: f64, // MW
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyMix {
    #[serde(rename = "greenFactor")]
    pub green_factor: f64,
    pub usage: Vec<EnergyCategory>,
    pub supply: Vec<EnergyCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCardData {
    pub title: String,
    pub icon: IconKind,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySource {
    pub green: f64,
    pub grid: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryOverview {
    pub capacity_kw: f64,
    pub percentage: i32,
    pub inflow_stats: Vec<LabeledValue>,
    pub energy_source: EnergySource,
    pub health_metrics: Vec<LabeledValue>,
}

/// Savings/revenue card: headline figure plus a small trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendCard {
    pub title: String,
    pub icon: IconKind,
    pub value: String,
    pub subtext: String,
    pub series: Vec<f64>,
    pub glow: String,
    pub extra_metrics: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SufficiencyDay {
    pub date: String, // e.g. "Apr 05"
    pub solar: f64,   // % solar contribution
    pub grid: f64,    // % grid contribution
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SufficiencyCard {
    pub title: String,
    pub icon: IconKind,
    pub value: String,
    pub subtext: String,
    pub days: Vec<SufficiencyDay>,
    pub glow: String,
    pub metrics: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub min_temp: String,
    pub max_temp: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Humidity {
    pub morning: String,
    pub evening: String,
}

/// What the weather box and its details modal need; trimmed from the API payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub today: ForecastDay,
    pub tomorrow: ForecastDay,
    pub astronomy: Astronomy,
    pub humidity: Humidity,
}
