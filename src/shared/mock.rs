//! Mock data for the dashboard.
//!
//! The random generators take the RNG and "now" as arguments so the server
//! functions can feed them real entropy while tests pin both down.

use chrono::{DateTime, Duration, DurationRound, Timelike, Utc};
use rand::Rng;

use crate::shared::icons::IconKind;
use crate::shared::types::{
    BatteryOverview, EnergyCategory, EnergyMix, EnergySource, LabeledValue, Metric, PricePoint,
    SolarForecast, SolarPoint, StatusCardData, SufficiencyCard, SufficiencyDay, TrendCard,
};

/// Hourly prices from 12h before the current hour to 36h after it (48 points), €30–40.
pub fn day_ahead_prices<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> Vec<PricePoint> {
    let hour = now.duration_trunc(Duration::hours(1)).unwrap_or(now);
    (-12..36)
        .map(|i| PricePoint {
            timestamp: hour + Duration::hours(i),
            price: (30.0 + rng.gen::<f64>() * 10.0).round(),
        })
        .collect()
}

/// 24 hourly points of a half-sine solar curve; `actual` tracks the forecast
/// up to `current_hour` and is zero afterwards.
pub fn solar_forecast<R: Rng>(current_hour: u32, rng: &mut R) -> SolarForecast {
    let forecast: Vec<SolarPoint> = (0..24u8)
        .map(|h| {
            let base = (std::f64::consts::PI * (h as f64 - 6.0) / 18.0).sin() * 3.0;
            SolarPoint {
                hour: h,
                value: (base + rng.gen::<f64>() * 0.2).max(0.0),
            }
        })
        .collect();

    let actual = forecast
        .iter()
        .map(|p| SolarPoint {
            hour: p.hour,
            value: if (p.hour as u32) <= current_hour {
                p.value * 0.9 + rng.gen::<f64>() * 0.2
            } else {
                0.0
            },
        })
        .collect();

    SolarForecast { forecast, actual }
}

/// Hour of day at the site for `now`.
pub fn site_hour(now: DateTime<Utc>) -> u32 {
    now.with_timezone(&crate::shared::site::site_offset()).hour()
}

fn category(label: &str, value: f64, color: &str) -> EnergyCategory {
    EnergyCategory {
        label: label.into(),
        value,
        color: color.into(),
    }
}

fn lv(label: &str, value: &str) -> LabeledValue {
    LabeledValue {
        label: label.into(),
        value: value.into(),
    }
}

fn metric(label: &str, value: &str, unit: Option<&str>) -> Metric {
    Metric {
        label: label.into(),
        value: value.into(),
        unit: unit.map(Into::into),
    }
}

pub fn energy_mix() -> EnergyMix {
    EnergyMix {
        green_factor: 18.0,
        usage: vec![
            category("Building", 124.0, "#FFD700"),
            category("DC Chargers", 78.0, "#FF8C00"),
            category("AC Chargers", 62.0, "#FF4500"),
            category("Battery Storage", 1.0, "#00FA9A"),
        ],
        supply: vec![
            category("Grid", 124.0, "#66CDAA"),
            category("Battery", 122.0, "#32CD32"),
            category("Solar", 68.0, "#FFD700"),
            category("Wind", 20.0, "#87CEEB"),
        ],
    }
}

pub fn battery_overview() -> BatteryOverview {
    BatteryOverview {
        capacity_kw: 125.0,
        percentage: 80,
        inflow_stats: vec![
            lv("Daily Inflow", "124 MWh"),
            lv("Month To Date", "2.4 GWh"),
            lv("Year To Date", "18.2 GWh"),
            lv("Avg Daily Inflow", "118 MWh"),
            lv("Peak Inflow (7D)", "142 MWh"),
        ],
        energy_source: EnergySource {
            green: 85.0,
            grid: 15.0,
        },
        health_metrics: vec![
            lv("Green Energy", "85%"),
            lv("Grid Energy", "15%"),
            lv("State of Health", "99.9%"),
            lv("Total Cycles Today", "0.3"),
            lv("Total Cycles Completed", "13"),
        ],
    }
}

pub fn status_cards() -> Vec<StatusCardData> {
    vec![
        StatusCardData {
            title: "Solar".into(),
            icon: IconKind::Sun,
            metrics: vec![
                metric("Output", "38.6", Some("kW")),
                metric("Load", "27.4", Some("kW")),
                metric("Utilization", "71", Some("%")),
                metric("Efficiency", "93", Some("%")),
            ],
        },
        StatusCardData {
            title: "Battery".into(),
            icon: IconKind::BatteryCharging,
            metrics: vec![
                metric("Capacity", "120", Some("kWh")),
                metric("SOC", "64", Some("%")),
                metric("SOH", "95", Some("%")),
                metric("Cycles Today", "3", None),
            ],
        },
        StatusCardData {
            title: "Grid".into(),
            icon: IconKind::PlugZap,
            metrics: vec![
                metric("Grid Import", "6.4", Some("kW")),
                metric("Grid Export", "2.1", Some("kW")),
                metric("Net Usage", "4.3", Some("kW")),
                metric("Frequency", "50.1", Some("Hz")),
            ],
        },
    ]
}

pub fn trend_cards() -> Vec<TrendCard> {
    vec![
        TrendCard {
            title: "Total Savings".into(),
            icon: IconKind::PiggyBank,
            value: "₹2.1 Cr".into(),
            subtext: "Saved vs Grid Cost".into(),
            series: vec![20.0, 22.0, 23.0, 28.0, 32.0, 34.0, 38.0],
            glow: "#7bff62".into(),
            extra_metrics: vec![
                lv("This Month", "₹18.5L"),
                lv("Monthly Avg", "₹15.2L"),
                lv("Best Day", "₹1.3L"),
            ],
        },
        TrendCard {
            title: "Revenue Generated".into(),
            icon: IconKind::HandCoins,
            value: "₹75.4 L".into(),
            subtext: "YTD Earnings".into(),
            series: vec![10.0, 14.0, 18.0, 22.0, 25.0, 26.0, 29.0],
            glow: "#e0ff62".into(),
            extra_metrics: vec![
                lv("This Month", "₹6.9L"),
                lv("Net Margin", "₹2.4L"),
                lv("Growth", "12.4%"),
            ],
        },
    ]
}

fn week(solar: [f64; 7]) -> Vec<SufficiencyDay> {
    solar
        .iter()
        .enumerate()
        .map(|(i, s)| SufficiencyDay {
            date: format!("Apr {:02}", i + 1),
            solar: *s,
            grid: 100.0 - s,
        })
        .collect()
}

pub fn sufficiency_cards() -> Vec<SufficiencyCard> {
    vec![
        SufficiencyCard {
            title: "Solar Self-Sufficiency".into(),
            icon: IconKind::PanelTop,
            value: "78%".into(),
            subtext: "Last 7 Days".into(),
            days: week([78.0, 72.0, 84.0, 65.0, 89.0, 90.0, 86.0]),
            glow: "#7bff62".into(),
            metrics: vec![
                lv("Avg Contribution", "78%"),
                lv("Total Solar Output", "314 kWh"),
                lv("Days > 80% Solar", "4"),
                lv("Worst Day", "65%"),
                lv("Avg Daily Output", "44.8 kWh"),
            ],
        },
        SufficiencyCard {
            title: "Load Self-Sufficiency".into(),
            icon: IconKind::Zap,
            value: "61%".into(),
            subtext: "Last 7 Days".into(),
            days: week([50.0, 40.0, 45.0, 55.0, 60.0, 65.0, 59.0]),
            glow: "#e0ff62".into(),
            metrics: vec![
                lv("Grid Independence Avg", "61%"),
                lv("Solar Contribution", "42%"),
                lv("Battery Assist", "19%"),
                lv("Grid Dependency", "39%"),
                lv("Peak Off-grid Coverage", "66%"),
            ],
        },
    ]
}

/// Tonnes of CO2 avoided compared to baseline usage.
pub const CO2_SAVED_TONS: f64 = 24.3;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn day_ahead_prices_cover_48_hours_around_now() {
        let now = Utc.with_ymd_and_hms(2025, 4, 5, 14, 37, 12).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let prices = day_ahead_prices(now, &mut rng);

        assert_eq!(prices.len(), 48);
        assert_eq!(
            prices[0].timestamp,
            Utc.with_ymd_and_hms(2025, 4, 5, 2, 0, 0).unwrap()
        );
        assert_eq!(
            prices[47].timestamp,
            Utc.with_ymd_and_hms(2025, 4, 7, 1, 0, 0).unwrap()
        );
        assert!(prices.windows(2).all(|w| w[1].timestamp - w[0].timestamp == Duration::hours(1)));
        assert!(prices.iter().all(|p| (30.0..=40.0).contains(&p.price) && p.price.fract() == 0.0));
    }

    #[test]
    fn solar_actual_stops_after_current_hour() {
        let mut rng = StdRng::seed_from_u64(1);
        let data = solar_forecast(10, &mut rng);

        assert_eq!(data.forecast.len(), 24);
        assert_eq!(data.actual.len(), 24);
        assert!(data.forecast.iter().all(|p| p.value >= 0.0));
        assert!(data.actual[11..].iter().all(|p| p.value == 0.0));
        assert!(data.actual[..=10].iter().all(|p| p.value >= 0.0));
        // Night hours have no meaningful forecast
        assert!(data.forecast[0].value <= 0.2);
        assert!(data.forecast[15].value > 2.0);
    }

    #[test]
    fn site_hour_uses_ist() {
        let now = Utc.with_ymd_and_hms(2025, 4, 5, 20, 45, 0).unwrap();
        assert_eq!(site_hour(now), 2);
    }

    #[test]
    fn sufficiency_days_sum_to_100() {
        for card in sufficiency_cards() {
            assert_eq!(card.days.len(), 7);
            assert!(card.days.iter().all(|d| d.solar + d.grid == 100.0));
        }
        assert_eq!(sufficiency_cards()[0].days[4].date, "Apr 05");
    }
}
