pub mod battery_overview;
pub mod client_now;
pub mod co2_saved;
pub mod date_time_box;
pub mod gauge;
pub mod glow_card;
pub mod green_factor_chart;
pub mod icon;
pub mod last_updated;
pub mod logo;
pub mod placeholder;
pub mod price_chart;
pub mod savings_revenue;
pub mod self_sufficiency;
pub mod solar_forecast_chart;
pub mod status_overview;
pub mod weather_box;
pub mod weather_modal;

pub use battery_overview::BatteryOverviewSection;
pub use client_now::use_client_now;
pub use co2_saved::Co2SavedBox;
pub use date_time_box::DateTimeBox;
pub use gauge::Gauge;
pub use glow_card::GlowCard;
pub use green_factor_chart::GreenFactorChart;
pub use icon::Icon;
pub use last_updated::LastUpdated;
pub use logo::Logo;
pub use placeholder::ChartPlaceholder;
pub use price_chart::DayAheadPriceChart;
pub use savings_revenue::SavingsAndRevenueSection;
pub use self_sufficiency::SelfSufficiencySection;
pub use solar_forecast_chart::SolarForecastChart;
pub use status_overview::StatusOverviewSection;
pub use weather_box::WeatherBox;
pub use weather_modal::WeatherModal;
