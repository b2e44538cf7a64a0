use dioxus::prelude::*;

use crate::shared::types::{PricePoint, SolarForecast, WeatherReport};

// Random series are generated here rather than in the components so the
// server render and the hydrated client see the same numbers.

#[server(DayAheadPrices)]
pub async fn day_ahead_prices() -> Result<Vec<PricePoint>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::shared::mock;
        use chrono::Utc;

        let mut rng = rand::thread_rng();
        Ok(mock::day_ahead_prices(Utc::now(), &mut rng))
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(vec![])
    }
}

#[server(SolarForecastToday)]
pub async fn solar_forecast() -> Result<SolarForecast, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::shared::mock;
        use chrono::Utc;

        let mut rng = rand::thread_rng();
        Ok(mock::solar_forecast(mock::site_hour(Utc::now()), &mut rng))
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(SolarForecast {
            forecast: vec![],
            actual: vec![],
        })
    }
}

/// Weather for the site. Fetch failures are logged and reported as `None`;
/// the weather box simply stays hidden.
#[server(GetWeatherReport)]
pub async fn weather_report() -> Result<Option<WeatherReport>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::weather::fetch_weather;
        use dioxus::logger::tracing::error;

        match fetch_weather().await {
            Ok(report) => Ok(Some(report)),
            Err(e) => {
                error!("[api] weather_report: {e:#}");
                Ok(None)
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(None)
    }
}
