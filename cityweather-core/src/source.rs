use crate::{Config, FetchError, WeatherRecord, source::openweather::OpenWeatherClient};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use tracing::warn;

pub mod openweather;

/// Anything that can produce current conditions for a city name.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}

/// Construct the OpenWeather-backed source from config.
pub fn source_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherSource>> {
    let client = OpenWeatherClient::from_config(config)?;
    Ok(Arc::new(client))
}

/// Fetch once and collapse every failure into `None`.
///
/// The failure is logged at WARN so it is not lost, but callers only see
/// "have a record" or "don't".
pub async fn fetch_weather<S>(source: &S, city: &str) -> Option<WeatherRecord>
where
    S: WeatherSource + ?Sized,
{
    match source.current_weather(city).await {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(city, kind = ?err.kind(), error = %err, "weather fetch failed");
            None
        }
    }
}
