//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - The static city list and its autocomplete filter
//! - Icon resolution for OpenWeather condition codes
//! - The weather record model and the OpenWeather client
//! - Configuration & credentials handling
//! - A headless presentation model for the search-and-show screen
//!
//! It is used by `cityweather-cli`, but can also back other front ends.

pub mod cities;
pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod screen;
pub mod source;

pub use cities::{CITIES, CityMatches, POPULAR_CITIES, filter_cities};
pub use config::Config;
pub use error::{FailureKind, FetchError};
pub use icon::{Icon, resolve_icon};
pub use model::{WeatherCard, WeatherRecord};
pub use screen::{ScreenState, WeatherScreen};
pub use source::{
    WeatherSource, fetch_weather, openweather::OpenWeatherClient, source_from_config,
};
