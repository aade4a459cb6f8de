use serde::{Deserialize, Serialize};
use std::fmt;

use crate::icon::{Icon, resolve_icon};

/// Current conditions for one city, built from a successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    description: String,
    temperature_c: f64,
    humidity_pct: u8,
    wind_speed_mps: f64,
    icon_code: Option<String>,
}

impl WeatherRecord {
    pub fn new(
        description: impl Into<String>,
        temperature_c: f64,
        humidity_pct: u8,
        wind_speed_mps: f64,
        icon_code: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            temperature_c,
            humidity_pct,
            wind_speed_mps,
            icon_code,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn humidity_pct(&self) -> u8 {
        self.humidity_pct
    }

    pub fn wind_speed_mps(&self) -> f64 {
        self.wind_speed_mps
    }

    pub fn icon_code(&self) -> Option<&str> {
        self.icon_code.as_deref()
    }

    pub fn icon(&self) -> Icon {
        resolve_icon(self.icon_code())
    }

    /// Human-readable card lines for this record.
    pub fn card(&self) -> WeatherCard<'_> {
        WeatherCard { record: self }
    }
}

/// Display adapter laying a record out as the weather card.
#[derive(Debug, Clone, Copy)]
pub struct WeatherCard<'a> {
    record: &'a WeatherRecord,
}

impl fmt::Display for WeatherCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        writeln!(f, "Weather: {}", capitalize_first(&r.description))?;
        writeln!(f, "Temperature: {:.2}°C", r.temperature_c)?;
        writeln!(f, "Humidity: {}%", r.humidity_pct)?;
        write!(f, "Wind Speed: {} m/s", r.wind_speed_mps)
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
