use chrono::{DateTime, Local, Utc};
use cityweather_core::{CityMatches, WeatherRecord};

pub const NOT_FOUND: &str = "Could not find ❗";

pub fn format_matches(matches: &CityMatches) -> String {
    match matches {
        CityMatches::Suggestions(cities) => {
            cities.iter().map(|city| format!("{city}\n")).collect()
        }
        CityMatches::NotFound => format!("{NOT_FOUND}\n"),
    }
}

pub fn format_record(record: &WeatherRecord, updated_at: Option<DateTime<Utc>>) -> String {
    let heading = match updated_at {
        Some(at) => format!("Today (updated {})", at.with_timezone(&Local).format("%H:%M")),
        None => "Today".to_string(),
    };

    format!("{heading}\n{}\n{}\n", record.icon().glyph(), record.card())
}
