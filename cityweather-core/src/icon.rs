/// Visual asset for an OpenWeather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ClearDay,
    ClearNight,
    FewCloudsDay,
    FewCloudsNight,
    ScatteredCloudsDay,
    ScatteredCloudsNight,
    BrokenCloudsDay,
    BrokenCloudsNight,
    ShowerRainDay,
    ShowerRainNight,
    RainDay,
    RainNight,
    ThunderstormDay,
    ThunderstormNight,
    SnowDay,
    SnowNight,
    MistDay,
    MistNight,
    Default,
}

impl Icon {
    pub const fn all() -> &'static [Icon] {
        &[
            Icon::ClearDay,
            Icon::ClearNight,
            Icon::FewCloudsDay,
            Icon::FewCloudsNight,
            Icon::ScatteredCloudsDay,
            Icon::ScatteredCloudsNight,
            Icon::BrokenCloudsDay,
            Icon::BrokenCloudsNight,
            Icon::ShowerRainDay,
            Icon::ShowerRainNight,
            Icon::RainDay,
            Icon::RainNight,
            Icon::ThunderstormDay,
            Icon::ThunderstormNight,
            Icon::SnowDay,
            Icon::SnowNight,
            Icon::MistDay,
            Icon::MistNight,
            Icon::Default,
        ]
    }

    /// Name of the bundled image asset.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Icon::ClearDay => "ic_01d",
            Icon::ClearNight => "ic_01n",
            Icon::FewCloudsDay => "ic_02d",
            Icon::FewCloudsNight => "ic_02n",
            Icon::ScatteredCloudsDay => "ic_03d",
            Icon::ScatteredCloudsNight => "ic_03n",
            Icon::BrokenCloudsDay => "ic_04d",
            Icon::BrokenCloudsNight => "ic_04n",
            Icon::ShowerRainDay => "ic_09d",
            Icon::ShowerRainNight => "ic_09n",
            Icon::RainDay => "ic_10d",
            Icon::RainNight => "ic_10n",
            Icon::ThunderstormDay => "ic_11d",
            Icon::ThunderstormNight => "ic_11n",
            Icon::SnowDay => "ic_13d",
            Icon::SnowNight => "ic_13n",
            Icon::MistDay => "ic_50d",
            Icon::MistNight => "ic_50n",
            Icon::Default => "default_weather",
        }
    }

    /// Terminal rendering. Day and night variants may share a glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::ClearDay => "☀️",
            Icon::ClearNight => "🌙",
            Icon::FewCloudsDay => "🌤️",
            Icon::FewCloudsNight => "☁️",
            Icon::ScatteredCloudsDay | Icon::ScatteredCloudsNight => "☁️",
            Icon::BrokenCloudsDay | Icon::BrokenCloudsNight => "☁️",
            Icon::ShowerRainDay | Icon::ShowerRainNight => "🌧️",
            Icon::RainDay => "🌦️",
            Icon::RainNight => "🌧️",
            Icon::ThunderstormDay | Icon::ThunderstormNight => "⛈️",
            Icon::SnowDay | Icon::SnowNight => "❄️",
            Icon::MistDay | Icon::MistNight => "🌫️",
            Icon::Default => "🌡️",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.asset_name())
    }
}

/// Map an API icon code to its asset. Unknown or missing codes get [`Icon::Default`].
pub fn resolve_icon(code: Option<&str>) -> Icon {
    match code {
        Some("01d") => Icon::ClearDay,
        Some("01n") => Icon::ClearNight,
        Some("02d") => Icon::FewCloudsDay,
        Some("02n") => Icon::FewCloudsNight,
        Some("03d") => Icon::ScatteredCloudsDay,
        Some("03n") => Icon::ScatteredCloudsNight,
        Some("04d") => Icon::BrokenCloudsDay,
        Some("04n") => Icon::BrokenCloudsNight,
        Some("09d") => Icon::ShowerRainDay,
        Some("09n") => Icon::ShowerRainNight,
        Some("10d") => Icon::RainDay,
        Some("10n") => Icon::RainNight,
        Some("11d") => Icon::ThunderstormDay,
        Some("11n") => Icon::ThunderstormNight,
        Some("13d") => Icon::SnowDay,
        Some("13n") => Icon::SnowNight,
        Some("50d") => Icon::MistDay,
        Some("50n") => Icon::MistNight,
        _ => Icon::Default,
    }
}
