//! Display hints derived from a record: temperature bands and condition icons.

/// Upper bounds (exclusive) of the cold, mild, warm and hot bands, in °C.
pub const TEMP_COLD: f64 = 10.0;
pub const TEMP_MILD: f64 = 20.0;
pub const TEMP_WARM: f64 = 25.0;
pub const TEMP_HOT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TempBand {
    Cold,
    Mild,
    Warm,
    Hot,
    VeryHot,
}

impl TempBand {
    /// A value exactly on a threshold belongs to the band above it.
    pub fn from_celsius(temp_c: f64) -> Self {
        if temp_c < TEMP_COLD {
            TempBand::Cold
        } else if temp_c < TEMP_MILD {
            TempBand::Mild
        } else if temp_c < TEMP_WARM {
            TempBand::Warm
        } else if temp_c < TEMP_HOT {
            TempBand::Hot
        } else {
            TempBand::VeryHot
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            TempBand::Cold => "🥶",
            TempBand::Mild => "😊",
            TempBand::Warm => "☀️",
            TempBand::Hot => "🌡️",
            TempBand::VeryHot => "🔥",
        }
    }

    pub fn color(self) -> TempColor {
        match self {
            TempBand::Cold => TempColor::Blue,
            TempBand::Mild => TempColor::Green,
            TempBand::Warm => TempColor::Orange,
            TempBand::Hot => TempColor::DarkOrange,
            TempBand::VeryHot => TempColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempColor {
    Blue,
    Green,
    Orange,
    DarkOrange,
    Red,
}

impl TempColor {
    pub fn hex(self) -> &'static str {
        match self {
            TempColor::Blue => "#3498db",
            TempColor::Green => "#2ecc71",
            TempColor::Orange => "#f39c12",
            TempColor::DarkOrange => "#e67e22",
            TempColor::Red => "#e74c3c",
        }
    }

    /// ANSI 256-color index closest to [`TempColor::hex`].
    pub fn ansi256(self) -> u8 {
        match self {
            TempColor::Blue => 68,
            TempColor::Green => 41,
            TempColor::Orange => 214,
            TempColor::DarkOrange => 172,
            TempColor::Red => 167,
        }
    }
}

pub fn temperature_emoji(temp_c: f64) -> &'static str {
    TempBand::from_celsius(temp_c).emoji()
}

pub fn temperature_color(temp_c: f64) -> TempColor {
    TempBand::from_celsius(temp_c).color()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    Clear,
    Cloud,
    Thunder,
    Rain,
    Snow,
    Mist,
    Default,
}

/// Keyword groups in priority order; the first group with a substring hit wins.
/// Thunder sits ahead of rain so "thunderstorm with rain" stays a storm.
const ICON_KEYWORDS: &[(WeatherIcon, &[&str])] = &[
    (WeatherIcon::Clear, &["clear"]),
    (WeatherIcon::Cloud, &["cloud"]),
    (WeatherIcon::Thunder, &["thunder", "storm"]),
    (WeatherIcon::Rain, &["rain", "drizzle"]),
    (WeatherIcon::Snow, &["snow"]),
    (WeatherIcon::Mist, &["mist", "fog"]),
];

impl WeatherIcon {
    pub fn classify(description: &str) -> Self {
        let lower = description.to_lowercase();
        ICON_KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(*w)))
            .map_or(WeatherIcon::Default, |(icon, _)| *icon)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "☀️",
            WeatherIcon::Cloud => "☁️",
            WeatherIcon::Thunder => "⛈️",
            WeatherIcon::Rain => "🌧️",
            WeatherIcon::Snow => "❄️",
            WeatherIcon::Mist => "🌫️",
            WeatherIcon::Default => "🌤️",
        }
    }
}

pub fn weather_icon(description: &str) -> &'static str {
    WeatherIcon::classify(description).symbol()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive_below() {
        assert_eq!(temperature_emoji(9.99), "🥶");
        assert_eq!(temperature_emoji(10.0), "😊");
        assert_eq!(temperature_emoji(20.0), "☀️");
        assert_eq!(temperature_emoji(25.0), "🌡️");
        assert_eq!(temperature_emoji(30.0), "🔥");
        assert_eq!(temperature_emoji(-40.0), "🥶");
    }

    #[test]
    fn colors_follow_the_same_bands() {
        assert_eq!(temperature_color(5.0), TempColor::Blue);
        assert_eq!(temperature_color(10.0), TempColor::Green);
        assert_eq!(temperature_color(24.9), TempColor::Orange);
        assert_eq!(temperature_color(29.0), TempColor::DarkOrange);
        assert_eq!(temperature_color(35.0), TempColor::Red);
        assert_eq!(temperature_color(35.0).hex(), "#e74c3c");
        assert_eq!(temperature_color(0.0).hex(), "#3498db");
    }

    #[test]
    fn thunder_outranks_rain() {
        assert_eq!(weather_icon("thunderstorm with rain"), "⛈️");
        assert_eq!(weather_icon("Thunderstorm With Light Rain"), "⛈️");
    }

    #[test]
    fn icon_matching_is_case_insensitive_and_ordered() {
        assert_eq!(WeatherIcon::classify("Clear Sky"), WeatherIcon::Clear);
        assert_eq!(WeatherIcon::classify("Broken Clouds"), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::classify("light intensity drizzle"), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::classify("Heavy Snow"), WeatherIcon::Snow);
        assert_eq!(WeatherIcon::classify("FOG"), WeatherIcon::Mist);
        assert_eq!(WeatherIcon::classify("haze"), WeatherIcon::Default);
        assert_eq!(weather_icon("smoke"), "🌤️");
    }
}
