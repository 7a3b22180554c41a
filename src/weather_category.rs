use std::fmt;

/// Descriptive grouping of one or more upstream weather codes
///
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WeatherCategory {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    FreezingDrizzle,
    Rain,
    FreezingRain,
    Snow,
    SnowGrains,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    Unknown,
}

/// Fixed mapping from WMO weather code to category.
/// Codes not listed here resolve to `WeatherCategory::Unknown`.
pub const WEATHER_CODES: [(i32, WeatherCategory); 28] = [
    (0, WeatherCategory::ClearSky),
    (1, WeatherCategory::MainlyClear),
    (2, WeatherCategory::PartlyCloudy),
    (3, WeatherCategory::Overcast),
    (45, WeatherCategory::Fog),
    (48, WeatherCategory::Fog),
    (51, WeatherCategory::Drizzle),
    (53, WeatherCategory::Drizzle),
    (55, WeatherCategory::Drizzle),
    (56, WeatherCategory::FreezingDrizzle),
    (57, WeatherCategory::FreezingDrizzle),
    (61, WeatherCategory::Rain),
    (63, WeatherCategory::Rain),
    (65, WeatherCategory::Rain),
    (66, WeatherCategory::FreezingRain),
    (67, WeatherCategory::FreezingRain),
    (71, WeatherCategory::Snow),
    (73, WeatherCategory::Snow),
    (75, WeatherCategory::Snow),
    (77, WeatherCategory::SnowGrains),
    (80, WeatherCategory::RainShowers),
    (81, WeatherCategory::RainShowers),
    (82, WeatherCategory::RainShowers),
    (85, WeatherCategory::SnowShowers),
    (86, WeatherCategory::SnowShowers),
    (95, WeatherCategory::Thunderstorm),
    (96, WeatherCategory::Thunderstorm),
    (99, WeatherCategory::Thunderstorm),
];

impl WeatherCategory {
    /// Returns the category for the given weather code, never fails
    ///
    /// # Arguments
    ///
    /// * 'code' - weather code as reported by Open-Meteo
    pub fn from_code(code: i32) -> WeatherCategory {
        WEATHER_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, category)| *category)
            .unwrap_or(WeatherCategory::Unknown)
    }

    /// Human-readable description used in the weekly summary
    ///
    pub fn description(&self) -> &'static str {
        match self {
            WeatherCategory::ClearSky => "Clear sky",
            WeatherCategory::MainlyClear => "Mainly clear",
            WeatherCategory::PartlyCloudy => "Partly cloudy",
            WeatherCategory::Overcast => "Overcast",
            WeatherCategory::Fog => "Fog",
            WeatherCategory::Drizzle => "Drizzle",
            WeatherCategory::FreezingDrizzle => "Freezing drizzle",
            WeatherCategory::Rain => "Rain",
            WeatherCategory::FreezingRain => "Freezing rain",
            WeatherCategory::Snow => "Snow",
            WeatherCategory::SnowGrains => "Snow grains",
            WeatherCategory::RainShowers => "Rain showers",
            WeatherCategory::SnowShowers => "Snow showers",
            WeatherCategory::Thunderstorm => "Thunderstorm",
            WeatherCategory::Unknown => "Unknown weather condition",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_follow_table() {
        assert_eq!(WeatherCategory::from_code(0), WeatherCategory::ClearSky);
        assert_eq!(WeatherCategory::from_code(48), WeatherCategory::Fog);
        assert_eq!(WeatherCategory::from_code(61), WeatherCategory::Rain);
        assert_eq!(WeatherCategory::from_code(65), WeatherCategory::Rain);
        assert_eq!(WeatherCategory::from_code(71), WeatherCategory::Snow);
        assert_eq!(WeatherCategory::from_code(77), WeatherCategory::SnowGrains);
        assert_eq!(WeatherCategory::from_code(82), WeatherCategory::RainShowers);
        assert_eq!(WeatherCategory::from_code(95), WeatherCategory::Thunderstorm);
        assert_eq!(WeatherCategory::from_code(99), WeatherCategory::Thunderstorm);
    }

    #[test]
    fn every_table_entry_resolves_to_its_category() {
        for (code, category) in WEATHER_CODES.iter() {
            assert_eq!(WeatherCategory::from_code(*code), *category);
        }
    }

    #[test]
    fn unmapped_codes_are_unknown() {
        for code in 0..=99 {
            if WEATHER_CODES.iter().all(|(c, _)| *c != code) {
                assert_eq!(WeatherCategory::from_code(code), WeatherCategory::Unknown, "code {}", code);
            }
        }
        assert_eq!(WeatherCategory::from_code(-1), WeatherCategory::Unknown);
        assert_eq!(WeatherCategory::from_code(1000), WeatherCategory::Unknown);
    }

    #[test]
    fn descriptions() {
        assert_eq!(WeatherCategory::Rain.description(), "Rain");
        assert_eq!(WeatherCategory::Unknown.to_string(), "Unknown weather condition");
    }
}
