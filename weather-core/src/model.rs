use chrono::{DateTime, Local};

/// One incoming lookup: a place name plus the unit system to report in.
///
/// Built per request from validated query parameters and discarded once the
/// response is produced.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub place: String,
    pub units: UnitSystem,
}

/// Unit system understood by the provider's `units` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    Metric,
    Imperial,
    #[default]
    Standard,
}

impl UnitSystem {
    /// Parse a raw query value. Total: anything other than `metric` or
    /// `imperial` resolves to `Standard`, which is also the provider's own
    /// fallback for values it does not recognize.
    pub fn from_param(value: &str) -> Self {
        match value {
            "metric" => UnitSystem::Metric,
            "imperial" => UnitSystem::Imperial,
            _ => UnitSystem::Standard,
        }
    }

    /// Value sent to the provider as the `units` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::Standard => "standard",
        }
    }

    /// Single-character display label for temperatures in this system.
    pub fn label(self) -> char {
        match self {
            UnitSystem::Imperial => 'F',
            UnitSystem::Metric => 'C',
            UnitSystem::Standard => 'K',
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized current-weather observation for one place.
///
/// Every field is taken straight from the provider payload; construction
/// fails when a field is absent rather than filling in a default the user
/// could mistake for data.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Place name as resolved by the provider.
    pub place: String,
    pub description: String,
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    pub wind_speed: f64,
    pub sunrise: DateTime<Local>,
    pub sunset: DateTime<Local>,
    pub unit_label: char,
}

/// Render-ready single-city report.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// Server-local time the report was produced.
    pub date: DateTime<Local>,
    /// The city exactly as the caller asked for it.
    pub city: String,
    pub units: UnitSystem,
    pub reading: WeatherReading,
}

/// Render-ready two-city comparison. Both readings share one unit system.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub date: DateTime<Local>,
    pub unit_label: char,
    pub first: WeatherReading,
    pub second: WeatherReading,
}
