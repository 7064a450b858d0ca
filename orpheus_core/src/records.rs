//! Structured per-domain records extracted from summary text.
//!
//! Every list field defaults to an empty `Vec` and every scalar to a sentinel
//! (`Reading::Unavailable`, an `Unknown` label or a named default), so rule
//! evaluation never has to deal with a missing field.

use serde::{Serialize, Serializer};
use std::fmt;

/// Sentinel text shown for unknown scalars.
pub const NOT_AVAILABLE: &str = "N/A";

/// Closure list entry used when no closure could be found.
pub const NO_CLOSURES: &str = "No major closures reported";

/// A numeric measurement or the "N/A" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Reading {
    Value(f64),
    #[default]
    Unavailable,
}

impl Reading {
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    /// Integer part of the reading, truncated toward zero.
    ///
    /// Rule thresholds compare against this, so `95.7` does not exceed `95`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "readings are small physical quantities"
    )]
    pub fn whole(self) -> Option<i64> {
        self.value()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unavailable, Self::Value)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) if v.fract().abs() < f64::EPSILON => write!(f, "{v:.0}"),
            Self::Value(v) => write!(f, "{v}"),
            Self::Unavailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::Unavailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

macro_rules! labels {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant),+
        }

        impl $name {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labels! {
    /// Sky conditions reported in the weather summary.
    #[derive(Default)]
    Sky {
        Sunny => "Sunny",
        Clear => "Clear",
        Cloudy => "Cloudy",
        PartlyCloudy => "Partly Cloudy",
        Overcast => "Overcast",
        Rainy => "Rainy",
        Stormy => "Stormy",
        Foggy => "Foggy",
        Hazy => "Hazy",
        #[default]
        Unknown => "N/A",
    }
}

labels! {
    #[derive(Default)]
    AirQualityLevel {
        Good => "Good",
        Moderate => "Moderate",
        UnhealthyForSensitive => "Unhealthy for Sensitive",
        Unhealthy => "Unhealthy",
        Hazardous => "Hazardous",
        #[default]
        Unknown => "N/A",
    }
}

labels! {
    Pollutant {
        Pm25 => "PM2.5",
        Pm10 => "PM10",
        Ozone => "Ozone",
        NitrogenDioxide => "NO2",
        CarbonMonoxide => "CO",
    }
}

labels! {
    HealthImpact {
        SensitiveGroups => "Sensitive groups affected",
        Everyone => "Health effects for everyone",
    }
}

labels! {
    #[derive(Default)]
    TrafficConditions {
        Heavy => "Heavy",
        Moderate => "Moderate",
        Light => "Light",
        #[default]
        Normal => "Normal",
    }
}

labels! {
    #[derive(Default)]
    PollenLevel {
        High => "High",
        Moderate => "Moderate",
        Low => "Low",
        #[default]
        Unknown => "N/A",
    }
}

labels! {
    #[derive(Default)]
    FluActivity {
        High => "High",
        Moderate => "Moderate",
        #[default]
        Low => "Low",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub temperature: Reading,
    pub feels_like: Reading,
    pub humidity: Reading,
    pub uv_index: Reading,
    pub wind_speed: Reading,
    pub conditions: Sky,
    pub precipitation: bool,
    pub heat_warning: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityRecord {
    pub aqi: Reading,
    pub quality: AirQualityLevel,
    pub pm25: Reading,
    pub pm10: Reading,
    pub ozone: Reading,
    pub pollutants: Vec<Pollutant>,
    pub health_impact: Option<HealthImpact>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficRecord {
    pub conditions: TrafficConditions,
    pub closures: Vec<String>,
    pub accidents: Vec<String>,
    pub hotspots: Vec<String>,
    pub estimated_delay: Reading,
}

impl Default for TrafficRecord {
    fn default() -> Self {
        Self {
            conditions: TrafficConditions::default(),
            closures: vec![NO_CLOSURES.to_string()],
            accidents: Vec::new(),
            hotspots: Vec::new(),
            estimated_delay: Reading::Unavailable,
        }
    }
}

impl TrafficRecord {
    /// Closures that name an actual road, skipping the "no closures" sentinel.
    pub fn reported_closures(&self) -> impl Iterator<Item = &str> {
        self.closures
            .iter()
            .map(String::as_str)
            .filter(|c| !c.eq_ignore_ascii_case(NO_CLOSURES))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub covid_updates: Vec<String>,
    pub pollen_count: PollenLevel,
    pub allergens: Vec<String>,
    pub flu_activity: FluActivity,
    pub health_advisories: Vec<String>,
    pub air_quality_health: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeRecord {
    pub incidents: Vec<String>,
    pub shootings: Vec<String>,
    pub robberies: Vec<String>,
    pub safety_alerts: Vec<String>,
    pub areas_to_avoid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketsRecord {
    pub bank_holidays: Vec<String>,
    pub market_closures: Vec<String>,
    pub business_hours: Vec<String>,
    pub government_offices: Vec<String>,
}

/// The six domain records of one cycle.
///
/// `None` means the domain could not be acquired at all; a domain whose text
/// arrived but matched nothing is `Some` with sentinel fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub weather: Option<WeatherRecord>,
    pub air_quality: Option<AirQualityRecord>,
    pub traffic: Option<TrafficRecord>,
    pub health: Option<HealthRecord>,
    pub crime: Option<CrimeRecord>,
    pub markets: Option<MarketsRecord>,
}

impl Snapshot {
    /// Number of domains that were acquired.
    #[must_use]
    pub fn available(&self) -> usize {
        [
            self.weather.is_some(),
            self.air_quality.is_some(),
            self.traffic.is_some(),
            self.health.is_some(),
            self.crime.is_some(),
            self.markets.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}
