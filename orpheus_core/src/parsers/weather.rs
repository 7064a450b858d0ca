use once_cell::sync::Lazy;

use super::{CompiledTable, recover, table};
use crate::error::ExtractError;
use crate::extract::{FieldSpec, FieldTable, extract_category, mentions_any};
use crate::records::{Sky, WeatherRecord};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::keyword("temperature", &["temperature", "temp"], "°F").with_unit_suffix(),
    FieldSpec::keyword("feels_like", &["feels like", "feel"], "°F"),
    FieldSpec::keyword("humidity", &["humidity"], "%"),
    FieldSpec::keyword("uv_index", &["uv index", "uv"], ""),
    FieldSpec::keyword("wind_speed", &["wind"], "mph"),
];

// "cloudy" precedes "partly cloudy", so partly cloudy skies read as Cloudy.
const SKY: &[(&str, Sky)] = &[
    ("sunny", Sky::Sunny),
    ("clear", Sky::Clear),
    ("cloudy", Sky::Cloudy),
    ("partly cloudy", Sky::PartlyCloudy),
    ("overcast", Sky::Overcast),
    ("rainy", Sky::Rainy),
    ("stormy", Sky::Stormy),
    ("foggy", Sky::Foggy),
    ("hazy", Sky::Hazy),
];

static TABLE: CompiledTable = Lazy::new(|| FieldTable::compile(FIELDS));

/// Parse a weather summary.
#[must_use]
pub fn parse_weather(text: &str) -> WeatherRecord {
    recover("weather", try_parse(text))
}

fn try_parse(text: &str) -> Result<WeatherRecord, ExtractError> {
    let fields = table(&TABLE)?;
    Ok(WeatherRecord {
        temperature: fields.reading("temperature", text)?,
        feels_like: fields.reading("feels_like", text)?,
        humidity: fields.reading("humidity", text)?,
        uv_index: fields.reading("uv_index", text)?,
        wind_speed: fields.reading("wind_speed", text)?,
        conditions: extract_category(text, SKY).unwrap_or_default(),
        precipitation: mentions_any(text, &["rain", "storm", "precipitation"]),
        heat_warning: mentions_any(text, &["heat warning", "excessive heat"]),
    })
}
