use once_cell::sync::Lazy;

use super::{CompiledTable, recover, table};
use crate::error::ExtractError;
use crate::extract::{FieldSpec, FieldTable, extract_category, extract_tags, mentions_any};
use crate::records::{AirQualityLevel, AirQualityRecord, HealthImpact, Pollutant};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::keyword("aqi", &["aqi", "air quality index"], ""),
    FieldSpec::keyword("pm25", &["pm2.5", "pm 2.5"], "μg/m³"),
    FieldSpec::keyword("pm10", &["pm10", "pm 10"], "μg/m³"),
    FieldSpec::keyword("ozone", &["ozone", "o3"], "ppb"),
];

const QUALITY: &[(&str, AirQualityLevel)] = &[
    ("good", AirQualityLevel::Good),
    ("moderate", AirQualityLevel::Moderate),
    ("unhealthy for sensitive", AirQualityLevel::UnhealthyForSensitive),
    ("unhealthy", AirQualityLevel::Unhealthy),
    ("hazardous", AirQualityLevel::Hazardous),
];

const POLLUTANTS: &[(&[&str], Pollutant)] = &[
    (&["pm2.5", "pm 2.5"], Pollutant::Pm25),
    (&["pm10", "pm 10"], Pollutant::Pm10),
    (&["ozone", "o3"], Pollutant::Ozone),
    (&["nitrogen"], Pollutant::NitrogenDioxide),
    (&["carbon monoxide"], Pollutant::CarbonMonoxide),
];

static TABLE: CompiledTable = Lazy::new(|| FieldTable::compile(FIELDS));

/// Parse an air quality summary.
#[must_use]
pub fn parse_air_quality(text: &str) -> AirQualityRecord {
    recover("air quality", try_parse(text))
}

fn try_parse(text: &str) -> Result<AirQualityRecord, ExtractError> {
    let fields = table(&TABLE)?;
    Ok(AirQualityRecord {
        aqi: fields.reading("aqi", text)?,
        quality: extract_category(text, QUALITY).unwrap_or_default(),
        pm25: fields.reading("pm25", text)?,
        pm10: fields.reading("pm10", text)?,
        ozone: fields.reading("ozone", text)?,
        pollutants: extract_tags(text, POLLUTANTS),
        health_impact: health_impact(text),
    })
}

fn health_impact(text: &str) -> Option<HealthImpact> {
    if mentions_any(text, &["sensitive groups", "health advisory"]) {
        Some(HealthImpact::SensitiveGroups)
    } else if mentions_any(text, &["everyone"]) && mentions_any(text, &["health"]) {
        Some(HealthImpact::Everyone)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Reading;

    #[test]
    fn parses_readings_and_labels() {
        let air = parse_air_quality(
            "AQI: 112 (Unhealthy for Sensitive Groups)\n\
             PM2.5: 38.5 μg/m³\n\
             PM10: 44 μg/m³\n\
             Ozone: 61 ppb\n\
             Nitrogen dioxide levels are low.",
        );
        assert_eq!(air.aqi, Reading::Value(112.0));
        assert_eq!(air.pm25, Reading::Value(38.5));
        assert_eq!(air.pm10, Reading::Value(44.0));
        assert_eq!(air.ozone, Reading::Value(61.0));
        assert_eq!(air.quality, AirQualityLevel::UnhealthyForSensitive);
        assert_eq!(
            air.pollutants,
            vec![
                Pollutant::Pm25,
                Pollutant::Pm10,
                Pollutant::Ozone,
                Pollutant::NitrogenDioxide
            ]
        );
        assert_eq!(air.health_impact, Some(HealthImpact::SensitiveGroups));
    }

    #[test]
    fn everyone_impact_needs_health_mention() {
        assert_eq!(
            parse_air_quality("Everyone may begin to experience health effects").health_impact,
            Some(HealthImpact::Everyone)
        );
        assert_eq!(
            parse_air_quality("Everyone can enjoy the outdoors").health_impact,
            None
        );
    }

    #[test]
    fn empty_text_yields_sentinels() {
        let air = parse_air_quality("");
        assert_eq!(air.aqi, Reading::Unavailable);
        assert_eq!(air.quality, AirQualityLevel::Unknown);
        assert!(air.pollutants.is_empty());
        assert_eq!(air.health_impact, None);
    }
}
