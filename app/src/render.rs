//! Plain-text presentation of a cycle: six domain cards, then the ranked list.

use chrono::Local;
use orpheus_core::{
    AirQualityRecord, CrimeRecord, CycleError, CycleReport, Domain, HealthRecord, MarketsRecord,
    Reading, Recommendation, TrafficRecord, WeatherRecord,
};
use std::fmt::Write;

pub const LOADING: &str = "⏳ Gathering current conditions...";

const RETRY_HINT: &str = "Fix the problem above, then run `orpheus alerts` again to retry.";

/// Full text for a completed cycle.
pub fn report(report: &CycleReport) -> String {
    let mut out = String::new();
    let generated = report.generated_at.with_timezone(&Local);
    let _ = writeln!(
        out,
        "Daily alerts for {} · {}",
        report.profile.name,
        generated.format("%Y-%m-%d %H:%M")
    );
    out.push('\n');

    let snapshot = &report.snapshot;
    for domain in Domain::ALL {
        let lines = match domain {
            Domain::Weather => snapshot.weather.as_ref().map(weather),
            Domain::AirQuality => snapshot.air_quality.as_ref().map(air_quality),
            Domain::Traffic => snapshot.traffic.as_ref().map(traffic),
            Domain::Health => snapshot.health.as_ref().map(health),
            Domain::Crime => snapshot.crime.as_ref().map(crime),
            Domain::Markets => snapshot.markets.as_ref().map(markets),
        };
        card(&mut out, domain, lines);
    }

    recommendations(&mut out, &report.recommendations);
    out
}

/// Text for a cycle that could not run at all.
pub fn failure(error: &CycleError) -> String {
    format!("⚠️  {error}\n   {RETRY_HINT}\n")
}

const fn icon(domain: Domain) -> &'static str {
    match domain {
        Domain::Weather => "🌤️",
        Domain::AirQuality => "🌫️",
        Domain::Traffic => "🚗",
        Domain::Health => "🏥",
        Domain::Crime => "🚨",
        Domain::Markets => "🏦",
    }
}

fn card(out: &mut String, domain: Domain, lines: Option<Vec<String>>) {
    let _ = writeln!(out, "{} {}", icon(domain), domain.label());
    match lines {
        Some(lines) => {
            for line in lines {
                let _ = writeln!(out, "  {line}");
            }
        }
        None => {
            let _ = writeln!(out, "  {} data unavailable", domain.label());
        }
    }
    out.push('\n');
}

fn measure(reading: Reading, unit: &str) -> String {
    if reading.is_available() {
        format!("{reading}{unit}")
    } else {
        reading.to_string()
    }
}

fn weather(record: &WeatherRecord) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Temperature: {} (feels like {})",
            measure(record.temperature, "°F"),
            measure(record.feels_like, "°F")
        ),
        format!("Conditions: {}", record.conditions),
        format!("Humidity: {}", measure(record.humidity, "%")),
        format!("UV index: {}", record.uv_index),
        format!("Wind: {}", measure(record.wind_speed, " mph")),
    ];
    if record.precipitation {
        lines.push("Precipitation expected".to_string());
    }
    if record.heat_warning {
        lines.push("Heat warning in effect".to_string());
    }
    lines
}

fn air_quality(record: &AirQualityRecord) -> Vec<String> {
    let mut lines = vec![
        format!("AQI: {} ({})", record.aqi, record.quality),
        format!("PM2.5: {}", measure(record.pm25, " μg/m³")),
        format!("PM10: {}", measure(record.pm10, " μg/m³")),
        format!("Ozone: {}", measure(record.ozone, " ppb")),
    ];
    if !record.pollutants.is_empty() {
        let names: Vec<_> = record.pollutants.iter().map(ToString::to_string).collect();
        lines.push(format!("Main pollutants: {}", names.join(", ")));
    }
    if let Some(impact) = record.health_impact {
        lines.push(format!("Health impact: {impact}"));
    }
    lines
}

fn traffic(record: &TrafficRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Conditions: {}", record.conditions),
        format!("Estimated delay: {}", measure(record.estimated_delay, " min")),
    ];
    lines.extend(record.closures.iter().map(|c| format!("🚧 {c}")));
    lines.extend(record.accidents.iter().map(|a| format!("💥 {a}")));
    if !record.hotspots.is_empty() {
        lines.push(format!("Congestion at: {}", record.hotspots.join(", ")));
    }
    lines
}

fn health(record: &HealthRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Pollen: {}", record.pollen_count),
        format!("Flu activity: {}", record.flu_activity),
    ];
    if !record.allergens.is_empty() {
        lines.push(format!("Allergens: {}", record.allergens.join(", ")));
    }
    if !record.covid_updates.is_empty() {
        lines.push(format!("📢 {}", record.covid_updates.join(", ")));
    }
    lines.extend(record.health_advisories.iter().cloned());
    lines
}

fn crime(record: &CrimeRecord) -> Vec<String> {
    let mut lines: Vec<String> = record
        .shootings
        .iter()
        .chain(&record.robberies)
        .chain(&record.incidents)
        .cloned()
        .collect();
    lines.extend(record.safety_alerts.iter().map(|a| format!("⚠️ {a}")));
    if !record.areas_to_avoid.is_empty() {
        lines.push(format!(
            "Exercise caution: {}",
            record.areas_to_avoid.join(", ")
        ));
    }
    if lines.is_empty() {
        lines.push("No incidents reported".to_string());
    }
    lines
}

fn markets(record: &MarketsRecord) -> Vec<String> {
    let lines: Vec<String> = record
        .bank_holidays
        .iter()
        .chain(&record.market_closures)
        .chain(&record.business_hours)
        .chain(&record.government_offices)
        .cloned()
        .collect();
    if lines.is_empty() {
        vec!["Normal business hours".to_string()]
    } else {
        lines
    }
}

fn recommendations(out: &mut String, recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        out.push_str("✅ No recommendations right now.\n");
        return;
    }
    let _ = writeln!(out, "Recommendations ({}):", recommendations.len());
    for rec in recommendations {
        let _ = writeln!(
            out,
            "  [{}] {} {}",
            rec.priority.as_str().to_uppercase(),
            rec.icon,
            rec.title
        );
        let _ = writeln!(out, "      {}", rec.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use orpheus_core::{Priority, ProfileError, RecommendationKind, Snapshot, UserProfile, rank};
    use uuid::Uuid;

    fn sample(snapshot: Snapshot, recommendations: Vec<Recommendation>) -> CycleReport {
        CycleReport {
            id: Uuid::now_v7(),
            generated_at: Utc::now(),
            profile: UserProfile {
                name: "Jordan".to_string(),
                ..UserProfile::default()
            },
            snapshot,
            recommendations,
        }
    }

    #[test]
    fn missing_domains_render_placeholders() {
        let text = report(&sample(
            Snapshot {
                weather: Some(WeatherRecord {
                    temperature: Reading::Value(92.0),
                    ..WeatherRecord::default()
                }),
                ..Snapshot::default()
            },
            Vec::new(),
        ));
        assert!(text.contains("Temperature: 92°F (feels like N/A)"));
        assert!(text.contains("Air quality data unavailable"));
        assert!(text.contains("Safety data unavailable"));
        assert!(text.contains("Business data unavailable"));
        assert!(!text.contains("Weather data unavailable"));
        assert!(text.contains("No recommendations right now."));
    }

    #[test]
    fn recommendations_keep_ranked_order() {
        let ranked = rank(vec![
            Recommendation::new(
                RecommendationKind::Health,
                "🩸",
                "Blood Type Heat Advisory",
                "B+",
                Priority::Medium,
            ),
            Recommendation::new(
                RecommendationKind::Health,
                "👴",
                "Senior Heat Safety",
                "Seniors",
                Priority::High,
            ),
        ]);
        let text = report(&sample(Snapshot::default(), ranked));
        let senior = text.find("[HIGH] 👴 Senior Heat Safety");
        let blood = text.find("[MEDIUM] 🩸 Blood Type Heat Advisory");
        assert!(senior.is_some() && blood.is_some());
        assert!(senior < blood);
    }

    #[test]
    fn failure_carries_retry_hint() {
        let error = CycleError::Profile(ProfileError::Missing("profile.json".to_string()));
        let text = failure(&error);
        assert!(text.contains("Unable to load user profile"));
        assert!(text.contains("again to retry"));
    }
}
