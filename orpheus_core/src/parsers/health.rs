use crate::extract::{extract_category, extract_tags, mentions_any};
use crate::records::{FluActivity, HealthRecord, PollenLevel};

const COVID: &[(&[&str], &str)] = &[
    (&["cases"], "Case updates available"),
    (&["variant"], "New variant information"),
    (&["vaccination"], "Vaccination updates"),
];

const ALLERGENS: &[(&[&str], &str)] = &[
    (&["tree pollen", "tree"], "Tree pollen"),
    (&["grass pollen", "grass"], "Grass pollen"),
    (&["ragweed"], "Ragweed"),
    (&["mold", "mould"], "Mold spores"),
    (&["dust"], "Dust"),
];

const POLLEN: &[(&str, PollenLevel)] = &[
    ("high", PollenLevel::High),
    ("moderate", PollenLevel::Moderate),
    ("low", PollenLevel::Low),
];

const FLU: &[(&str, FluActivity)] = &[
    ("high", FluActivity::High),
    ("moderate", FluActivity::Moderate),
    ("low", FluActivity::Low),
];

/// Parse a public-health summary.
#[must_use]
pub fn parse_health(text: &str) -> HealthRecord {
    HealthRecord {
        covid_updates: covid_updates(text),
        pollen_count: level_of(text, "pollen", POLLEN).unwrap_or_default(),
        allergens: labels(extract_tags(text, ALLERGENS)),
        flu_activity: level_of(text, "flu", FLU).unwrap_or_default(),
        health_advisories: advisories(text),
        air_quality_health: mentions_any(text, &["sensitive groups", "health advisory"]),
    }
}

/// Level word for `subject`, only when the subject itself is mentioned.
fn level_of<T: Copy>(text: &str, subject: &str, levels: &[(&str, T)]) -> Option<T> {
    if mentions_any(text, &[subject]) {
        extract_category(text, levels)
    } else {
        None
    }
}

fn covid_updates(text: &str) -> Vec<String> {
    if mentions_any(text, &["covid", "coronavirus"]) {
        labels(extract_tags(text, COVID))
    } else {
        Vec::new()
    }
}

fn advisories(text: &str) -> Vec<String> {
    let mut advisories = Vec::new();
    if mentions_any(text, &["health advisory", "health alert"]) {
        advisories.push("Health advisory issued".to_string());
    }
    if mentions_any(text, &["air quality"]) && mentions_any(text, &["sensitive"]) {
        advisories.push("Air quality advisory for sensitive groups".to_string());
    }
    advisories
}

fn labels(tags: Vec<&str>) -> Vec<String> {
    tags.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_summary() {
        let health = parse_health(
            "Pollen count is HIGH today, driven by tree and grass pollen.\n\
             COVID-19: cases are stable; a new variant is being monitored.\n\
             Flu activity remains low.\n\
             A health advisory is in effect for sensitive groups due to air quality.",
        );
        assert_eq!(health.pollen_count, PollenLevel::High);
        assert_eq!(health.allergens, vec!["Tree pollen", "Grass pollen"]);
        assert_eq!(
            health.covid_updates,
            vec!["Case updates available", "New variant information"]
        );
        assert_eq!(
            health.health_advisories,
            vec![
                "Health advisory issued",
                "Air quality advisory for sensitive groups"
            ]
        );
        assert!(health.air_quality_health);
    }

    #[test]
    fn levels_need_their_subject() {
        let health = parse_health("Temperatures will be high this afternoon.");
        assert_eq!(health.pollen_count, PollenLevel::Unknown);
        assert_eq!(health.flu_activity, FluActivity::Low);
    }

    #[test]
    fn covid_labels_need_covid_mention() {
        assert!(parse_health("Measles cases rising").covid_updates.is_empty());
    }

    #[test]
    fn empty_text_yields_empty_lists() {
        let health = parse_health("");
        assert_eq!(health, HealthRecord::default());
    }
}
