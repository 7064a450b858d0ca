//! Recommendation rules.
//!
//! Each rule is a plain function from the cycle's records and the user
//! profile to zero or more recommendations. Rules never fail: a rule whose
//! inputs are missing or `N/A` simply does not fire. The order of `RULES`
//! only fixes the accumulation order that the ranker's stable sort keeps for
//! equal priorities.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::profile::UserProfile;
use crate::records::Snapshot;

mod air;
mod business;
mod health;
mod personal;
mod safety;
mod traffic;
mod weather;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Ranking weight: high 3, medium 2, low 1.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Weather,
    Air,
    Traffic,
    Health,
    Safety,
    Business,
    Medication,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub message: String,
    pub priority: Priority,
}

impl Recommendation {
    #[must_use]
    pub fn new(
        kind: RecommendationKind,
        icon: &'static str,
        title: &'static str,
        message: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            kind,
            icon,
            title,
            message: message.into(),
            priority,
        }
    }
}

/// Everything a rule may read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub snapshot: &'a Snapshot,
    pub profile: &'a UserProfile,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub const fn new(snapshot: &'a Snapshot, profile: &'a UserProfile) -> Self {
        Self { snapshot, profile }
    }
}

pub type Rule = fn(&RuleContext<'_>) -> Vec<Recommendation>;

/// Every rule, in accumulation order.
pub const RULES: &[(&str, Rule)] = &[
    ("uv_exposure", weather::uv_exposure),
    ("temperature_extremes", weather::temperature_extremes),
    ("rain", weather::rain),
    ("heat_warning", weather::heat_warning),
    ("air_quality_index", air::air_quality_index),
    ("fine_particles", air::fine_particles),
    ("air_health_impact", air::health_impact),
    ("heavy_traffic", traffic::heavy_traffic),
    ("road_closures", traffic::road_closures),
    ("traffic_hotspots", traffic::hotspots),
    ("traffic_accidents", traffic::accidents),
    ("pollen", health::pollen),
    ("personal_allergens", health::personal_allergens),
    ("flu_activity", health::flu_activity),
    ("covid_updates", health::covid_updates),
    ("air_quality_health", health::air_quality_health),
    ("shootings", safety::shootings),
    ("robberies", safety::robberies),
    ("areas_to_avoid", safety::areas_to_avoid),
    ("safety_alerts", safety::safety_alerts),
    ("bank_holidays", business::bank_holidays),
    ("market_closures", business::market_closures),
    ("business_hours", business::business_hours),
    ("respiratory_medication", personal::respiratory_medication),
    ("heat_medication", personal::heat_medication),
    ("blood_type_heat", personal::blood_type_heat),
    ("senior_heat", personal::senior_heat),
    ("senior_air", personal::senior_air),
];

/// Run every rule and collect the recommendations in accumulation order.
#[must_use]
pub fn evaluate(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    for (name, rule) in RULES {
        let fired = rule(ctx);
        if !fired.is_empty() {
            debug!("Rule {name} fired {} recommendation(s)", fired.len());
        }
        recommendations.extend(fired);
    }
    recommendations
}

/// Zero or one recommendation depending on `condition`.
fn fire_if(condition: bool, build: impl FnOnce() -> Recommendation) -> Vec<Recommendation> {
    if condition { vec![build()] } else { Vec::new() }
}

/// Join message sentences, skipping empty optional clauses.
fn sentences<'s>(parts: impl IntoIterator<Item = &'s str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}


#[cfg(test)]
mod tests {
    use super::testing::profile;
    use super::*;

    #[test]
    fn empty_snapshot_fires_nothing() {
        let snapshot = Snapshot::default();
        let profile = profile();
        assert!(evaluate(&RuleContext::new(&snapshot, &profile)).is_empty());
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn sentences_skip_empty_clauses() {
        assert_eq!(sentences(["One.", "", "Two."]), "One. Two.");
    }
}
