use super::{Priority, Recommendation, RecommendationKind, RuleContext, fire_if, sentences};
use crate::records::{FluActivity, PollenLevel};

pub fn pollen(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let high = ctx
        .snapshot
        .health
        .as_ref()
        .is_some_and(|h| h.pollen_count == PollenLevel::High);

    fire_if(high, || {
        let allergic = ctx.profile.has_allergies();
        let advice = if allergic {
            "Take antihistamine as prescribed."
        } else {
            "Consider antihistamine if sensitive."
        };
        Recommendation::new(
            RecommendationKind::Health,
            "🤧",
            "High Pollen Alert",
            sentences([
                "High pollen levels detected.",
                advice,
                "Keep windows closed. Shower after outdoor activities.",
            ]),
            if allergic {
                Priority::High
            } else {
                Priority::Medium
            },
        )
    })
}

/// Reported allergens that contain one of the user's allergies.
pub fn personal_allergens(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(health) = &ctx.snapshot.health else {
        return Vec::new();
    };
    let allergies: Vec<String> = ctx
        .profile
        .allergy_terms()
        .map(str::to_lowercase)
        .collect();

    let matched: Vec<&str> = health
        .allergens
        .iter()
        .filter(|allergen| {
            let lower = allergen.to_lowercase();
            allergies.iter().any(|allergy| lower.contains(allergy.as_str()))
        })
        .map(String::as_str)
        .collect();

    fire_if(!matched.is_empty(), || {
        Recommendation::new(
            RecommendationKind::Health,
            "⚠️",
            "Personal Allergen Alert",
            format!(
                "Your allergens detected: {}. Take preventive medication. Limit outdoor exposure.",
                matched.join(", ")
            ),
            Priority::High,
        )
    })
}

pub fn flu_activity(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let high = ctx
        .snapshot
        .health
        .as_ref()
        .is_some_and(|h| h.flu_activity == FluActivity::High);

    fire_if(high, || {
        Recommendation::new(
            RecommendationKind::Health,
            "🦠",
            "High Flu Activity",
            "Flu activity is high in the area. Wash hands frequently. Avoid crowded spaces. Consider wearing mask in public.",
            Priority::Medium,
        )
    })
}

pub fn covid_updates(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(health) = &ctx.snapshot.health else {
        return Vec::new();
    };

    fire_if(!health.covid_updates.is_empty(), || {
        Recommendation::new(
            RecommendationKind::Health,
            "😷",
            "COVID-19 Updates",
            format!(
                "{}. Follow current health guidelines.",
                health.covid_updates.join(", ")
            ),
            Priority::Medium,
        )
    })
}

pub fn air_quality_health(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let flagged = ctx
        .snapshot
        .health
        .as_ref()
        .is_some_and(|h| h.air_quality_health);

    fire_if(flagged, || {
        Recommendation::new(
            RecommendationKind::Health,
            "🫁",
            "Air Quality Health Advisory",
            "Sensitive groups should limit outdoor activities. Monitor respiratory symptoms.",
            Priority::Medium,
        )
    })
}
