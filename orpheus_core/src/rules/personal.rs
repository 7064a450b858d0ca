//! Rules driven by the user's medical profile rather than a single domain.

use super::{Priority, Recommendation, RecommendationKind, RuleContext, fire_if};
use crate::records::AirQualityLevel;

const RESPIRATORY_MEDICATIONS: &[&str] = &["inhaler", "albuterol", "steroid"];
const HEAT_SENSITIVE_MEDICATIONS: &[&str] = &["blood pressure", "diuretic", "beta blocker"];
const SENIOR_AGE: u32 = 65;

fn temperature(ctx: &RuleContext<'_>) -> Option<i64> {
    ctx.snapshot
        .weather
        .as_ref()
        .and_then(|w| w.temperature.whole())
}

fn aqi(ctx: &RuleContext<'_>) -> Option<i64> {
    ctx.snapshot.air_quality.as_ref().and_then(|a| a.aqi.whole())
}

fn is_senior(ctx: &RuleContext<'_>) -> bool {
    ctx.profile.age > SENIOR_AGE
}

pub fn respiratory_medication(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(air) = &ctx.snapshot.air_quality else {
        return Vec::new();
    };
    let poor_air =
        air.aqi.whole().is_some_and(|aqi| aqi > 100) || air.quality == AirQualityLevel::Unhealthy;
    if !poor_air {
        return Vec::new();
    }

    let medications = ctx.profile.medications_matching(RESPIRATORY_MEDICATIONS);
    fire_if(!medications.is_empty(), || {
        Recommendation::new(
            RecommendationKind::Medication,
            "💊",
            "Respiratory Medication Reminder",
            format!(
                "Poor air quality detected. Keep your {} readily available. Consider preemptive use if prescribed.",
                medications.join(", ")
            ),
            Priority::High,
        )
    })
}

pub fn heat_medication(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let hot = temperature(ctx).is_some_and(|t| t > 85);
    fire_if(
        hot && !ctx
            .profile
            .medications_matching(HEAT_SENSITIVE_MEDICATIONS)
            .is_empty(),
        || {
            Recommendation::new(
                RecommendationKind::Medication,
                "🌡️",
                "Heat & Medication Advisory",
                "High temperature may affect medication effectiveness. Stay extra hydrated. Monitor for unusual symptoms.",
                Priority::Medium,
            )
        },
    )
}

pub fn blood_type_heat(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let hot = temperature(ctx).is_some_and(|t| t > 90);
    let b_positive = ctx.profile.blood_group.trim().eq_ignore_ascii_case("B+");
    fire_if(hot && b_positive, || {
        Recommendation::new(
            RecommendationKind::Health,
            "🩸",
            "Blood Type Heat Advisory",
            "B+ blood type may have increased heat sensitivity. Take extra precautions: frequent hydration breaks, seek AC when possible.",
            Priority::Medium,
        )
    })
}

pub fn senior_heat(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let hot = temperature(ctx).is_some_and(|t| t > 85);
    fire_if(is_senior(ctx) && hot, || {
        Recommendation::new(
            RecommendationKind::Health,
            "👴",
            "Senior Heat Safety",
            "Extra heat precautions for seniors: Check in with family, stay indoors during peak hours, monitor for heat exhaustion symptoms.",
            Priority::High,
        )
    })
}

pub fn senior_air(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let poor_air = aqi(ctx).is_some_and(|aqi| aqi > 100);
    fire_if(is_senior(ctx) && poor_air, || {
        Recommendation::new(
            RecommendationKind::Health,
            "👵",
            "Senior Air Quality Alert",
            "Seniors are more sensitive to air pollution. Avoid outdoor activities, keep windows closed, use air purifier.",
            Priority::High,
        )
    })
}
