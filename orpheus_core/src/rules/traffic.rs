use super::{Priority, Recommendation, RecommendationKind, RuleContext, fire_if, sentences};
use crate::records::TrafficConditions;

/// Closure alerts are capped at this many per cycle.
const MAX_CLOSURE_ALERTS: usize = 2;

pub fn heavy_traffic(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(traffic) = &ctx.snapshot.traffic else {
        return Vec::new();
    };

    fire_if(traffic.conditions == TrafficConditions::Heavy, || {
        let delay = if traffic.estimated_delay.is_available() {
            format!("Allow extra {} minutes.", traffic.estimated_delay)
        } else {
            "Allow extra travel time.".to_string()
        };
        Recommendation::new(
            RecommendationKind::Traffic,
            "🚗",
            "Heavy Traffic Alert",
            sentences([
                "Heavy congestion expected.",
                delay.as_str(),
                "Consider alternate routes.",
            ]),
            Priority::Medium,
        )
    })
}

pub fn road_closures(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(traffic) = &ctx.snapshot.traffic else {
        return Vec::new();
    };

    traffic
        .reported_closures()
        .take(MAX_CLOSURE_ALERTS)
        .map(|closure| {
            Recommendation::new(
                RecommendationKind::Traffic,
                "🚧",
                "Road Closure Alert",
                format!(
                    "{closure}. Plan alternate route from {}. Use navigation app for real-time updates.",
                    ctx.profile.location
                ),
                Priority::Medium,
            )
        })
        .collect()
}

pub fn hotspots(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(traffic) = &ctx.snapshot.traffic else {
        return Vec::new();
    };

    fire_if(!traffic.hotspots.is_empty(), || {
        Recommendation::new(
            RecommendationKind::Traffic,
            "🔥",
            "Traffic Hotspots",
            format!(
                "Congestion at: {}. Avoid these areas during peak hours.",
                traffic.hotspots.join(", ")
            ),
            Priority::Low,
        )
    })
}

pub fn accidents(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let reported = ctx
        .snapshot
        .traffic
        .as_ref()
        .is_some_and(|t| !t.accidents.is_empty());

    fire_if(reported, || {
        Recommendation::new(
            RecommendationKind::Traffic,
            "🚨",
            "Traffic Accidents Reported",
            "Multiple accidents reported. Drive carefully and allow extra time. Consider public transport.",
            Priority::Medium,
        )
    })
}
