use super::{Priority, Recommendation, RecommendationKind, RuleContext, fire_if, sentences};

pub fn air_quality_index(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(air) = &ctx.snapshot.air_quality else {
        return Vec::new();
    };
    let aqi = air.aqi.whole().unwrap_or(0);

    if aqi > 150 {
        vec![Recommendation::new(
            RecommendationKind::Air,
            "😷",
            "Unhealthy Air - Mask Required",
            format!(
                "AQI {aqi}: Wear N95/KN95 mask outdoors. Avoid outdoor exercise. Close windows. Use air purifier if available."
            ),
            Priority::High,
        )]
    } else if aqi > 100 {
        vec![Recommendation::new(
            RecommendationKind::Air,
            "😐",
            "Moderate Air Quality",
            format!(
                "AQI {aqi}: Consider mask for sensitive individuals. Limit prolonged outdoor exertion."
            ),
            Priority::Medium,
        )]
    } else {
        Vec::new()
    }
}

pub fn fine_particles(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(air) = &ctx.snapshot.air_quality else {
        return Vec::new();
    };
    let elevated = air.pm25.whole().is_some_and(|pm25| pm25 > 35);

    fire_if(elevated, || {
        let allergy_note = if ctx.profile.has_allergies() {
            "Extra caution due to your allergies."
        } else {
            ""
        };
        let lead = format!(
            "PM2.5: {} μg/m³. Use KN95 mask outdoors. Run air purifier indoors.",
            air.pm25
        );
        Recommendation::new(
            RecommendationKind::Air,
            "🌫️",
            "High Fine Particle Levels",
            sentences([lead.as_str(), allergy_note]),
            Priority::High,
        )
    })
}

pub fn health_impact(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(impact) = ctx
        .snapshot
        .air_quality
        .as_ref()
        .and_then(|air| air.health_impact)
    else {
        return Vec::new();
    };

    let medication_note = if ctx.profile.has_medications() {
        "Monitor symptoms if taking respiratory medications."
    } else {
        ""
    };
    let lead = format!("{impact}.");
    vec![Recommendation::new(
        RecommendationKind::Air,
        "🫁",
        "Air Quality Health Advisory",
        sentences([lead.as_str(), medication_note]),
        Priority::Medium,
    )]
}
