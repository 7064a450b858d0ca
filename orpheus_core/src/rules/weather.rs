use super::{Priority, Recommendation, RecommendationKind, RuleContext, fire_if, sentences};

pub fn uv_exposure(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(weather) = &ctx.snapshot.weather else {
        return Vec::new();
    };
    let uv = weather.uv_index.whole().unwrap_or(0);

    let recommendation = if uv >= 8 {
        Recommendation::new(
            RecommendationKind::Weather,
            "☀️",
            "Extreme UV Alert",
            format!(
                "UV Index {uv}: Apply SPF 50+ sunscreen every 2 hours. Wear wide-brim hat, UV-blocking sunglasses. Seek shade 10AM-4PM."
            ),
            Priority::High,
        )
    } else if uv >= 6 {
        Recommendation::new(
            RecommendationKind::Weather,
            "🌤️",
            "High UV Protection",
            format!(
                "UV Index {uv}: Use SPF 30+ sunscreen. Reapply every 2 hours. Wear protective clothing."
            ),
            Priority::Medium,
        )
    } else if uv >= 3 {
        Recommendation::new(
            RecommendationKind::Weather,
            "🧴",
            "UV Protection",
            format!("UV Index {uv}: SPF 15+ recommended for extended outdoor time."),
            Priority::Low,
        )
    } else {
        return Vec::new();
    };
    vec![recommendation]
}

pub fn temperature_extremes(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(temp) = ctx
        .snapshot
        .weather
        .as_ref()
        .and_then(|w| w.temperature.whole())
    else {
        return Vec::new();
    };

    if temp > 95 {
        let blood_note = if ctx.profile.blood_group.trim().eq_ignore_ascii_case("B+") {
            "B+ blood type may be more sensitive to heat stress."
        } else {
            ""
        };
        let lead = format!(
            "{temp}°F: Stay indoors during peak hours. Drink water every 15-20 minutes."
        );
        vec![Recommendation::new(
            RecommendationKind::Weather,
            "🥵",
            "Extreme Heat Warning",
            sentences([lead.as_str(), blood_note]),
            Priority::High,
        )]
    } else if temp < 32 {
        vec![Recommendation::new(
            RecommendationKind::Weather,
            "🥶",
            "Freezing Alert",
            format!(
                "{temp}°F: Dress in layers. Protect extremities. Check tire pressure and battery."
            ),
            Priority::High,
        )]
    } else {
        Vec::new()
    }
}

pub fn rain(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let raining = ctx.snapshot.weather.as_ref().is_some_and(|w| w.precipitation);
    fire_if(raining, || {
        Recommendation::new(
            RecommendationKind::Weather,
            "☔",
            "Rain Expected - Take Precautions",
            format!(
                "{}, carry waterproof jacket and umbrella. Allow extra 10-15 minutes for travel from {}.",
                ctx.profile.name, ctx.profile.location
            ),
            Priority::High,
        )
    })
}

pub fn heat_warning(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let warned = ctx.snapshot.weather.as_ref().is_some_and(|w| w.heat_warning);
    fire_if(warned, || {
        Recommendation::new(
            RecommendationKind::Weather,
            "🌡️",
            "Heat Warning Issued",
            "Official heat warning in effect. Limit outdoor activities. Stay hydrated. Check on elderly neighbors.",
            Priority::High,
        )
    })
}
