use super::{Priority, Recommendation, RecommendationKind, RuleContext, fire_if};
use crate::records::CrimeRecord;

fn reported(ctx: &RuleContext<'_>, field: impl Fn(&CrimeRecord) -> &[String]) -> bool {
    ctx.snapshot
        .crime
        .as_ref()
        .is_some_and(|crime| !field(crime).is_empty())
}

pub fn shootings(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    fire_if(reported(ctx, |c| c.shootings.as_slice()), || {
        Recommendation::new(
            RecommendationKind::Safety,
            "🚨",
            "Safety Alert - Shootings Reported",
            "Recent shooting incidents reported. Stay alert. Avoid isolated areas. Report suspicious activity.",
            Priority::High,
        )
    })
}

pub fn robberies(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    fire_if(reported(ctx, |c| c.robberies.as_slice()), || {
        Recommendation::new(
            RecommendationKind::Safety,
            "🔒",
            "Security Alert - Robberies",
            "Robbery incidents reported in area. Secure valuables. Travel in well-lit areas. Use ride-share for evening travel.",
            Priority::High,
        )
    })
}

pub fn areas_to_avoid(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    let Some(crime) = &ctx.snapshot.crime else {
        return Vec::new();
    };

    fire_if(!crime.areas_to_avoid.is_empty(), || {
        Recommendation::new(
            RecommendationKind::Safety,
            "📍",
            "Areas of Concern",
            format!(
                "Exercise caution in: {}. Plan safer alternate routes.",
                crime.areas_to_avoid.join(", ")
            ),
            Priority::Medium,
        )
    })
}

pub fn safety_alerts(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    fire_if(reported(ctx, |c| c.safety_alerts.as_slice()), || {
        Recommendation::new(
            RecommendationKind::Safety,
            "⚠️",
            "Safety Advisory",
            "Safety alert issued for the area. Stay vigilant and follow local law enforcement updates.",
            Priority::Medium,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Snapshot;
    use crate::rules::evaluate;
    use crate::rules::testing::{profile, titles};

    #[test]
    fn each_crime_list_fires_its_own_alert() {
        let snapshot = Snapshot {
            crime: Some(CrimeRecord {
                incidents: vec!["Police responded downtown".to_string()],
                shootings: vec!["Shooting near 38th St".to_string()],
                robberies: vec!["Robbery at a gas station".to_string()],
                safety_alerts: vec!["Safety alert issued".to_string()],
                areas_to_avoid: vec!["Downtown".to_string(), "East side".to_string()],
            }),
            ..Snapshot::default()
        };
        let profile = profile();
        let fired = evaluate(&RuleContext::new(&snapshot, &profile));
        assert_eq!(
            titles(&fired),
            vec![
                "Safety Alert - Shootings Reported",
                "Security Alert - Robberies",
                "Areas of Concern",
                "Safety Advisory",
            ]
        );
        assert_eq!(
            fired[2].message,
            "Exercise caution in: Downtown, East side. Plan safer alternate routes."
        );
    }

    #[test]
    fn incidents_alone_fire_nothing() {
        let snapshot = Snapshot {
            crime: Some(CrimeRecord {
                incidents: vec!["Police responded downtown".to_string()],
                ..CrimeRecord::default()
            }),
            ..Snapshot::default()
        };
        let profile = profile();
        assert!(evaluate(&RuleContext::new(&snapshot, &profile)).is_empty());
    }
}
