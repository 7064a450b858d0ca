use super::{Priority, Recommendation, RecommendationKind, RuleContext, fire_if};
use crate::records::MarketsRecord;

fn notice(
    ctx: &RuleContext<'_>,
    field: impl Fn(&MarketsRecord) -> &[String],
    icon: &'static str,
    title: &'static str,
    message: &'static str,
) -> Vec<Recommendation> {
    let present = ctx
        .snapshot
        .markets
        .as_ref()
        .is_some_and(|markets| !field(markets).is_empty());
    fire_if(present, || {
        Recommendation::new(
            RecommendationKind::Business,
            icon,
            title,
            message,
            Priority::Low,
        )
    })
}

pub fn bank_holidays(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    notice(
        ctx,
        |m| m.bank_holidays.as_slice(),
        "🏦",
        "Bank Holiday Notice",
        "Banks are closed today. Plan banking activities accordingly. ATMs remain available.",
    )
}

pub fn market_closures(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    notice(
        ctx,
        |m| m.market_closures.as_slice(),
        "📈",
        "Market Closure",
        "Stock market closure affects trading today. Plan investment activities accordingly.",
    )
}

pub fn business_hours(ctx: &RuleContext<'_>) -> Vec<Recommendation> {
    notice(
        ctx,
        |m| m.business_hours.as_slice(),
        "🏢",
        "Limited Business Hours",
        "Some businesses have limited hours today. Call ahead to confirm availability.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Snapshot;
    use crate::rules::evaluate;
    use crate::rules::testing::{profile, titles};

    #[test]
    fn government_offices_alone_fire_nothing() {
        let snapshot = Snapshot {
            markets: Some(MarketsRecord {
                government_offices: vec!["Government offices affected".to_string()],
                ..MarketsRecord::default()
            }),
            ..Snapshot::default()
        };
        let profile = profile();
        assert!(evaluate(&RuleContext::new(&snapshot, &profile)).is_empty());
    }

    #[test]
    fn business_notices_are_low_priority() {
        let snapshot = Snapshot {
            markets: Some(MarketsRecord {
                bank_holidays: vec!["Bank holiday today".to_string()],
                market_closures: vec!["Stock market closure".to_string()],
                business_hours: vec!["Limited business hours".to_string()],
                government_offices: Vec::new(),
            }),
            ..Snapshot::default()
        };
        let profile = profile();
        let fired = evaluate(&RuleContext::new(&snapshot, &profile));
        assert_eq!(
            titles(&fired),
            vec![
                "Bank Holiday Notice",
                "Market Closure",
                "Limited Business Hours"
            ]
        );
        assert!(fired.iter().all(|r| r.priority == Priority::Low));
    }
}
