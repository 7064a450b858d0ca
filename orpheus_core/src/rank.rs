use std::cmp::Reverse;

use crate::rules::Recommendation;

/// Order recommendations by descending priority weight.
///
/// The sort is stable: recommendations of equal priority keep the order in
/// which the rules produced them.
#[must_use]
pub fn rank(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by_key(|r| Reverse(r.priority.weight()));
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Priority, RecommendationKind};

    fn rec(title: &'static str, priority: Priority) -> Recommendation {
        Recommendation::new(RecommendationKind::Weather, "", title, "", priority)
    }

    #[test]
    fn higher_priority_first_and_ties_keep_order() {
        let ranked = rank(vec![
            rec("A", Priority::High),
            rec("B", Priority::Medium),
            rec("C", Priority::High),
            rec("D", Priority::Low),
            rec("E", Priority::Medium),
        ]);
        let titles: Vec<_> = ranked.iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["A", "C", "B", "E", "D"]);
    }

    #[test]
    fn empty_stays_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
