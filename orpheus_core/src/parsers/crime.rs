use crate::extract::{extract_list_by_keyword, extract_tags, mentions_any};
use crate::records::CrimeRecord;

const MAX_INCIDENTS: usize = 3;
const MAX_SHOOTINGS: usize = 2;
const MAX_ROBBERIES: usize = 2;

const AREAS: &[(&[&str], &str)] = &[
    (&["downtown"], "downtown"),
    (&["east side"], "east side"),
    (&["west side"], "west side"),
    (&["north side"], "north side"),
    (&["south side"], "south side"),
];

/// Parse a crime and public-safety summary.
#[must_use]
pub fn parse_crime(text: &str) -> CrimeRecord {
    CrimeRecord {
        incidents: extract_list_by_keyword(
            text,
            &["incident", "report", "crime"],
            &[],
            MAX_INCIDENTS,
        ),
        shootings: extract_list_by_keyword(text, &["shooting", "shot"], &[], MAX_SHOOTINGS),
        robberies: extract_list_by_keyword(text, &["robbery", "theft"], &[], MAX_ROBBERIES),
        safety_alerts: if mentions_any(text, &["alert", "warning", "emergency"]) {
            vec!["Safety alert issued".to_string()]
        } else {
            Vec::new()
        },
        areas_to_avoid: areas_to_avoid(text),
    }
}

fn areas_to_avoid(text: &str) -> Vec<String> {
    if !mentions_any(text, &["avoid", "caution"]) {
        return Vec::new();
    }
    extract_tags(text, AREAS)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "IMPD reports a shooting on the east side overnight; one person injured.\n\
        A robbery at a gas station on Washington St was reported at 2 AM.\n\
        Police urge caution downtown after several car theft incidents.\n\
        No emergency alerts are active.";

    #[test]
    fn parses_full_summary() {
        let crime = parse_crime(SAMPLE);
        assert_eq!(crime.incidents.len(), 3);
        assert_eq!(
            crime.shootings,
            vec!["IMPD reports a shooting on the east side overnight; one person injured."]
        );
        assert_eq!(crime.robberies.len(), 2);
        assert_eq!(crime.safety_alerts, vec!["Safety alert issued"]);
        assert_eq!(crime.areas_to_avoid, vec!["downtown", "east side"]);
    }

    #[test]
    fn areas_need_a_caution_word() {
        let crime = parse_crime("Quiet night downtown and on the east side.");
        assert!(crime.areas_to_avoid.is_empty());
    }

    #[test]
    fn empty_text_yields_empty_lists() {
        assert_eq!(parse_crime(""), CrimeRecord::default());
    }
}
