use crate::extract::mentions_any;
use crate::records::MarketsRecord;

/// Parse a market, business-hours and civic-office summary.
#[must_use]
pub fn parse_markets(text: &str) -> MarketsRecord {
    MarketsRecord {
        bank_holidays: notice(
            mentions_any(text, &["bank holiday", "federal holiday"]),
            "Bank holiday today",
        ),
        market_closures: notice(
            mentions_any(text, &["market closed", "stock market"]),
            "Stock market closure",
        ),
        business_hours: notice(
            mentions_any(text, &["limited hours", "early closure"]),
            "Limited business hours",
        ),
        government_offices: notice(
            mentions_any(text, &["government"]) && mentions_any(text, &["closed", "limited"]),
            "Government offices affected",
        ),
    }
}

fn notice(present: bool, label: &str) -> Vec<String> {
    if present {
        vec![label.to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_notice_is_independent() {
        let markets = parse_markets(
            "Today is a federal holiday. Government offices are closed; \
             the stock market is open with normal hours.",
        );
        assert_eq!(markets.bank_holidays, vec!["Bank holiday today"]);
        assert_eq!(markets.market_closures, vec!["Stock market closure"]);
        assert!(markets.business_hours.is_empty());
        assert_eq!(markets.government_offices, vec!["Government offices affected"]);
    }

    #[test]
    fn empty_text_yields_empty_lists() {
        assert_eq!(parse_markets(""), MarketsRecord::default());
    }
}
