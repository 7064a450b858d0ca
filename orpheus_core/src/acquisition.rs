//! Parallel acquisition of the six domain summaries.
//!
//! One request per domain is spawned, all are awaited, and each settles on
//! its own: a failed domain becomes `None` in the snapshot while the others
//! are parsed normally. Nothing is retried or cached.

use serde::Serialize;
use std::fmt;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::SummaryProvider;
use crate::parsers::{
    parse_air_quality, parse_crime, parse_health, parse_markets, parse_traffic, parse_weather,
};
use crate::records::Snapshot;

/// Metropolitan area every query is about.
pub const AREA: &str = "Indianapolis, Indiana";

/// The six informational domains tracked per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Weather,
    AirQuality,
    Traffic,
    Health,
    Crime,
    Markets,
}

impl Domain {
    pub const ALL: [Self; 6] = [
        Self::Weather,
        Self::AirQuality,
        Self::Traffic,
        Self::Health,
        Self::Crime,
        Self::Markets,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weather => "Weather",
            Self::AirQuality => "Air quality",
            Self::Traffic => "Traffic",
            Self::Health => "Health",
            Self::Crime => "Safety",
            Self::Markets => "Business",
        }
    }

    /// The fixed query for this domain.
    #[must_use]
    pub const fn query(self) -> &'static str {
        match self {
            Self::Weather => {
                "Current weather Indianapolis Indiana today exact temperature humidity UV index wind speed feels like precipitation forecast real time conditions"
            }
            Self::AirQuality => {
                "Air quality index AQI Indianapolis Indiana today PM2.5 PM10 ozone nitrogen dioxide carbon monoxide pollution levels real time health advisory"
            }
            Self::Traffic => {
                "Traffic conditions Indianapolis Indiana today I-65 I-70 I-465 road closures construction accidents congestion hotspots alternate routes real time"
            }
            Self::Health => {
                "Indianapolis Indiana health alerts today COVID-19 updates pollen count allergens respiratory health air quality health advisory flu activity disease outbreak"
            }
            Self::Crime => {
                "Indianapolis Indiana crime reports today police incidents shootings robberies accidents emergency alerts public safety news recent crimes"
            }
            Self::Markets => {
                "Indianapolis Indiana market closures today business holidays bank holidays shopping centers closed government offices hours"
            }
        }
    }

    /// The query wrapped in the instruction sent to the summarization service.
    #[must_use]
    pub fn prompt(self) -> String {
        format!(
            "Provide current real-time detailed data for {AREA}: {}. Include specific numbers, locations, times, and actionable information. Format response with clear data points.",
            self.query()
        )
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw text of one request, or why it did not arrive.
pub type Outcome = anyhow::Result<String>;

/// Settled outcome of every domain request, in `Domain::ALL` order.
#[derive(Debug)]
pub struct DomainOutcomes {
    outcomes: Vec<(Domain, Outcome)>,
}

impl DomainOutcomes {
    #[must_use]
    pub fn get(&self, domain: Domain) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, outcome)| outcome)
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_err()).count()
    }

    /// Parse every successful outcome; failed domains stay `None`.
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        for (domain, outcome) in self.outcomes {
            let text = match outcome {
                Ok(text) => text,
                Err(e) => {
                    warn!("{domain} data unavailable: {e:#}");
                    continue;
                }
            };
            match domain {
                Domain::Weather => snapshot.weather = Some(parse_weather(&text)),
                Domain::AirQuality => snapshot.air_quality = Some(parse_air_quality(&text)),
                Domain::Traffic => snapshot.traffic = Some(parse_traffic(&text)),
                Domain::Health => snapshot.health = Some(parse_health(&text)),
                Domain::Crime => snapshot.crime = Some(parse_crime(&text)),
                Domain::Markets => snapshot.markets = Some(parse_markets(&text)),
            }
        }
        snapshot
    }
}

/// Fans the domain queries out to a summarization provider.
pub struct Acquisition<P> {
    provider: P,
}

impl<P> Acquisition<P>
where
    P: SummaryProvider + Clone + 'static,
{
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Request every domain and wait until all of them have settled.
    pub async fn acquire(&self) -> DomainOutcomes {
        let prompts = Domain::ALL.iter().map(|d| d.prompt()).collect();
        let settled = self.settle_all(prompts).await;
        let outcomes = DomainOutcomes {
            outcomes: Domain::ALL.into_iter().zip(settled).collect(),
        };

        let failed = outcomes.failures();
        info!(
            "Acquisition settled: {} succeeded, {failed} failed",
            Domain::ALL.len() - failed
        );
        outcomes
    }

    /// Submit every query concurrently and return one outcome per query, in
    /// input order, once all of them have finished. A failure never cancels
    /// or delays the others.
    pub async fn settle_all(&self, queries: Vec<String>) -> Vec<Outcome> {
        let count = queries.len();
        let mut tasks = JoinSet::new();
        for (index, query) in queries.into_iter().enumerate() {
            let provider = self.provider.clone();
            tasks.spawn(async move { (index, provider.summarize(&query).await) });
        }

        let mut settled: Vec<Option<Outcome>> = (0..count).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    match &outcome {
                        Ok(text) => debug!("Query {index} settled with {} bytes", text.len()),
                        Err(e) => warn!("Query {index} failed: {e:#}"),
                    }
                    if let Some(slot) = settled.get_mut(index) {
                        *slot = Some(outcome);
                    }
                }
                Err(e) => warn!("Acquisition task did not complete: {e}"),
            }
        }

        settled
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| Err(anyhow::anyhow!("request task aborted"))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    /// Answers with the query itself after a delay that shrinks with position,
    /// so completions arrive in reverse order.
    struct Echo;

    #[async_trait]
    impl SummaryProvider for Echo {
        async fn summarize(&self, query: &str) -> anyhow::Result<String> {
            let delay = 40_u64.saturating_sub(query.len() as u64 * 10);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if query.contains("fail") {
                anyhow::bail!("503 Service Unavailable");
            }
            Ok(query.to_uppercase())
        }
    }

    #[tokio::test]
    async fn outcomes_keep_input_order() {
        let acquisition = Acquisition::new(Arc::new(Echo));
        let settled = acquisition
            .settle_all(vec!["a".into(), "bb".into(), "ccc".into()])
            .await;
        let texts: Vec<_> = settled.into_iter().filter_map(Result::ok).collect();
        assert_eq!(texts, vec!["A", "BB", "CCC"]);
    }

    #[tokio::test]
    async fn failure_is_isolated() {
        let acquisition = Acquisition::new(Arc::new(Echo));
        let settled = acquisition
            .settle_all(vec!["ok".into(), "fail".into(), "ok".into()])
            .await;
        assert_eq!(settled.len(), 3);
        assert!(settled[0].is_ok());
        assert!(settled[1].is_err());
        assert!(settled[2].is_ok());
    }

    #[test]
    fn prompt_wraps_query() {
        let prompt = Domain::Traffic.prompt();
        assert!(prompt.starts_with(
            "Provide current real-time detailed data for Indianapolis, Indiana: Traffic conditions"
        ));
        assert!(prompt.ends_with("Format response with clear data points."));
    }
}
