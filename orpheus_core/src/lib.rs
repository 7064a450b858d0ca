#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;

pub mod acquisition;
pub mod cycle;
pub mod error;
pub mod extract;
pub mod parsers;
pub mod profile;
pub mod rank;
pub mod records;
pub mod rules;

pub use acquisition::{Acquisition, Domain, DomainOutcomes};
pub use cycle::{CycleReport, CycleRunner, CycleState, run_cycle};
pub use error::{CycleError, ExtractError, ProfileError};
pub use profile::{ProfileStore, UserProfile};
pub use rank::rank;
pub use records::{
    AirQualityLevel, AirQualityRecord, CrimeRecord, FluActivity, HealthImpact, HealthRecord,
    MarketsRecord, PollenLevel, Pollutant, Reading, Sky, Snapshot, TrafficConditions,
    TrafficRecord, WeatherRecord,
};
pub use rules::{Priority, Recommendation, RecommendationKind, RuleContext, evaluate};

/// Free-text summarization collaborator.
///
/// Given one natural-language query it returns prose describing current
/// conditions, or fails. Transport, authentication and timeouts live behind
/// this trait.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, query: &str) -> anyhow::Result<String>;
}

#[async_trait]
impl<P> SummaryProvider for std::sync::Arc<P>
where
    P: SummaryProvider + ?Sized,
{
    async fn summarize(&self, query: &str) -> anyhow::Result<String> {
        (**self).summarize(query).await
    }
}
