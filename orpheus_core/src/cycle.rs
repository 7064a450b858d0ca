//! One recommendation cycle: profile, acquisition, parsing, rules, ranking.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::SummaryProvider;
use crate::acquisition::Acquisition;
use crate::error::CycleError;
use crate::profile::{ProfileStore, UserProfile};
use crate::rank::rank;
use crate::records::Snapshot;
use crate::rules::{Recommendation, RuleContext, evaluate};

/// Result of a completed cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub profile: UserProfile,
    pub snapshot: Snapshot,
    pub recommendations: Vec<Recommendation>,
}

/// Run a full cycle against `provider`.
///
/// The profile is loaded first; if that fails no query is issued. Domain
/// failures never fail the cycle, they only leave a record absent.
pub async fn run_cycle<P>(
    provider: P,
    profiles: &dyn ProfileStore,
) -> Result<CycleReport, CycleError>
where
    P: SummaryProvider + Clone + 'static,
{
    let profile = profiles.load()?;
    debug!("Loaded profile for {}", profile.name);

    let snapshot = Acquisition::new(provider).acquire().await.into_snapshot();
    let recommendations = rank(evaluate(&RuleContext::new(&snapshot, &profile)));

    let report = CycleReport {
        id: Uuid::now_v7(),
        generated_at: Utc::now(),
        profile,
        snapshot,
        recommendations,
    };
    info!(
        "Cycle {} complete: {}/6 domains, {} recommendation(s)",
        report.id,
        report.snapshot.available(),
        report.recommendations.len()
    );
    Ok(report)
}

/// What a presenter should currently show.
#[derive(Debug, Clone)]
pub enum CycleState {
    Loading,
    Ready(Arc<CycleReport>),
    Failed(Arc<CycleError>),
}

/// Runs cycles on demand and publishes only the newest one's result.
///
/// Each `refresh` takes a new generation number. A cycle that finishes after
/// a newer one has started is discarded, so a presenter never sees an older
/// result replace a newer one.
pub struct CycleRunner<P> {
    provider: P,
    profiles: Arc<dyn ProfileStore>,
    generation: AtomicU64,
    state: watch::Sender<CycleState>,
}

impl<P> CycleRunner<P>
where
    P: SummaryProvider + Clone + 'static,
{
    #[must_use]
    pub fn new(provider: P, profiles: Arc<dyn ProfileStore>) -> Self {
        let (state, _) = watch::channel(CycleState::Loading);
        Self {
            provider,
            profiles,
            generation: AtomicU64::new(0),
            state,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CycleState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn current(&self) -> CycleState {
        self.state.borrow().clone()
    }

    /// Start a new cycle, superseding any in flight. Returns whether this
    /// cycle's result was published.
    pub async fn refresh(&self) -> bool {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = CycleState::Loading;
        });

        let result = run_cycle(self.provider.clone(), self.profiles.as_ref()).await;

        let next = match result {
            Ok(report) => CycleState::Ready(Arc::new(report)),
            Err(e) => {
                warn!("Cycle generation {generation} failed: {e}");
                CycleState::Failed(Arc::new(e))
            }
        };

        // Generation check and publish share the channel lock.
        let published = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        });
        if !published {
            debug!("Cycle generation {generation} superseded, discarding result");
        }
        published
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Semaphore;

    /// Holds the first `held` calls until permits are added to `gate`; each
    /// held call consumes one permit.
    struct Gated {
        calls: AtomicUsize,
        held: usize,
        gate: Semaphore,
    }

    #[async_trait]
    impl SummaryProvider for Gated {
        async fn summarize(&self, _query: &str) -> anyhow::Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.held {
                self.gate.acquire().await?.forget();
            }
            Ok(format!("call {call}"))
        }
    }

    struct NoProfile;

    impl ProfileStore for NoProfile {
        fn load(&self) -> Result<UserProfile, ProfileError> {
            Err(ProfileError::Missing("profile.json".to_string()))
        }
    }

    fn profile() -> Arc<dyn ProfileStore> {
        Arc::new(UserProfile {
            name: "Jordan".to_string(),
            ..UserProfile::default()
        })
    }

    #[tokio::test]
    async fn missing_profile_fails_before_any_query() {
        let provider = Arc::new(Gated {
            calls: AtomicUsize::new(0),
            held: 0,
            gate: Semaphore::new(0),
        });
        let result = run_cycle(provider.clone(), &NoProfile).await;
        assert!(matches!(result, Err(CycleError::Profile(ProfileError::Missing(_)))));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unmatched_text_still_yields_records() {
        let provider = Arc::new(Gated {
            calls: AtomicUsize::new(0),
            held: 0,
            gate: Semaphore::new(0),
        });
        let runner = CycleRunner::new(provider, profile());
        assert!(runner.refresh().await);

        let CycleState::Ready(report) = runner.current() else {
            panic!("cycle should be ready");
        };
        assert_eq!(report.snapshot.available(), 6);
        assert!(report.recommendations.is_empty());
    }

    #[tokio::test]
    async fn newer_cycle_supersedes_older_one() {
        let provider = Arc::new(Gated {
            calls: AtomicUsize::new(0),
            held: 6,
            gate: Semaphore::new(0),
        });
        let runner = Arc::new(CycleRunner::new(provider.clone(), profile()));

        let first = tokio::spawn({
            let runner = Arc::clone(&runner);
            async move { runner.refresh().await }
        });
        while provider.calls.load(Ordering::SeqCst) < 6 {
            tokio::task::yield_now().await;
        }

        assert!(runner.refresh().await);
        let CycleState::Ready(second) = runner.current() else {
            panic!("second cycle should be ready");
        };

        provider.gate.add_permits(6);
        assert!(!first.await.unwrap_or(true));

        let CycleState::Ready(shown) = runner.current() else {
            panic!("state should still be ready");
        };
        assert_eq!(shown.id, second.id);
    }

    #[tokio::test]
    async fn superseded_result_never_replaces_newer_loading() {
        let provider = Arc::new(Gated {
            calls: AtomicUsize::new(0),
            held: 12,
            gate: Semaphore::new(0),
        });
        let runner = Arc::new(CycleRunner::new(provider.clone(), profile()));
        let spawn_refresh = || {
            let runner = Arc::clone(&runner);
            tokio::spawn(async move { runner.refresh().await })
        };

        let older = spawn_refresh();
        while provider.calls.load(Ordering::SeqCst) < 6 {
            tokio::task::yield_now().await;
        }
        let newer = spawn_refresh();
        while provider.calls.load(Ordering::SeqCst) < 12 {
            tokio::task::yield_now().await;
        }

        // Waiters are released in arrival order, so only the older cycle finishes.
        provider.gate.add_permits(6);
        assert!(!older.await.unwrap_or(true));
        assert!(matches!(runner.current(), CycleState::Loading));

        provider.gate.add_permits(6);
        assert!(newer.await.unwrap_or(false));
        assert!(matches!(runner.current(), CycleState::Ready(_)));
    }

    #[tokio::test]
    async fn failure_is_published_as_state() {
        let provider = Arc::new(Gated {
            calls: AtomicUsize::new(0),
            held: 0,
            gate: Semaphore::new(0),
        });
        let runner = CycleRunner::new(provider, Arc::new(NoProfile));
        let mut states = runner.subscribe();
        assert!(runner.refresh().await);
        assert!(states.has_changed().unwrap_or(false));
        assert!(matches!(&*states.borrow_and_update(), CycleState::Failed(_)));
    }
}
