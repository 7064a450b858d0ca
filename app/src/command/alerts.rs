use orpheus_config::{Config, FileProfileStore};
use orpheus_core::{CycleRunner, CycleState, ProfileStore};
use orpheus_providers::PerplexityProvider;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::render;

/// Input for [`AlertsStrategy`].
pub struct AlertsInput {
    pub config: Config,
    pub json: bool,
    /// Refresh period; `None` runs a single cycle.
    pub watch: Option<Duration>,
}

/// Strategy for running recommendation cycles and presenting the result.
#[derive(Debug, Clone, Copy)]
pub struct AlertsStrategy;

impl super::CommandStrategy for AlertsStrategy {
    type Input = AlertsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let runner = Arc::new(build_runner(&input.config)?);

        match input.watch {
            None => run_once(&runner, input.json).await,
            Some(period) => watch(runner, period, input.json).await,
        }
    }
}

fn build_runner(config: &Config) -> anyhow::Result<CycleRunner<PerplexityProvider>> {
    let settings = &config.provider;
    let provider = PerplexityProvider::new(
        settings.api_key()?.to_string(),
        Duration::from_secs(settings.timeout_secs),
    )?
    .with_base_url(settings.base_url.clone())
    .with_model(settings.model.clone())
    .with_max_tokens(settings.max_tokens)
    .with_temperature(settings.temperature);

    let profiles: Arc<dyn ProfileStore> =
        Arc::new(FileProfileStore::new(config.profile_path()?));
    Ok(CycleRunner::new(provider, profiles))
}

async fn run_once(runner: &CycleRunner<PerplexityProvider>, json: bool) -> anyhow::Result<()> {
    runner.refresh().await;

    match runner.current() {
        CycleState::Ready(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&*report)?);
            } else {
                print!("{}", render::report(&report));
            }
            Ok(())
        }
        CycleState::Failed(e) => {
            if !json {
                print!("{}", render::failure(&e));
            }
            Err(anyhow::anyhow!("Recommendation cycle failed: {e}"))
        }
        CycleState::Loading => Err(anyhow::anyhow!("Recommendation cycle did not finish")),
    }
}

/// Start a cycle every `period` and print each published state until Ctrl-C.
///
/// A tick that arrives while a cycle is still running starts a new one
/// anyway; the runner discards the older result.
async fn watch(
    runner: Arc<CycleRunner<PerplexityProvider>>,
    period: Duration,
    json: bool,
) -> anyhow::Result<()> {
    if period.is_zero() {
        anyhow::bail!("Watch period must be at least one second");
    }
    info!("Refreshing every {}s, press Ctrl-C to stop", period.as_secs());

    let mut states = runner.subscribe();
    let presenter = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            match state {
                CycleState::Loading => eprintln!("{}", render::LOADING),
                CycleState::Ready(report) if json => match serde_json::to_string(&*report) {
                    Ok(line) => println!("{line}"),
                    Err(e) => eprintln!("Failed to serialize report: {e}"),
                },
                CycleState::Ready(report) => print!("{}", render::report(&report)),
                CycleState::Failed(e) => print!("{}", render::failure(&e)),
            }
        }
    });

    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let runner = Arc::clone(&runner);
                tokio::spawn(async move {
                    if !runner.refresh().await {
                        debug!("Discarded superseded cycle");
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping");
                break;
            }
        }
    }

    presenter.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_watch_period_is_rejected() {
        let provider = PerplexityProvider::new("test-key".to_string(), Duration::from_secs(5));
        let Ok(provider) = provider else {
            panic!("provider should build without network access");
        };
        let profiles: Arc<dyn ProfileStore> =
            Arc::new(FileProfileStore::new("missing-profile.json".into()));
        let runner = Arc::new(CycleRunner::new(provider, profiles));

        let result = watch(runner, Duration::ZERO, true).await;
        let Err(e) = result else {
            panic!("a zero period must not start the refresh loop");
        };
        assert!(e.to_string().contains("at least one second"));
    }
}
