use orpheus_config::{Config, FileProfileStore};
use orpheus_core::ProfileStore;

/// Strategy for displaying configuration information.
///
/// The API key is masked; the profile is loaded to report whether the next
/// cycle would be able to start.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== orpheus Configuration ===\n");

        println!("Provider:");
        let key = if config.provider.api_key.trim().is_empty() {
            "(not set)".to_string()
        } else {
            config.provider.masked_api_key()
        };
        println!("  API Key: {key}");
        println!("  Base URL: {}", config.provider.base_url);
        println!("  Model: {}", config.provider.model);
        println!("  Max Tokens: {}", config.provider.max_tokens);
        println!("  Temperature: {}", config.provider.temperature);
        println!("  Timeout: {}s", config.provider.timeout_secs);
        println!();

        let store = FileProfileStore::new(config.profile_path()?);
        println!("Profile:");
        println!("  Path: {}", store.path().display());
        match store.load() {
            Ok(profile) => {
                println!("  Status: OK");
                println!("  Name: {}", profile.name);
                println!("  Age: {}", profile.age);
                println!("  Allergies: {}", list_or_none(&profile.allergies));
                println!("  Medications: {}", list_or_none(&profile.medications));
            }
            Err(e) => println!("  Status: {e}"),
        }
        println!();

        println!("Logging:");
        println!("  Filter: {}", config.logging.filter);

        Ok(())
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
