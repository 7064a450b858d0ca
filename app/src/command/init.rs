use orpheus_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates `~/orpheus/config.json` and, unless one already exists,
/// `~/orpheus/profile.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let created = Config::create_config()?;

        println!("✅ Created config file at: {}", created.config.display());
        match &created.profile {
            Some(path) => println!("✅ Created profile template at: {}", path.display()),
            None => println!("ℹ️  Kept existing profile"),
        }
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your Perplexity API key");
        println!("      (or export {})", orpheus_config::API_KEY_ENV);
        println!("   2. Fill in your name, age, blood group, allergies and medications");
        println!("   3. Run 'orpheus alerts' to get today's recommendations");
        println!();
        Ok(())
    }
}
