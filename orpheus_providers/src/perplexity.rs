use async_trait::async_trait;
use orpheus_core::SummaryProvider;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
pub const DEFAULT_MODEL: &str = "llama-3.1-sonar-small-128k-online";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Chat-completions client for the Perplexity search-augmented models.
///
/// One request per query, no retries. The request timeout is the only bound
/// on how long a domain may take to settle.
#[derive(Clone)]
pub struct PerplexityProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl PerplexityProvider {
    pub fn new(api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        info!("Creating PerplexityProvider");
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        })
    }
}

/// Pull the assistant text out of a chat-completions envelope.
pub fn extract_content(response: &Value) -> anyhow::Result<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing content"))
}

#[async_trait]
impl SummaryProvider for PerplexityProvider {
    async fn summarize(&self, query: &str) -> anyhow::Result<String> {
        debug!("Sending request to Perplexity API: model={}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(query))
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        let content = extract_content(&response)?;
        debug!("Received {} bytes from Perplexity API", content.len());
        Ok(content)
    }
}
