use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::config::RecommenderConfig;
use crate::error::RecommendError;
use crate::providers::{build_user_prompt, SuggestionProvider, SHOPPING_ASSISTANT_PROMPT};

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &RecommenderConfig) -> Result<Self, RecommendError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| RecommendError::BuilderError("API key not configured".to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(OpenAIProvider {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.4,
        }
    }
}

#[async_trait]
impl SuggestionProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn suggest(&self, preference: &str, catalog: &Catalog) -> Result<String, RecommendError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": SHOPPING_ASSISTANT_PROMPT},
                    {"role": "user", "content": build_user_prompt(preference, catalog)}
                ],
                "temperature": self.temperature
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecommendError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let response_body: Value = serde_json::from_str(&body)?;
        debug!("{:?}", response_body);

        let message = response_body["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        Ok(message)
    }
}
