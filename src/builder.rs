use std::sync::Arc;
use std::time::Duration;

use crate::config::RecommenderConfig;
use crate::error::RecommendError;
use crate::providers::{OpenAIProvider, SuggestionProvider};
use crate::recommender::{FallbackReason, LogObserver, RecommendObserver, Recommender};

/// Builder for configuring a [`Recommender`]
///
/// Nothing here reads the environment: the credential is passed in
/// explicitly, and without one the recommender stays local.
#[derive(Default)]
pub struct RecommenderBuilder {
    config: RecommenderConfig,
    provider: Option<Box<dyn SuggestionProvider>>,
    observer: Option<Arc<dyn RecommendObserver>>,
}

impl RecommenderBuilder {
    /// Start from an already loaded configuration
    pub fn config(mut self, config: RecommenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API key for the completion endpoint
    ///
    /// # Example
    /// ```
    /// use product_choice::Recommender;
    ///
    /// let recommender = Recommender::builder()
    ///     .api_key("your-api-key")
    ///     .build()
    ///     .unwrap();
    /// assert!(recommender.is_remote());
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the model name sent with each request
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Point at a different endpoint (proxies, tests)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Use a custom suggestion provider instead of OpenAI
    pub fn provider(mut self, provider: Box<dyn SuggestionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the default logging hook called on every fallback
    pub fn observer(mut self, observer: Arc<dyn RecommendObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Convenience for [`observer`](Self::observer) with a closure
    ///
    /// # Example
    /// ```
    /// use product_choice::Recommender;
    ///
    /// let recommender = Recommender::builder()
    ///     .on_fallback(|reason| eprintln!("fallback: {:?}", reason))
    ///     .build()
    ///     .unwrap();
    /// assert!(!recommender.is_remote());
    /// ```
    pub fn on_fallback<F>(self, f: F) -> Self
    where
        F: Fn(&FallbackReason<'_>) + Send + Sync + 'static,
    {
        self.observer(Arc::new(f))
    }

    /// Build the recommender
    ///
    /// # Errors
    /// Returns `RecommendError::BuilderError` for an out-of-range temperature
    /// and `RecommendError::Http` if the HTTP client cannot be created.
    pub fn build(self) -> Result<Recommender, RecommendError> {
        if !(0.0..=2.0).contains(&self.config.temperature) {
            return Err(RecommendError::BuilderError(format!(
                "temperature must be between 0 and 2, got {}",
                self.config.temperature
            )));
        }

        let provider = match self.provider {
            Some(provider) => Some(provider),
            None if self.config.has_api_key() => {
                Some(Box::new(OpenAIProvider::new(&self.config)?) as Box<dyn SuggestionProvider>)
            }
            None => None,
        };

        let observer = self.observer.unwrap_or_else(|| Arc::new(LogObserver));
        Ok(Recommender::from_parts(provider, observer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_builds_local() {
        let recommender = Recommender::builder().build().unwrap();
        assert!(!recommender.is_remote());
    }

    #[test]
    fn test_blank_key_builds_local() {
        let recommender = Recommender::builder().api_key("  ").build().unwrap();
        assert!(!recommender.is_remote());
    }

    #[test]
    fn test_key_builds_remote() {
        let recommender = Recommender::builder()
            .api_key("sk-test")
            .model("gpt-4o-mini")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert!(recommender.is_remote());
    }

    #[test]
    fn test_timeout_keeps_sub_second_precision() {
        let builder = Recommender::builder().timeout(Duration::from_millis(1500));
        assert_eq!(builder.config.timeout(), Duration::from_millis(1500));

        let builder = Recommender::builder().timeout(Duration::from_millis(200));
        assert_eq!(builder.config.timeout(), Duration::from_millis(200));
    }

    #[test]
    fn test_rejects_bad_temperature() {
        let result = Recommender::builder().temperature(5.0).build();
        assert!(matches!(result, Err(RecommendError::BuilderError(_))));
    }
}
