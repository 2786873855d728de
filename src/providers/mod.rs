mod open_ai;
mod prompt;

pub use open_ai::OpenAIProvider;
pub use prompt::{build_user_prompt, SHOPPING_ASSISTANT_PROMPT};

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::RecommendError;

/// A remote service that suggests products as free text
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Ask for products from `catalog` matching `preference`, returning the raw reply
    async fn suggest(&self, preference: &str, catalog: &Catalog) -> Result<String, RecommendError>;
}
