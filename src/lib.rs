//! Recommend up to three products from a fixed catalog for a free-text
//! shopping preference.
//!
//! When an API key is configured the preference is sent to an OpenAI-style
//! chat completion endpoint and product names in the reply are matched back to
//! the catalog. Without a key, or when the remote call fails, a deterministic
//! local heuristic picks products by budget and category.
//!
//! # Example
//! ```
//! use product_choice::{Catalog, Recommender, Source};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin()?;
//! let recommender = Recommender::builder().build()?;
//! let result = recommender.recommend("a phone under $500", &catalog).await;
//! assert_eq!(result.source, Source::Local);
//! assert!(result.items.len() <= 3);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod providers;
pub mod recommender;
pub mod session;

pub use builder::RecommenderBuilder;
pub use catalog::{Catalog, Product};
pub use config::RecommenderConfig;
pub use error::{RecommendError, EMPTY_PREFERENCE_MESSAGE};
pub use matcher::{local_recommend, parse_budget, MAX_RECOMMENDATIONS};
pub use model::{RecommendationResult, Source};
pub use providers::{OpenAIProvider, SuggestionProvider};
pub use recommender::{extract_matches, FallbackReason, LogObserver, RecommendObserver, Recommender};
pub use session::Session;

/// Recommend with configuration from `config.toml` and the environment
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = product_choice::Catalog::builtin()?;
/// let result = product_choice::recommend("wireless headphones", &catalog).await?;
/// println!("{} via {}", result.items.len(), result.source);
/// # Ok(())
/// # }
/// ```
pub async fn recommend(
    preference: &str,
    catalog: &Catalog,
) -> Result<RecommendationResult, RecommendError> {
    let config = RecommenderConfig::load()?;
    let recommender = Recommender::from_config(&config)?;
    Ok(recommender.recommend(preference, catalog).await)
}
