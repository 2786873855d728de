use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::builder::RecommenderBuilder;
use crate::catalog::{Catalog, Product};
use crate::config::RecommenderConfig;
use crate::error::RecommendError;
use crate::matcher::{local_recommend, MAX_RECOMMENDATIONS};
use crate::model::RecommendationResult;
use crate::providers::SuggestionProvider;

/// Why a remote attempt ended on the local heuristic
#[derive(Debug)]
pub enum FallbackReason<'a> {
    /// Transport, status or parse failure
    RequestFailed(&'a RecommendError),
    /// The reply named no catalog product
    NoCatalogMatch,
}

/// Hook invoked whenever the remote path degrades to local results
pub trait RecommendObserver: Send + Sync {
    fn on_fallback(&self, reason: &FallbackReason<'_>);
}

impl<F> RecommendObserver for F
where
    F: Fn(&FallbackReason<'_>) + Send + Sync,
{
    fn on_fallback(&self, reason: &FallbackReason<'_>) {
        self(reason)
    }
}

/// Default observer: writes a warning through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl RecommendObserver for LogObserver {
    fn on_fallback(&self, reason: &FallbackReason<'_>) {
        match reason {
            FallbackReason::RequestFailed(e) => {
                warn!("Falling back to local recommendations: {}", e)
            }
            FallbackReason::NoCatalogMatch => {
                warn!("Remote reply named no catalog products, using local recommendations")
            }
        }
    }
}

/// Chooses up to three products, remotely when a provider is configured.
pub struct Recommender {
    provider: Option<Box<dyn SuggestionProvider>>,
    observer: Arc<dyn RecommendObserver>,
}

impl Recommender {
    pub fn builder() -> RecommenderBuilder {
        RecommenderBuilder::default()
    }

    pub(crate) fn from_parts(
        provider: Option<Box<dyn SuggestionProvider>>,
        observer: Arc<dyn RecommendObserver>,
    ) -> Self {
        Recommender { provider, observer }
    }

    /// A recommender that never calls out
    pub fn local() -> Self {
        Self::from_parts(None, Arc::new(LogObserver))
    }

    /// Build from loaded configuration; no credential means local-only
    pub fn from_config(config: &RecommenderConfig) -> Result<Self, RecommendError> {
        Self::builder().config(config.clone()).build()
    }

    pub fn is_remote(&self) -> bool {
        self.provider.is_some()
    }

    /// Recommend products for `preference`. Always resolves.
    pub async fn recommend(&self, preference: &str, catalog: &Catalog) -> RecommendationResult {
        let Some(provider) = &self.provider else {
            debug!("No credential configured, using local recommendations");
            return RecommendationResult::local(local_recommend(preference, catalog));
        };

        match provider.suggest(preference, catalog).await {
            Ok(reply) => {
                let items = extract_matches(&reply, catalog);
                if items.is_empty() {
                    self.observer.on_fallback(&FallbackReason::NoCatalogMatch);
                    return RecommendationResult::remote_fallback(local_recommend(
                        preference, catalog,
                    ));
                }
                info!(
                    "Matched {} products from {} reply",
                    items.len(),
                    provider.provider_name()
                );
                RecommendationResult::remote(items, reply)
            }
            Err(e) => {
                self.observer.on_fallback(&FallbackReason::RequestFailed(&e));
                RecommendationResult::remote_fallback(local_recommend(preference, catalog))
            }
        }
    }
}

/// Catalog products whose name appears in `reply`, case-insensitively,
/// in catalog order and at most three.
pub fn extract_matches(reply: &str, catalog: &Catalog) -> Vec<Product> {
    let lower = reply.to_lowercase();
    let mut seen = HashSet::new();
    catalog
        .products()
        .iter()
        .filter(|p| lower.contains(&p.name.to_lowercase()))
        .filter(|p| seen.insert(p.id))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}
