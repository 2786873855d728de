use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use log::debug;

use crate::catalog::Catalog;
use crate::error::RecommendError;
use crate::model::RecommendationResult;
use crate::recommender::Recommender;

/// One shopper's submissions against a catalog.
///
/// At most one submission is in flight. Each accepted submission produces
/// exactly one result, which becomes the latest result.
pub struct Session {
    recommender: Recommender,
    catalog: Catalog,
    busy: AtomicBool,
    last: Mutex<Option<RecommendationResult>>,
}

/// Clears the busy flag on every exit path
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Session {
    pub fn new(recommender: Recommender, catalog: Catalog) -> Self {
        Session {
            recommender,
            catalog,
            busy: AtomicBool::new(false),
            last: Mutex::new(None),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// The most recent completed result, if any
    pub fn last_result(&self) -> Option<RecommendationResult> {
        self.last.lock().ok().and_then(|last| last.clone())
    }

    /// Validate and run one submission
    ///
    /// # Errors
    /// `EmptyPreference` for blank text, `Busy` while another submission runs.
    pub async fn submit(&self, preference: &str) -> Result<RecommendationResult, RecommendError> {
        let preference = preference.trim();
        if preference.is_empty() {
            return Err(RecommendError::EmptyPreference);
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Rejected submission while another is in flight");
            return Err(RecommendError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        let result = self.recommender.recommend(preference, &self.catalog).await;
        if let Ok(mut last) = self.last.lock() {
            *last = Some(result.clone());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Source;

    fn session() -> Session {
        Session::new(Recommender::local(), Catalog::builtin().unwrap())
    }

    #[tokio::test]
    async fn test_blank_preference_rejected() {
        let session = session();
        let err = session.submit("   \n").await.unwrap_err();
        assert!(matches!(err, RecommendError::EmptyPreference));
        assert_eq!(
            err.to_string(),
            "Tell us a budget, category, or what you care about."
        );
        assert!(session.last_result().is_none());
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_latest_result_wins() {
        let session = session();
        session.submit("laptop").await.unwrap();
        let second = session.submit("watch").await.unwrap();

        assert_eq!(second.source, Source::Local);
        assert_eq!(session.last_result(), Some(second));
        assert!(!session.is_busy());
    }
}
