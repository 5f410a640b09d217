use std::sync::Arc;

use tokio::sync::RwLock;

use crate::ats::scoring::{AtsScorer, KeywordAtsScorer};
use crate::config::Config;
use crate::document::store::DocumentStore;
use crate::tracker::board::JobTracker;
use crate::wizard::WizardSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    /// Wizard position for the current document. Reset whenever the current document changes.
    pub wizard: Arc<RwLock<WizardSession>>,
    pub tracker: Arc<JobTracker>,
    /// Pluggable ATS scorer. Default: KeywordAtsScorer.
    pub ats_scorer: Arc<dyn AtsScorer>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let tracker = if config.seed_sample_jobs {
            JobTracker::with_sample_applications()
        } else {
            JobTracker::new()
        };

        AppState {
            store: Arc::new(DocumentStore::new()),
            wizard: Arc::new(RwLock::new(WizardSession::default())),
            tracker: Arc::new(tracker),
            ats_scorer: Arc::new(KeywordAtsScorer),
            config,
        }
    }
}
