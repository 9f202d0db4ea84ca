//! Service context - dependency container for services
//!
//! Holds the repository ports and per-operation limits needed by services.

use std::sync::Arc;
use std::time::Duration;

use forum_core::traits::ReactionRepository;

/// Default upper bound for a single storage call
const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(15);

/// Service context containing all dependencies
///
/// Cheap to clone; the repository sits behind an `Arc` so the same ledger is
/// shared by every request.
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    operation_timeout: Duration,
}

impl ServiceContext {
    /// Create a new service context with the default operation timeout
    pub fn new(reaction_repo: Arc<dyn ReactionRepository>) -> Self {
        Self {
            reaction_repo,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Override the per-operation storage timeout
    #[must_use]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Upper bound applied to each storage call
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }
}
