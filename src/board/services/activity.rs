//! Activity recorder appending audit entries after board mutations.

use crate::board::{
    domain::{ActivityDraft, ActivityLog},
    ports::{ActivityRepository, RepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::warn;

/// Stamps activity drafts and appends them to the activity log.
#[derive(Clone)]
pub struct ActivityRecorder<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> ActivityRecorder<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new recorder.
    #[must_use]
    pub const fn new(repository: Arc<A>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Builds an entry from `draft` and appends it.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the entry cannot be appended.
    pub async fn record(&self, draft: ActivityDraft) -> RepositoryResult<ActivityLog> {
        let entry = ActivityLog::from_draft(draft, &*self.clock);
        self.repository.append(&entry).await?;
        Ok(entry)
    }

    /// Records an entry for a mutation that has already been applied.
    ///
    /// A failed append is logged and reported as `None`; it never undoes the
    /// mutation it describes.
    pub async fn record_best_effort(&self, draft: ActivityDraft) -> Option<ActivityLog> {
        let kind = draft.kind;
        let subject_id = draft.subject_id;
        match self.record(draft).await {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(
                    kind = %kind,
                    subject_id = %subject_id,
                    error = %err,
                    "failed to record activity; mutation kept"
                );
                None
            }
        }
    }
}
