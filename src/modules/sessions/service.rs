use chrono::{DateTime, Utc};
use tutordesk_core::AppError;
use tutordesk_models::{Session, SessionId, SessionStatus, UpdateSessionDto};

use crate::store::ResourceStore;

pub type SessionStore = ResourceStore<Session>;

impl ResourceStore<Session> {
    /// Moves a session to `status` with a status-only patch.
    pub async fn set_status(
        &self,
        id: SessionId,
        status: SessionStatus,
    ) -> Result<Session, AppError> {
        self.update(id, &UpdateSessionDto::status(status)).await
    }

    pub async fn complete(&self, id: SessionId) -> Result<Session, AppError> {
        self.set_status(id, SessionStatus::Completed).await
    }

    pub async fn cancel(&self, id: SessionId) -> Result<Session, AppError> {
        self.set_status(id, SessionStatus::Cancelled).await
    }
}

/// Pending sessions scheduled at or after `now`, soonest first.
pub fn upcoming(sessions: &[Session], now: DateTime<Utc>, limit: usize) -> Vec<Session> {
    let mut pending: Vec<_> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Pending)
        .filter(|s| s.scheduled_at.is_some_and(|at| at >= now))
        .cloned()
        .collect();
    pending.sort_by_key(|s| s.scheduled_at);
    pending.truncate(limit);
    pending
}
