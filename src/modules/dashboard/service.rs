//! Summary counts for the dashboard screen.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;
use tutordesk_cache::CountCache;
use tutordesk_core::{AppError, Page};
use tutordesk_models::{
    Chapter, ChapterFilters, Payment, PaymentFilters, Resource, Session, SessionFilters,
    SessionStatus, Student, StudentFilters, Teacher, TeacherFilters,
};

use crate::api::ApiClient;
use crate::modules::sessions::upcoming;
use crate::state::AppState;

/// How many upcoming sessions the dashboard lists.
pub const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub teachers: u64,
    pub students: u64,
    pub chapters: u64,
    pub pending_sessions: u64,
    pub payments: u64,
    pub upcoming: Vec<Session>,
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    client: ApiClient,
    counts: CountCache,
}

impl DashboardService {
    pub fn new(client: ApiClient, counts: CountCache) -> Self {
        Self { client, counts }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.client.clone(), state.counts.clone())
    }

    /// Counts go through the count cache; upcoming sessions are always fetched.
    #[instrument(skip(self))]
    pub async fn summary(&self, now: DateTime<Utc>) -> Result<DashboardSummary, AppError> {
        let pending = SessionFilters {
            status: Some(SessionStatus::Pending),
            ..Default::default()
        };
        let (all_teachers, all_students, all_chapters, all_payments) = (
            TeacherFilters::default(),
            StudentFilters::default(),
            ChapterFilters::default(),
            PaymentFilters::default(),
        );

        let (teachers, students, chapters, pending_sessions, payments) = tokio::try_join!(
            self.count(Teacher::PATH, &all_teachers),
            self.count(Student::PATH, &all_students),
            self.count(Chapter::PATH, &all_chapters),
            self.count(Session::PATH, &pending),
            self.count(Payment::PATH, &all_payments),
        )?;

        let sessions: Page<Session> = self.client.list(Session::PATH, &pending).await?;

        Ok(DashboardSummary {
            teachers,
            students,
            chapters,
            pending_sessions,
            payments,
            upcoming: upcoming(&sessions.items, now, UPCOMING_LIMIT),
        })
    }

    async fn count<F: Serialize>(&self, resource: &str, filters: &F) -> Result<u64, AppError> {
        self.counts
            .get_or_fetch(resource, filters, || self.client.count(resource, filters))
            .await
    }
}
