//! Teaching session models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tutordesk_core::PaginationParams;
use tutordesk_core::serde::{
    deserialize_optional_i64_lenient, deserialize_optional_string, deserialize_optional_timestamp,
};
use validator::Validate;

use crate::ids::{SessionId, TeacherId};
use crate::resource::Resource;
use crate::value_types::SessionStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    #[serde(default)]
    pub teacher_id: Option<TeacherId>,
    /// Denormalized teacher name some endpoints include for display.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub teacher_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub module: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_i64_lenient")]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub status: SessionStatus,
}

impl Resource for Session {
    type Id = SessionId;
    const PATH: &'static str = "sessions";
    const LABEL: &'static str = "session";

    fn id(&self) -> SessionId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateSessionDto {
    pub teacher_id: TeacherId,
    #[validate(length(min = 1, max = 100, message = "المادة مطلوبة"))]
    pub module: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 600, message = "مدة الحصة غير صالحة"))]
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateSessionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "المادة مطلوبة"))]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 600))]
    pub duration_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
}

impl UpdateSessionDto {
    pub fn status(status: SessionStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_defaults_to_pending() {
        let session: Session = serde_json::from_value(json!({
            "id": 5,
            "teacher_id": 2,
            "scheduled_at": "2024-10-01 16:00:00"
        }))
        .unwrap();
        assert_eq!(session.status, SessionStatus::Pending);
        assert!(session.scheduled_at.is_some());
    }

    #[test]
    fn test_status_patch_serializes_only_status() {
        let dto = UpdateSessionDto::status(SessionStatus::Completed);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({ "status": "completed" })
        );
    }
}
