//! Student check-in models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tutordesk_core::PaginationParams;
use tutordesk_core::serde::{deserialize_optional_string, deserialize_optional_timestamp};
use validator::Validate;

use crate::ids::{CheckInId, SessionId, StudentId};
use crate::resource::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: CheckInId,
    pub student_id: StudentId,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub student_name: Option<String>,
    #[serde(default)]
    pub session_id: Option<SessionId>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Resource for CheckIn {
    type Id = CheckInId;
    const PATH: &'static str = "check-ins";
    const LABEL: &'static str = "check-in";

    fn id(&self) -> CheckInId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCheckInDto {
    pub student_id: StudentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckInFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}
