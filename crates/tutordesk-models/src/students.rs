//! Student domain models and DTOs.

use serde::{Deserialize, Serialize};
use tutordesk_core::PaginationParams;
use tutordesk_core::serde::deserialize_optional_string;
use validator::Validate;

use crate::ids::StudentId;
use crate::resource::Resource;
use crate::value_types::{Branch, SubscriptionStatus, YearTarget};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub parent_phone: Option<String>,
    #[serde(default)]
    pub year_target: Option<YearTarget>,
    #[serde(default)]
    pub branch: Option<Branch>,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
}

impl Resource for Student {
    type Id = StudentId;
    const PATH: &'static str = "students";
    const LABEL: &'static str = "student";

    fn id(&self) -> StudentId {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 150, message = "اسم الطالب مطلوب"))]
    pub name: String,
    #[validate(length(min = 1, max = 30, message = "رقم الهاتف مطلوب"))]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30))]
    pub parent_phone: Option<String>,
    pub year_target: Option<YearTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateStudentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 150, message = "اسم الطالب مطلوب"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 30))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30))]
    pub parent_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_target: Option<YearTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_target: Option<YearTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}
