//! Teacher domain models and DTOs.

use serde::{Deserialize, Serialize};
use tutordesk_core::PaginationParams;
use tutordesk_core::serde::{deserialize_optional_f64_lenient, deserialize_optional_string};
use validator::Validate;

use crate::ids::TeacherId;
use crate::resource::Resource;
use crate::value_types::{Branch, YearTarget};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    /// Subject the teacher teaches.
    #[serde(
        default,
        alias = "specialization",
        deserialize_with = "deserialize_optional_string"
    )]
    pub module: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64_lenient")]
    pub price_per_session: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_f64_lenient")]
    pub monthly_price: Option<f64>,
    #[serde(default)]
    pub grades: Vec<YearTarget>,
    #[serde(default)]
    pub branches: Vec<Branch>,
}

impl Resource for Teacher {
    type Id = TeacherId;
    const PATH: &'static str = "teachers";
    const LABEL: &'static str = "teacher";

    fn id(&self) -> TeacherId {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 150, message = "اسم المدرس مطلوب"))]
    pub name: String,
    #[validate(length(min = 1, max = 30, message = "رقم الهاتف مطلوب"))]
    pub phone: String,
    #[validate(length(min = 1, max = 100, message = "المادة مطلوبة"))]
    pub module: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "سعر الحصة لا يمكن أن يكون سالبًا"))]
    pub price_per_session: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "السعر الشهري لا يمكن أن يكون سالبًا"))]
    pub monthly_price: Option<f64>,
    #[validate(length(min = 1, message = "اختر صفًا دراسيًا واحدًا على الأقل"))]
    pub grades: Vec<YearTarget>,
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateTeacherDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 150, message = "اسم المدرس مطلوب"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 30, message = "رقم الهاتف مطلوب"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "المادة مطلوبة"))]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub price_per_session: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub monthly_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grades: Option<Vec<YearTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<Branch>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TeacherFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<YearTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_dto() -> CreateTeacherDto {
        CreateTeacherDto {
            name: "أحمد علي".into(),
            phone: "01000000000".into(),
            module: "فيزياء".into(),
            price_per_session: Some(150.0),
            monthly_price: None,
            grades: vec![YearTarget::ThirdSecondary],
            branches: vec![Branch::Scientific],
        }
    }

    #[test]
    fn test_create_teacher_dto_validation() {
        assert!(valid_dto().validate().is_ok());

        let missing_name = CreateTeacherDto {
            name: String::new(),
            ..valid_dto()
        };
        assert!(missing_name.validate().is_err());

        let no_grades = CreateTeacherDto {
            grades: vec![],
            ..valid_dto()
        };
        assert!(no_grades.validate().is_err());

        let negative_price = CreateTeacherDto {
            price_per_session: Some(-1.0),
            ..valid_dto()
        };
        assert!(negative_price.validate().is_err());
    }

    #[test]
    fn test_update_dto_only_sends_changed_fields() {
        let dto = UpdateTeacherDto {
            phone: Some("0123".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({ "phone": "0123" }));
    }

    #[test]
    fn test_teacher_decodes_loose_payload() {
        let teacher: Teacher = serde_json::from_value(json!({
            "id": "3",
            "name": "منى",
            "phone": "",
            "specialization": "كيمياء",
            "price_per_session": "120",
            "grades": ["first_secondary", "second_secondary"],
        }))
        .unwrap();

        assert_eq!(teacher.id, TeacherId::new(3));
        assert_eq!(teacher.phone, None);
        assert_eq!(teacher.module.as_deref(), Some("كيمياء"));
        assert_eq!(teacher.price_per_session, Some(120.0));
        assert_eq!(teacher.grades.len(), 2);
        assert!(teacher.branches.is_empty());
    }

    #[test]
    fn test_filters_flatten_pagination() {
        let filters = TeacherFilters {
            grade: Some(YearTarget::FirstSecondary),
            pagination: PaginationParams::new(2, 20),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!({ "grade": "first_secondary", "page": 2, "per_page": 20 })
        );
    }
}
