//! Payment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tutordesk_core::PaginationParams;
use tutordesk_core::serde::{
    deserialize_f64_lenient, deserialize_optional_string, deserialize_optional_timestamp,
};
use validator::{Validate, ValidationError};

use crate::ids::{PaymentId, StudentId, TeacherId};
use crate::resource::Resource;
use crate::value_types::PaymentType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub amount: f64,
    #[serde(alias = "type")]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub teacher_id: Option<TeacherId>,
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub note: Option<String>,
}

impl Resource for Payment {
    type Id = PaymentId;
    const PATH: &'static str = "payments";
    const LABEL: &'static str = "payment";

    fn id(&self) -> PaymentId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
#[validate(schema(function = "validate_has_party"))]
pub struct CreatePaymentDto {
    #[validate(range(exclusive_min = 0.0, message = "المبلغ يجب أن يكون أكبر من صفر"))]
    pub amount: f64,
    pub payment_type: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

fn validate_has_party(dto: &CreatePaymentDto) -> Result<(), ValidationError> {
    if dto.teacher_id.is_none() && dto.student_id.is_none() {
        let mut err = ValidationError::new("missing_party");
        err.message = Some("يجب ربط الدفعة بمدرس أو طالب".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdatePaymentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, message = "المبلغ يجب أن يكون أكبر من صفر"))]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Sum of amounts, split by billing type.
pub fn totals_by_type(payments: &[Payment]) -> (f64, f64) {
    payments
        .iter()
        .fold((0.0, 0.0), |(monthly, per_session), p| match p.payment_type {
            PaymentType::Monthly => (monthly + p.amount, per_session),
            PaymentType::PerSession => (monthly, per_session + p.amount),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto() -> CreatePaymentDto {
        CreatePaymentDto {
            amount: 300.0,
            payment_type: PaymentType::Monthly,
            teacher_id: None,
            student_id: Some(StudentId::new(4)),
            paid_at: None,
            note: None,
        }
    }

    #[test]
    fn test_payment_requires_positive_amount_and_a_party() {
        assert!(dto().validate().is_ok());

        let zero = CreatePaymentDto { amount: 0.0, ..dto() };
        assert!(zero.validate().is_err());

        let orphan = CreatePaymentDto {
            student_id: None,
            ..dto()
        };
        assert!(orphan.validate().is_err());
    }

    #[test]
    fn test_payment_accepts_type_alias_and_string_amount() {
        let payment: Payment = serde_json::from_value(json!({
            "id": 1, "amount": "250.50", "type": "per_session", "teacher_id": 2
        }))
        .unwrap();
        assert_eq!(payment.amount, 250.5);
        assert_eq!(payment.payment_type, PaymentType::PerSession);
    }

    #[test]
    fn test_totals_by_type() {
        let payments: Vec<Payment> = serde_json::from_value(json!([
            { "id": 1, "amount": 100, "payment_type": "monthly" },
            { "id": 2, "amount": 40, "payment_type": "per_session" },
            { "id": 3, "amount": 60, "payment_type": "per_session" }
        ]))
        .unwrap();
        assert_eq!(totals_by_type(&payments), (100.0, 100.0));
    }
}
