use chrono::{DateTime, Utc};
use tutordesk_core::AppError;
use tutordesk_models::{
    CreatePaymentDto, Payment, PaymentId, PaymentType, StudentId, TeacherId, UpdatePaymentDto,
};

use crate::modules::payments::PaymentStore;
use crate::modules::require_changes;
use crate::ui::{FormInput, Prompter, validated};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub amount: Option<f64>,
    pub payment_type: Option<PaymentType>,
    pub teacher_id: Option<TeacherId>,
    pub student_id: Option<StudentId>,
    pub paid_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl PaymentForm {
    pub fn collect(self, prompter: &mut dyn Prompter) -> Result<CreatePaymentDto, AppError> {
        let mut input = FormInput::new(prompter);

        let amount = input.number("المبلغ", self.amount)?;
        let payment_type = input.choose("نوع الدفع", self.payment_type, PaymentType::Monthly)?;

        // Either party may be given on the command line; only ask when neither was.
        let (teacher_id, student_id) = if self.teacher_id.is_some() || self.student_id.is_some() {
            (self.teacher_id, self.student_id)
        } else {
            (
                input.optional_number("رقم المدرس", None::<i64>)?.map(TeacherId::new),
                input.optional_number("رقم الطالب", None::<i64>)?.map(StudentId::new),
            )
        };

        validated(CreatePaymentDto {
            amount,
            payment_type,
            teacher_id,
            student_id,
            paid_at: self.paid_at,
            note: input.optional_text("ملاحظات", self.note)?,
        })
    }

    pub async fn submit(
        self,
        store: &PaymentStore,
        prompter: &mut dyn Prompter,
    ) -> Result<Payment, AppError> {
        let dto = self.collect(prompter)?;
        store.create(&dto).await
    }

    pub fn changes(self) -> Result<UpdatePaymentDto, AppError> {
        require_changes(UpdatePaymentDto {
            amount: self.amount,
            payment_type: self.payment_type,
            paid_at: self.paid_at,
            note: self.note,
        })
    }

    pub async fn submit_update(
        self,
        store: &PaymentStore,
        id: PaymentId,
    ) -> Result<Payment, AppError> {
        let dto = self.changes()?;
        store.update(id, &dto).await
    }
}
