use tutordesk_core::AppError;
use tutordesk_models::{CheckIn, CreateCheckInDto, SessionId, StudentId};

use crate::modules::check_ins::CheckInStore;
use crate::ui::{FormInput, Prompter, validated};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckInForm {
    pub student_id: Option<StudentId>,
    pub session_id: Option<SessionId>,
}

impl CheckInForm {
    pub fn collect(self, prompter: &mut dyn Prompter) -> Result<CreateCheckInDto, AppError> {
        let mut input = FormInput::new(prompter);

        let student_id =
            StudentId::new(input.number("رقم الطالب", self.student_id.map(StudentId::get))?);
        let session_id = input
            .optional_number("رقم الحصة", self.session_id.map(SessionId::get))?
            .map(SessionId::new);

        validated(CreateCheckInDto {
            student_id,
            session_id,
        })
    }

    pub async fn submit(
        self,
        store: &CheckInStore,
        prompter: &mut dyn Prompter,
    ) -> Result<CheckIn, AppError> {
        let dto = self.collect(prompter)?;
        store.create(&dto).await
    }
}
