use tutordesk_core::AppError;
use tutordesk_models::{
    Branch, CreateStudentDto, Student, StudentId, SubscriptionStatus, UpdateStudentDto, YearTarget,
};

use crate::modules::require_changes;
use crate::modules::students::StudentStore;
use crate::ui::{FormInput, Prompter, validated};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub parent_phone: Option<String>,
    pub year_target: Option<YearTarget>,
    pub branch: Option<Branch>,
    /// Only sent on edit; new students start inactive server-side.
    pub subscription_status: Option<SubscriptionStatus>,
}

impl StudentForm {
    pub fn collect(self, prompter: &mut dyn Prompter) -> Result<CreateStudentDto, AppError> {
        let mut input = FormInput::new(prompter);

        validated(CreateStudentDto {
            name: input.text("اسم الطالب", self.name)?,
            phone: input.text("رقم الهاتف", self.phone)?,
            parent_phone: input.optional_text("هاتف ولي الأمر", self.parent_phone)?,
            year_target: input.choose_optional("الصف الدراسي", self.year_target)?,
            branch: input.choose_optional("الشعبة", self.branch)?,
        })
    }

    pub async fn submit(
        self,
        store: &StudentStore,
        prompter: &mut dyn Prompter,
    ) -> Result<Student, AppError> {
        let dto = self.collect(prompter)?;
        store.create(&dto).await
    }

    pub fn changes(self) -> Result<UpdateStudentDto, AppError> {
        require_changes(UpdateStudentDto {
            name: self.name,
            phone: self.phone,
            parent_phone: self.parent_phone,
            year_target: self.year_target,
            branch: self.branch,
            subscription_status: self.subscription_status,
        })
    }

    pub async fn submit_update(
        self,
        store: &StudentStore,
        id: StudentId,
    ) -> Result<Student, AppError> {
        let dto = self.changes()?;
        store.update(id, &dto).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompt::{Answer, NonInteractive, ScriptedPrompter};

    #[test]
    fn test_collects_optional_choices() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Text("يوسف".into()),
            Answer::Text("0122".into()),
            Answer::Text("".into()),
            Answer::Select(3),
            Answer::Select(0),
        ]);

        let dto = StudentForm::default().collect(&mut prompter).unwrap();
        assert_eq!(dto.name, "يوسف");
        assert_eq!(dto.parent_phone, None);
        assert_eq!(dto.year_target, Some(YearTarget::ThirdSecondary));
        assert_eq!(dto.branch, None);
    }

    #[test]
    fn test_non_interactive_missing_name_is_rejected() {
        let form = StudentForm {
            phone: Some("0122".into()),
            ..Default::default()
        };
        let err = form.collect(&mut NonInteractive).unwrap_err();
        assert_eq!(err.user_message(), "اسم الطالب مطلوب");
    }

    #[test]
    fn test_status_only_edit() {
        let dto = StudentForm {
            subscription_status: Some(SubscriptionStatus::Active),
            ..Default::default()
        }
        .changes()
        .unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({ "subscription_status": "active" })
        );
    }
}
