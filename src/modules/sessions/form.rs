use chrono::{DateTime, Utc};
use tutordesk_core::AppError;
use tutordesk_models::{
    CreateSessionDto, Session, SessionId, SessionStatus, TeacherId, UpdateSessionDto,
};

use crate::modules::require_changes;
use crate::modules::sessions::SessionStore;
use crate::ui::{FormInput, Prompter, validated};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionForm {
    pub teacher_id: Option<TeacherId>,
    pub module: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    /// Edit only.
    pub status: Option<SessionStatus>,
}

impl SessionForm {
    pub fn collect(self, prompter: &mut dyn Prompter) -> Result<CreateSessionDto, AppError> {
        let mut input = FormInput::new(prompter);

        validated(CreateSessionDto {
            teacher_id: TeacherId::new(
                input.number("رقم المدرس", self.teacher_id.map(TeacherId::get))?,
            ),
            module: input.text("المادة", self.module)?,
            scheduled_at: input.timestamp("موعد الحصة (YYYY-MM-DD HH:MM)", self.scheduled_at)?,
            duration_minutes: input.optional_number("المدة بالدقائق", self.duration_minutes)?,
        })
    }

    pub async fn submit(
        self,
        store: &SessionStore,
        prompter: &mut dyn Prompter,
    ) -> Result<Session, AppError> {
        let dto = self.collect(prompter)?;
        store.create(&dto).await
    }

    pub fn changes(self) -> Result<UpdateSessionDto, AppError> {
        require_changes(UpdateSessionDto {
            teacher_id: self.teacher_id,
            module: self.module,
            scheduled_at: self.scheduled_at,
            duration_minutes: self.duration_minutes,
            status: self.status,
        })
    }

    pub async fn submit_update(
        self,
        store: &SessionStore,
        id: SessionId,
    ) -> Result<Session, AppError> {
        let dto = self.changes()?;
        store.update(id, &dto).await
    }
}
