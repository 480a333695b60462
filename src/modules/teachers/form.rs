use tutordesk_core::AppError;
use tutordesk_models::{Branch, CreateTeacherDto, Teacher, TeacherId, UpdateTeacherDto, YearTarget};

use crate::modules::require_changes;
use crate::modules::teachers::TeacherStore;
use crate::ui::{FormInput, Prompter, validated};

/// Field state of the add/edit teacher form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub module: Option<String>,
    pub price_per_session: Option<f64>,
    pub monthly_price: Option<f64>,
    pub grades: Vec<YearTarget>,
    pub branches: Vec<Branch>,
}

impl TeacherForm {
    /// Fills missing fields through `prompter` and validates.
    pub fn collect(self, prompter: &mut dyn Prompter) -> Result<CreateTeacherDto, AppError> {
        let mut input = FormInput::new(prompter);

        validated(CreateTeacherDto {
            name: input.text("اسم المدرس", self.name)?,
            phone: input.text("رقم الهاتف", self.phone)?,
            module: input.text("المادة", self.module)?,
            price_per_session: input.optional_number("سعر الحصة", self.price_per_session)?,
            monthly_price: input.optional_number("السعر الشهري", self.monthly_price)?,
            grades: input.choose_many("الصفوف الدراسية", self.grades)?,
            branches: input.choose_many("الشعب", self.branches)?,
        })
    }

    pub async fn submit(
        self,
        store: &TeacherStore,
        prompter: &mut dyn Prompter,
    ) -> Result<Teacher, AppError> {
        let dto = self.collect(prompter)?;
        store.create(&dto).await
    }

    /// The changed fields only. Nothing is prompted when editing.
    pub fn changes(self) -> Result<UpdateTeacherDto, AppError> {
        let dto = UpdateTeacherDto {
            name: self.name,
            phone: self.phone,
            module: self.module,
            price_per_session: self.price_per_session,
            monthly_price: self.monthly_price,
            grades: (!self.grades.is_empty()).then_some(self.grades),
            branches: (!self.branches.is_empty()).then_some(self.branches),
        };
        require_changes(dto)
    }

    pub async fn submit_update(
        self,
        store: &TeacherStore,
        id: TeacherId,
    ) -> Result<Teacher, AppError> {
        let dto = self.changes()?;
        store.update(id, &dto).await
    }
}
