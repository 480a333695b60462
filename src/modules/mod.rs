pub mod chapters;
pub mod check_ins;
pub mod dashboard;
pub mod payments;
pub mod sessions;
pub mod students;
pub mod teachers;

use anyhow::anyhow;
use serde::Serialize;
use tutordesk_core::{AppError, ErrorKind};
use validator::Validate;

use crate::ui::validated;

pub const NO_CHANGES_MESSAGE: &str = "لم يتم تحديد أي تعديل";

/// Validates an update DTO, rejecting one that would send an empty patch.
pub(crate) fn require_changes<D: Serialize + Validate>(dto: D) -> Result<D, AppError> {
    let empty = serde_json::to_value(&dto)
        .map(|v| v.as_object().is_some_and(|o| o.is_empty()))
        .map_err(AppError::internal)?;

    if empty {
        return Err(AppError::new(ErrorKind::Validation, anyhow!("empty update"))
            .with_user_message(NO_CHANGES_MESSAGE));
    }
    validated(dto)
}
