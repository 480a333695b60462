//! Multipart course file uploads.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};
use tutordesk_config::UploadConfig;
use tutordesk_core::AppError;
use tutordesk_models::chapters::CourseFileKind;
use tutordesk_models::{ChapterId, Course, CourseId};

use crate::api::ApiClient;

/// A local PDF destined for one of a course's attachment slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFile {
    pub kind: CourseFileKind,
    pub path: PathBuf,
}

impl CourseFile {
    pub fn summary(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: CourseFileKind::Summary,
            path: path.into(),
        }
    }

    pub fn exercises(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: CourseFileKind::Exercises,
            path: path.into(),
        }
    }

    /// Checks the file exists and fits under the configured limit without
    /// reading it.
    pub async fn check(&self, config: &UploadConfig) -> Result<u64, AppError> {
        let metadata = tokio::fs::metadata(&self.path).await.map_err(|e| {
            AppError::internal(e)
                .context(format!("reading {}", self.path.display()))
                .with_user_message(format!(
                    "تعذر قراءة ملف ال{}: {}",
                    self.kind.label(),
                    self.path.display()
                ))
        })?;

        if !metadata.is_file() {
            return Err(AppError::internal(anyhow!(
                "{} is not a regular file",
                self.path.display()
            ))
            .with_user_message(format!("ملف ال{} غير صالح", self.kind.label())));
        }

        if metadata.len() > config.max_file_bytes {
            return Err(AppError::internal(anyhow!(
                "{} is {} bytes, limit is {}",
                self.path.display(),
                metadata.len(),
                config.max_file_bytes
            ))
            .with_user_message(format!(
                "حجم ملف ال{} يتجاوز الحد المسموح ({} ميجابايت)",
                self.kind.label(),
                config.max_file_bytes / (1024 * 1024)
            )));
        }

        Ok(metadata.len())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.pdf".to_string())
}

/// Builds the upload form: `chapter_id` plus one file part named after the
/// attachment slot.
pub async fn build_form(chapter_id: ChapterId, file: &CourseFile) -> Result<Form, AppError> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|e| AppError::internal(e).context(format!("reading {}", file.path.display())))?;

    let part = Part::bytes(bytes)
        .file_name(file_name(&file.path))
        .mime_str("application/pdf")
        .map_err(AppError::internal)?;

    Ok(Form::new()
        .text("chapter_id", chapter_id.to_string())
        .part(file.kind.field_name(), part))
}

impl ApiClient {
    /// `POST /courses/{id}/upload`. Returns the course with the new file path.
    #[instrument(skip(self, file), fields(kind = file.kind.field_name()))]
    pub async fn upload_course_file(
        &self,
        chapter_id: ChapterId,
        course_id: CourseId,
        file: &CourseFile,
    ) -> Result<Course, AppError> {
        let form = build_form(chapter_id, file).await?;
        debug!(path = %file.path.display(), "Uploading course file");
        self.post_multipart(&format!("courses/{}/upload", course_id), form)
            .await
    }
}
