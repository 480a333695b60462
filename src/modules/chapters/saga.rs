//! Creating a course together with its attachments.
//!
//! The backend has no endpoint that takes a course and its files at once, so a
//! submission is a short saga:
//!
//! 1. `POST /courses` with the chapter id,
//! 2. `POST /courses/{id}/upload` for the summary PDF, if any,
//! 3. the same for the exercises PDF, if any.
//!
//! Files are checked before step 1 so that a missing or oversized file never
//! leaves a course behind. When an upload still fails, the course is deleted
//! again unless compensation is switched off, in which case it is kept and the
//! error names it.

use std::fmt;

use tracing::{error, info, instrument, warn};
use tutordesk_config::UploadConfig;
use tutordesk_core::AppError;
use tutordesk_models::chapters::CourseFileKind;
use tutordesk_models::{ChapterId, Course, CourseId, CreateCourseDto};

use crate::api::CourseFile;
use crate::modules::chapters::ChapterStore;

#[derive(Debug, Clone)]
pub struct CourseSubmission {
    pub chapter_id: ChapterId,
    pub course: CreateCourseDto,
    /// Uploaded in order.
    pub files: Vec<CourseFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStep {
    Create,
    Upload(CourseFileKind),
}

impl fmt::Display for SubmissionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create course"),
            Self::Upload(kind) => write!(f, "upload {}", kind.field_name()),
        }
    }
}

pub struct CourseSaga<'a> {
    store: &'a ChapterStore,
    config: &'a UploadConfig,
}

impl<'a> CourseSaga<'a> {
    pub fn new(store: &'a ChapterStore, config: &'a UploadConfig) -> Self {
        Self { store, config }
    }

    /// Runs every step and returns the course as it stands after the last
    /// upload.
    #[instrument(skip_all, fields(chapter = %submission.chapter_id, files = submission.files.len()))]
    pub async fn run(&self, submission: CourseSubmission) -> Result<Course, AppError> {
        for file in &submission.files {
            file.check(self.config)
                .await
                .map_err(|e| self.store.record_failure(e, "submit_course"))?;
        }

        let chapter_id = submission.chapter_id;
        let mut course = self
            .store
            .add_child(chapter_id, &submission.course)
            .await
            .map_err(|e| e.context(SubmissionStep::Create))?;
        info!(course = %course.id, "Course created");

        for file in &submission.files {
            match self.store.upload_course_file(chapter_id, course.id, file).await {
                Ok(updated) => course = updated,
                Err(err) => {
                    let err = self.recover(chapter_id, course.id, file.kind, err).await;
                    return Err(self.store.record_failure(err, "submit_course"));
                }
            }
        }

        Ok(course)
    }

    async fn recover(
        &self,
        chapter_id: ChapterId,
        course_id: CourseId,
        kind: CourseFileKind,
        err: AppError,
    ) -> AppError {
        let step = SubmissionStep::Upload(kind);
        let cause = err.user_message();

        if !self.config.compensate_on_failure {
            warn!(course = %course_id, %step, "Step failed, keeping partially created course");
            return err
                .context(format!("{} failed, course {} kept", step, course_id))
                .with_user_message(format!(
                    "تم إنشاء الدرس رقم {} لكن فشل رفع ملف ال{}: {}",
                    course_id,
                    kind.label(),
                    cause
                ));
        }

        match self.store.remove_child(chapter_id, course_id).await {
            Ok(()) => {
                info!(course = %course_id, %step, "Rolled back course after failed step");
                err.context(format!("{} failed, course {} deleted", step, course_id))
                    .with_user_message(format!(
                        "فشل رفع ملف ال{} ولم يتم حفظ الدرس: {}",
                        kind.label(),
                        cause
                    ))
            }
            Err(rollback) => {
                error!(
                    course = %course_id,
                    %step,
                    error = %rollback,
                    "Rollback failed, course left orphaned"
                );
                err.context(format!(
                    "{} failed and deleting course {} also failed: {}",
                    step, course_id, rollback
                ))
                .with_user_message(format!(
                    "فشل رفع ملف ال{} وتعذر حذف الدرس رقم {}، يرجى حذفه يدويًا",
                    kind.label(),
                    course_id
                ))
            }
        }
    }
}
