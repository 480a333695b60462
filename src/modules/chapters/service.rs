use tracing::instrument;
use tutordesk_core::AppError;
use tutordesk_models::{Chapter, ChapterId, Course, CourseId};

use crate::api::CourseFile;
use crate::store::NestedStore;

pub type ChapterStore = NestedStore<Chapter>;

impl NestedStore<Chapter> {
    /// Uploads one attachment of an existing course and swaps the returned
    /// course into its chapter.
    #[instrument(skip(self, file), fields(kind = file.kind.field_name()))]
    pub async fn upload_course_file(
        &self,
        chapter_id: ChapterId,
        course_id: CourseId,
        file: &CourseFile,
    ) -> Result<Course, AppError> {
        let course = self
            .client()
            .upload_course_file(chapter_id, course_id, file)
            .await
            .map_err(|e| self.parents().fail(e, "upload_course_file"))?;

        self.replace_child(chapter_id, course.clone());
        Ok(course)
    }

    /// Records a failure that did not come from a single store call.
    pub(crate) fn record_failure(&self, err: AppError, operation: &'static str) -> AppError {
        self.parents().fail(err, operation)
    }
}
