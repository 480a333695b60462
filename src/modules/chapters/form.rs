use std::path::PathBuf;

use tutordesk_config::UploadConfig;
use tutordesk_core::AppError;
use tutordesk_models::{
    Chapter, ChapterId, Course, CourseId, CreateChapterDto, CreateCourseDto, UpdateChapterDto,
    UpdateCourseDto, YearTarget,
};

use crate::api::CourseFile;
use crate::modules::chapters::saga::{CourseSaga, CourseSubmission};
use crate::modules::chapters::ChapterStore;
use crate::modules::require_changes;
use crate::ui::{FormInput, Prompter, validated};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChapterForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year_target: Option<YearTarget>,
}

impl ChapterForm {
    pub fn collect(self, prompter: &mut dyn Prompter) -> Result<CreateChapterDto, AppError> {
        let mut input = FormInput::new(prompter);

        validated(CreateChapterDto {
            title: input.text("عنوان الفصل", self.title)?,
            description: input.optional_text("الوصف", self.description)?,
            year_target: input.choose_optional("الصف الدراسي", self.year_target)?,
        })
    }

    pub async fn submit(
        self,
        store: &ChapterStore,
        prompter: &mut dyn Prompter,
    ) -> Result<Chapter, AppError> {
        let dto = self.collect(prompter)?;
        store.create(&dto).await
    }

    pub fn changes(self) -> Result<UpdateChapterDto, AppError> {
        require_changes(UpdateChapterDto {
            title: self.title,
            description: self.description,
            year_target: self.year_target,
        })
    }

    pub async fn submit_update(
        self,
        store: &ChapterStore,
        id: ChapterId,
    ) -> Result<Chapter, AppError> {
        let dto = self.changes()?;
        store.update(id, &dto).await
    }
}

/// The add/edit course form, including its two optional PDF attachments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub duration: Option<i64>,
    pub summary: Option<PathBuf>,
    pub exercises: Option<PathBuf>,
}

impl CourseForm {
    pub fn collect(
        self,
        chapter_id: ChapterId,
        prompter: &mut dyn Prompter,
    ) -> Result<CourseSubmission, AppError> {
        let mut input = FormInput::new(prompter);

        let course = validated(CreateCourseDto {
            title: input.text("عنوان الدرس", self.title)?,
            description: input.optional_text("الوصف", self.description)?,
            video_url: input.optional_text("رابط الفيديو", self.video_url)?,
            duration: input.optional_number("المدة بالدقائق", self.duration)?,
        })?;

        let summary = match self.summary {
            Some(path) => Some(path),
            None => input.optional_text("ملف الملخص (PDF)", None)?.map(PathBuf::from),
        };
        let exercises = match self.exercises {
            Some(path) => Some(path),
            None => input.optional_text("ملف التمارين (PDF)", None)?.map(PathBuf::from),
        };

        let files = summary
            .map(CourseFile::summary)
            .into_iter()
            .chain(exercises.map(CourseFile::exercises))
            .collect();

        Ok(CourseSubmission {
            chapter_id,
            course,
            files,
        })
    }

    /// Creates the course and uploads its files as one submission.
    pub async fn submit(
        self,
        chapter_id: ChapterId,
        store: &ChapterStore,
        config: &UploadConfig,
        prompter: &mut dyn Prompter,
    ) -> Result<Course, AppError> {
        let submission = self.collect(chapter_id, prompter)?;
        CourseSaga::new(store, config).run(submission).await
    }

    /// Field changes for an existing course. Attachments are uploaded
    /// separately.
    pub fn changes(self) -> Result<UpdateCourseDto, AppError> {
        require_changes(UpdateCourseDto {
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            duration: self.duration,
        })
    }

    pub async fn submit_update(
        self,
        store: &ChapterStore,
        chapter_id: ChapterId,
        course_id: CourseId,
    ) -> Result<Course, AppError> {
        let dto = self.changes()?;
        store.update_child(chapter_id, course_id, &dto).await
    }
}
