//! Chapter and course models.
//!
//! A chapter owns an ordered list of courses. The backend embeds the courses
//! in every chapter it returns, and the client keeps that nesting in memory.

use serde::{Deserialize, Serialize};
use tutordesk_core::PaginationParams;
use tutordesk_core::serde::{deserialize_optional_i64_lenient, deserialize_optional_string};
use validator::Validate;

use crate::ids::{ChapterId, CourseId};
use crate::resource::{ParentResource, Resource};
use crate::value_types::YearTarget;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub year_target: Option<YearTarget>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Chapter {
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }
}

impl Resource for Chapter {
    type Id = ChapterId;
    const PATH: &'static str = "chapters";
    const LABEL: &'static str = "chapter";

    fn id(&self) -> ChapterId {
        self.id
    }
}

impl ParentResource for Chapter {
    type Child = Course;
    const PARENT_KEY: &'static str = "chapter_id";

    fn children(&self) -> &[Course] {
        &self.courses
    }

    fn children_mut(&mut self) -> &mut Vec<Course> {
        &mut self.courses
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<ChapterId>,
    pub title: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "video",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub video_url: Option<String>,
    /// Length in minutes.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_i64_lenient"
    )]
    pub duration: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub summary_pdf: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub exercises_pdf: Option<String>,
}

impl Course {
    /// A course carrying only the fields every payload must have.
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            chapter_id: None,
            title: title.into(),
            description: None,
            video_url: None,
            duration: None,
            summary_pdf: None,
            exercises_pdf: None,
        }
    }
}

impl Resource for Course {
    type Id = CourseId;
    const PATH: &'static str = "courses";
    const LABEL: &'static str = "course";

    fn id(&self) -> CourseId {
        self.id
    }
}

/// Which attachment a course file upload fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseFileKind {
    Summary,
    Exercises,
}

impl CourseFileKind {
    /// Multipart part name the backend expects.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Exercises => "exercises",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "ملخص",
            Self::Exercises => "تمارين",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct CreateChapterDto {
    #[validate(length(min = 1, max = 200, message = "عنوان الفصل مطلوب"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub year_target: Option<YearTarget>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateChapterDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "عنوان الفصل مطلوب"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_target: Option<YearTarget>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 200, message = "عنوان الدرس مطلوب"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "رابط الفيديو غير صالح"))]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "المدة يجب أن تكون دقيقة واحدة على الأقل"))]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateCourseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "عنوان الدرس مطلوب"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "رابط الفيديو غير صالح"))]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChapterFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_target: Option<YearTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}
