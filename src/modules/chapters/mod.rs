//! Chapters and the courses nested inside them.

pub mod form;
pub mod saga;
pub mod service;
pub mod view;

pub use form::{ChapterForm, CourseForm};
pub use saga::{CourseSaga, CourseSubmission, SubmissionStep};
pub use service::ChapterStore;
