//! # Tutordesk Models
//!
//! Domain models and DTOs for the tutoring platform API.
//!
//! Records (`Teacher`, `Chapter`, ...) are what the backend returns; they decode
//! leniently because the backend mixes numbers and numeric strings. DTOs
//! (`Create*Dto`, `Update*Dto`) are what forms submit; they carry `validator`
//! rules for required fields. `*Filters` become query strings on list calls.
//!
//! # Modules
//!
//! - [`ids`]: Typed integer ids
//! - [`value_types`]: Enumerated string values (year, branch, statuses)
//! - [`resource`]: Traits mapping a record type to its endpoint
//! - [`teachers`], [`students`], [`chapters`], [`sessions`], [`payments`],
//!   [`check_ins`]: Per-entity models

pub mod chapters;
pub mod check_ins;
pub mod ids;
pub mod payments;
pub mod resource;
pub mod sessions;
pub mod students;
pub mod teachers;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use chapters::{
    Chapter, ChapterFilters, Course, CourseFileKind, CreateChapterDto, CreateCourseDto,
    UpdateChapterDto, UpdateCourseDto,
};
pub use check_ins::{CheckIn, CheckInFilters, CreateCheckInDto};
pub use ids::{ChapterId, CheckInId, CourseId, PaymentId, SessionId, StudentId, TeacherId};
pub use payments::{CreatePaymentDto, Payment, PaymentFilters, UpdatePaymentDto};
pub use resource::{ParentResource, Resource};
pub use sessions::{CreateSessionDto, Session, SessionFilters, UpdateSessionDto};
pub use students::{CreateStudentDto, Student, StudentFilters, UpdateStudentDto};
pub use teachers::{CreateTeacherDto, Teacher, TeacherFilters, UpdateTeacherDto};
pub use value_types::{Branch, PaymentType, SessionStatus, SubscriptionStatus, YearTarget};
