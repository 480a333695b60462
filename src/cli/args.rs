//! Command-line arguments for each screen.
//!
//! Field flags pre-fill the matching form; anything left out is prompted for.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Subcommand};
use tutordesk_core::PaginationParams;
use tutordesk_models::{
    Branch, ChapterFilters, ChapterId, CheckInFilters, CheckInId, CourseId, PaymentFilters,
    PaymentId, PaymentType, SessionFilters, SessionId, SessionStatus, StudentFilters, StudentId,
    SubscriptionStatus, TeacherFilters, TeacherId, YearTarget,
};

use crate::modules::chapters::{ChapterForm, CourseForm};
use crate::modules::check_ins::CheckInForm;
use crate::modules::payments::PaymentForm;
use crate::modules::sessions::SessionForm;
use crate::modules::students::StudentForm;
use crate::modules::teachers::TeacherForm;
use crate::ui::form::parse_datetime;

fn datetime_arg(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_datetime(raw).ok_or_else(|| format!("'{}' is not a date/time (YYYY-MM-DD HH:MM)", raw))
}

#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Records per page (max 100)
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl PageArgs {
    pub fn params(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            per_page: self.per_page,
        }
        .clamped()
    }
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

// Teachers

#[derive(Subcommand, Debug, Clone)]
pub enum TeacherAction {
    /// List teachers
    List(TeacherListArgs),
    /// Show one teacher
    Show { id: TeacherId },
    /// Add a teacher
    Create(TeacherArgs),
    /// Edit a teacher
    Update {
        id: TeacherId,
        #[command(flatten)]
        fields: TeacherArgs,
    },
    /// Delete a teacher
    Delete {
        id: TeacherId,
        #[command(flatten)]
        confirm: DeleteArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct TeacherListArgs {
    /// Search by name or phone
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(long)]
    pub module: Option<String>,
    #[arg(long)]
    pub grade: Option<YearTarget>,
    #[arg(long)]
    pub branch: Option<Branch>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl TeacherListArgs {
    pub fn filters(&self) -> TeacherFilters {
        TeacherFilters {
            search: self.search.clone(),
            module: self.module.clone(),
            grade: self.grade,
            branch: self.branch,
            pagination: self.page.params(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct TeacherArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Subject taught
    #[arg(long)]
    pub module: Option<String>,
    #[arg(long)]
    pub price_per_session: Option<f64>,
    #[arg(long)]
    pub monthly_price: Option<f64>,
    /// Repeat for several grades
    #[arg(long = "grade")]
    pub grades: Vec<YearTarget>,
    /// Repeat for several branches
    #[arg(long = "branch")]
    pub branches: Vec<Branch>,
}

impl From<&TeacherArgs> for TeacherForm {
    fn from(args: &TeacherArgs) -> Self {
        Self {
            name: args.name.clone(),
            phone: args.phone.clone(),
            module: args.module.clone(),
            price_per_session: args.price_per_session,
            monthly_price: args.monthly_price,
            grades: args.grades.clone(),
            branches: args.branches.clone(),
        }
    }
}

// Students

#[derive(Subcommand, Debug, Clone)]
pub enum StudentAction {
    /// List students
    List(StudentListArgs),
    /// Add a student
    Create(StudentArgs),
    /// Edit a student
    Update {
        id: StudentId,
        #[command(flatten)]
        fields: StudentArgs,
        #[arg(long)]
        subscription: Option<SubscriptionStatus>,
    },
    /// Delete a student
    Delete {
        id: StudentId,
        #[command(flatten)]
        confirm: DeleteArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct StudentListArgs {
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(long)]
    pub year_target: Option<YearTarget>,
    #[arg(long)]
    pub subscription: Option<SubscriptionStatus>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl StudentListArgs {
    pub fn filters(&self) -> StudentFilters {
        StudentFilters {
            search: self.search.clone(),
            year_target: self.year_target,
            subscription_status: self.subscription,
            pagination: self.page.params(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct StudentArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub parent_phone: Option<String>,
    #[arg(long)]
    pub year_target: Option<YearTarget>,
    #[arg(long)]
    pub branch: Option<Branch>,
}

impl StudentArgs {
    pub fn form(&self, subscription: Option<SubscriptionStatus>) -> StudentForm {
        StudentForm {
            name: self.name.clone(),
            phone: self.phone.clone(),
            parent_phone: self.parent_phone.clone(),
            year_target: self.year_target,
            branch: self.branch,
            subscription_status: subscription,
        }
    }
}

// Chapters and courses

#[derive(Subcommand, Debug, Clone)]
pub enum ChapterAction {
    /// List chapters with their courses
    List(ChapterListArgs),
    /// Add a chapter
    Create(ChapterArgs),
    /// Edit a chapter
    Update {
        id: ChapterId,
        #[command(flatten)]
        fields: ChapterArgs,
    },
    /// Delete a chapter and its courses
    Delete {
        id: ChapterId,
        #[command(flatten)]
        confirm: DeleteArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ChapterListArgs {
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(long)]
    pub year_target: Option<YearTarget>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl ChapterListArgs {
    pub fn filters(&self) -> ChapterFilters {
        ChapterFilters {
            year_target: self.year_target,
            search: self.search.clone(),
            pagination: self.page.params(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ChapterArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub year_target: Option<YearTarget>,
}

impl From<&ChapterArgs> for ChapterForm {
    fn from(args: &ChapterArgs) -> Self {
        Self {
            title: args.title.clone(),
            description: args.description.clone(),
            year_target: args.year_target,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum CourseAction {
    /// Add a course to a chapter, uploading its PDFs
    Add {
        chapter_id: ChapterId,
        #[command(flatten)]
        fields: CourseArgs,
        /// Keep the course if an upload fails instead of deleting it
        #[arg(long)]
        keep_on_failure: bool,
    },
    /// Edit a course
    Update {
        chapter_id: ChapterId,
        course_id: CourseId,
        #[command(flatten)]
        fields: CourseArgs,
    },
    /// Upload or replace a course's PDFs
    Upload {
        chapter_id: ChapterId,
        course_id: CourseId,
        #[arg(long)]
        summary: Option<PathBuf>,
        #[arg(long)]
        exercises: Option<PathBuf>,
    },
    /// Remove a course from a chapter
    Remove {
        chapter_id: ChapterId,
        course_id: CourseId,
        #[command(flatten)]
        confirm: DeleteArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CourseArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub video_url: Option<String>,
    /// Length in minutes
    #[arg(long)]
    pub duration: Option<i64>,
    /// Summary PDF
    #[arg(long)]
    pub summary: Option<PathBuf>,
    /// Exercises PDF
    #[arg(long)]
    pub exercises: Option<PathBuf>,
}

impl From<&CourseArgs> for CourseForm {
    fn from(args: &CourseArgs) -> Self {
        Self {
            title: args.title.clone(),
            description: args.description.clone(),
            video_url: args.video_url.clone(),
            duration: args.duration,
            summary: args.summary.clone(),
            exercises: args.exercises.clone(),
        }
    }
}

// Sessions

#[derive(Subcommand, Debug, Clone)]
pub enum SessionAction {
    /// List sessions
    List(SessionListArgs),
    /// Schedule a session
    Create(SessionArgs),
    /// Edit a session
    Update {
        id: SessionId,
        #[command(flatten)]
        fields: SessionArgs,
    },
    /// Mark a session as completed
    Complete { id: SessionId },
    /// Cancel a session
    Cancel { id: SessionId },
    /// Delete a session
    Delete {
        id: SessionId,
        #[command(flatten)]
        confirm: DeleteArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SessionListArgs {
    #[arg(long)]
    pub teacher: Option<TeacherId>,
    #[arg(long)]
    pub status: Option<SessionStatus>,
    /// Only sessions on this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl SessionListArgs {
    pub fn filters(&self) -> SessionFilters {
        SessionFilters {
            teacher_id: self.teacher,
            status: self.status,
            date: self.date,
            pagination: self.page.params(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    #[arg(long)]
    pub teacher: Option<TeacherId>,
    #[arg(long)]
    pub module: Option<String>,
    /// Start time (YYYY-MM-DD HH:MM, UTC)
    #[arg(long, value_parser = datetime_arg)]
    pub at: Option<DateTime<Utc>>,
    /// Length in minutes
    #[arg(long)]
    pub duration: Option<i64>,
}

impl From<&SessionArgs> for SessionForm {
    fn from(args: &SessionArgs) -> Self {
        Self {
            teacher_id: args.teacher,
            module: args.module.clone(),
            scheduled_at: args.at,
            duration_minutes: args.duration,
            status: None,
        }
    }
}

// Payments

#[derive(Subcommand, Debug, Clone)]
pub enum PaymentAction {
    /// List payments with totals
    List(PaymentListArgs),
    /// Record a payment
    Create(PaymentArgs),
    /// Edit a payment
    Update {
        id: PaymentId,
        #[command(flatten)]
        fields: PaymentArgs,
    },
    /// Delete a payment
    Delete {
        id: PaymentId,
        #[command(flatten)]
        confirm: DeleteArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct PaymentListArgs {
    #[arg(long)]
    pub teacher: Option<TeacherId>,
    #[arg(long)]
    pub student: Option<StudentId>,
    #[arg(long = "type")]
    pub payment_type: Option<PaymentType>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl PaymentListArgs {
    pub fn filters(&self) -> PaymentFilters {
        PaymentFilters {
            teacher_id: self.teacher,
            student_id: self.student,
            payment_type: self.payment_type,
            pagination: self.page.params(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PaymentArgs {
    #[arg(long)]
    pub amount: Option<f64>,
    #[arg(long = "type")]
    pub payment_type: Option<PaymentType>,
    #[arg(long)]
    pub teacher: Option<TeacherId>,
    #[arg(long)]
    pub student: Option<StudentId>,
    /// Payment time (YYYY-MM-DD HH:MM, UTC), defaults to now on the server
    #[arg(long, value_parser = datetime_arg)]
    pub paid_at: Option<DateTime<Utc>>,
    #[arg(long)]
    pub note: Option<String>,
}

impl From<&PaymentArgs> for PaymentForm {
    fn from(args: &PaymentArgs) -> Self {
        Self {
            amount: args.amount,
            payment_type: args.payment_type,
            teacher_id: args.teacher,
            student_id: args.student,
            paid_at: args.paid_at,
            note: args.note.clone(),
        }
    }
}

// Check-ins

#[derive(Subcommand, Debug, Clone)]
pub enum CheckInAction {
    /// List check-ins
    List(CheckInListArgs),
    /// Check a student in
    Create {
        #[arg(long)]
        student: Option<StudentId>,
        #[arg(long)]
        session: Option<SessionId>,
    },
    /// Delete a check-in
    Delete {
        id: CheckInId,
        #[command(flatten)]
        confirm: DeleteArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckInListArgs {
    #[arg(long)]
    pub student: Option<StudentId>,
    #[arg(long)]
    pub session: Option<SessionId>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl CheckInListArgs {
    pub fn filters(&self) -> CheckInFilters {
        CheckInFilters {
            student_id: self.student,
            session_id: self.session,
            date: self.date,
            pagination: self.page.params(),
        }
    }
}

impl CheckInAction {
    pub(crate) fn form(student: Option<StudentId>, session: Option<SessionId>) -> CheckInForm {
        CheckInForm {
            student_id: student,
            session_id: session,
        }
    }
}
