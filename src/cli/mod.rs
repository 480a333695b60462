//! Command-line interface for the dashboard.
//!
//! Each top-level subcommand is one screen of the dashboard. List actions
//! render a table, mutations print a confirmation line.

pub mod args;
pub mod handlers;

use clap::{Parser, Subcommand};

use args::{
    ChapterAction, CheckInAction, CourseAction, PaymentAction, SessionAction, StudentAction,
    TeacherAction,
};

pub use handlers::run;

#[derive(Parser, Debug)]
#[command(name = "tutordesk")]
#[command(about = "Tutordesk - manage teachers, students, courses and payments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides API_BASE_URL)
    #[arg(long, global = true, env = "API_BASE_URL")]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Never prompt; missing fields are left blank and fail validation
    #[arg(long, global = true)]
    pub no_input: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show summary counts and upcoming sessions
    Dashboard,
    /// Manage teachers
    Teachers {
        #[command(subcommand)]
        action: TeacherAction,
    },
    /// Manage students
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Manage chapters
    Chapters {
        #[command(subcommand)]
        action: ChapterAction,
    },
    /// Manage the courses inside a chapter
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },
    /// Manage scheduled sessions
    Sessions {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Manage payments
    Payments {
        #[command(subcommand)]
        action: PaymentAction,
    },
    /// Manage attendance check-ins
    CheckIns {
        #[command(subcommand)]
        action: CheckInAction,
    },
}
