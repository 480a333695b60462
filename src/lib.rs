//! # Tutordesk
//!
//! Client library and terminal dashboard for the tutoring platform's REST
//! backend: teachers, students, chapters with their courses, scheduled
//! sessions, payments and attendance check-ins.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── api/             # HTTP client, envelope decoding, multipart uploads
//! ├── store/           # Client-side list state per resource
//! ├── modules/         # Feature screens
//! │   ├── dashboard/   # Summary counts and upcoming sessions
//! │   ├── teachers/
//! │   ├── students/
//! │   ├── chapters/    # Chapters, nested courses, course upload saga
//! │   ├── sessions/
//! │   ├── payments/
//! │   └── check_ins/
//! ├── ui/              # Prompts, forms, tables, error boundary
//! └── cli/             # clap definitions and command dispatch
//! ```
//!
//! Each feature module follows the same layout:
//!
//! - `mod.rs`: Store alias and re-exports
//! - `form.rs`: Collects and validates a create or update payload
//! - `view.rs`: Renders the store state as text
//! - `service.rs`: Operations beyond plain CRUD, where the resource has any
//!
//! ## Data Flow
//!
//! ```text
//! Form --validated DTO--> Store --request--> ApiClient --> backend
//!                           ^                    |
//!                           +----decoded entity--+
//! ```
//!
//! Stores replace their item list only after the backend accepts a change,
//! so a failed request leaves the previous list in place and records a
//! user-facing error message instead.
//!
//! ## Configuration
//!
//! ```bash
//! API_BASE_URL=http://localhost:8000/api
//! API_TOKEN=...
//! COUNT_CACHE_TTL_SECONDS=60
//! UPLOAD_COMPENSATE_ON_FAILURE=true
//! LOG_LEVEL=warn
//! ```
//!
//! ## Modules
//!
//! - [`api`]: Backend HTTP client
//! - [`cli`]: Command-line interface
//! - [`modules`]: Feature screens
//! - [`state`]: Shared application state
//! - [`store`]: Resource and nested-resource stores
//! - [`ui`]: Terminal input and output helpers

pub mod api;
pub mod cli;
pub mod modules;
pub mod state;
pub mod store;
pub mod ui;

// Re-export workspace crates for convenience
pub use tutordesk_cache;
pub use tutordesk_config;
pub use tutordesk_core;
pub use tutordesk_models;
