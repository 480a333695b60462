//! # Tutordesk Core
//!
//! Core types, errors, and utilities shared by every Tutordesk crate.
//!
//! - [`errors`]: The single error type and its user-facing message rules
//! - [`envelope`]: Normalization of the backend's inconsistent response shapes
//! - [`pagination`]: Pagination query parameters
//! - [`serde`]: Lenient deserializers for ids and numbers sent as strings
//!
//! # Example
//!
//! ```ignore
//! use tutordesk_core::envelope::decode_list;
//! use tutordesk_core::errors::AppError;
//!
//! let page = decode_list::<Teacher>(body)?;
//! println!("{} teachers (total {:?})", page.items.len(), page.total);
//! ```

pub mod envelope;
pub mod errors;
pub mod pagination;
pub mod serde;

// Re-export commonly used types at crate root
pub use envelope::{Page, decode, decode_list, unwrap_envelope};
pub use errors::{AppError, ErrorKind};
pub use pagination::PaginationParams;
