pub mod client;
pub mod upload;

pub use client::{ApiClient, REQUEST_ID_HEADER};
pub use upload::CourseFile;
