pub mod form;
pub mod service;
pub mod view;

pub use form::SessionForm;
pub use service::{SessionStore, upcoming};
