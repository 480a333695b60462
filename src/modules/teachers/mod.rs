pub mod form;
pub mod view;

use tutordesk_models::Teacher;

use crate::store::ResourceStore;

pub use form::TeacherForm;

pub type TeacherStore = ResourceStore<Teacher>;
