pub mod form;
pub mod view;

use tutordesk_models::Student;

use crate::store::ResourceStore;

pub use form::StudentForm;

pub type StudentStore = ResourceStore<Student>;
