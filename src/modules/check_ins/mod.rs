pub mod form;
pub mod view;

use tutordesk_models::CheckIn;

use crate::store::ResourceStore;

pub use form::CheckInForm;

pub type CheckInStore = ResourceStore<CheckIn>;
