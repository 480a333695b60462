pub mod form;
pub mod view;

use tutordesk_models::Payment;

use crate::store::ResourceStore;

pub use form::PaymentForm;

pub type PaymentStore = ResourceStore<Payment>;
