pub mod service;
pub mod view;

pub use service::{DashboardService, DashboardSummary};
