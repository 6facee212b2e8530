//! Monthly overview assembly

pub mod service;

pub use service::MonthlyOverviewBuilder;
