//! Announcement generation domain

pub mod service;
pub mod templates;

pub use service::{AnnouncementEngine, ValidationReport};
pub use templates::TemplateCatalog;
