//! Domain types and models

pub mod config;
pub mod draft;
pub mod event_type;
pub mod genre;
pub mod zoom;

// Re-export the working set
pub use config::{CalendarSourceConfig, KokuchiConfig, TemplateSourceConfig};
pub use draft::{DraftField, EventDraft};
pub use event_type::{EventCategory, EventPhase, EventType};
pub use genre::{GenreCatalog, GenreMarker};
pub use zoom::{FixedZoomCatalog, FixedZoomEntry, ZoomAccess};
