//! Application context - wires infra loaders into core services.

use kokuchi_core::{draft_from_remote, AnnouncementEngine, EventSource};
use kokuchi_domain::types::{EventDraft, FixedZoomCatalog, GenreCatalog, KokuchiConfig};
use kokuchi_domain::{KokuchiError, Result};
use kokuchi_infra::FileEventSource;

/// Loaded configuration and the services built from it.
///
/// Catalogs are read once here and stay immutable for the rest of the run;
/// every command works off this one context.
pub struct AppContext {
    pub config: KokuchiConfig,
    pub genres: GenreCatalog,
    pub engine: AnnouncementEngine,
}

impl AppContext {
    /// Load configuration and build the announcement services.
    ///
    /// # Errors
    /// Returns an error when the config file or the template catalog cannot
    /// be read; a missing config file is not an error, defaults apply.
    pub fn load() -> Result<Self> {
        let config = kokuchi_infra::config::load()?;
        let templates = kokuchi_infra::resolve_catalog(&config.templates)?;
        let genres = GenreCatalog::with_overrides(config.genres.clone());
        let fixed_zoom = FixedZoomCatalog::with_overrides(config.zoom.clone());
        let engine = AnnouncementEngine::new(templates, fixed_zoom, genres.clone());
        Ok(Self { config, genres, engine })
    }

    /// Fetch calendar events and convert them into drafts.
    ///
    /// `path_override` wins over the configured `calendar.events_path`.
    ///
    /// # Errors
    /// Returns an error when no events file is known or the feed cannot be
    /// read or decoded.
    pub fn fetch_drafts(&self, path_override: Option<&str>) -> Result<Vec<EventDraft>> {
        let path = path_override
            .or(self.config.calendar.events_path.as_deref())
            .ok_or_else(|| {
                KokuchiError::Config(
                    "No events file: pass --events or set calendar.events_path".to_string(),
                )
            })?;
        let source = FileEventSource::new(path);
        let events = source.fetch_events()?;
        tracing::info!(path, count = events.len(), "Fetched calendar events");
        Ok(events.iter().map(|event| draft_from_remote(event, &self.genres)).collect())
    }
}
