//! Application configuration.

use serde::{Deserialize, Serialize};

use super::genre::GenreMarker;
use super::zoom::FixedZoomEntry;

/// Application configuration.
///
/// Every section is optional in the file; missing sections fall back to the
/// built-in catalogs, so running without a config file is fully supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KokuchiConfig {
    pub templates: TemplateSourceConfig,
    pub calendar: CalendarSourceConfig,
    /// Extra genre markers, checked before the built-in table.
    pub genres: Vec<GenreMarker>,
    /// Fixed Zoom overrides, replacing built-in rooms per event type.
    pub zoom: Vec<FixedZoomEntry>,
}

/// Template source configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSourceConfig {
    /// Path to the template CSV; probed locations apply when unset.
    pub path: Option<String>,
}

/// Calendar feed configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSourceConfig {
    /// Path to a JSON file of fetched calendar events.
    pub events_path: Option<String>,
}
