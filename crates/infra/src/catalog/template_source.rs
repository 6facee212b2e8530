//! Template CSV source
//!
//! Reads announcement templates from a CSV file with `event_type` and
//! `template` columns. Templates are multi-line strings kept in quoted
//! cells; spreadsheet exports with a UTF-8 BOM are accepted.
//!
//! ## File Locations
//! When no explicit path is configured, the loader probes (in order):
//! 1. The `KOKUCHI_TEMPLATES_PATH` environment variable
//! 2. `./templates/templates.csv` (current working directory)
//! 3. `templates/templates.csv` next to the executable

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::Deserialize;

use kokuchi_core::TemplateCatalog;
use kokuchi_domain::types::{EventType, TemplateSourceConfig};
use kokuchi_domain::{KokuchiError, Result};

/// One row of the template CSV. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct TemplateRow {
    #[serde(default)]
    event_type: String,
    #[serde(default)]
    template: String,
}

/// Load a template catalog from one CSV file.
///
/// # Errors
/// Returns `KokuchiError::Catalog` when the file cannot be read or a row
/// cannot be decoded.
pub fn load_catalog(path: &Path) -> Result<TemplateCatalog> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        KokuchiError::Catalog(format!("Failed to read template file {}: {e}", path.display()))
    })?;
    parse_catalog(&raw)
}

/// Parse template CSV content into a catalog.
///
/// Rows with an empty `event_type` or `template` are skipped, and later
/// rows for the same event type overwrite earlier ones. A row naming an
/// unrecognized event type is skipped with a warning so one typo cannot
/// take down the rest of the catalog.
///
/// # Errors
/// Returns `KokuchiError::Catalog` when a row is structurally invalid.
pub fn parse_catalog(contents: &str) -> Result<TemplateCatalog> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(contents.as_bytes());
    let mut catalog = TemplateCatalog::new();
    for (index, row) in reader.deserialize::<TemplateRow>().enumerate() {
        // Header occupies line one.
        let row = row
            .map_err(|e| KokuchiError::Catalog(format!("Invalid template row {}: {e}", index + 2)))?;
        let event_type_raw = row.event_type.trim();
        let template = row.template.trim();
        if event_type_raw.is_empty() || template.is_empty() {
            continue;
        }
        let Ok(event_type) = event_type_raw.parse::<EventType>() else {
            tracing::warn!(
                event_type = %event_type_raw,
                "Skipping template row with unrecognized event type"
            );
            continue;
        };
        catalog.insert(event_type, template);
    }
    Ok(catalog)
}

/// Resolve and load the template catalog for a configuration.
///
/// An explicit configured path must load; without one the standard
/// locations are probed, and if none exists the catalog starts empty.
///
/// # Errors
/// Returns `KokuchiError::Catalog` when an existing file fails to load.
pub fn resolve_catalog(config: &TemplateSourceConfig) -> Result<TemplateCatalog> {
    if let Some(path) = config.path.as_deref() {
        return load_catalog(Path::new(path));
    }
    match probe_template_paths() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading announcement templates");
            load_catalog(&path)
        }
        None => {
            tracing::warn!("No template file found, starting with an empty catalog");
            Ok(TemplateCatalog::new())
        }
    }
}

/// Probe the standard template CSV locations.
///
/// # Returns
/// The first existing candidate, or `None` if no file exists.
#[must_use]
pub fn probe_template_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = std::env::var("KOKUCHI_TEMPLATES_PATH") {
        candidates.push(PathBuf::from(path));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("templates/templates.csv"));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("templates/templates.csv"));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}
