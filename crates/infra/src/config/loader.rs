//! Configuration loader
//!
//! Loads application configuration from the environment or from files.
//!
//! ## Loading Strategy
//! 1. `KOKUCHI_CONFIG`, when set, names the config file directly
//! 2. Otherwise probes multiple paths for config files
//! 3. When no file exists anywhere, built-in defaults apply
//! 4. Supports TOML and JSON formats
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./kokuchi.toml` or `./kokuchi.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. `../kokuchi.{toml,json}` and `../../kokuchi.{toml,json}`
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use kokuchi_domain::{KokuchiConfig, KokuchiError, Result};

/// Load configuration with automatic fallback strategy
///
/// `KOKUCHI_CONFIG` names the file explicitly when set. Otherwise the
/// standard locations are probed; with no file anywhere the built-in
/// defaults are returned, so a config file is never required.
///
/// # Errors
/// Returns `KokuchiError::Config` if a named or probed file cannot be
/// read or parsed.
pub fn load() -> Result<KokuchiConfig> {
    if let Ok(path) = std::env::var("KOKUCHI_CONFIG") {
        return load_from_file(Some(PathBuf::from(path)));
    }
    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No config file found, using built-in defaults");
            Ok(KokuchiConfig::default())
        }
    }
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both TOML and JSON formats (detected by file extension).
///
/// # Errors
/// Returns `KokuchiError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<KokuchiConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(KokuchiError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            KokuchiError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| KokuchiError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.toml` or `.json`); files
/// without an extension are treated as TOML.
fn parse_config(contents: &str, path: &Path) -> Result<KokuchiConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| KokuchiError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| KokuchiError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(KokuchiError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory and its first two parents, then
/// the executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("kokuchi.toml"),
            cwd.join("kokuchi.json"),
            cwd.join("config.toml"),
            cwd.join("config.json"),
            cwd.join("../kokuchi.toml"),
            cwd.join("../kokuchi.json"),
            cwd.join("../../kokuchi.toml"),
            cwd.join("../../kokuchi.json"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("kokuchi.toml"),
                exe_dir.join("kokuchi.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("config.json"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use kokuchi_domain::types::{EventCategory, EventPhase, EventType};
    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn write_config(contents: &str, extension: &str) -> PathBuf {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[templates]
path = "templates/custom.csv"

[calendar]
events_path = "fetched_events.json"

[[genres]]
keyword = "カフェ"
marker = "☕"

[[zoom]]
event_type = "特別講義（事前告知）"
zoom_url = "https://example.zoom.us/j/123"
meeting_id = "123 456 7890"
passcode = "4321"
"#;
        let path = write_config(toml_content, "toml");

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from TOML file, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.templates.path.as_deref(), Some("templates/custom.csv"));
        assert_eq!(config.calendar.events_path.as_deref(), Some("fetched_events.json"));
        assert_eq!(config.genres.len(), 1);
        assert_eq!(config.genres[0].keyword, "カフェ");
        assert_eq!(config.zoom.len(), 1);
        assert_eq!(
            config.zoom[0].event_type,
            EventType::new(EventCategory::SpecialLecture, EventPhase::AdvanceNotice)
        );
        assert_eq!(config.zoom[0].access.passcode, "4321");

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "templates": { "path": "tpl.csv" },
            "genres": [ { "keyword": "旅行", "marker": "✈" } ]
        }"#;
        let path = write_config(json_content, "json");

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from JSON file");

        let config = result.unwrap();
        assert_eq!(config.templates.path.as_deref(), Some("tpl.csv"));
        assert_eq!(config.genres[0].marker, "✈");
        // Untouched sections default.
        assert!(config.zoom.is_empty());
        assert_eq!(config.calendar.events_path, None);

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let path = write_config("", "toml");

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config, KokuchiConfig::default());

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/kokuchi.toml")));
        assert!(result.is_err(), "Should fail when file not found");

        let err = result.unwrap_err();
        assert!(matches!(err, KokuchiError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let path = write_config("[templates\npath = ", "toml");

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid TOML");

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("templates: {}", &PathBuf::from("kokuchi.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    #[test]
    fn test_parse_config_defaults_to_toml_without_extension() {
        let result = parse_config("[templates]\npath = \"x.csv\"", &PathBuf::from("kokuchirc"));
        assert!(result.is_ok(), "Extensionless files should parse as TOML");
        assert_eq!(result.unwrap().templates.path.as_deref(), Some("x.csv"));
    }

    #[test]
    fn test_load_honors_env_named_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        let path = write_config("[templates]\npath = \"from_env.csv\"", "toml");
        std::env::set_var("KOKUCHI_CONFIG", &path);

        let result = load();
        assert!(result.is_ok(), "Should load the env-named file, error: {:?}", result.err());
        assert_eq!(result.unwrap().templates.path.as_deref(), Some("from_env.csv"));

        // Cleanup
        std::env::remove_var("KOKUCHI_CONFIG");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_env_named_missing_file_is_an_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("KOKUCHI_CONFIG", "/nonexistent/kokuchi.toml");

        let result = load();
        assert!(result.is_err(), "An explicitly named missing file should not fall back");

        // Cleanup
        std::env::remove_var("KOKUCHI_CONFIG");
    }
}
