// config.rs: log-type configuration and cache/loader
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::RwLock;
use std::time::SystemTime;
use tracing::debug;

use crate::error::ExtractError;

/// One special-parameter column, extracted verbatim (after content cleaning)
/// from every record of this log type.
#[derive(Deserialize, Debug, Clone)]
pub struct Component {
    pub column: String,
}

/// Column layout of one log source. The column-name defaults follow the
/// logpai structured-output convention (`LineId`, `Content`, `EventId`,
/// `EventTemplate`, `ParameterList`), so a config only needs to name what
/// deviates plus its `components`.
#[derive(Deserialize, Debug, Clone)]
pub struct LogTypeConfig {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default = "default_counter_column")]
    pub counter_column: String,
    #[serde(default = "default_content_column")]
    pub content_column: String,
    #[serde(default = "default_event_id_column")]
    pub event_id_column: String,
    #[serde(default = "default_template_column")]
    pub template_column: String,
    #[serde(default = "default_parameter_list_column")]
    pub parameter_list_column: String,
    /// Column holding the originating device id; absent means the source has
    /// no per-record device and the field stays empty.
    #[serde(default)]
    pub device_column: Option<String>,
    /// Column holding the as-recorded timestamp; not reparsed anywhere.
    #[serde(default)]
    pub date_time_column: Option<String>,
}

fn default_counter_column() -> String {
    "LineId".to_string()
}
fn default_content_column() -> String {
    "Content".to_string()
}
fn default_event_id_column() -> String {
    "EventId".to_string()
}
fn default_template_column() -> String {
    "EventTemplate".to_string()
}
fn default_parameter_list_column() -> String {
    "ParameterList".to_string()
}

impl Default for LogTypeConfig {
    fn default() -> Self {
        Self {
            components: Vec::new(),
            counter_column: default_counter_column(),
            content_column: default_content_column(),
            event_id_column: default_event_id_column(),
            template_column: default_template_column(),
            parameter_list_column: default_parameter_list_column(),
            device_column: None,
            date_time_column: None,
        }
    }
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub path: String,
    pub mtime: Option<SystemTime>,
    pub log_type: LogTypeConfig,
}

pub static CONFIG_CACHE: Lazy<RwLock<Option<LoadedConfig>>> = Lazy::new(|| RwLock::new(None));

fn read_mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

pub fn load_config(config_path: &str) -> Result<LoadedConfig, ExtractError> {
    let data = fs::read_to_string(config_path).map_err(|source| ExtractError::ReadFile {
        path: config_path.to_string(),
        source,
    })?;
    let log_type: LogTypeConfig =
        serde_json::from_str(&data).map_err(|source| ExtractError::ConfigParse {
            path: config_path.to_string(),
            source,
        })?;
    let mtime = read_mtime(Path::new(config_path));
    debug!(path = config_path, components = log_type.components.len(), "loaded config");
    Ok(LoadedConfig { path: config_path.to_string(), mtime, log_type })
}

/// Load the config into the process-wide cache unless the cached copy is
/// current (same path, unchanged mtime).
pub fn ensure_config_loaded(config_path: &str) -> Result<(), ExtractError> {
    let mut guard = CONFIG_CACHE.write().unwrap();
    let need_reload = match guard.as_ref() {
        None => true,
        Some(loaded) => {
            if loaded.path != config_path {
                true
            } else {
                read_mtime(Path::new(config_path)) != loaded.mtime
            }
        }
    };
    if need_reload {
        *guard = Some(load_config(config_path)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_config, LogTypeConfig};
    use std::fs;

    #[test]
    fn test_defaults_follow_logpai_columns() {
        let cfg = LogTypeConfig::default();
        assert_eq!(cfg.counter_column, "LineId");
        assert_eq!(cfg.content_column, "Content");
        assert_eq!(cfg.event_id_column, "EventId");
        assert_eq!(cfg.template_column, "EventTemplate");
        assert_eq!(cfg.parameter_list_column, "ParameterList");
        assert!(cfg.components.is_empty());
        assert!(cfg.device_column.is_none());
    }

    #[test]
    fn test_load_config_with_overrides() {
        let json = r#"{
          "components": [
            { "column": "User" },
            { "column": "Pid" }
          ],
          "template_column": "Template",
          "device_column": "Host"
        }"#;
        let path = std::env::temp_dir().join("logline_core_test_config.json");
        fs::write(&path, json).unwrap();

        let loaded = load_config(path.to_str().unwrap()).expect("config load");
        let cfg = loaded.log_type;
        assert_eq!(cfg.template_column, "Template");
        assert_eq!(cfg.device_column.as_deref(), Some("Host"));
        // config order is preserved
        let columns: Vec<&str> = cfg.components.iter().map(|c| c.column.as_str()).collect();
        assert_eq!(columns, vec!["User", "Pid"]);
        // untouched fields keep their defaults
        assert_eq!(cfg.counter_column, "LineId");
    }

    #[test]
    fn test_ensure_config_loaded_tracks_path() {
        use super::{ensure_config_loaded, CONFIG_CACHE};

        let path_a = std::env::temp_dir().join("logline_core_test_cache_a.json");
        let path_b = std::env::temp_dir().join("logline_core_test_cache_b.json");
        fs::write(&path_a, r#"{ "template_column": "TplA" }"#).unwrap();
        fs::write(&path_b, r#"{ "template_column": "TplB" }"#).unwrap();

        ensure_config_loaded(path_a.to_str().unwrap()).expect("load a");
        {
            let guard = CONFIG_CACHE.read().unwrap();
            let loaded = guard.as_ref().expect("cache populated");
            assert_eq!(loaded.log_type.template_column, "TplA");
        }

        // a different path forces a reload
        ensure_config_loaded(path_b.to_str().unwrap()).expect("load b");
        let guard = CONFIG_CACHE.read().unwrap();
        let loaded = guard.as_ref().expect("cache populated");
        assert_eq!(loaded.log_type.template_column, "TplB");
    }

    #[test]
    fn test_load_config_rejects_bad_json() {
        let path = std::env::temp_dir().join("logline_core_test_bad_config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
