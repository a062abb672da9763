//! Settings file discovery and loading.
//!
//! `.subflow.yml` files are collected from the starting directory up to
//! the filesystem root. Files closer to the starting directory override
//! files further up.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::config::schema::Settings;
use crate::error::{Result, SubflowError};

/// File name of a settings layer.
pub const SETTINGS_FILE: &str = ".subflow.yml";

/// Find every settings file from `start` upward, outermost first.
pub fn discover_settings(start: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(SETTINGS_FILE);
        if candidate.is_file() {
            found.push(candidate);
        }
        if !current.pop() {
            break;
        }
    }

    found.reverse();
    found
}

/// Load a single settings file as a raw YAML value.
///
/// An empty file is an empty mapping.
pub fn load_settings_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| SubflowError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(match value {
        Value::Null => Value::Mapping(Default::default()),
        other => other,
    })
}

/// Overlay `layer` onto `base`.
///
/// Mappings merge key by key, recursively. A null in `layer` removes the
/// key. Anything else in `layer` replaces the value in `base`.
pub fn merge_layer(base: &mut Value, layer: &Value) {
    match (base, layer) {
        (Value::Mapping(base), Value::Mapping(layer)) => {
            for (key, value) in layer {
                if value.is_null() {
                    base.remove(key);
                } else if let Some(existing) = base.get_mut(key) {
                    merge_layer(existing, value);
                } else {
                    base.insert(key.clone(), value.clone());
                }
            }
        }
        (base, layer) => *base = layer.clone(),
    }
}

/// Load settings.
///
/// With `override_path`, only that file is read. Otherwise every
/// discovered `.subflow.yml` from `start` upward is merged. Without any
/// file, defaults apply.
pub fn load_settings(start: &Path, override_path: Option<&Path>) -> Result<Settings> {
    let paths = match override_path {
        Some(path) => vec![path.to_path_buf()],
        None => discover_settings(start),
    };

    let mut merged = Value::Mapping(Default::default());
    for path in &paths {
        debug!("Loading settings from {}", path.display());
        merge_layer(&mut merged, &load_settings_value(path)?);
    }

    serde_yaml::from_value(merged).map_err(|e| SubflowError::ConfigParseError {
        path: paths.last().cloned().unwrap_or_else(|| start.join(SETTINGS_FILE)),
        message: e.to_string(),
    })
}
