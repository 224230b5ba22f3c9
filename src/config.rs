// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Riphus", "riphus"));

/// Day zero for objective progress.
pub const DEFAULT_EPOCH_START: (i32, u32, u32) = (2025, 1, 1);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub epoch_start: NaiveDate,
    pub budget_alerts: bool,
    pub currency_symbol: String,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let (y, m, d) = DEFAULT_EPOCH_START;
        Self {
            epoch_start: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            budget_alerts: true,
            currency_symbol: "€".to_string(),
            log_json: false,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|proj| proj.config_dir().join("config.json"))
}

/// Explicit path wins; otherwise the platform config file is used when present.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return read_settings(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => read_settings(&path),
        _ => Ok(Settings::default()),
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"budget_alerts": false}}"#).unwrap();

        let settings = load(Some(file.path())).unwrap();
        assert!(!settings.budget_alerts);
        assert_eq!(settings.epoch_start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(settings.currency_symbol, "€");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Read config at"));
    }

    #[test]
    fn malformed_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid config at"));
    }
}
