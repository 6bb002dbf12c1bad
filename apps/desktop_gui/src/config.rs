//! Desktop settings: `settings.toml`, then `APP__*` environment overrides.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::SortKey;

pub const SETTINGS_FILE: &str = "settings.toml";
const SETTINGS_DIR: &str = "mindful_mentors";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    /// Prefills the login identifier field.
    pub default_identifier: String,
    pub seed_dir: Option<PathBuf>,
    pub log_filter: String,
    pub default_sort: SortKey,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "MindfulMentors".into(),
            default_identifier: String::new(),
            seed_dir: None,
            log_filter: "info".into(),
            default_sort: SortKey::Rating,
        }
    }
}

/// `explicit` wins; otherwise the per-user config directory is tried. A missing
/// file yields defaults, a malformed one is an error.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    let path = explicit.map(Path::to_path_buf).or_else(default_settings_path);
    let mut settings = match path {
        Some(path) => read_settings_file(&path, explicit.is_some())?,
        None => Settings::default(),
    };
    settings.apply_env_overrides(|name| std::env::var(name).ok());
    Ok(settings)
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

fn read_settings_file(path: &Path, required: bool) -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings '{}'", path.display()));
        }
    };
    toml::from_str(&raw).with_context(|| format!("invalid settings file '{}'", path.display()))
}

impl Settings {
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("APP__WINDOW_TITLE") {
            self.window_title = v;
        }
        if let Some(v) = lookup("APP__DEFAULT_IDENTIFIER") {
            self.default_identifier = v;
        }
        if let Some(v) = lookup("APP__SEED_DIR") {
            self.seed_dir = (!v.trim().is_empty()).then(|| PathBuf::from(v));
        }
        if let Some(v) = lookup("APP__LOG_FILTER") {
            self.log_filter = v;
        }
        if let Some(v) = lookup("APP__DEFAULT_SORT") {
            match v.parse::<SortKey>() {
                Ok(sort) => self.default_sort = sort,
                Err(err) => tracing::warn!("ignoring APP__DEFAULT_SORT: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn missing_optional_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings =
            read_settings_file(&dir.path().join(SETTINGS_FILE), false).expect("defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_settings_file(&dir.path().join("nope.toml"), true).expect_err("missing");
        assert!(format!("{err:#}").contains("nope.toml"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(
            &path,
            "window_title = \"Mentors (dev)\"\ndefault_sort = \"experience\"\n",
        )
        .expect("write");
        let settings = read_settings_file(&path, true).expect("settings");
        assert_eq!(settings.window_title, "Mentors (dev)");
        assert_eq!(settings.default_sort, SortKey::Experience);
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.seed_dir, None);
    }

    #[test]
    fn malformed_file_is_reported_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "default_sort = \"loudest\"\n").expect("write");
        let err = read_settings_file(&path, true).expect_err("bad sort");
        assert!(format!("{err:#}").contains("invalid settings file"));
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("APP__WINDOW_TITLE", "Override"),
            ("APP__DEFAULT_IDENTIFIER", "pat@example.org"),
            ("APP__SEED_DIR", "/srv/seed"),
            ("APP__DEFAULT_SORT", "reviews"),
        ]);
        let mut settings = Settings::default();
        settings.apply_env_overrides(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(settings.window_title, "Override");
        assert_eq!(settings.default_identifier, "pat@example.org");
        assert_eq!(settings.seed_dir, Some(PathBuf::from("/srv/seed")));
        assert_eq!(settings.default_sort, SortKey::Reviews);
    }

    #[test]
    fn unparseable_sort_override_is_ignored() {
        let mut settings = Settings::default();
        settings.apply_env_overrides(|name| {
            (name == "APP__DEFAULT_SORT").then(|| "shiniest".to_string())
        });
        assert_eq!(settings.default_sort, SortKey::Rating);
    }
}
