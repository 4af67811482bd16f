use std::{env, path::PathBuf, str::FromStr};

use log::LevelFilter;

use super::schema::Settings;

impl Settings {
    /// Layer the card settings: `SCHEDCARD__SECTION__KEY` variables over the
    /// config file (when there is one) over the defaults.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SCHEDCARD")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Reject settings the card cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        let template = &self.navigation.url_template;
        if !template.contains("{lat}") || !template.contains("{lon}") {
            return Err("navigation.url_template must contain {lat} and {lon}".to_string());
        }
        if self.card.title.trim().is_empty() {
            return Err("card.title must not be empty".to_string());
        }
        if LevelFilter::from_str(self.log.level.trim()).is_err() {
            return Err(format!("log.level {:?} is not a log level", self.log.level));
        }
        Ok(())
    }
}

/// `SCHEDCARD_CONFIG_PATH` when set, else `schedcard/config.toml` in the
/// user's config directory.
pub fn resolve_config_path() -> Option<PathBuf> {
    match env::var_os("SCHEDCARD_CONFIG_PATH") {
        Some(p) => Some(PathBuf::from(p)),
        None => default_config_path(),
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("schedcard").join("config.toml"))
}

/// `schedcard/schedcard.log` under `$XDG_STATE_HOME` (or `~/.local/state`).
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("schedcard").join("schedcard.log"))
}

fn xdg_dir(var: &str, under_home: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        return Some(PathBuf::from(dir));
    }
    env::var_os("HOME").map(|home| PathBuf::from(home).join(under_home))
}
