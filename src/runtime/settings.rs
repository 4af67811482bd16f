use crate::config::Settings;

/// Settings for this run. A broken config never keeps the card from showing
/// the week: the problem goes to stderr (the terminal is still ours) and the
/// defaults are used.
pub fn load_settings() -> Settings {
    let loaded = Settings::load().map_err(|e| e.to_string());
    match loaded.and_then(|s| s.validate().map(|()| s)) {
        Ok(settings) => settings,
        Err(msg) => {
            eprintln!("schedcard: ignoring config ({msg}), using defaults");
            Settings::default()
        }
    }
}
