use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use super::load::default_log_path;

/// Everything the schedule card host can be told from `config.toml` or
/// `SCHEDCARD__SECTION__KEY` variables. Any missing section or key keeps its
/// default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub card: CardSettings,
    pub ui: UiSettings,
    pub navigation: NavigationSettings,
    pub data: DataSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CardSettings {
    /// Card identity, also used by the host's dashboard layout.
    pub id: String,
    /// Card title. The mount analytics event is named after it.
    pub title: String,
    /// Whether Saturday and Sunday get a day block on the compact card.
    /// The full schedule screen always shows all seven days.
    pub show_weekends: bool,
    /// How day blocks are labelled.
    pub day_labels: DayLabelStyle,
    /// Line shown under the label of a day with no meetings.
    pub empty_day_text: String,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            id: "schedule".to_string(),
            title: "Class Schedule".to_string(),
            show_weekends: true,
            day_labels: DayLabelStyle::Code,
            empty_day_text: "No classes".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayLabelStyle {
    /// `MO`, `TU`, ...
    #[serde(alias = "short")]
    Code,
    /// `Monday`, `Tuesday`, ...
    #[serde(alias = "long", alias = "name")]
    Full,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Label of the button leading to the full schedule.
    pub full_schedule_label: String,
    /// Symbol drawn in front of the walking-directions affordance.
    pub walk_symbol: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ This week ~ ".to_string(),
            full_schedule_label: "View Full Schedule".to_string(),
            walk_symbol: "🚶".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Walking-directions URL. `{lat}` and `{lon}` are substituted.
    pub url_template: String,
    /// Program used to open the URL (e.g. `xdg-open`). When unset the URL
    /// is only shown in the status line.
    pub open_command: Option<String>,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            url_template:
                "https://www.google.com/maps/dir/?api=1&destination={lat},{lon}&travelmode=walking"
                    .to_string(),
            open_command: None,
        }
    }
}

impl NavigationSettings {
    /// Fill the URL template with a destination.
    pub fn directions_url(&self, lat: f64, lon: f64) -> String {
        self.url_template
            .replace("{lat}", &lat.to_string())
            .replace("{lon}", &lon.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Schedule payload file. Overridden by the first CLI argument.
    pub schedule_path: Option<String>,
}

/// Where the host writes its log. The terminal belongs to the card while it
/// runs, so records never go to stderr.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file. Defaults to `$XDG_STATE_HOME/schedcard/schedcard.log`.
    pub file: Option<String>,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl LogSettings {
    pub fn path(&self) -> Option<PathBuf> {
        match &self.file {
            Some(file) => Some(PathBuf::from(file)),
            None => default_log_path(),
        }
    }

    /// Unknown level names fall back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.level.trim()).unwrap_or(LevelFilter::Info)
    }
}
