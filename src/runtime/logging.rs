//! File-backed `log` sink for the terminal host.
//!
//! Once raw mode is on, anything written to stderr lands in the middle of the
//! card, so the mount analytics event, render-pass stats and dropped intents
//! are appended to a log file instead.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LogSettings;

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    /// Open `path` for appending, creating its directory if needed.
    pub fn open(path: &Path, level: LevelFilter) -> io::Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        // Nowhere better to report a failed write.
        let _ = writeln!(
            file,
            "{secs} {:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.file.lock().unwrap_or_else(|e| e.into_inner()).flush();
    }
}

/// Install the file logger as the global `log` sink. Returns the log path,
/// or `None` when logging stays off (level `off`, no home directory, or the
/// file cannot be opened; the latter two are reported on stderr).
pub fn install(settings: &LogSettings) -> Option<PathBuf> {
    let level = settings.level_filter();
    if level == LevelFilter::Off {
        return None;
    }
    let Some(path) = settings.path() else {
        eprintln!("schedcard: no log file location, logging disabled");
        return None;
    };
    let logger = match FileLogger::open(&path, level) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("schedcard: cannot open log file {}: {e}", path.display());
            return None;
        }
    };
    if let Err(e) = log::set_boxed_logger(Box::new(logger)) {
        eprintln!("schedcard: {e}");
        return None;
    }
    log::set_max_level(level);
    Some(path)
}
