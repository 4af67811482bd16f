use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("schedule parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown day key: {0:?}")]
    UnknownDay(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
