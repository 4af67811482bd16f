use std::path::PathBuf;

use crate::schedule::{ScheduleByDay, ScheduleSource};

/// Pick the payload path: CLI argument, then `SCHEDCARD_SCHEDULE_PATH`, then
/// `data.schedule_path` from the config. Blank values are skipped.
pub fn schedule_path(
    cli: Option<String>,
    env: Option<String>,
    configured: Option<&str>,
) -> Option<PathBuf> {
    cli.into_iter()
        .chain(env)
        .chain(configured.map(str::to_string))
        .find(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Fetch the week from `source`. A failing or missing source yields an empty
/// week so the card still renders its day blocks.
pub fn load_schedule<S: ScheduleSource>(source: Option<&S>) -> ScheduleByDay {
    match source.map(|s| s.get_schedule()) {
        Some(Ok(schedule)) => schedule,
        Some(Err(e)) => {
            eprintln!("schedcard: failed to load schedule, showing an empty week: {e}");
            ScheduleByDay::new()
        }
        None => ScheduleByDay::new(),
    }
}
