use std::env;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::card::{ChannelNavigator, LogAnalytics, NavCmd, ScheduleCard};

mod event_loop;
mod logging;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::install(&settings.log);

    let schedule_path = startup::schedule_path(
        env::args().nth(1),
        env::var("SCHEDCARD_SCHEDULE_PATH").ok(),
        settings.data.schedule_path.as_deref(),
    );
    let source = schedule_path.map(crate::schedule::TomlFileSource::new);
    let schedule = startup::load_schedule(source.as_ref());

    let (nav_tx, nav_rx) = mpsc::channel::<NavCmd>();
    let mut card = ScheduleCard::new(
        settings.card.clone(),
        LogAnalytics,
        ChannelNavigator::new(nav_tx),
    );

    let mut app = App::new(schedule);
    if let Some(source) = &source {
        app.set_source(source.path().display().to_string());
    }
    event_loop::render_pass(&mut app, &mut card);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();

        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &mut card,
            source.as_ref(),
            &nav_rx,
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
