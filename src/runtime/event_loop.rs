use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Screen};
use crate::card::{Analytics, ChannelNavigator, LogAnalytics, NavCmd, Navigator, ScheduleCard};
use crate::config::{self, NavigationSettings};
use crate::schedule::{ScheduleSource, TomlFileSource};
use crate::ui;

/// The card as mounted by the terminal host.
pub type HostCard = ScheduleCard<LogAnalytics, ChannelNavigator>;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self { pending_gg: false }
    }
}

/// Run one render pass of the card over the app's current week.
pub fn render_pass<A: Analytics, N: Navigator>(app: &mut App, card: &mut ScheduleCard<A, N>) {
    let stats = card.render(&app.schedule);
    app.record_render(stats, card.renderer().meeting_keys().len());
}

/// Main terminal event loop: handles input, intents forwarded by the card
/// and drawing. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    card: &mut HostCard,
    source: Option<&TomlFileSource>,
    nav_rx: &mpsc::Receiver<NavCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, card.renderer(), &settings.ui))?;

        while let Ok(cmd) = nav_rx.try_recv() {
            handle_nav_cmd(cmd, &settings.navigation, app);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, card, source, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Act on an intent the card forwarded.
pub fn handle_nav_cmd(cmd: NavCmd, nav: &NavigationSettings, app: &mut App) {
    match cmd {
        NavCmd::FullSchedule => app.show_full_schedule(),
        NavCmd::Walk { lat, lon } => {
            let url = nav.directions_url(lat, lon);
            match &nav.open_command {
                Some(program) => match open_detached(program, &url) {
                    Ok(_) => app.set_status(format!("Opening walking directions: {url}")),
                    Err(e) => app.set_status(format!("Could not run {program}: {e} ({url})")),
                },
                None => app.set_status(format!("Walking directions: {url}")),
            }
        }
    }
}

/// Run `program url` off the terminal. The child is waited on by a helper
/// thread so it never lingers as a zombie.
pub fn open_detached(
    program: &str,
    url: &str,
) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = Command::new(program)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || child.wait()))
}

/// Re-read the week from `source` and render it. Errors keep the current week.
fn reload<A: Analytics, N: Navigator>(
    app: &mut App,
    card: &mut ScheduleCard<A, N>,
    source: Option<&TomlFileSource>,
) {
    let Some(source) = source else {
        app.set_status("Nothing to reload: no schedule file");
        return;
    };
    match source.get_schedule() {
        Ok(schedule) => {
            app.set_schedule(schedule);
            render_pass(app, card);
            app.set_status("Reloaded");
        }
        Err(e) => app.set_status(format!("Reload failed: {e}")),
    }
}

/// Handle one key press. Returns `true` when the app should quit.
pub fn handle_key_event<A: Analytics, N: Navigator>(
    key: KeyEvent,
    app: &mut App,
    card: &mut ScheduleCard<A, N>,
    source: Option<&TomlFileSource>,
    state: &mut EventLoopState,
) -> bool {
    if app.screen == Screen::FullSchedule {
        state.pending_gg = false;
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => app.back_to_card(),
            KeyCode::Char('r') => reload(app, card, source),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            return true;
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.select_last();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.prev();
        }
        KeyCode::Char('w') => {
            state.pending_gg = false;
            let coordinates = ui::selected_meeting(app, card.renderer())
                .and_then(|(_, meeting)| meeting.coordinates);
            if !card.on_walk_pressed(coordinates) {
                app.set_status("No walking directions for this class");
            }
        }
        KeyCode::Char('f') | KeyCode::Enter => {
            state.pending_gg = false;
            card.on_view_full_schedule_pressed();
        }
        KeyCode::Char('r') => {
            state.pending_gg = false;
            reload(app, card, source);
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}
