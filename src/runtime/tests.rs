use super::event_loop::{
    EventLoopState, HostCard, handle_key_event, handle_nav_cmd, open_detached, render_pass,
};
use super::logging::{FileLogger, install};
use super::startup::{load_schedule, schedule_path};
use crate::app::{App, Screen};
use crate::card::{
    Analytics, ChannelNavigator, LogAnalytics, NavCmd, Navigator, ScheduleCard,
};
use crate::config::{CardSettings, LogSettings, NavigationSettings};
use crate::error::{ScheduleError, ScheduleResult};
use crate::schedule::{
    Coordinates, DayKey, MeetingRecord, ScheduleByDay, ScheduleSource, StaticSource,
    TomlFileSource,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{Level, LevelFilter, Log, Record};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc;

#[derive(Clone, Default)]
struct Recorder {
    mounts: Rc<RefCell<usize>>,
    intents: Rc<RefCell<Vec<NavCmd>>>,
}

impl Analytics for Recorder {
    fn log_card_mounted(&self, _name: &str) {
        *self.mounts.borrow_mut() += 1;
    }
}

impl Navigator for Recorder {
    fn navigate_to_full_schedule(&self) {
        self.intents.borrow_mut().push(NavCmd::FullSchedule);
    }

    fn launch_external_navigation(&self, lat: f64, lon: f64) {
        self.intents.borrow_mut().push(NavCmd::Walk { lat, lon });
    }
}

struct FailingSource;

impl ScheduleSource for FailingSource {
    fn get_schedule(&self) -> ScheduleResult<ScheduleByDay> {
        Err(ScheduleError::UnknownDay("XX".into()))
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn week() -> ScheduleByDay {
    let mut s = ScheduleByDay::new();
    s.push(
        DayKey::Mo,
        MeetingRecord {
            course_title: "Indoors".into(),
            ..MeetingRecord::default()
        },
    );
    s.push(
        DayKey::Tu,
        MeetingRecord {
            course_title: "Walkable".into(),
            coordinates: Some(Coordinates { lat: 3.0, lon: 4.0 }),
            ..MeetingRecord::default()
        },
    );
    s
}

fn setup() -> (App, ScheduleCard<Recorder, Recorder>, Recorder) {
    let rec = Recorder::default();
    let mut card = ScheduleCard::new(CardSettings::default(), rec.clone(), rec.clone());
    let mut app = App::new(week());
    render_pass(&mut app, &mut card);
    (app, card, rec)
}

#[test]
fn schedule_path_prefers_cli_then_env_then_config() {
    assert_eq!(
        schedule_path(Some("a.toml".into()), Some("b.toml".into()), Some("c.toml")),
        Some(PathBuf::from("a.toml"))
    );
    assert_eq!(
        schedule_path(None, Some("b.toml".into()), Some("c.toml")),
        Some(PathBuf::from("b.toml"))
    );
    assert_eq!(
        schedule_path(Some("  ".into()), None, Some("c.toml")),
        Some(PathBuf::from("c.toml"))
    );
    assert_eq!(schedule_path(None, None, None), None);
}

#[test]
fn load_schedule_falls_back_to_an_empty_week() {
    assert!(load_schedule(Some(&FailingSource)).is_empty());
    assert!(load_schedule::<TomlFileSource>(None).is_empty());
    assert_eq!(load_schedule(Some(&StaticSource(week()))), week());
}

#[test]
fn walk_key_forwards_only_for_walkable_meetings() {
    let (mut app, mut card, rec) = setup();
    let mut state = EventLoopState::new();

    assert!(!handle_key_event(key('w'), &mut app, &mut card, None, &mut state));
    assert!(rec.intents.borrow().is_empty());
    assert_eq!(
        app.status.as_deref(),
        Some("No walking directions for this class")
    );

    handle_key_event(key('j'), &mut app, &mut card, None, &mut state);
    handle_key_event(key('w'), &mut app, &mut card, None, &mut state);
    assert_eq!(
        *rec.intents.borrow(),
        vec![NavCmd::Walk { lat: 3.0, lon: 4.0 }]
    );
}

#[test]
fn full_schedule_key_goes_through_the_navigator() {
    let (mut app, mut card, rec) = setup();
    let mut state = EventLoopState::new();

    handle_key_event(key('f'), &mut app, &mut card, None, &mut state);
    assert_eq!(*rec.intents.borrow(), vec![NavCmd::FullSchedule]);
    // The screen only changes once the host acts on the intent.
    assert_eq!(app.screen, Screen::Card);

    handle_nav_cmd(NavCmd::FullSchedule, &NavigationSettings::default(), &mut app);
    assert_eq!(app.screen, Screen::FullSchedule);

    handle_key_event(
        KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
        &mut app,
        &mut card,
        None,
        &mut state,
    );
    assert_eq!(app.screen, Screen::Card);
}

#[test]
fn walk_intent_without_open_command_shows_the_url() {
    let mut app = App::new(ScheduleByDay::new());
    let nav = NavigationSettings {
        url_template: "geo:{lat},{lon}".into(),
        open_command: None,
    };
    handle_nav_cmd(NavCmd::Walk { lat: 1.5, lon: -2.0 }, &nav, &mut app);
    assert_eq!(app.status.as_deref(), Some("Walking directions: geo:1.5,-2"));
}

#[test]
fn gg_and_g_jump_between_ends() {
    let (mut app, mut card, _) = setup();
    let mut state = EventLoopState::new();

    handle_key_event(key('G'), &mut app, &mut card, None, &mut state);
    assert_eq!(app.selected, 1);
    handle_key_event(key('g'), &mut app, &mut card, None, &mut state);
    assert_eq!(app.selected, 1);
    handle_key_event(key('g'), &mut app, &mut card, None, &mut state);
    assert_eq!(app.selected, 0);
}

#[test]
fn reload_rerenders_from_the_file_and_keeps_the_mount_event_single() {
    let (mut app, mut card, rec) = setup();
    let mut state = EventLoopState::new();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("week.toml");
    std::fs::write(
        &path,
        "[[meeting]]\nday = \"MO\"\ncourse_title = \"Indoors\"\n\n[[meeting]]\nday = \"TU\"\ncourse_title = \"Moved\"\n",
    )
    .unwrap();
    let source = TomlFileSource::new(&path);

    handle_key_event(key('r'), &mut app, &mut card, Some(&source), &mut state);
    assert_eq!(app.status.as_deref(), Some("Reloaded"));
    let stats = app.last_stats.unwrap();
    assert_eq!(stats.pass, 2);
    assert_eq!(stats.rows_painted, 1);
    assert_eq!(stats.days_relaid, 0);
    assert_eq!(*rec.mounts.borrow(), 1);
}

#[test]
fn reload_without_source_keeps_the_week() {
    let (mut app, mut card, _) = setup();
    let mut state = EventLoopState::new();
    handle_key_event(key('r'), &mut app, &mut card, None, &mut state);
    assert_eq!(app.schedule, week());
    assert_eq!(app.last_stats.unwrap().pass, 1);
}

#[test]
fn q_quits_from_both_screens() {
    let (mut app, mut card, _) = setup();
    let mut state = EventLoopState::new();
    assert!(handle_key_event(key('q'), &mut app, &mut card, None, &mut state));
    app.show_full_schedule();
    assert!(handle_key_event(key('q'), &mut app, &mut card, None, &mut state));
}

// The only test that installs the global logger.
#[test]
fn host_card_mount_event_lands_in_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("schedcard.log");
    let settings = LogSettings {
        file: Some(path.display().to_string()),
        level: "info".into(),
    };
    assert_eq!(install(&settings), Some(path.clone()));

    let (nav_tx, _nav_rx) = mpsc::channel();
    let mut card: HostCard = ScheduleCard::new(
        CardSettings::default(),
        LogAnalytics,
        ChannelNavigator::new(nav_tx),
    );
    let mut app = App::new(week());
    render_pass(&mut app, &mut card);
    log::logger().flush();

    let logged = fs::read_to_string(&path).unwrap();
    let mount_lines: Vec<&str> = logged
        .lines()
        .filter(|l| l.ends_with("Card Mounted: Class Schedule"))
        .collect();
    assert_eq!(mount_lines.len(), 1, "{logged}");
    assert!(mount_lines[0].contains("INFO"));
}

#[test]
fn file_logger_skips_records_below_its_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedcard.log");
    let logger = FileLogger::open(&path, LevelFilter::Warn).unwrap();

    logger.log(
        &Record::builder()
            .level(Level::Info)
            .target("schedcard")
            .args(format_args!("pass 1"))
            .build(),
    );
    logger.log(
        &Record::builder()
            .level(Level::Warn)
            .target("schedcard")
            .args(format_args!("intent dropped"))
            .build(),
    );
    logger.flush();

    let logged = fs::read_to_string(&path).unwrap();
    assert!(!logged.contains("pass 1"));
    assert!(logged.contains("WARN  schedcard: intent dropped"));
}

#[test]
fn log_level_off_installs_nothing() {
    let settings = LogSettings {
        file: Some("/nonexistent/schedcard.log".into()),
        level: "off".into(),
    };
    assert_eq!(install(&settings), None);
}

#[cfg(unix)]
#[test]
fn opener_is_reaped_once_it_exits() {
    let waiter = open_detached("true", "geo:1,2").unwrap();
    let status = waiter.join().unwrap().unwrap();
    assert!(status.success());
}

#[test]
fn missing_opener_is_reported_in_the_status() {
    let mut app = App::new(ScheduleByDay::new());
    let nav = NavigationSettings {
        url_template: "geo:{lat},{lon}".into(),
        open_command: Some("/nonexistent/schedcard-opener".into()),
    };
    handle_nav_cmd(NavCmd::Walk { lat: 1.0, lon: 2.0 }, &nav, &mut app);
    let status = app.status.unwrap();
    assert!(status.starts_with("Could not run /nonexistent/schedcard-opener"));
    assert!(status.ends_with("(geo:1,2)"));
}
