use super::*;
use crate::render::RenderStats;
use crate::schedule::ScheduleByDay;

fn stats(pass: u64) -> RenderStats {
    RenderStats {
        pass,
        ..RenderStats::default()
    }
}

#[test]
fn new_app_starts_on_the_card() {
    let app = App::new(ScheduleByDay::new());
    assert_eq!(app.screen, Screen::Card);
    assert_eq!(app.selected, 0);
    assert!(!app.has_meetings());
    assert!(app.last_stats.is_none());
}

#[test]
fn next_prev_wrap_over_meeting_rows() {
    let mut app = App::new(ScheduleByDay::new());
    app.record_render(stats(1), 3);

    app.prev();
    assert_eq!(app.selected, 2);
    app.next();
    assert_eq!(app.selected, 0);
    app.next();
    app.next();
    assert_eq!(app.selected, 2);

    app.select_first();
    assert_eq!(app.selected, 0);
    app.select_last();
    assert_eq!(app.selected, 2);
}

#[test]
fn navigation_without_meetings_is_a_noop() {
    let mut app = App::new(ScheduleByDay::new());
    app.record_render(stats(1), 0);
    app.next();
    app.prev();
    app.select_last();
    assert_eq!(app.selected, 0);
}

#[test]
fn record_render_clamps_selection_after_shrink() {
    let mut app = App::new(ScheduleByDay::new());
    app.record_render(stats(1), 5);
    app.select_last();
    app.record_render(stats(2), 2);
    assert_eq!(app.selected, 1);
    assert_eq!(app.last_stats.map(|s| s.pass), Some(2));
}

#[test]
fn screens_switch_both_ways() {
    let mut app = App::new(ScheduleByDay::new());
    app.show_full_schedule();
    assert_eq!(app.screen, Screen::FullSchedule);
    app.back_to_card();
    assert_eq!(app.screen, Screen::Card);
}
