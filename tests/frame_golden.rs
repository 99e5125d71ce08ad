//! Frame-level checks over the full app with the built-in scenario.
//!
//! Rendered with color off so assertions are byte-stable.

use dualtrack_tui::{parse_input_events, App, Component, EventLog, Theme};
use workflow_scenario::Scenario;
use workflow_sim::DualTrackSimulator;

fn builtin_app() -> App {
    let simulator = DualTrackSimulator::new(Scenario::builtin()).expect("builtin scenario");
    App::new(simulator, Theme::new(false), EventLog::disabled())
}

fn feed(app: &mut App, data: &str) {
    for event in parse_input_events(data) {
        app.handle_event(&event);
    }
}

#[test]
fn idle_frame_shows_both_tracks_and_the_controls() {
    let mut app = builtin_app();
    let lines = app.render(100);

    let frame = lines.join("\n");
    assert!(frame.contains("Dual-Track Delivery"));
    assert!(frame.contains("Traditional SDLC"));
    assert!(frame.contains("Agentic SDLC"));
    assert!(frame.contains("17 steps, 1m 22s"));
    assert!(frame.contains("14 steps, 0m 18.5s"));
    assert!(frame.contains("waiting, press space to start"));
    assert!(frame.contains("space play"));
}

#[test]
fn running_frame_tracks_the_current_step_of_each_track() {
    let mut app = builtin_app();
    feed(&mut app, " ");
    app.on_tick(1.0);

    let frame = app.render(100).join("\n");
    assert!(frame.contains("Step 1 of 17"));
    assert!(frame.contains("Step 1 of 14"));
    assert!(frame.contains("▶ playing"));
}

#[test]
fn full_run_ends_with_the_speedup_summary() {
    let mut app = builtin_app();
    feed(&mut app, " ");
    for _ in 0..90 {
        app.on_tick(1.0);
    }

    let frame = app.render(100).join("\n");
    assert!(frame.contains("Both tracks complete."));
    assert!(frame.contains("~4.4x faster"));
    assert!(frame.contains("traditional 1m 22s vs agentic 0m 18.5s"));
    assert!(frame.contains("space play"));
}

#[test]
fn reset_frame_matches_the_initial_frame() {
    let mut app = builtin_app();
    let initial = app.render(100);

    feed(&mut app, " ");
    for _ in 0..5 {
        app.on_tick(1.0);
    }
    feed(&mut app, " r");

    assert_eq!(app.render(100), initial);
}
