use std::io;
use std::sync::mpsc;
use std::time::Duration;

use dualtrack_tui::{
    parse_input_events, App, Component, EnvConfig, EventLog, InlineRenderer, ProcessTerminal,
    RuntimeEvent, Theme, TickDriver,
};
use workflow_scenario::Scenario;
use workflow_sim::DualTrackSimulator;

fn load_scenario(config: &EnvConfig) -> io::Result<Scenario> {
    match &config.scenario_path {
        Some(path) => Scenario::from_json_file(path).map_err(io::Error::other),
        None => Ok(Scenario::builtin()),
    }
}

fn main() -> io::Result<()> {
    let config = EnvConfig::from_env();
    let scenario = load_scenario(&config)?;
    let simulator = DualTrackSimulator::new(scenario).map_err(io::Error::other)?;

    let theme = Theme::new(!config.no_color);
    let log = match &config.write_log {
        Some(path) => EventLog::open(path),
        None => EventLog::disabled(),
    };
    let mut app = App::new(simulator, theme, log);

    let (events_tx, events_rx) = mpsc::channel();
    let mut terminal = ProcessTerminal::new();
    terminal.start(events_tx.clone())?;
    let mut driver = TickDriver::spawn(events_tx, Duration::from_millis(config.tick_ms));

    let mut renderer = InlineRenderer::new();
    let mut stdout = io::stdout();
    let frame = app.render(terminal.columns() as usize);
    renderer.render(&frame, &mut stdout)?;

    // Single consumer: input, ticks, and resizes are applied in arrival
    // order, so each tick sees a settled app state.
    while let Ok(event) = events_rx.recv() {
        let dirty = match event {
            RuntimeEvent::Input(data) => {
                for input in parse_input_events(&data) {
                    app.handle_event(&input);
                }
                true
            }
            RuntimeEvent::Tick(delta) => app.on_tick(delta),
            RuntimeEvent::Resize => true,
        };
        if app.should_exit() {
            break;
        }
        if dirty {
            let frame = app.render(terminal.columns() as usize);
            renderer.render(&frame, &mut stdout)?;
        }
    }

    driver.stop();
    terminal.stop()?;
    // Leave the last frame in the scrollback and the shell prompt below it.
    println!();
    Ok(())
}
