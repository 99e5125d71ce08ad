//! One column of the dual-track view.
//!
//! Renders a single track's header, progress, and current step card from the
//! shared simulator. The panel never mutates the simulator; key handling
//! lives in the app.

use std::cell::RefCell;
use std::rc::Rc;

use workflow_sim::{DualTrackSimulator, TrackId, TrackPhase};

use crate::core::component::Component;
use crate::core::text::truncate_to_width;
use crate::theme::{role_label, Theme};
use crate::widgets::{format_clock, format_seconds};

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

#[must_use]
pub fn track_title(track: TrackId) -> &'static str {
    match track {
        TrackId::Traditional => "Traditional SDLC",
        TrackId::Agentic => "Agentic SDLC",
    }
}

fn progress_bar(elapsed: f64, duration: f64, width: usize) -> String {
    let ratio = if duration > 0.0 {
        (elapsed / duration).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8());
    for _ in 0..filled {
        bar.push(BAR_FILLED);
    }
    for _ in filled..width {
        bar.push(BAR_EMPTY);
    }
    bar
}

pub struct TrackPanel {
    simulator: Rc<RefCell<DualTrackSimulator>>,
    track: TrackId,
    theme: Theme,
    focused: bool,
}

impl TrackPanel {
    #[must_use]
    pub fn new(simulator: Rc<RefCell<DualTrackSimulator>>, track: TrackId, theme: Theme) -> Self {
        Self {
            simulator,
            track,
            theme,
            focused: false,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn header(&self, width: usize) -> String {
        let sim = self.simulator.borrow();
        let marker = if self.focused { "▸ " } else { "  " };
        let total = format_clock(sim.total_duration(self.track));
        let steps = sim.steps(self.track).len();
        let line = format!(
            "{marker}{}  {}",
            self.theme.bold(track_title(self.track)),
            self.theme.dim(&format!("{steps} steps, {total}")),
        );
        truncate_to_width(&line, width)
    }

    fn body(&self, width: usize) -> Vec<String> {
        let sim = self.simulator.borrow();
        let state = sim.track_state(self.track);
        match state.phase {
            TrackPhase::Idle => {
                vec![truncate_to_width(
                    &format!("  {}", self.theme.dim("waiting, press space to start")),
                    width,
                )]
            }
            TrackPhase::Running => {
                let steps = sim.steps(self.track);
                let step = &steps[state.current_index];
                let bar_width = width.saturating_sub(4).clamp(8, 32);

                let counter = format!(
                    "  Step {} of {}  {}",
                    state.current_index + 1,
                    steps.len(),
                    self.theme.dim(&format!(
                        "{}s / {}s",
                        format_seconds(state.elapsed.min(step.duration)),
                        format_seconds(step.duration)
                    )),
                );
                let bar = format!(
                    "  {}",
                    self.theme
                        .role_paint(step.role, &progress_bar(state.elapsed, step.duration, bar_width)),
                );

                let mut lines = vec![
                    truncate_to_width(&counter, width),
                    truncate_to_width(&bar, width),
                    truncate_to_width(
                        &format!(
                            "  {} {}",
                            self.theme.role_paint(step.role, role_label(step.role)),
                            self.theme.bold(&step.title),
                        ),
                        width,
                    ),
                    truncate_to_width(&format!("  {}", step.description), width),
                ];
                for artifact in &step.artifacts {
                    lines.push(truncate_to_width(
                        &format!("    {}", self.theme.dim(&format!("⤷ {artifact}"))),
                        width,
                    ));
                }
                if let Some(details) = &step.details {
                    lines.push(truncate_to_width(
                        &format!("    {}", self.theme.dim(details)),
                        width,
                    ));
                }
                lines
            }
            TrackPhase::Completed => {
                let steps = sim.steps(self.track).len();
                let total = format_clock(sim.total_duration(self.track));
                vec![
                    truncate_to_width(
                        &format!("  {}", self.theme.green("complete")),
                        width,
                    ),
                    truncate_to_width(
                        &format!("  {}", self.theme.dim(&format!("{steps} steps in {total}"))),
                        width,
                    ),
                ]
            }
        }
    }
}

impl Component for TrackPanel {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut lines = vec![self.header(width)];
        lines.extend(self.body(width));
        lines
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use workflow_scenario::{Role, Scenario, Step};
    use workflow_sim::{DualTrackSimulator, TrackId};

    use crate::core::component::Component;
    use crate::theme::Theme;

    use super::{progress_bar, TrackPanel};

    fn simulator() -> Rc<RefCell<DualTrackSimulator>> {
        let scenario = Scenario {
            traditional: vec![
                Step::new("t-1", Role::Product, "Write PRD", "PM writes the PRD", 5.0)
                    .with_artifacts(vec!["PRD v1".to_string()]),
                Step::new("t-2", Role::Design, "Mockups", "Design mockups", 4.0),
            ],
            agentic: vec![Step::new("a-1", Role::Engineering, "Ship", "Agent ships", 2.0)],
        };
        Rc::new(RefCell::new(
            DualTrackSimulator::new(scenario).expect("valid scenario"),
        ))
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4.0, 4), "░░░░");
        assert_eq!(progress_bar(2.0, 4.0, 4), "██░░");
        assert_eq!(progress_bar(9.0, 4.0, 4), "████");
    }

    #[test]
    fn idle_panel_shows_the_start_hint() {
        let sim = simulator();
        let mut panel = TrackPanel::new(sim, TrackId::Traditional, Theme::new(false));
        let lines = panel.render(60);
        assert!(lines[0].contains("Traditional SDLC"));
        assert!(lines[1].contains("press space to start"));
    }

    #[test]
    fn running_panel_shows_counter_step_and_artifacts() {
        let sim = simulator();
        sim.borrow_mut().start();
        let mut panel = TrackPanel::new(sim, TrackId::Traditional, Theme::new(false));
        let lines = panel.render(60);
        assert!(lines.iter().any(|line| line.contains("Step 1 of 2")));
        assert!(lines.iter().any(|line| line.contains("Write PRD")));
        assert!(lines.iter().any(|line| line.contains("⤷ PRD v1")));
    }

    #[test]
    fn completed_panel_reports_totals() {
        let sim = simulator();
        {
            let mut sim = sim.borrow_mut();
            sim.start();
            sim.tick(10.0);
        }
        let mut panel = TrackPanel::new(sim, TrackId::Agentic, Theme::new(false));
        let lines = panel.render(60);
        assert!(lines.iter().any(|line| line.contains("complete")));
        assert!(lines.iter().any(|line| line.contains("1 steps in 0m 2s")));
    }

    #[test]
    fn focus_marker_tracks_the_flag() {
        let sim = simulator();
        let mut panel = TrackPanel::new(sim, TrackId::Agentic, Theme::new(false));
        assert!(panel.render(60)[0].starts_with("  "));
        panel.set_focused(true);
        assert!(panel.render(60)[0].starts_with("▸ "));
    }
}
