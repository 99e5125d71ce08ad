//! The keybinding hint bar at the bottom of the view.

use std::cell::RefCell;
use std::rc::Rc;

use workflow_sim::{DualTrackSimulator, Speed};

use crate::core::component::Component;
use crate::core::text::truncate_to_width;
use crate::theme::Theme;

pub struct ControlsBar {
    simulator: Rc<RefCell<DualTrackSimulator>>,
    theme: Theme,
}

impl ControlsBar {
    #[must_use]
    pub fn new(simulator: Rc<RefCell<DualTrackSimulator>>, theme: Theme) -> Self {
        Self { simulator, theme }
    }

    fn speed_hint(&self, current: Speed, auto_playing: bool) -> String {
        if auto_playing {
            // Speed is locked while playing; only show the active preset.
            return self.theme.dim(&format!("speed {}", current.label()));
        }
        let choices = Speed::ALL
            .iter()
            .enumerate()
            .map(|(idx, speed)| {
                let label = format!("{} {}", idx + 1, speed.label());
                if *speed == current {
                    self.theme.bold(&label)
                } else {
                    self.theme.dim(&label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("speed: {choices}")
    }
}

impl Component for ControlsBar {
    fn render(&mut self, width: usize) -> Vec<String> {
        let sim = self.simulator.borrow();
        let auto_playing = sim.is_auto_playing();
        let transport = if auto_playing {
            format!("{}  space pause", self.theme.yellow("▶ playing"))
        } else {
            format!("{}  space play", self.theme.dim("‖ paused"))
        };
        let line = format!(
            "{transport}  {}  {}",
            self.speed_hint(sim.speed(), auto_playing),
            self.theme.dim("tab focus  ←/→ step  r reset  q quit"),
        );
        vec![truncate_to_width(&line, width)]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use workflow_scenario::Scenario;
    use workflow_sim::DualTrackSimulator;

    use crate::core::component::Component;
    use crate::theme::Theme;

    use super::ControlsBar;

    fn simulator() -> Rc<RefCell<DualTrackSimulator>> {
        Rc::new(RefCell::new(
            DualTrackSimulator::new(Scenario::builtin()).expect("builtin scenario"),
        ))
    }

    #[test]
    fn paused_bar_offers_every_speed_choice() {
        let sim = simulator();
        let mut bar = ControlsBar::new(sim, Theme::new(false));
        let line = &bar.render(120)[0];
        assert!(line.contains("space play"));
        assert!(line.contains("1 0.5x"));
        assert!(line.contains("2 1x"));
        assert!(line.contains("3 2x"));
    }

    #[test]
    fn playing_bar_locks_the_speed_hint() {
        let sim = simulator();
        sim.borrow_mut().start();
        let mut bar = ControlsBar::new(sim, Theme::new(false));
        let line = &bar.render(120)[0];
        assert!(line.contains("space pause"));
        assert!(line.contains("speed 1x"));
        assert!(!line.contains("1 0.5x"));
    }
}
