//! Comparison summary shown once both tracks finish.

use std::cell::RefCell;
use std::rc::Rc;

use workflow_sim::{DualTrackSimulator, TrackId};

use crate::core::component::Component;
use crate::core::text::truncate_to_width;
use crate::theme::Theme;
use crate::widgets::format_clock;

pub struct SummaryPanel {
    simulator: Rc<RefCell<DualTrackSimulator>>,
    theme: Theme,
}

impl SummaryPanel {
    #[must_use]
    pub fn new(simulator: Rc<RefCell<DualTrackSimulator>>, theme: Theme) -> Self {
        Self { simulator, theme }
    }
}

impl Component for SummaryPanel {
    fn render(&mut self, width: usize) -> Vec<String> {
        let sim = self.simulator.borrow();
        if !sim.both_completed() {
            return Vec::new();
        }
        let ratio = sim.speedup_ratio();
        let headline = format!(
            "{} {}",
            self.theme.green("Both tracks complete."),
            self.theme
                .bold(&format!("Agentic delivery was ~{:.1}x faster.", ratio)),
        );
        let detail = self.theme.dim(&format!(
            "traditional {} vs agentic {}",
            format_clock(sim.total_duration(TrackId::Traditional)),
            format_clock(sim.total_duration(TrackId::Agentic)),
        ));
        vec![
            truncate_to_width(&headline, width),
            truncate_to_width(&detail, width),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use workflow_scenario::{Role, Scenario, Step};
    use workflow_sim::DualTrackSimulator;

    use crate::core::component::Component;
    use crate::theme::Theme;

    use super::SummaryPanel;

    fn simulator(traditional: f64, agentic: f64) -> Rc<RefCell<DualTrackSimulator>> {
        let scenario = Scenario {
            traditional: vec![Step::new("t-1", Role::Product, "Plan", "", traditional)],
            agentic: vec![Step::new("a-1", Role::Engineering, "Ship", "", agentic)],
        };
        Rc::new(RefCell::new(
            DualTrackSimulator::new(scenario).expect("valid scenario"),
        ))
    }

    #[test]
    fn hidden_until_both_tracks_complete() {
        let sim = simulator(10.0, 2.0);
        sim.borrow_mut().start();
        let mut panel = SummaryPanel::new(sim, Theme::new(false));
        assert!(panel.render(80).is_empty());
    }

    #[test]
    fn reports_the_rounded_speedup_and_totals() {
        let sim = simulator(9.0, 2.0);
        {
            let mut sim = sim.borrow_mut();
            sim.start();
            sim.tick(10.0);
        }
        let mut panel = SummaryPanel::new(sim, Theme::new(false));
        let lines = panel.render(80);
        assert!(lines[0].contains("~4.5x faster"));
        assert!(lines[1].contains("traditional 0m 9s vs agentic 0m 2s"));
    }
}
