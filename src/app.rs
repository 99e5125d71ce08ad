//! Top-level component: owns the simulator, the focus state, and the
//! key bindings, and composes the widgets into one frame.

use std::cell::RefCell;
use std::rc::Rc;

use workflow_sim::{DualTrackSimulator, TrackId, TrackPhase};

use crate::core::component::Component;
use crate::core::input::InputEvent;
use crate::core::text::truncate_to_width;
use crate::logging::EventLog;
use crate::theme::Theme;
use crate::widgets::{join_columns, ControlsBar, SummaryPanel, TrackPanel};

/// Narrower than this, the two panels stack vertically instead of sitting
/// side by side.
const TWO_COLUMN_MIN_WIDTH: usize = 64;
const COLUMN_GAP: &str = "   ";

pub struct App {
    simulator: Rc<RefCell<DualTrackSimulator>>,
    theme: Theme,
    focused: TrackId,
    should_exit: bool,
    traditional_panel: TrackPanel,
    agentic_panel: TrackPanel,
    controls: ControlsBar,
    summary: SummaryPanel,
    log: EventLog,
}

impl App {
    #[must_use]
    pub fn new(simulator: DualTrackSimulator, theme: Theme, log: EventLog) -> Self {
        let simulator = Rc::new(RefCell::new(simulator));
        Self {
            traditional_panel: TrackPanel::new(
                Rc::clone(&simulator),
                TrackId::Traditional,
                theme,
            ),
            agentic_panel: TrackPanel::new(Rc::clone(&simulator), TrackId::Agentic, theme),
            controls: ControlsBar::new(Rc::clone(&simulator), theme),
            summary: SummaryPanel::new(Rc::clone(&simulator), theme),
            simulator,
            theme,
            focused: TrackId::Traditional,
            should_exit: false,
            log,
        }
    }

    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Apply one driver tick. Returns whether the simulator moved, so the
    /// caller can skip repainting idle frames.
    pub fn on_tick(&mut self, delta_seconds: f64) -> bool {
        let mut sim = self.simulator.borrow_mut();
        if !sim.is_auto_playing() {
            return false;
        }
        sim.tick(delta_seconds);
        self.log.log(&format!("tick {delta_seconds:.3}"));
        true
    }

    fn toggle_playback(&mut self) {
        let mut sim = self.simulator.borrow_mut();
        if sim.is_auto_playing() {
            sim.pause();
            self.log.log("intent pause");
            return;
        }
        let any_idle = TrackId::ALL
            .into_iter()
            .any(|track| sim.track_state(track).phase == TrackPhase::Idle);
        if any_idle {
            sim.start();
            self.log.log("intent start");
        } else {
            sim.resume();
            self.log.log("intent resume");
        }
    }

    fn select_speed(&mut self, multiplier: f64) {
        let mut sim = self.simulator.borrow_mut();
        if sim.is_auto_playing() {
            return;
        }
        // The bound keys only produce preset multipliers.
        if sim.set_speed(multiplier).is_ok() {
            self.log.log(&format!("intent speed {multiplier}"));
        }
    }

    fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            TrackId::Traditional => TrackId::Agentic,
            TrackId::Agentic => TrackId::Traditional,
        };
    }

    fn handle_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                ' ' => self.toggle_playback(),
                'r' => {
                    self.simulator.borrow_mut().reset();
                    self.log.log("intent reset");
                }
                'q' => self.should_exit = true,
                '1' => self.select_speed(0.5),
                '2' => self.select_speed(1.0),
                '3' => self.select_speed(2.0),
                _ => {}
            }
        }
    }

    fn handle_key(&mut self, key_id: &str) {
        match key_id {
            "escape" | "ctrl+c" => self.should_exit = true,
            "tab" => self.toggle_focus(),
            "left" => {
                self.simulator.borrow_mut().retreat(self.focused);
                self.log.log(&format!("intent retreat {}", self.focused));
            }
            "right" => {
                self.simulator.borrow_mut().advance(self.focused);
                self.log.log(&format!("intent advance {}", self.focused));
            }
            _ => {}
        }
    }

    fn header(&self, width: usize) -> String {
        let line = format!(
            "{}  {}",
            self.theme.bold("Dual-Track Delivery"),
            self.theme.dim("one feature, two processes"),
        );
        truncate_to_width(&line, width)
    }
}

impl Component for App {
    fn render(&mut self, width: usize) -> Vec<String> {
        self.traditional_panel
            .set_focused(self.focused == TrackId::Traditional);
        self.agentic_panel
            .set_focused(self.focused == TrackId::Agentic);

        let mut lines = vec![self.header(width), String::new()];

        if width >= TWO_COLUMN_MIN_WIDTH {
            let column_width = (width - COLUMN_GAP.len()) / 2;
            let left = self.traditional_panel.render(column_width);
            let right = self.agentic_panel.render(column_width);
            lines.extend(join_columns(&left, &right, COLUMN_GAP, column_width));
        } else {
            lines.extend(self.traditional_panel.render(width));
            lines.push(String::new());
            lines.extend(self.agentic_panel.render(width));
        }

        let summary = self.summary.render(width);
        if !summary.is_empty() {
            lines.push(String::new());
            lines.extend(summary);
        }

        lines.push(String::new());
        lines.extend(self.controls.render(width));
        lines
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Text { text, .. } => self.handle_text(text),
            InputEvent::Key { key_id, .. } => self.handle_key(key_id),
            InputEvent::UnknownRaw { .. } => {}
        }
    }
}
