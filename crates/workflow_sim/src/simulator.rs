//! The dual-track state machine.

use workflow_scenario::{total_duration, Scenario, Step, TrackId};

use crate::error::SimulatorError;
use crate::state::{Speed, TrackPhase, TrackState};

struct TrackRun {
    steps: Vec<Step>,
    state: TrackState,
}

impl TrackRun {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            state: TrackState::default(),
        }
    }

    fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Apply already speed-scaled simulated time to this track.
    ///
    /// A single call may cross several short steps; the remainder carries into
    /// the next step so no simulated time is lost. On the final step the
    /// elapsed value is left where it landed rather than clamped back.
    fn advance_time(&mut self, scaled_delta: f64) {
        if self.state.phase != TrackPhase::Running {
            return;
        }
        self.state.elapsed += scaled_delta;
        while self.state.elapsed >= self.steps[self.state.current_index].duration {
            if self.state.current_index == self.last_index() {
                self.state.phase = TrackPhase::Completed;
                break;
            }
            self.state.elapsed -= self.steps[self.state.current_index].duration;
            self.state.current_index += 1;
        }
    }

    fn start_if_idle(&mut self) {
        if self.state.phase == TrackPhase::Idle {
            self.state = TrackState {
                phase: TrackPhase::Running,
                current_index: 0,
                elapsed: 0.0,
            };
        }
    }

    fn advance_manually(&mut self) {
        match self.state.phase {
            TrackPhase::Idle => self.start_if_idle(),
            TrackPhase::Running => {
                if self.state.current_index == self.last_index() {
                    self.state.phase = TrackPhase::Completed;
                } else {
                    self.state.current_index += 1;
                    self.state.elapsed = 0.0;
                }
            }
            TrackPhase::Completed => {}
        }
    }

    fn retreat_manually(&mut self) {
        if self.state.current_index == 0 {
            return;
        }
        self.state.current_index -= 1;
        self.state.elapsed = 0.0;
        if self.state.phase == TrackPhase::Completed {
            self.state.phase = TrackPhase::Running;
        }
    }

    fn reset(&mut self) {
        self.state = TrackState::default();
    }
}

/// Two independent step-sequence cursors sharing one auto-play flag and one
/// speed preset.
///
/// All operations are total: every documented no-op case (retreating at the
/// first step, advancing a completed track, resuming with nothing running) is
/// fail-silent rather than an error. The only fallible calls are construction
/// and [`DualTrackSimulator::set_speed`].
pub struct DualTrackSimulator {
    traditional: TrackRun,
    agentic: TrackRun,
    auto_playing: bool,
    speed: Speed,
}

impl DualTrackSimulator {
    /// Build a simulator over a validated scenario. Both tracks start `Idle`.
    pub fn new(scenario: Scenario) -> Result<Self, SimulatorError> {
        scenario.validate()?;
        Ok(Self {
            traditional: TrackRun::new(scenario.traditional),
            agentic: TrackRun::new(scenario.agentic),
            auto_playing: false,
            speed: Speed::default(),
        })
    }

    fn run(&self, track: TrackId) -> &TrackRun {
        match track {
            TrackId::Traditional => &self.traditional,
            TrackId::Agentic => &self.agentic,
        }
    }

    fn run_mut(&mut self, track: TrackId) -> &mut TrackRun {
        match track {
            TrackId::Traditional => &mut self.traditional,
            TrackId::Agentic => &mut self.agentic,
        }
    }

    /// Move every idle track to its first step and turn auto-play on.
    /// Tracks already running or completed are left untouched.
    pub fn start(&mut self) {
        self.traditional.start_if_idle();
        self.agentic.start_if_idle();
        self.auto_playing = true;
    }

    /// Stop auto-play without touching track state; a paused run resumes
    /// exactly where it was.
    pub fn pause(&mut self) {
        self.auto_playing = false;
    }

    /// Turn auto-play back on, but only if there is still a running track to
    /// drive. From idle, callers use [`DualTrackSimulator::start`] instead.
    pub fn resume(&mut self) {
        let any_running = TrackId::ALL
            .into_iter()
            .any(|track| self.run(track).state.phase == TrackPhase::Running);
        if any_running {
            self.auto_playing = true;
        }
    }

    /// Return both tracks to `Idle` and stop auto-play. The speed preset is a
    /// sticky user preference and survives the reset.
    pub fn reset(&mut self) {
        self.traditional.reset();
        self.agentic.reset();
        self.auto_playing = false;
    }

    /// Select a speed preset by its multiplier.
    ///
    /// Values outside {0.5, 1, 2} are an error. While auto-play is on the
    /// change is silently ignored; the control surface is expected to be
    /// disabled then, mirroring the paused-only speed select.
    pub fn set_speed(&mut self, multiplier: f64) -> Result<(), SimulatorError> {
        let speed =
            Speed::from_multiplier(multiplier).ok_or(SimulatorError::InvalidSpeed(multiplier))?;
        if !self.auto_playing {
            self.speed = speed;
        }
        Ok(())
    }

    /// Advance both tracks by `delta_seconds` of wall-clock time, scaled by
    /// the speed preset. When this leaves both tracks completed, auto-play
    /// stops on its own.
    pub fn tick(&mut self, delta_seconds: f64) {
        let scaled = delta_seconds * self.speed.multiplier();
        self.traditional.advance_time(scaled);
        self.agentic.advance_time(scaled);
        if self.both_completed() {
            self.auto_playing = false;
        }
    }

    /// Manual single-step advance, usable whether or not auto-play is on.
    /// From `Idle` this starts the track at its first step without advancing.
    pub fn advance(&mut self, track: TrackId) {
        self.run_mut(track).advance_manually();
    }

    /// Manual single-step retreat. Stepping back from `Completed` re-enters
    /// `Running`; at the first step this is a no-op.
    pub fn retreat(&mut self, track: TrackId) {
        self.run_mut(track).retreat_manually();
    }

    #[must_use]
    pub fn track_state(&self, track: TrackId) -> TrackState {
        self.run(track).state
    }

    #[must_use]
    pub fn steps(&self, track: TrackId) -> &[Step] {
        &self.run(track).steps
    }

    /// The step the track's cursor sits on, or `None` while `Idle`.
    #[must_use]
    pub fn current_step(&self, track: TrackId) -> Option<&Step> {
        let run = self.run(track);
        match run.state.phase {
            TrackPhase::Idle => None,
            TrackPhase::Running | TrackPhase::Completed => {
                Some(&run.steps[run.state.current_index])
            }
        }
    }

    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    #[must_use]
    pub fn total_duration(&self, track: TrackId) -> f64 {
        total_duration(&self.run(track).steps)
    }

    /// How many times faster the agentic track is end to end. No rounding;
    /// display formatting is the presentation layer's concern.
    #[must_use]
    pub fn speedup_ratio(&self) -> f64 {
        self.total_duration(TrackId::Traditional) / self.total_duration(TrackId::Agentic)
    }

    #[must_use]
    pub fn both_completed(&self) -> bool {
        TrackId::ALL
            .into_iter()
            .all(|track| self.run(track).state.phase == TrackPhase::Completed)
    }
}
