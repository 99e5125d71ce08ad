//! Deterministic dual-track workflow simulator.
//!
//! Two immutable step sequences advance independently through simulated time.
//! The simulator owns only state transitions; an external driver supplies
//! wall-clock time through [`DualTrackSimulator::tick`], and a presentation
//! layer reads state back after every mutation. There is no internal timer,
//! thread, or I/O here.

mod error;
mod simulator;
mod state;

pub use error::SimulatorError;
pub use simulator::DualTrackSimulator;
pub use state::{Speed, TrackPhase, TrackState};

pub use workflow_scenario::TrackId;
