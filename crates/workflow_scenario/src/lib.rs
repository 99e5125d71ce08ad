mod builtin;
mod error;
mod loader;
mod schema;

pub use error::ScenarioError;
pub use schema::{phase_steps, total_duration, Role, Scenario, Step, TrackId};
