use thiserror::Error;

use workflow_scenario::ScenarioError;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("speed multiplier {0} is not one of 0.5, 1, or 2")]
    InvalidSpeed(f64),

    #[error("scenario rejected: {0}")]
    InvalidScenario(#[from] ScenarioError),
}
