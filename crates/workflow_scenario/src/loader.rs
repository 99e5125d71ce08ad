//! Scenario loading from JSON.

use std::fs;
use std::path::Path;

use crate::error::ScenarioError;
use crate::schema::Scenario;

impl Scenario {
    /// Parse and validate a scenario from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario =
            serde_json::from_str(json).map_err(|source| ScenarioError::json(None, source))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse, and validate a scenario from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| ScenarioError::io("reading scenario", path, source))?;
        let scenario: Scenario = serde_json::from_str(&json)
            .map_err(|source| ScenarioError::json(Some(path.to_path_buf()), source))?;
        scenario.validate()?;
        Ok(scenario)
    }
}
