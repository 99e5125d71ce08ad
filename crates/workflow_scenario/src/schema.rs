use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// Identifies one of the two workflow tracks in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackId {
    Traditional,
    Agentic,
}

impl TrackId {
    pub const ALL: [TrackId; 2] = [TrackId::Traditional, TrackId::Agentic];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrackId::Traditional => "traditional",
            TrackId::Agentic => "agentic",
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role that performs a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Product,
    Design,
    Engineering,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Product, Role::Design, Role::Engineering];
}

/// One unit of work in a track, with a fixed simulated dwell time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub id: String,
    pub role: Role,
    pub title: String,
    pub description: String,
    /// Simulated dwell time in seconds. Must be positive.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Step {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        role: Role,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            title: title.into(),
            description: description.into(),
            duration,
            artifacts: Vec::new(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_artifacts(mut self, artifacts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.artifacts = artifacts.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// A pair of step sequences describing the same feature delivered two ways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub traditional: Vec<Step>,
    pub agentic: Vec<Step>,
}

impl Scenario {
    #[must_use]
    pub fn track(&self, track: TrackId) -> &[Step] {
        match track {
            TrackId::Traditional => &self.traditional,
            TrackId::Agentic => &self.agentic,
        }
    }

    /// Check the invariants the simulator relies on: each track is non-empty,
    /// every duration is positive, and step ids are unique within a track.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for track in TrackId::ALL {
            let steps = self.track(track);
            if steps.is_empty() {
                return Err(ScenarioError::EmptyTrack { track });
            }
            let mut seen = HashSet::new();
            for step in steps {
                if !(step.duration > 0.0) {
                    return Err(ScenarioError::NonPositiveDuration {
                        track,
                        id: step.id.clone(),
                        duration: step.duration,
                    });
                }
                if !seen.insert(step.id.as_str()) {
                    return Err(ScenarioError::DuplicateStepId {
                        track,
                        id: step.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Sum of simulated dwell time across a step sequence.
#[must_use]
pub fn total_duration(steps: &[Step]) -> f64 {
    steps.iter().map(|step| step.duration).sum()
}

/// Steps in a sequence performed by the given role, in order.
#[must_use]
pub fn phase_steps<'a>(steps: &'a [Step], role: Role) -> Vec<&'a Step> {
    steps.iter().filter(|step| step.role == role).collect()
}
