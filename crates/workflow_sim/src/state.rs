//! Per-track progression state and the shared speed preset.

/// Where a track is in its lifecycle.
///
/// "Paused" is deliberately not a phase: pausing is the shared auto-play flag
/// on the simulator, and a paused run stays `Running` so it can resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackPhase {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Progression of one track through its step sequence.
///
/// `current_index` and `elapsed` are meaningful only while the phase is not
/// [`TrackPhase::Idle`]. While `Running`, `elapsed` stays below the current
/// step's duration; on completion it keeps its last computed value, which may
/// overshoot the final step's duration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackState {
    pub phase: TrackPhase,
    pub current_index: usize,
    /// Simulated seconds spent within the current step.
    pub elapsed: f64,
}

/// Speed preset applied to every tick's delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Half, Speed::Normal, Speed::Double];

    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
        }
    }

    /// Map a raw multiplier back to its preset. Only exact members of the
    /// enumerated set are accepted.
    #[must_use]
    pub fn from_multiplier(value: f64) -> Option<Speed> {
        Speed::ALL
            .into_iter()
            .find(|speed| speed.multiplier() == value)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Speed;

    #[test]
    fn multiplier_round_trips_through_from_multiplier() {
        for speed in Speed::ALL {
            assert_eq!(Speed::from_multiplier(speed.multiplier()), Some(speed));
        }
    }

    #[test]
    fn from_multiplier_rejects_values_outside_the_set() {
        assert_eq!(Speed::from_multiplier(0.0), None);
        assert_eq!(Speed::from_multiplier(1.5), None);
        assert_eq!(Speed::from_multiplier(-1.0), None);
        assert_eq!(Speed::from_multiplier(f64::NAN), None);
    }
}
