//! Environment configuration.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Driver cadence in milliseconds. The reference behavior ticks once per
    /// second of wall-clock time.
    pub tick_ms: u64,
    /// Path to a scenario JSON file; the built-in scenario is used when unset.
    pub scenario_path: Option<PathBuf>,
    pub no_color: bool,
    pub write_log: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            tick_ms: env_u64("DUALTRACK_TICK_MS").unwrap_or(DEFAULT_TICK_MS),
            scenario_path: env_string_opt("DUALTRACK_SCENARIO").map(PathBuf::from),
            no_color: env_flag("DUALTRACK_NO_COLOR"),
            write_log: env_string_opt("DUALTRACK_WRITE_LOG"),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::{Mutex, OnceLock};

    use super::{EnvConfig, DEFAULT_TICK_MS};

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock poisoned")
    }

    fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    #[test]
    fn defaults_match_reference_cadence() {
        let _lock = env_lock();
        let _g1 = set_env_guard("DUALTRACK_TICK_MS", None);
        let _g2 = set_env_guard("DUALTRACK_SCENARIO", None);
        let _g3 = set_env_guard("DUALTRACK_NO_COLOR", None);
        let _g4 = set_env_guard("DUALTRACK_WRITE_LOG", None);

        let config = EnvConfig::from_env();
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        assert!(config.scenario_path.is_none());
        assert!(!config.no_color);
        assert!(config.write_log.is_none());
    }

    #[test]
    fn set_variables_are_picked_up() {
        let _lock = env_lock();
        let _g1 = set_env_guard("DUALTRACK_TICK_MS", Some("250"));
        let _g2 = set_env_guard("DUALTRACK_SCENARIO", Some("/tmp/scenario.json"));
        let _g3 = set_env_guard("DUALTRACK_NO_COLOR", Some("1"));
        let _g4 = set_env_guard("DUALTRACK_WRITE_LOG", Some("/tmp/dualtrack.log"));

        let config = EnvConfig::from_env();
        assert_eq!(config.tick_ms, 250);
        assert_eq!(
            config.scenario_path.as_deref(),
            Some(std::path::Path::new("/tmp/scenario.json"))
        );
        assert!(config.no_color);
        assert_eq!(config.write_log.as_deref(), Some("/tmp/dualtrack.log"));
    }

    #[test]
    fn zero_or_garbage_tick_interval_falls_back_to_default() {
        let _lock = env_lock();
        let _g1 = set_env_guard("DUALTRACK_TICK_MS", Some("0"));
        assert_eq!(EnvConfig::from_env().tick_ms, DEFAULT_TICK_MS);

        let _g2 = set_env_guard("DUALTRACK_TICK_MS", Some("fast"));
        assert_eq!(EnvConfig::from_env().tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn empty_write_log_is_ignored() {
        let _lock = env_lock();
        let _g1 = set_env_guard("DUALTRACK_WRITE_LOG", Some(""));
        assert!(EnvConfig::from_env().write_log.is_none());
    }
}
