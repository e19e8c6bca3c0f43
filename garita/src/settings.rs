use std::time::Duration;

use monitor::{MatchMode, MonitorConfig};

/// Which entrance screen the CLI emulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum WatchMode {
    /// Automatic access decisions on a 3 s cadence.
    Access,
    /// Live recognition with visible misses on a 2 s cadence.
    Recognition,
}

/// Build the session config for a mode, applying CLI overrides.
pub fn monitor_config(mode: WatchMode, threshold: f32, interval_ms: Option<u64>) -> MonitorConfig {
    let mut config = match mode {
        WatchMode::Access => MonitorConfig::access_control(),
        WatchMode::Recognition => MonitorConfig {
            mode: MatchMode::Recognition { threshold },
            ..MonitorConfig::recognition()
        },
    };
    if let Some(ms) = interval_ms {
        config = config.with_poll_interval(Duration::from_millis(ms));
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognition_threshold_is_configurable() {
        let config = monitor_config(WatchMode::Recognition, 0.6, None);
        assert_eq!(config.mode, MatchMode::Recognition { threshold: 0.6 });
        assert_eq!(config.poll_interval, Duration::from_secs(2));
    }

    #[test]
    fn interval_override_applies() {
        let config = monitor_config(WatchMode::Access, 0.7, Some(500));
        assert_eq!(config.poll_interval, Duration::from_millis(500));
        assert_eq!(config.mode, MatchMode::AccessControl);
    }
}
