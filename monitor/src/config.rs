use std::time::Duration;

/// Which matcher endpoint a session drives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchMode {
    /// Submit to the access-decision endpoint; the backend grants or denies
    /// on its own and the session refreshes aggregate statistics after each
    /// reply.
    AccessControl,
    /// Submit to the similarity-only endpoint with a confidence threshold.
    Recognition { threshold: f32 },
}

/// What an empty extraction does to the event state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoFaceBehavior {
    /// Record nothing; the entrance monitor stays quiet between people.
    Ignore,
    /// Publish an unrecognized event so a live panel shows the miss.
    RecordUnrecognized,
}

/// Tuning for one capture-match session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Delay between the end of one cycle and the start of the next.
    pub poll_interval: Duration,
    pub mode: MatchMode,
    pub on_no_face: NoFaceBehavior,
}

impl MonitorConfig {
    /// Entrance-monitor preset: decide and log access automatically.
    pub fn access_control() -> Self {
        Self {
            poll_interval: Duration::from_secs(3),
            mode: MatchMode::AccessControl,
            on_no_face: NoFaceBehavior::Ignore,
        }
    }

    /// Live-recognition preset: similarity lookups with visible misses.
    pub fn recognition() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            mode: MatchMode::Recognition { threshold: 0.7 },
            on_no_face: NoFaceBehavior::RecordUnrecognized,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_the_entrance_screens() {
        let monitor = MonitorConfig::access_control();
        assert_eq!(monitor.poll_interval, Duration::from_secs(3));
        assert_eq!(monitor.on_no_face, NoFaceBehavior::Ignore);

        let live = MonitorConfig::recognition();
        assert_eq!(live.poll_interval, Duration::from_secs(2));
        assert_eq!(live.mode, MatchMode::Recognition { threshold: 0.7 });
        assert_eq!(live.on_no_face, NoFaceBehavior::RecordUnrecognized);
    }
}
