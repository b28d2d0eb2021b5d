use std::{path::PathBuf, time::Duration};

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How long a status-line message stays visible.
    pub notification_duration: Duration,
    /// Where saves go. `None` overwrites the puzzle file that was opened.
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            output: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_notification_ms(mut self, ms: Option<u64>) -> Self {
        if let Some(ms) = ms {
            self.notification_duration = Duration::from_millis(ms);
        }
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if output.is_some() {
            self.output = output;
        }
        self
    }
}
