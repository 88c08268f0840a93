use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{failure, success};

/// Terminal spinner shown while a command is in flight.
///
/// Every command resolves its spinner exactly once, either with
/// [`Spinner::succeed`] or [`Spinner::fail`].
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }

        Self { pb }
    }

    pub fn succeed(self, message: impl std::fmt::Display) {
        self.pb.finish_and_clear();
        success!("{}", message);
    }

    pub fn fail(self, message: impl std::fmt::Display) {
        self.pb.finish_and_clear();
        failure!("{}", message);
    }
}
