//! Terminal spinner shown while waiting on the API.
//!
//! The spinner lives on stderr and is hidden automatically when stderr is not
//! a terminal. It is purely cosmetic.

use std::borrow::Cow;
use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(80);
const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

/// A running spinner. Dropping it stops the ticker and clears the line.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start ticking with `message` next to the spinner.
    pub fn start(message: impl Into<Cow<'static, str>>) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style.tick_chars(TICK_CHARS));
        }
        bar.set_message(message);
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar }
    }

    /// Await `future` while ticking. The spinner is cleared when the future
    /// completes or when the returned future is dropped early.
    pub async fn run<F>(self, future: F) -> F::Output
    where
        F: Future,
    {
        let output = future.await;
        drop(self);
        output
    }

    #[cfg(test)]
    fn handle(&self) -> ProgressBar {
        self.bar.clone()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Await `future` with a spinner running, clearing it however the future ends.
pub async fn with_spinner<F>(message: impl Into<Cow<'static, str>>, future: F) -> F::Output
where
    F: Future,
{
    Spinner::start(message).run(future).await
}
