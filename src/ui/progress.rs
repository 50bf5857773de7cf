use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner coordination for the read-and-extract phase. Disabled runs get a
/// hidden bar so call sites never have to branch.
pub struct ProgressManager {
    bars: MultiProgress,
    enabled: bool,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        Self {
            bars: MultiProgress::new(),
            enabled,
        }
    }

    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let spinner = self.bars.add(ProgressBar::new_spinner());
        spinner.set_style(spinner_style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(TICK_INTERVAL);
        spinner
    }

    /// Runs `f` with the bars lifted off the terminal, so regular output
    /// does not tear through a ticking spinner.
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }
        self.bars.suspend(f)
    }

    pub fn clear(&self) {
        if self.enabled {
            let _ = self.bars.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(true)
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

pub fn finish_progress_with_summary(spinner: &ProgressBar, message: &str, elapsed: Duration) {
    spinner.finish_with_message(format!("{} in {}", message, human_elapsed(elapsed)));
}

fn human_elapsed(elapsed: Duration) -> String {
    match elapsed.as_secs() {
        0 => format!("{}ms", elapsed.as_millis()),
        s if s < 60 => format!("{}s", s),
        s => format!("{}m {}s", s / 60, s % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_manager_hands_out_hidden_bars() {
        let progress = ProgressManager::new(false);
        assert!(!progress.is_enabled());
        assert!(progress.create_spinner("reading").is_hidden());
    }

    #[test]
    fn test_spinner_carries_its_message() {
        let progress = ProgressManager::new(true);
        assert!(progress.is_enabled());

        let spinner = progress.create_spinner("reading input");
        assert_eq!(spinner.message(), "reading input");
        spinner.finish_and_clear();
    }

    #[test]
    fn test_suspend_returns_the_closure_value() {
        assert_eq!(ProgressManager::new(false).suspend(|| 7), 7);
        assert_eq!(ProgressManager::new(true).suspend(|| "ok"), "ok");
    }

    #[test]
    fn test_elapsed_times_render_compactly() {
        assert_eq!(human_elapsed(Duration::from_millis(500)), "500ms");
        assert_eq!(human_elapsed(Duration::from_secs(30)), "30s");
        assert_eq!(human_elapsed(Duration::from_secs(90)), "1m 30s");
    }
}
