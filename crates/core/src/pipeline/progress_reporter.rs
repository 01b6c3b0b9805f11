/// Side channel for human-readable progress while a transcript is built.
///
/// Kept apart from stdout, which carries only the final status line.
pub trait ProgressReporter {
    /// Report completion as a whole percentage in [0, 100].
    fn progress(&mut self, percent: u8);

    /// Log a status message.
    fn info(&mut self, message: &str);
}

/// Writes `PROGRESS:<n>` lines to stderr for the supervising process and
/// routes messages through the `log` facade.
#[derive(Debug, Default)]
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn progress(&mut self, percent: u8) {
        eprintln!("PROGRESS:{percent}");
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }
}

/// `min(100, floor(end / duration * 100))`, clamped at 0.
///
/// A duration that is zero or not finite counts as complete.
pub fn progress_percent(end: f64, duration: f64) -> u8 {
    if !duration.is_finite() || duration <= 0.0 {
        return 100;
    }
    let pct = (end / duration * 100.0).floor();
    if pct.is_nan() {
        return 0;
    }
    pct.clamp(0.0, 100.0) as u8
}
