//! Percentage progress reporting for long emission passes.

/// Logs a line each time a pass crosses a 10% boundary
#[derive(Debug, Clone)]
pub struct ProgressMeter {
    total: usize,
    last_percent: Option<u32>,
}

impl ProgressMeter {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            last_percent: None,
        }
    }

    /// Record that `done` items are finished.
    ///
    /// Returns the percentage when it just reached a new multiple of ten.
    pub fn update(&mut self, done: usize) -> Option<u32> {
        let percent = if self.total == 0 {
            100
        } else {
            (done as f64 / self.total as f64 * 100.0).round() as u32
        };
        if self.last_percent == Some(percent) {
            return None;
        }
        self.last_percent = Some(percent);
        if percent % 10 == 0 {
            log::info!("    {}%", percent);
            Some(percent)
        } else {
            None
        }
    }
}
