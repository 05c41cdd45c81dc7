// StrideSense — Classifier & Runtime Configuration

// ---------------------------------------------------------------------------
// Classifier tuning
// ---------------------------------------------------------------------------

/// Tunable parameters of the activity classifier.
///
/// The defaults are the values the device shipped with; they assume samples
/// in units of g at roughly 100 Hz. The thresholds cut the summed per-axis
/// acceleration variance, not the raw magnitude, so gravity contributes
/// nothing once a window is full of stationary samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Per-axis sliding-window capacity (samples) used for the variance.
    pub window_size: usize,
    /// Stability-buffer capacity: consecutive agreeing instantaneous
    /// classifications required before a level change is committed.
    pub buffer_size: usize,
    /// Variance above this → `Running`.
    pub thresh_running: f32,
    /// Variance above this → `BriskWalk`.
    pub thresh_brisk: f32,
    /// Variance above this → `LightWalk`.
    pub thresh_light: f32,
    /// Historical floor threshold. The branch it gates classifies as `Still`,
    /// the same as the default arm below it; kept so a given intensity maps
    /// to exactly the label the original ladder produced.
    pub thresh_floor: f32,
}

impl ClassifierConfig {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), crate::events::ClassifierError> {
        use crate::events::ClassifierError::InvalidConfig;

        if self.window_size == 0 {
            return Err(InvalidConfig("window_size must be at least 1"));
        }
        if self.buffer_size == 0 {
            return Err(InvalidConfig("buffer_size must be at least 1"));
        }
        let cuts = [
            self.thresh_floor,
            self.thresh_light,
            self.thresh_brisk,
            self.thresh_running,
        ];
        if cuts.iter().any(|t| !t.is_finite()) {
            return Err(InvalidConfig("thresholds must be finite"));
        }
        if cuts.windows(2).any(|w| w[0] >= w[1]) {
            return Err(InvalidConfig(
                "thresholds must be strictly ascending (floor < light < brisk < running)",
            ));
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            window_size: 30,
            buffer_size: 70,
            thresh_running: 0.75,
            thresh_brisk: 0.15,
            thresh_light: 0.03,
            thresh_floor: 0.01,
        }
    }
}

// ---------------------------------------------------------------------------
// Demo runtime timing (milliseconds)
// ---------------------------------------------------------------------------
pub const SAMPLE_INTERVAL_MS: u64 = 10; // 100 Hz sensor cadence
pub const STATUS_LOG_EVERY: u64 = 100; // one status line per second at 100 Hz
pub const PHASE_DURATION_MS: u64 = 2_000; // length of each synthetic phase
pub const LOCK_AT_MS: u64 = 4_500; // demo control: engage lock
pub const UNLOCK_AT_MS: u64 = 6_000; // demo control: release lock
