// StrideSense — Activity Classifier
//
// Pipeline per sample: per-axis sliding windows → summed variance
// ("movement intensity") → threshold ladder → stability gate. A manual lock
// override sits in front of the whole pipeline and freezes the output.

use crate::config::ClassifierConfig;
use crate::events::{ActivityLevel, ClassifierError, Sample, UpdateResult};
use crate::gate::StabilityGate;
use crate::window::SlidingWindow;

// ---------------------------------------------------------------------------
// Threshold ladder
// ---------------------------------------------------------------------------

/// Map a movement intensity (summed per-axis variance) to an instantaneous
/// activity level. Highest cut checked first; first match wins.
#[allow(clippy::if_same_then_else)] // the floor arm intentionally mirrors the default
pub fn classify_intensity(intensity: f32, config: &ClassifierConfig) -> ActivityLevel {
    if intensity > config.thresh_running {
        ActivityLevel::Running
    } else if intensity > config.thresh_brisk {
        ActivityLevel::BriskWalk
    } else if intensity > config.thresh_light {
        ActivityLevel::LightWalk
    } else if intensity > config.thresh_floor {
        // Historical arm: the floor cut produces Still, exactly like the
        // default below it. Kept so label behaviour matches the device.
        ActivityLevel::Still
    } else {
        ActivityLevel::Still
    }
}

// ---------------------------------------------------------------------------
// Classifier state
// ---------------------------------------------------------------------------

/// The authoritative classifier state: three per-axis windows, the stability
/// gate, and the lock override. One instance per device; see
/// [`SharedClassifier`](crate::engine::SharedClassifier) for the thread-safe
/// handle the runtime tasks share.
pub struct ActivityClassifier {
    config: ClassifierConfig,
    win_x: SlidingWindow,
    win_y: SlidingWindow,
    win_z: SlidingWindow,
    gate: StabilityGate,
    locked: bool,
    frozen: Option<ActivityLevel>,
}

impl ActivityClassifier {
    /// Classifier with the shipped default tuning.
    pub fn new() -> Self {
        Self::from_parts(ClassifierConfig::default())
    }

    /// Classifier with custom tuning. Rejects degenerate configurations
    /// (zero capacities, non-ascending thresholds).
    pub fn with_config(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: ClassifierConfig) -> Self {
        Self {
            win_x: SlidingWindow::new(config.window_size),
            win_y: SlidingWindow::new(config.window_size),
            win_z: SlidingWindow::new(config.window_size),
            gate: StabilityGate::new(config.buffer_size, ActivityLevel::Still),
            config,
            locked: false,
            frozen: None,
        }
    }

    /// Feed one accelerometer reading (units of g) through the pipeline.
    ///
    /// Returns the committed level after this call plus diagnostics. The
    /// committed level only moves once the stability gate sees a full buffer
    /// of agreeing instantaneous classifications; `changed` is `true` on
    /// exactly the call that commits.
    ///
    /// Non-finite components are rejected before any state is touched, so a
    /// failed call never leaves the three windows at unequal lengths.
    pub fn update(&mut self, x: f32, y: f32, z: f32) -> Result<UpdateResult, ClassifierError> {
        let sample = Sample::new(x, y, z);
        if !sample.is_finite() {
            return Err(ClassifierError::NonFiniteSample { x, y, z });
        }
        let magnitude = sample.magnitude();

        // Lock override: frozen output, no window/gate mutation.
        if self.locked {
            return Ok(UpdateResult {
                level: self.frozen.unwrap_or(self.gate.committed()),
                changed: false,
                intensity: 0.0,
                magnitude,
            });
        }

        self.win_x.push(sample.x);
        self.win_y.push(sample.y);
        self.win_z.push(sample.z);

        // Warm-up: variance over too few points is meaningless, so skip
        // classification entirely until the windows are full.
        if !self.win_x.is_full() {
            return Ok(UpdateResult {
                level: self.gate.committed(),
                changed: false,
                intensity: 0.0,
                magnitude,
            });
        }

        let intensity = self.win_x.variance() + self.win_y.variance() + self.win_z.variance();
        let instant = classify_intensity(intensity, &self.config);
        let changed = self.gate.observe(instant);

        if changed {
            log::info!(
                "activity level → {} (intensity {:.4})",
                self.gate.committed().display_name(),
                intensity
            );
        }

        Ok(UpdateResult {
            level: self.gate.committed(),
            changed,
            intensity,
            magnitude,
        })
    }

    /// The currently committed activity level (the frozen one while locked).
    pub fn current_level(&self) -> ActivityLevel {
        if self.locked {
            self.frozen.unwrap_or(self.gate.committed())
        } else {
            self.gate.committed()
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Freeze the output at the current committed level.
    pub fn lock(&mut self) {
        self.frozen = Some(self.gate.committed());
        self.locked = true;
        log::info!("activity lock engaged: {}", self.current_level().display_name());
    }

    /// Release the lock; accumulation resumes from the pre-lock contents.
    pub fn unlock(&mut self) {
        self.locked = false;
        self.frozen = None;
        log::info!("activity lock released");
    }

    /// Flip the lock and return the resulting flag.
    pub fn toggle_lock(&mut self) -> bool {
        if self.locked {
            self.unlock();
        } else {
            self.lock();
        }
        self.locked
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Samples currently held per axis (all three windows stay equal-length).
    pub fn window_len(&self) -> usize {
        self.win_x.len()
    }

    /// Instantaneous classifications currently held by the stability gate.
    pub fn history_len(&self) -> usize {
        self.gate.history_len()
    }
}

impl Default for ActivityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ActivityLevel::*;
    use approx::assert_relative_eq;

    const W: usize = 30;
    const B: usize = 70;

    /// z alternates 1.0 ± spread; a full window has equal counts of each
    /// value, so the per-axis variance is exactly spread² on the z axis.
    fn wiggle(c: &mut ActivityClassifier, n: usize, spread: f32) -> Vec<UpdateResult> {
        (0..n)
            .map(|i| {
                let d = if i % 2 == 0 { -spread } else { spread };
                c.update(0.0, 0.0, 1.0 + d).unwrap()
            })
            .collect()
    }

    #[test]
    fn ladder_matches_shipped_cut_points() {
        let cfg = ClassifierConfig::default();
        assert_eq!(classify_intensity(0.0, &cfg), Still);
        assert_eq!(classify_intensity(0.005, &cfg), Still);
        // The 0.01–0.03 band is the historical dead arm: still Still.
        assert_eq!(classify_intensity(0.02, &cfg), Still);
        assert_eq!(classify_intensity(0.03, &cfg), Still);
        assert_eq!(classify_intensity(0.05, &cfg), LightWalk);
        assert_eq!(classify_intensity(0.15, &cfg), LightWalk);
        assert_eq!(classify_intensity(0.2, &cfg), BriskWalk);
        assert_eq!(classify_intensity(0.75, &cfg), BriskWalk);
        assert_eq!(classify_intensity(0.76, &cfg), Running);
        assert_eq!(classify_intensity(10.0, &cfg), Running);
    }

    #[test]
    fn warm_up_reports_still_and_zero_intensity() {
        let mut c = ActivityClassifier::new();
        for i in 0..W - 1 {
            // Wild inputs must not matter before the windows fill.
            let v = (i as f32) * 3.7 - 20.0;
            let r = c.update(v, -v, v * 2.0).unwrap();
            assert_eq!(r.level, Still);
            assert!(!r.changed);
            assert_eq!(r.intensity, 0.0);
            assert!(r.magnitude >= 0.0);
        }
        assert_eq!(c.history_len(), 0);
    }

    #[test]
    fn stationary_samples_stay_still() {
        let mut c = ActivityClassifier::new();
        for _ in 0..200 {
            let r = c.update(0.0, 0.0, 1.0).unwrap();
            assert_eq!(r.level, Still);
            assert!(!r.changed);
        }
        // Gravity sits entirely in the mean, not the variance.
        assert_eq!(c.current_level(), Still);
    }

    #[test]
    fn brisk_walk_commits_after_warmup_plus_debounce() {
        let mut c = ActivityClassifier::new();
        // spread 0.45 → z-axis variance 0.2025, between 0.15 and 0.75.
        let results = wiggle(&mut c, W + B, 0.45);

        // The window fills on the W-th push and classification starts on
        // that same call, so the 70th unanimous BriskWalk observation is
        // call W + B - 1 (zero-based index W + B - 2).
        let commit = W + B - 2;
        for (i, r) in results.iter().enumerate() {
            if i < commit {
                assert!(!r.changed, "premature commit at call {}", i + 1);
                assert_eq!(r.level, Still);
            }
        }

        let r = &results[commit];
        assert!(r.changed);
        assert_eq!(r.level, BriskWalk);
        assert_relative_eq!(r.intensity, 0.2025, epsilon = 1e-4);

        // The call after the commit reports the new level, change flag clear.
        let last = results.last().unwrap();
        assert!(!last.changed);
        assert_eq!(last.level, BriskWalk);
        assert_eq!(c.current_level(), BriskWalk);
    }

    #[test]
    fn running_intensity_commits_running() {
        let mut c = ActivityClassifier::new();
        // spread 1.0 → variance 1.0 > 0.75.
        let results = wiggle(&mut c, W + B, 1.0);
        let commits: Vec<&UpdateResult> = results.iter().filter(|r| r.changed).collect();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].level, Running);
        assert_eq!(c.current_level(), Running);
    }

    #[test]
    fn outlier_resets_the_debounce_streak() {
        let mut c = ActivityClassifier::new();
        // Warm up plus a partial streak of agreeing BriskWalk-band calls.
        wiggle(&mut c, W + 35, 0.45);
        assert_eq!(c.current_level(), Still);

        // One wild sample spikes the window variance into the Running band
        // for as long as it stays in the window (30 calls).
        c.update(0.0, 0.0, 8.0).unwrap();

        // 70 more agreeing calls are NOT enough: the outlier still pollutes
        // the windows (and thus the gate history) for its first 30 of them.
        let results = wiggle(&mut c, B, 0.45);
        assert!(results.iter().all(|r| !r.changed));
        assert_eq!(c.current_level(), Still);

        // A fresh run of 70 unanimous observations finally commits.
        let results = wiggle(&mut c, B, 0.45);
        assert!(results.iter().any(|r| r.changed));
        assert_eq!(c.current_level(), BriskWalk);
    }

    #[test]
    fn lock_freezes_output_and_state() {
        let mut c = ActivityClassifier::new();
        wiggle(&mut c, W + B, 0.45);
        assert_eq!(c.current_level(), BriskWalk);

        c.lock();
        assert!(c.is_locked());
        let wl = c.window_len();
        let hl = c.history_len();

        for _ in 0..500 {
            let r = c.update(5.0, -5.0, 5.0).unwrap();
            assert_eq!(r.level, BriskWalk);
            assert!(!r.changed);
            assert_eq!(r.intensity, 0.0);
            // Magnitude is a pure function of the sample and still reported.
            assert_relative_eq!(r.magnitude, (75.0f32).sqrt(), epsilon = 1e-5);
        }
        assert_eq!(c.window_len(), wl);
        assert_eq!(c.history_len(), hl);
        assert_eq!(c.current_level(), BriskWalk);

        c.unlock();
        assert!(!c.is_locked());
        // Accumulation resumes from the pre-lock contents.
        assert_eq!(c.window_len(), wl);
        assert_eq!(c.history_len(), hl);
    }

    #[test]
    fn toggle_symmetry() {
        let mut c = ActivityClassifier::new();
        wiggle(&mut c, W + 10, 0.45);
        let wl = c.window_len();
        let hl = c.history_len();

        assert!(c.toggle_lock());
        assert!(c.is_locked());
        assert!(!c.toggle_lock());
        assert!(!c.is_locked());
        assert_eq!(c.window_len(), wl);
        assert_eq!(c.history_len(), hl);

        // Resumes exactly where it left off: the 11 observations recorded
        // before the toggles still count toward the 70-streak, so the commit
        // lands 59 agreeing calls later.
        let results = wiggle(&mut c, B - 10, 0.45);
        let commits: Vec<usize> = results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.changed)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(commits, vec![B - 10 - 2]);
        assert_eq!(c.current_level(), BriskWalk);
    }

    #[test]
    fn non_finite_samples_are_rejected_without_side_effects() {
        let mut c = ActivityClassifier::new();
        c.update(0.0, 0.0, 1.0).unwrap();
        let wl = c.window_len();

        for (x, y, z) in [
            (f32::NAN, 0.0, 1.0),
            (0.0, f32::INFINITY, 1.0),
            (0.0, 0.0, f32::NEG_INFINITY),
        ] {
            let err = c.update(x, y, z).unwrap_err();
            assert!(matches!(err, ClassifierError::NonFiniteSample { .. }));
        }
        assert_eq!(c.window_len(), wl);
        assert_eq!(c.current_level(), Still);
    }

    #[test]
    fn config_validation_rejects_degenerate_tunings() {
        let mut cfg = ClassifierConfig::default();
        cfg.window_size = 0;
        assert!(ActivityClassifier::with_config(cfg).is_err());

        let mut cfg = ClassifierConfig::default();
        cfg.buffer_size = 0;
        assert!(ActivityClassifier::with_config(cfg).is_err());

        let mut cfg = ClassifierConfig::default();
        cfg.thresh_brisk = 0.9; // above thresh_running
        assert!(ActivityClassifier::with_config(cfg).is_err());

        assert!(ClassifierConfig::default().validate().is_ok());
    }

    #[test]
    fn display_names_are_stable() {
        assert_eq!(Still.display_name(), "Staying still");
        assert_eq!(LightWalk.display_name(), "Light walking");
        assert_eq!(BriskWalk.display_name(), "Brisk walking");
        assert_eq!(Running.display_name(), "Running/Intense");
    }

    #[test]
    fn levels_are_ordered_by_intensity() {
        assert!(Still < LightWalk);
        assert!(LightWalk < BriskWalk);
        assert!(BriskWalk < Running);
    }
}
