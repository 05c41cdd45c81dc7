// StrideSense — Shared Classifier Handle
//
// The sensor task calls `update` at 100 Hz while the control path toggles the
// lock from another thread. Both go through this handle; the mutex is held
// for the full duration of each call, so a toggle can never interleave with a
// half-applied window push or gate commit.

use std::sync::{Arc, Mutex};

use crate::classifier::ActivityClassifier;
use crate::config::ClassifierConfig;
use crate::events::{ActivityLevel, ClassifierError, UpdateResult};

/// Cloneable thread-safe handle to one [`ActivityClassifier`].
///
/// Only copies of results cross this boundary; the classifier itself is
/// never exposed by reference.
#[derive(Clone)]
pub struct SharedClassifier {
    inner: Arc<Mutex<ActivityClassifier>>,
}

impl SharedClassifier {
    pub fn new() -> Self {
        Self::from_classifier(ActivityClassifier::new())
    }

    pub fn with_config(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        Ok(Self::from_classifier(ActivityClassifier::with_config(config)?))
    }

    fn from_classifier(classifier: ActivityClassifier) -> Self {
        Self {
            inner: Arc::new(Mutex::new(classifier)),
        }
    }

    pub fn update(&self, x: f32, y: f32, z: f32) -> Result<UpdateResult, ClassifierError> {
        self.inner.lock().unwrap().update(x, y, z)
    }

    pub fn current_level(&self) -> ActivityLevel {
        self.inner.lock().unwrap().current_level()
    }

    pub fn is_locked(&self) -> bool {
        self.inner.lock().unwrap().is_locked()
    }

    pub fn lock_level(&self) {
        self.inner.lock().unwrap().lock()
    }

    pub fn unlock_level(&self) {
        self.inner.lock().unwrap().unlock()
    }

    pub fn toggle_lock(&self) -> bool {
        self.inner.lock().unwrap().toggle_lock()
    }

    /// Per-axis window population (diagnostics).
    pub fn window_len(&self) -> usize {
        self.inner.lock().unwrap().window_len()
    }
}

impl Default for SharedClassifier {
    fn default() -> Self {
        Self::new()
    }
}
