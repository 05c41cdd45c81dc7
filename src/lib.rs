//! StrideSense — wearable activity-level classification engine.
//!
//! Turns a stream of 3-axis acceleration samples into a stable, debounced
//! activity label. The signal is the summed per-axis *variance* over a short
//! sliding window rather than the raw magnitude, so gravity (a constant
//! offset on one axis) contributes nothing once the window holds stationary
//! samples. A stability gate requires a full buffer of agreeing
//! instantaneous classifications before a level change is committed, and a
//! manual lock override can freeze the output entirely.
//!
//! ```
//! use stridesense::{ActivityClassifier, ActivityLevel};
//!
//! let mut classifier = ActivityClassifier::new();
//! let result = classifier.update(0.02, -0.01, 0.98).unwrap();
//! assert_eq!(result.level, ActivityLevel::Still);
//! ```
//!
//! For concurrent use (a sensor loop plus an asynchronous lock control) wrap
//! it in [`SharedClassifier`], which holds a mutex across each full call.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod events;
pub mod gate;
pub mod window;

pub use classifier::{classify_intensity, ActivityClassifier};
pub use config::ClassifierConfig;
pub use engine::SharedClassifier;
pub use events::{ActivityLevel, ClassifierError, EngineEvent, Sample, UpdateResult};
