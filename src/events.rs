// StrideSense — Core Data Types & Events

// ---------------------------------------------------------------------------
// Sensor Sample (3-axis accelerometer reading, units of g)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Sample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Instantaneous acceleration magnitude |a| in g.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// All three components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Activity Level
// ---------------------------------------------------------------------------

/// The four movement-intensity classes, ordered from least to most intense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivityLevel {
    Still,
    LightWalk,
    BriskWalk,
    Running,
}

impl ActivityLevel {
    /// Stable human-readable label, as shown on the device display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Still => "Staying still",
            Self::LightWalk => "Light walking",
            Self::BriskWalk => "Brisk walking",
            Self::Running => "Running/Intense",
        }
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        Self::Still
    }
}

// ---------------------------------------------------------------------------
// Update Result
// ---------------------------------------------------------------------------

/// Outcome of a single `update` call. Returned by value and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateResult {
    /// The committed activity level after this update.
    pub level: ActivityLevel,
    /// `true` only on the call that committed a level change.
    pub changed: bool,
    /// Summed per-axis acceleration variance (the movement-intensity signal).
    /// Zero during warm-up and while locked.
    pub intensity: f32,
    /// Instantaneous |a| of this sample in g. Always computed, lock or not.
    pub magnitude: f32,
}

// ---------------------------------------------------------------------------
// Classifier Errors
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    /// A sample component was NaN or infinite. The call is rejected before
    /// any window or buffer is touched.
    #[error("non-finite acceleration sample ({x}, {y}, {z})")]
    NonFiniteSample { x: f32, y: f32, z: f32 },

    #[error("invalid classifier configuration: {0}")]
    InvalidConfig(&'static str),
}

// ---------------------------------------------------------------------------
// Engine Events — sent to the consumer task in the demo runtime
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy)]
pub enum EngineEvent {
    /// The stability gate committed a new activity level.
    LevelChanged(ActivityLevel, f32),
    /// The lock override was toggled (`true` = now locked).
    LockChanged(bool),
}
