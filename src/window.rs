// StrideSense — Per-Axis Sliding Window
//
// Fixed-capacity ring buffer of recent acceleration samples for one axis.
// Backing storage is allocated once; pushing is O(1) with no reallocation on
// the 100 Hz hot path.

/// Insertion-ordered window of the most recent `capacity` samples.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    buf: Vec<f32>,
    cap: usize,
    head: usize, // next overwrite position once full
}

impl SlidingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            cap: capacity,
            head: 0,
        }
    }

    /// Append a sample, evicting the oldest when at capacity.
    pub fn push(&mut self, value: f32) {
        if self.buf.len() < self.cap {
            self.buf.push(value);
        } else {
            self.buf[self.head] = value;
            self.head = (self.head + 1) % self.cap;
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.len() == self.cap
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Population variance (divisor = current length) over the contents.
    ///
    /// Returns 0.0 for an empty window by convention; callers gate on a
    /// minimum population before acting on the value.
    pub fn variance(&self) -> f32 {
        if self.buf.is_empty() {
            return 0.0;
        }
        let n = self.buf.len() as f32;
        let mean = self.buf.iter().sum::<f32>() / n;
        self.buf.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n
    }
}
