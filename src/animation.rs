//! The single piece of mutable state: the cloud drift scalar.

/// Amount the drift scalar advances each frame.
pub const CLOUD_SHIFT_STEP: f32 = 0.02;

/// Horizontal drift of the cloud field, advanced once per frame.
///
/// The scalar grows without bound for the life of the process; it is never
/// reset or wrapped. It is derived from a frame counter rather than
/// accumulated by repeated addition, so `value() == frames × 0.02` holds
/// exactly for any reachable frame count instead of drifting through rounding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CloudShift {
    frames: u64,
}

impl CloudShift {
    /// Start at zero, before the first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame and return the new scalar, ready for upload.
    pub fn advance(&mut self) -> f32 {
        self.frames += 1;
        self.value()
    }

    /// Current drift scalar.
    pub fn value(&self) -> f32 {
        self.frames as f32 * CLOUD_SHIFT_STEP
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
