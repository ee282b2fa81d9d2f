//! ADSR configuration.

use log::warn;

use super::SegmentMode;

/// Default initial amplitude substituted in exponential mode when the
/// configured value is not strictly positive.
pub const DEFAULT_INITIAL_EXP_AMP: f64 = 0.0001;

/// Default end amplitude substituted in exponential mode when the configured
/// value is not strictly positive.
pub const DEFAULT_END_EXP_AMP: f64 = 0.001;

/// Attack-decay-sustain-release parameters for a gain table.
///
/// Durations are in seconds and amplitudes in `[0, 1]`. The sustain duration
/// is implicit: whatever remains of the envelope once attack, decay, and
/// release have been carved out.
///
/// # Examples
///
/// ```
/// use waveterrain::{Adsr, SegmentMode};
///
/// let adsr = Adsr::new()
///     .with_attack(0.01)
///     .with_release(0.05)
///     .with_sustain_amp(0.8)
///     .with_mode(SegmentMode::Linear);
/// assert_eq!(adsr.sustain_amp(), 0.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    attack: f64,
    decay: f64,
    release: f64,
    initial_amp: f64,
    sustain_amp: f64,
    end_amp: f64,
    mode: SegmentMode,
}

impl Default for Adsr {
    fn default() -> Self {
        Self {
            attack: 0.0,
            decay: 0.0,
            release: 0.0,
            initial_amp: 0.0,
            sustain_amp: 1.0,
            end_amp: 0.0,
            mode: SegmentMode::Linear,
        }
    }
}

impl Adsr {
    /// Creates an ADSR with no ramps: zero-length attack, decay, and
    /// release, full-scale sustain, linear mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the attack duration in seconds.
    pub fn with_attack(mut self, secs: f64) -> Self {
        self.attack = secs.max(0.0);
        self
    }

    /// Sets the decay duration in seconds.
    pub fn with_decay(mut self, secs: f64) -> Self {
        self.decay = secs.max(0.0);
        self
    }

    /// Sets the release duration in seconds.
    pub fn with_release(mut self, secs: f64) -> Self {
        self.release = secs.max(0.0);
        self
    }

    /// Sets the amplitude the attack ramp starts from.
    pub fn with_initial_amp(mut self, amp: f64) -> Self {
        self.initial_amp = amp;
        self
    }

    /// Sets the amplitude held during sustain.
    pub fn with_sustain_amp(mut self, amp: f64) -> Self {
        self.sustain_amp = amp;
        self
    }

    /// Sets the amplitude the release ramp ends at.
    pub fn with_end_amp(mut self, amp: f64) -> Self {
        self.end_amp = amp;
        self
    }

    /// Sets the shaping mode shared by all three ramps.
    pub fn with_mode(mut self, mode: SegmentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Attack duration in seconds.
    pub fn attack(&self) -> f64 {
        self.attack
    }

    /// Decay duration in seconds.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Release duration in seconds.
    pub fn release(&self) -> f64 {
        self.release
    }

    /// Amplitude the attack ramp starts from.
    pub fn initial_amp(&self) -> f64 {
        self.initial_amp
    }

    /// Amplitude held during sustain.
    pub fn sustain_amp(&self) -> f64 {
        self.sustain_amp
    }

    /// Amplitude the release ramp ends at.
    pub fn end_amp(&self) -> f64 {
        self.end_amp
    }

    /// Shaping mode shared by all three ramps.
    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Exponential ramps take the log of the endpoint amplitudes, so
    /// non-positive values are replaced by small positive defaults rather
    /// than rejected.
    pub(crate) fn corrected(mut self) -> Self {
        if self.mode == SegmentMode::Exponential {
            if self.initial_amp <= 0.0 {
                warn!("exponential mode: initial amp set to default {DEFAULT_INITIAL_EXP_AMP}");
                self.initial_amp = DEFAULT_INITIAL_EXP_AMP;
            }
            if self.end_amp <= 0.0 {
                warn!("exponential mode: end amp set to default {DEFAULT_END_EXP_AMP}");
                self.end_amp = DEFAULT_END_EXP_AMP;
            }
        }
        self
    }
}
