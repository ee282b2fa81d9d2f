//! Precomputed, looping gain tables.

use std::f64::consts::TAU;

use crate::error::Error;

use super::{Adsr, SegmentMode};

/// Samples reserved at segment boundaries so that rounding never produces a
/// degenerate zero-length ramp.
pub(crate) const GUARD_SAMPLES: usize = 4;

/// The overall contour a gain table follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvelopeShape {
    /// Symmetric raised-cosine window over the whole table.
    Hanning,
    /// Attack, decay, sustain, release segments.
    Adsr(Adsr),
}

/// A precomputed gain curve with a free-running, wrapping read cursor.
///
/// The table is computed once at construction and never changes; reading it
/// with [`next_factor`](Envelope::next_factor) advances a cursor that wraps
/// modulo the table length, so the envelope loops rather than terminating.
///
/// # Examples
///
/// ```
/// use waveterrain::Envelope;
///
/// let mut env = Envelope::hanning(1.0, 1000).unwrap();
/// assert_eq!(env.len(), 1000);
/// // A Hanning window starts at zero gain.
/// assert!(env.next_factor().abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Envelope {
    shape: EnvelopeShape,
    duration: f64,
    sample_rate: u32,
    table: Vec<f64>,
    cursor: usize,
}

impl Envelope {
    /// Builds the gain table for `shape` over `duration` seconds at
    /// `sample_rate`.
    ///
    /// Fails with [`Error::EmptyEnvelope`] when the table would hold no
    /// samples, and with [`Error::SegmentOverflow`] when ADSR segments do
    /// not fit the table.
    pub fn new(shape: EnvelopeShape, duration: f64, sample_rate: u32) -> Result<Self, Error> {
        let len = (duration * sample_rate as f64) as usize;
        if len == 0 {
            return Err(Error::EmptyEnvelope);
        }
        let (shape, table) = match shape {
            EnvelopeShape::Hanning => (EnvelopeShape::Hanning, hanning_window(len)),
            EnvelopeShape::Adsr(adsr) => {
                let adsr = adsr.corrected();
                let table = adsr_table(&adsr, len, sample_rate)?;
                (EnvelopeShape::Adsr(adsr), table)
            }
        };
        Ok(Self {
            shape,
            duration,
            sample_rate,
            table,
            cursor: 0,
        })
    }

    /// Builds a raised-cosine window envelope.
    pub fn hanning(duration: f64, sample_rate: u32) -> Result<Self, Error> {
        Self::new(EnvelopeShape::Hanning, duration, sample_rate)
    }

    /// Builds an ADSR envelope.
    pub fn adsr(adsr: Adsr, duration: f64, sample_rate: u32) -> Result<Self, Error> {
        Self::new(EnvelopeShape::Adsr(adsr), duration, sample_rate)
    }

    /// Returns the gain at the cursor and advances it, wrapping at the end
    /// of the table.
    pub fn next_factor(&mut self) -> f64 {
        let factor = self.table[self.cursor];
        self.cursor = (self.cursor + 1) % self.table.len();
        factor
    }

    /// Rewinds the cursor to the start of the table.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of samples in the gain table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The full gain table, for inspection or plotting by external tools.
    pub fn table(&self) -> &[f64] {
        &self.table
    }

    /// The shape this table was built from, with any exponential-mode
    /// amplitude corrections applied.
    pub fn shape(&self) -> &EnvelopeShape {
        &self.shape
    }

    /// Envelope duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sample rate the table was computed at.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// Symmetric raised-cosine window: `0.5 - 0.5*cos(2*pi*n/(len-1))`.
fn hanning_window(len: usize) -> Vec<f64> {
    if len == 1 {
        return vec![1.0];
    }
    let denom = (len - 1) as f64;
    (0..len)
        .map(|n| 0.5 - 0.5 * (TAU * n as f64 / denom).cos())
        .collect()
}

fn adsr_table(adsr: &Adsr, len: usize, sample_rate: u32) -> Result<Vec<f64>, Error> {
    let sr = sample_rate as f64;
    let attack = ((adsr.attack() * sr) as i64 - GUARD_SAMPLES as i64).max(0) as usize;
    let decay = (adsr.decay() * sr) as usize;
    let release = (adsr.release() * sr) as usize;

    let required = attack + decay + release + GUARD_SAMPLES;
    if required > len {
        return Err(Error::SegmentOverflow {
            required,
            available: len,
        });
    }
    // The final guard also pads the end of the table, so release finishes
    // GUARD_SAMPLES short of the last slot.
    let sustain = len - required;

    let initial_amp = adsr.initial_amp();
    let sustain_amp = adsr.sustain_amp();
    let end_amp = adsr.end_amp();

    let mut table = vec![0.0; len];

    // Attack: initial_amp -> 1.0, offset past the leading guard.
    if attack > 0 {
        match adsr.mode() {
            SegmentMode::Linear => {
                let step = (1.0 - initial_amp) / attack as f64;
                for (i, slot) in table.iter_mut().skip(GUARD_SAMPLES).take(attack).enumerate() {
                    *slot = initial_amp + step * i as f64;
                }
            }
            SegmentMode::Exponential => {
                let ratio = (((1.0 - initial_amp) / initial_amp).ln() / attack as f64).exp();
                let mut amp = initial_amp;
                for slot in table.iter_mut().skip(GUARD_SAMPLES).take(attack) {
                    *slot = amp;
                    amp *= ratio;
                }
            }
        }
    }

    // Decay: 1.0 -> sustain_amp.
    if decay > 0 {
        match adsr.mode() {
            SegmentMode::Linear => {
                let step = (1.0 - sustain_amp) / decay as f64;
                for (i, slot) in table.iter_mut().skip(attack).take(decay).enumerate() {
                    *slot = 1.0 - step * i as f64;
                }
            }
            SegmentMode::Exponential => {
                let ratio = (sustain_amp.ln() / decay as f64).exp();
                let mut amp = 1.0;
                for slot in table.iter_mut().skip(attack).take(decay) {
                    *slot = amp;
                    amp *= ratio;
                }
            }
        }
    }

    // Sustain: flat.
    let sustain_start = attack + decay;
    for slot in table.iter_mut().skip(sustain_start).take(sustain) {
        *slot = sustain_amp;
    }

    // Release: sustain_amp -> end_amp.
    if release > 0 {
        let release_start = sustain_start + sustain;
        match adsr.mode() {
            SegmentMode::Linear => {
                let step = (sustain_amp - end_amp) / release as f64;
                for (i, slot) in table.iter_mut().skip(release_start).take(release).enumerate() {
                    *slot = sustain_amp - step * i as f64;
                }
            }
            SegmentMode::Exponential => {
                let ratio = ((end_amp / sustain_amp).ln() / release as f64).exp();
                let mut amp = sustain_amp;
                for slot in table.iter_mut().skip(release_start).take(release) {
                    *slot = amp;
                    amp *= ratio;
                }
            }
        }
    }

    Ok(table)
}
