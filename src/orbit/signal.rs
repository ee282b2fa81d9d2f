//! Driving signals for signal-driven orbits.

#[cfg(feature = "signal-loader")]
use std::path::Path;

use crate::error::Error;

/// A two-channel sample buffer that steers a signal-driven orbit.
///
/// The x and y channels are read in lockstep by a cursor that wraps at the
/// end of the buffer, so a short signal loops forever. Channels are
/// validated at construction: both non-empty and of equal length.
///
/// # Examples
///
/// ```
/// use waveterrain::DrivingSignal;
///
/// let sig = DrivingSignal::from_mono(vec![0.1, 0.2, 0.3]).unwrap();
/// assert_eq!(sig.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DrivingSignal {
    x: Vec<f64>,
    y: Vec<f64>,
    cursor: usize,
}

impl DrivingSignal {
    /// Wraps two equal-length channels.
    pub fn from_channels(x: Vec<f64>, y: Vec<f64>) -> Result<Self, Error> {
        if x.is_empty() || y.is_empty() {
            return Err(Error::EmptySignal);
        }
        if x.len() != y.len() {
            return Err(Error::ChannelMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        Ok(Self { x, y, cursor: 0 })
    }

    /// Broadcasts a mono buffer to both channels.
    pub fn from_mono(samples: Vec<f64>) -> Result<Self, Error> {
        let y = samples.clone();
        Self::from_channels(samples, y)
    }

    /// Loads a driving signal from a WAV file (requires the `signal-loader`
    /// feature).
    ///
    /// Mono files are broadcast to both channels; for files with two or
    /// more channels the first channel drives x and the second drives y.
    /// Integer samples are normalized to `[-1.0, 1.0]`. The file is read at
    /// its native sample rate; no resampling is performed, so any rate
    /// mismatch with the engine is the caller's to manage.
    #[cfg(feature = "signal-loader")]
    pub fn from_wav_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        let samples: Result<Vec<f64>, _> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .map(|s| s.map(f64::from))
                .collect(),
            hound::SampleFormat::Int => {
                let max_value = (1i64 << (spec.bits_per_sample - 1)) as f64;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f64 / max_value))
                    .collect()
            }
        };
        let samples = samples?;

        let channels = spec.channels.max(1) as usize;
        if channels == 1 {
            return Ok(Self::from_mono(samples)?);
        }

        let mut x: Vec<f64> = samples.iter().step_by(channels).copied().collect();
        let mut y: Vec<f64> = samples.iter().skip(1).step_by(channels).copied().collect();
        // A truncated final frame can leave the channels one sample apart.
        let frames = x.len().min(y.len());
        x.truncate(frames);
        y.truncate(frames);

        Ok(Self::from_channels(x, y)?)
    }

    /// Number of frames in the signal.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: construction rejects empty signals.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Rewinds the cursor to the first frame.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns the `(x, y)` frame at the cursor and advances it, wrapping
    /// at the end of the signal.
    pub fn next_frame(&mut self) -> (f64, f64) {
        let frame = (self.x[self.cursor], self.y[self.cursor]);
        self.cursor = (self.cursor + 1) % self.x.len();
        frame
    }
}
