//! Error types for envelope construction and driving-signal validation.

use std::fmt;

/// Errors surfaced while building envelopes or attaching driving signals.
///
/// Construction is the only fallible stage: once an [`Envelope`] or a
/// [`DrivingSignal`] exists, the per-sample operations that consume them
/// never fail.
///
/// [`Envelope`]: crate::Envelope
/// [`DrivingSignal`]: crate::DrivingSignal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// ADSR segment sample counts exceed the envelope length.
    SegmentOverflow {
        /// Samples the configured segments need, guard included.
        required: usize,
        /// Samples the table actually holds.
        available: usize,
    },
    /// A segment mode string other than `"lin"` or `"exp"`.
    UnknownSegmentMode(String),
    /// Duration times sample rate rounds down to zero samples, which would
    /// leave the looping cursor with no table to wrap over.
    EmptyEnvelope,
    /// A driving signal with no samples.
    EmptySignal,
    /// Driving-signal channels of unequal length.
    ChannelMismatch {
        /// Length of the x channel.
        left: usize,
        /// Length of the y channel.
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SegmentOverflow {
                required,
                available,
            } => write!(
                f,
                "envelope segments need {required} samples but the table holds {available}"
            ),
            Error::UnknownSegmentMode(s) => {
                write!(f, "unknown segment mode '{s}' (expected \"lin\" or \"exp\")")
            }
            Error::EmptyEnvelope => {
                write!(f, "envelope duration times sample rate rounds to zero samples")
            }
            Error::EmptySignal => write!(f, "driving signal contains no samples"),
            Error::ChannelMismatch { left, right } => write!(
                f,
                "driving-signal channels differ in length: x has {left}, y has {right}"
            ),
        }
    }
}

impl std::error::Error for Error {}
