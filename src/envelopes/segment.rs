//! Segment shaping modes for envelope ramps.

use std::str::FromStr;

use crate::error::Error;

/// How an envelope segment interpolates between its endpoint amplitudes.
///
/// Parses from the short configuration strings `"lin"` and `"exp"`:
///
/// ```
/// use waveterrain::SegmentMode;
///
/// let mode: SegmentMode = "exp".parse().unwrap();
/// assert_eq!(mode, SegmentMode::Exponential);
/// assert!("sigmoid".parse::<SegmentMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMode {
    /// Constant-rate interpolation.
    #[default]
    Linear,
    /// Geometric interpolation. Endpoint amplitudes must be strictly
    /// positive; non-positive values are replaced by small defaults at
    /// build time.
    Exponential,
}

impl FromStr for SegmentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lin" => Ok(SegmentMode::Linear),
            "exp" => Ok(SegmentMode::Exponential),
            other => Err(Error::UnknownSegmentMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("lin".parse::<SegmentMode>().unwrap(), SegmentMode::Linear);
        assert_eq!(
            "exp".parse::<SegmentMode>().unwrap(),
            SegmentMode::Exponential
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "quadratic".parse::<SegmentMode>().unwrap_err();
        assert_eq!(err, Error::UnknownSegmentMode("quadratic".to_string()));
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(SegmentMode::default(), SegmentMode::Linear);
    }
}
