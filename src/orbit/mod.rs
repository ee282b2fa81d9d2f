//! Orbit trajectories over the unit square.
//!
//! An [`Orbit`] turns a phase and a frequency pair into a coordinate in
//! `[0,1] x [0,1]`, which the engine then maps onto terrain cells. The
//! trajectory family is chosen by [`OrbitPath`]; an optional [`Envelope`]
//! modulates the orbit radius per sample, and a signal-driven path replaces
//! the radius with an external [`DrivingSignal`].

mod signal;

use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::envelopes::Envelope;

pub use signal::DrivingSignal;

/// The trajectory family an orbit follows.
///
/// Each variant carries exactly the state its trajectory needs; a
/// signal-driven orbit owns its validated driving signal, so it can never
/// be asked for coordinates without one.
#[derive(Debug)]
pub enum OrbitPath {
    /// Fixed-radius ellipse around the center.
    Circular,
    /// Circular trajectory whose radius grows with the phase accumulator.
    /// Growth is unbounded; the caller bounds it through `max_r` and the
    /// render duration.
    Spiral,
    /// Fresh uniform radius draw per axis per sample; a cloud around the
    /// center rather than a smooth path.
    Chaotic,
    /// Radius steered frame-by-frame by an external two-channel signal.
    SignalDriven(DrivingSignal),
}

/// A parametric trajectory generator producing terrain lookup coordinates.
///
/// The orbit is stateful: the attached envelope cursor and driving-signal
/// cursor advance by one step per [`calculate`](Orbit::calculate) call, so
/// coordinates must be requested strictly in sample order.
///
/// Orbits that never draw randomness still carry an RNG handle; only the
/// chaotic path consumes it. Use [`with_rng`](Orbit::with_rng) with a seeded
/// generator for reproducible chaotic trajectories.
///
/// # Examples
///
/// ```
/// use waveterrain::Orbit;
///
/// let mut orbit = Orbit::circular((0.5, 0.5));
/// let (x, y) = orbit.calculate(0.0, (1.0, 1.0), 1.0);
/// assert!((x - 1.0).abs() < 1e-12);
/// assert!((y - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Orbit<R: Rng = ThreadRng> {
    path: OrbitPath,
    center: (f64, f64),
    envelope: Option<Envelope>,
    rng: R,
}

impl Orbit<ThreadRng> {
    /// Creates an orbit with the thread-local RNG.
    pub fn new(path: OrbitPath, center: (f64, f64)) -> Self {
        Self::with_rng(path, center, rand::thread_rng())
    }

    /// Fixed-radius circular orbit around `center`.
    pub fn circular(center: (f64, f64)) -> Self {
        Self::new(OrbitPath::Circular, center)
    }

    /// Spiral orbit around `center`.
    pub fn spiral(center: (f64, f64)) -> Self {
        Self::new(OrbitPath::Spiral, center)
    }

    /// Chaotic orbit around `center`, drawing radii from the thread-local
    /// RNG.
    pub fn chaotic(center: (f64, f64)) -> Self {
        Self::new(OrbitPath::Chaotic, center)
    }

    /// Orbit steered by `signal` around `center`.
    pub fn signal_driven(center: (f64, f64), signal: DrivingSignal) -> Self {
        Self::new(OrbitPath::SignalDriven(signal), center)
    }
}

impl<R: Rng> Orbit<R> {
    /// Creates an orbit with a caller-supplied RNG, e.g. a seeded `StdRng`
    /// for reproducible chaotic trajectories.
    pub fn with_rng(path: OrbitPath, center: (f64, f64), rng: R) -> Self {
        Self {
            path,
            center,
            envelope: None,
            rng,
        }
    }

    /// Attaches an envelope that scales the orbit radius per sample.
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = Some(envelope);
        self
    }

    /// The trajectory family.
    pub fn path(&self) -> &OrbitPath {
        &self.path
    }

    /// Orbit center.
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// The attached envelope, if any.
    pub fn envelope(&self) -> Option<&Envelope> {
        self.envelope.as_ref()
    }

    /// Computes the coordinate for the given phase, advancing the envelope
    /// and driving-signal cursors by one step.
    ///
    /// `freqs` are the per-axis frequencies in Hz and `max_r` bounds the
    /// radius; the effective per-axis radius is additionally clamped so the
    /// trajectory stays inside the unit square on the high side.
    pub fn calculate(&mut self, phase: f64, freqs: (f64, f64), max_r: f64) -> (f64, f64) {
        let factor = match self.envelope.as_mut() {
            Some(env) => env.next_factor(),
            None => 1.0,
        };
        self.coords_at(phase, freqs, max_r, factor)
    }

    /// Samples `n` trajectory points at unit frequency and radius, with the
    /// envelope factor pinned to 1.0, for visual inspection.
    ///
    /// Phase advances by `period` per point. Signal-driven orbits still
    /// advance their signal cursor. This never feeds the audio path.
    pub fn sample_trajectory(&mut self, period: f64, n: usize) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(n);
        let mut phase = 0.0;
        for _ in 0..n {
            points.push(self.coords_at(phase, (1.0, 1.0), 1.0, 1.0));
            phase += period;
        }
        points
    }

    fn coords_at(&mut self, phase: f64, freqs: (f64, f64), max_r: f64, factor: f64) -> (f64, f64) {
        let (cx, cy) = self.center;
        // Clamp so center + radius cannot leave the unit square.
        let rx = if max_r <= 1.0 - cx { max_r } else { 1.0 - cx };
        let ry = if max_r <= 1.0 - cy { max_r } else { 1.0 - cy };

        let cos = (TAU * freqs.0 * phase).cos();
        let sin = (TAU * freqs.1 * phase).sin();

        match &mut self.path {
            OrbitPath::Circular => (cx + rx * factor * cos, cy + ry * factor * sin),
            OrbitPath::Spiral => {
                let growth = factor * phase;
                (cx + rx * growth * cos, cy + ry * growth * sin)
            }
            OrbitPath::Chaotic => {
                let bx = rx * factor;
                let by = ry * factor;
                let dx = if bx > 0.0 { self.rng.gen_range(0.0..bx) } else { 0.0 };
                let dy = if by > 0.0 { self.rng.gen_range(0.0..by) } else { 0.0 };
                (cx + dx * cos, cy + dy * sin)
            }
            OrbitPath::SignalDriven(sig) => {
                let (sx, sy) = sig.next_frame();
                // Clamp kicks in only when the driving sample overshoots the
                // scaled radius; otherwise the raw sample, sign included, is
                // the radius.
                let rx = if sx > rx * factor { rx } else { sx };
                let ry = if sy > ry * factor { ry } else { sy };
                (cx + rx * cos, cy + ry * sin)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelopes::{Adsr, Envelope};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn circular_at_phase_zero() {
        let mut orbit = Orbit::circular((0.5, 0.5));
        let (x, y) = orbit.calculate(0.0, (1.0, 1.0), 1.0);
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn circular_radius_clamps_to_unit_square() {
        let mut orbit = Orbit::circular((0.75, 0.5));
        for i in 0..1000 {
            let phase = i as f64 / 1000.0;
            let (x, _) = orbit.calculate(phase, (3.0, 3.0), 2.0);
            assert!(x <= 1.0 + 1e-12, "x escaped: {x}");
            assert!(x >= 0.5 - 1e-12, "x escaped low: {x}");
        }
    }

    #[test]
    fn spiral_distance_grows_linearly_with_phase() {
        let mut orbit = Orbit::spiral((0.5, 0.5));
        // With equal axis radii r0 and equal frequencies, the distance from
        // the center is exactly r0 * phase.
        for &phase in &[0.1, 0.2, 0.4] {
            let (x, y) = orbit.calculate(phase, (1.0, 1.0), 0.5);
            let dist = ((x - 0.5).powi(2) + (y - 0.5).powi(2)).sqrt();
            assert!((dist - 0.5 * phase).abs() < 1e-12, "phase {phase}: {dist}");
        }
    }

    #[test]
    fn chaotic_is_reproducible_with_seeded_rng() {
        let mut a = Orbit::with_rng(OrbitPath::Chaotic, (0.5, 0.5), StdRng::seed_from_u64(9));
        let mut b = Orbit::with_rng(OrbitPath::Chaotic, (0.5, 0.5), StdRng::seed_from_u64(9));
        for i in 0..100 {
            let phase = i as f64 / 1000.0;
            assert_eq!(
                a.calculate(phase, (2.0, 2.0), 0.4),
                b.calculate(phase, (2.0, 2.0), 0.4)
            );
        }
    }

    #[test]
    fn chaotic_stays_within_radius() {
        let mut orbit = Orbit::chaotic((0.5, 0.5));
        for i in 0..1000 {
            let phase = i as f64 / 1000.0;
            let (x, y) = orbit.calculate(phase, (2.0, 2.0), 0.3);
            assert!((x - 0.5).abs() <= 0.3 + 1e-12);
            assert!((y - 0.5).abs() <= 0.3 + 1e-12);
        }
    }

    #[test]
    fn chaotic_zero_radius_sits_at_center() {
        let mut orbit = Orbit::chaotic((0.5, 0.5));
        let (x, y) = orbit.calculate(0.25, (1.0, 1.0), 0.0);
        assert_eq!((x, y), (0.5, 0.5));
    }

    #[test]
    fn signal_sample_below_clamp_becomes_radius() {
        let sig = DrivingSignal::from_mono(vec![0.1]).unwrap();
        let mut orbit = Orbit::signal_driven((0.5, 0.5), sig);
        // Clamped radius is 0.4; the 0.1 driving sample is smaller, so it
        // is used directly: x = 0.5 + 0.1 * cos(0).
        let (x, y) = orbit.calculate(0.0, (1.0, 1.0), 0.4);
        assert!((x - 0.6).abs() < 1e-12);
        assert!((y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn signal_sample_above_clamp_uses_clamp() {
        let sig = DrivingSignal::from_mono(vec![0.9]).unwrap();
        let mut orbit = Orbit::signal_driven((0.5, 0.5), sig);
        let (x, _) = orbit.calculate(0.0, (1.0, 1.0), 0.2);
        assert!((x - 0.7).abs() < 1e-12);
    }

    #[test]
    fn signal_cursor_wraps_across_calls() {
        let sig = DrivingSignal::from_mono(vec![0.1, 0.3]).unwrap();
        let mut orbit = Orbit::signal_driven((0.5, 0.5), sig);
        let first = orbit.calculate(0.0, (1.0, 1.0), 0.5);
        orbit.calculate(0.0, (1.0, 1.0), 0.5);
        let wrapped = orbit.calculate(0.0, (1.0, 1.0), 0.5);
        assert_eq!(first, wrapped);
    }

    #[test]
    fn envelope_scales_radius() {
        // A flat sustain at 0.5 halves the circular radius.
        let env = Envelope::adsr(Adsr::new().with_sustain_amp(0.5), 0.1, 1000).unwrap();
        let mut orbit = Orbit::circular((0.5, 0.5)).with_envelope(env);
        let (x, _) = orbit.calculate(0.0, (1.0, 1.0), 0.5);
        assert!((x - 0.75).abs() < 1e-12);
    }

    #[test]
    fn trajectory_ignores_envelope() {
        let env = Envelope::adsr(Adsr::new().with_sustain_amp(0.25), 0.1, 1000).unwrap();
        let mut orbit = Orbit::circular((0.5, 0.5)).with_envelope(env);
        let points = orbit.sample_trajectory(0.001, 10);
        assert_eq!(points.len(), 10);
        // Unit radius clamped to 0.5 at phase 0, unscaled by the envelope.
        assert!((points[0].0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn trajectory_point_count() {
        let mut orbit = Orbit::spiral((0.2, 0.2));
        assert_eq!(orbit.sample_trajectory(0.01, 250).len(), 250);
    }
}
