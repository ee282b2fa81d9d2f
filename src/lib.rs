//! Waveterrain - wave terrain synthesis for Rust.
//!
//! Wave terrain synthesis generates audio by tracing a 2-D trajectory (an
//! [`Orbit`]) over a noise surface (a [`Terrain`]) and reading the surface
//! value under the trajectory once per output tick. An optional looping
//! [`Envelope`] shapes the orbit radius over time, and the engine's output
//! runs through a cascaded DC-blocking filter.
//!
//! Rendering is offline, deterministic, and pull-based: build the parts,
//! wire them into a [`WaveTerrainSynth`], and request one sample per tick.
//!
//! ```
//! use waveterrain::{Orbit, Terrain, WaveTerrainSynth};
//!
//! let terrain = Terrain::new(64, 64).with_seed(7);
//! let orbit = Orbit::circular((0.5, 0.5));
//! let mut synth = WaveTerrainSynth::new(44_100, terrain, orbit);
//!
//! let mut buffer = vec![0.0; 256];
//! synth.render((440.0, 440.0), 10.0, 0.5, &mut buffer);
//! ```

pub mod engine;
pub mod envelopes;
pub mod error;
pub mod filters;
pub mod orbit;
pub mod terrain;

// Re-export commonly used types at the crate root
pub use engine::WaveTerrainSynth;
pub use envelopes::{Adsr, Envelope, EnvelopeShape, SegmentMode};
pub use error::Error;
pub use filters::DcBlocker;
pub use orbit::{DrivingSignal, Orbit, OrbitPath};
pub use terrain::{Surface, Terrain};
