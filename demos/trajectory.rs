//! Dumps orbit trajectories as CSV for external plotting.
//!
//! Prints 1000 points per orbit kind at unit frequency and radius, e.g.:
//!
//! ```text
//! cargo run --example trajectory > orbits.csv
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use waveterrain::{Orbit, OrbitPath};

const POINTS: usize = 1_000;

fn main() {
    let period = 1.0 / POINTS as f64;
    let center = (0.5, 0.5);

    let mut orbits = [
        ("circular", Orbit::with_rng(OrbitPath::Circular, center, StdRng::seed_from_u64(17))),
        ("spiral", Orbit::with_rng(OrbitPath::Spiral, center, StdRng::seed_from_u64(17))),
        ("chaotic", Orbit::with_rng(OrbitPath::Chaotic, center, StdRng::seed_from_u64(17))),
    ];

    println!("kind,x,y");
    for (name, orbit) in orbits.iter_mut() {
        for (x, y) in orbit.sample_trajectory(period, POINTS) {
            println!("{name},{x:.6},{y:.6}");
        }
    }
}
