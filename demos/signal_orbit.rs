//! Renders audio from a signal-driven orbit (requires `signal-loader`).
//!
//! Synthesizes a short stereo WAV of two detuned sines, loads it back as a
//! driving signal, and renders half a second of terrain audio steered by
//! it into `wt_signal.wav`.

use std::f64::consts::TAU;

use anyhow::Result;
use hound::{SampleFormat, WavSpec, WavWriter};
use waveterrain::{DrivingSignal, Orbit, Terrain, WaveTerrainSynth};

const SAMPLE_RATE: u32 = 44_100;
const DRIVER_PATH: &str = "wt_driver.wav";
const OUTPUT_PATH: &str = "wt_signal.wav";

fn write_driver_wav() -> Result<()> {
    let spec = WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(DRIVER_PATH, spec)?;
    let frames = SAMPLE_RATE as usize / 10;
    for i in 0..frames {
        let t = i as f64 / SAMPLE_RATE as f64;
        let left = 0.4 * (TAU * 3.0 * t).sin();
        let right = 0.4 * (TAU * 5.0 * t).sin();
        writer.write_sample((left * i16::MAX as f64) as i16)?;
        writer.write_sample((right * i16::MAX as f64) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

fn main() -> Result<()> {
    write_driver_wav()?;

    let signal = DrivingSignal::from_wav_file(DRIVER_PATH)
        .map_err(|e| anyhow::anyhow!("failed to load driving signal: {e}"))?;

    let terrain = Terrain::new(256, 256).with_octaves(2).with_seed(42);
    let orbit = Orbit::signal_driven((0.5, 0.5), signal);
    let mut synth = WaveTerrainSynth::new(SAMPLE_RATE, terrain, orbit);

    let total = SAMPLE_RATE as usize / 2;
    let mut buffer = vec![0.0f64; total];
    synth.render((220.0, 330.0), 5.0, 0.6, &mut buffer);

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(OUTPUT_PATH, spec)?;
    for &sample in &buffer {
        writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f64) as i16)?;
    }
    writer.finalize()?;

    println!("wrote {OUTPUT_PATH} ({total} samples at {SAMPLE_RATE} Hz)");
    Ok(())
}
