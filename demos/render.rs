//! Offline render of a spiral-orbit patch to a 16-bit WAV file.
//!
//! Builds a 512x512 terrain, a short exponential ADSR envelope driving a
//! spiral orbit, renders two seconds of audio, applies a whole-buffer
//! Hanning fade, and writes `wt.wav`.

use anyhow::Result;
use hound::{SampleFormat, WavSpec, WavWriter};
use waveterrain::{Adsr, Envelope, Orbit, SegmentMode, Terrain, WaveTerrainSynth};

const WIDTH: usize = 512;
const HEIGHT: usize = 512;
const SAMPLE_RATE: u32 = 44_100;
const DURATION_SECS: f64 = 2.0;
const ENVELOPE_SECS: f64 = 0.1;
const FREQ_X: f64 = 9_000.0;
const FREQ_Y: f64 = 125.0;
const HAPTIC_FREQ: f64 = 3.0;
const MAX_RADIUS: f64 = 0.707;

fn main() -> Result<()> {
    let terrain = Terrain::new(WIDTH, HEIGHT);

    let envelope = Envelope::adsr(
        Adsr::new()
            .with_attack(0.001)
            .with_release(ENVELOPE_SECS - 0.001)
            .with_initial_amp(0.0001)
            .with_sustain_amp(1.0)
            .with_end_amp(0.0001)
            .with_mode(SegmentMode::Exponential),
        ENVELOPE_SECS,
        SAMPLE_RATE,
    )?;

    let orbit = Orbit::spiral((0.5, 0.5)).with_envelope(envelope);
    let mut synth = WaveTerrainSynth::new(SAMPLE_RATE, terrain, orbit);

    let total = (DURATION_SECS * SAMPLE_RATE as f64) as usize;
    let mut buffer = vec![0.0f64; total];
    synth.render((FREQ_X, FREQ_Y), HAPTIC_FREQ, MAX_RADIUS, &mut buffer);

    // Master fade: one Hanning window across the whole buffer.
    let mut window = Envelope::hanning(DURATION_SECS, SAMPLE_RATE)?;
    for sample in buffer.iter_mut() {
        *sample *= window.next_factor();
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create("wt.wav", spec)?;
    for &sample in &buffer {
        writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f64) as i16)?;
    }
    writer.finalize()?;

    println!("wrote wt.wav ({total} samples at {SAMPLE_RATE} Hz)");
    Ok(())
}
