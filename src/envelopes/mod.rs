//! Gain envelopes: precomputed looping tables with per-sample readers.
//!
//! An [`Envelope`] is built once from an [`EnvelopeShape`] (a Hanning window
//! or an [`Adsr`] contour), then read one gain factor at a time by whatever
//! it modulates. The read cursor wraps at the end of the table, so envelopes
//! free-run for as long as samples are requested.

mod adsr;
mod envelope;
mod segment;

pub use adsr::{Adsr, DEFAULT_END_EXP_AMP, DEFAULT_INITIAL_EXP_AMP};
pub use envelope::{Envelope, EnvelopeShape};
pub use segment::SegmentMode;
