//! Tone synthesis path.
//!
//! The main loop only writes commands into [`params::ToneParams`]; the
//! render task turns them into samples with [`osc::SineOsc`] and ships
//! blocks to the DAC. Nothing flows back toward the loop.

pub mod lut;
pub mod osc;
pub mod params;
