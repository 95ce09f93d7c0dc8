//! # ToneSweepMeter
//!
//! Swept-tone sound level meter firmware.
//!
//! A button-gated sine generator feeds the DAC while the main loop
//! busy-waits over the microphone ADC in fixed 50 ms windows, reporting
//! one peak-to-peak reading per window over the serial console. Every
//! two seconds the tone frequency steps up by 50 Hz.
//!
//! ## Architecture
//!
//! - One thread of control, one [`Sketch`] state blob, no preemption
//! - The tone path is an opaque collaborator: the loop writes commands
//!   into [`ToneParams`], the render task reads them, nothing flows back
//! - All logic modules are hardware-free and run on the host; the
//!   [`Board`] trait is the only seam to the device

#![cfg_attr(not(test), no_std)]

pub mod audio;
pub mod board;
pub mod button;
pub mod config;
pub mod logging;
pub mod meter;
pub mod report;
pub mod sketch;
pub mod sweep;

#[cfg(target_os = "espidf")]
pub mod serial;

pub use audio::osc::SineOsc;
pub use audio::params::ToneParams;
pub use board::Board;
pub use button::ModeToggle;
pub use logging::LogQueue;
pub use meter::PeakTracker;
pub use sketch::Sketch;
pub use sweep::FrequencyRamp;

/// Global log queue, drained to the serial console once per loop turn.
pub static LOG_QUEUE: LogQueue = LogQueue::new();
