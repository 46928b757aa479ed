//! Cooperative timing
//!
//! The delay primitive is the one place the scan loop suspends. It
//! honours the host's pause and single-step controls and hands control
//! back to the host's scheduler while waiting.

pub mod pacer;

pub use pacer::Pacer;
