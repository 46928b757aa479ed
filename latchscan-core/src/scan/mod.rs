//! Panel scanning
//!
//! Paints a logical picture onto the panel one row-pair at a time.

pub mod driver;

pub use driver::ScanDriver;
