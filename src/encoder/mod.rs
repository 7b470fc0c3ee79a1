//! QR plan construction
//!
//! This module lays out everything in a QR symbol except the payload:
//! - Function patterns (finder, timing, alignment, dark module)
//! - Format and version information, BCH protected
//! - Codeword capacity per error correction level
//! - Mask flags on data modules

/// BCH codes for format and version info
pub mod bch;
/// Level metadata (data/check codeword counts)
pub mod capacity;
/// Format information placement (mask pattern, EC level)
pub mod format;
/// Grid allocation and function patterns
pub mod geometry;
/// Mask application
pub mod mask;
/// Stage ordering and mask candidate fan-out
pub mod planner;
/// QR specification tables (alignment spacing, ECC codewords/blocks)
pub mod tables;
/// Version information placement (versions 7-40)
pub mod version;
