//! qr_plan - QR code symbol layout planner
//!
//! Computes the module map of a QR code for a given version, error
//! correction level and mask before any payload is written: finder, timing
//! and alignment patterns, BCH-protected format and version information,
//! and mask flags on every data module.
//!
//! ```
//! use qr_plan::{ECLevel, MaskPattern, PixelRole, build_plan};
//!
//! let plan = build_plan(1, ECLevel::M, MaskPattern::Pattern0).unwrap();
//! assert_eq!(plan.size(), 21);
//! assert_eq!(plan.grid.get(0, 0).role(), PixelRole::Position);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment knobs for the diagnostic tools
pub mod config;
/// Plan construction (geometry, format/version info, masks)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Pixel, PixelGrid, Plan, Version, etc.)
pub mod models;
/// Diagnostic views (role images, statistics)
pub mod tools;

pub use encoder::planner::{build_mask_candidates, build_plan};
pub use error::PlanError;
pub use models::{ECLevel, MaskPattern, Mode, Pixel, PixelGrid, PixelRole, Plan, Version};
