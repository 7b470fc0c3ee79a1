use std::fmt;

use super::grid::PixelGrid;
use super::symbol::{ECLevel, MaskPattern, Version};
use crate::error::PlanError;

/// How to construct a QR code with a specific version, level and mask.
///
/// Every pixel is classified by role; Data and Check pixels are waiting for
/// payload bits. The capacity counters come from the error correction block
/// tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// QR code version
    pub version: Version,
    /// Error correction level
    pub level: ECLevel,
    /// Mask pattern applied to Data/Check pixels
    pub mask: MaskPattern,
    /// Number of data codewords
    pub data_bytes: usize,
    /// Number of error correction codewords
    pub check_bytes: usize,
    /// Number of error correction blocks
    pub blocks: usize,
    /// Pixel map, row-major
    pub grid: PixelGrid,
}

impl Plan {
    /// Build a plan; shorthand for [`crate::build_plan`]
    pub fn new(version: u8, level: ECLevel, mask: MaskPattern) -> Result<Self, PlanError> {
        crate::encoder::planner::build_plan(version, level, mask)
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Total codewords the Data pixels hold
    pub fn total_bytes(&self) -> usize {
        self.data_bytes + self.check_bytes
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for p in row {
                f.write_str(if p.is_dark() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
