//! Plan construction pipeline.
//!
//! Stages run in a fixed order on a freshly allocated grid:
//! geometry, version info, format info, level metadata, mask.

use log::debug;
use rayon::prelude::*;

use super::capacity::apply_level;
use super::format::place_format;
use super::geometry::build_grid;
use super::mask::apply_mask;
use super::version::place_version;
use crate::error::PlanError;
use crate::models::{ECLevel, MaskPattern, PixelRole, Plan, Version};

/// Build a version-only plan: geometry and version info, free cells as Data
fn version_plan(version: Version) -> Plan {
    let mut grid = build_grid(version);
    place_version(&mut grid, version);
    Plan {
        version,
        level: ECLevel::L,
        mask: MaskPattern::Pattern0,
        data_bytes: 0,
        check_bytes: 0,
        blocks: 0,
        grid,
    }
}

/// Build the plan for a QR code with the given version, level and mask.
///
/// Fails with [`PlanError::InvalidVersion`] outside 1..=40; nothing is
/// allocated in that case.
pub fn build_plan(version: u8, level: ECLevel, mask: MaskPattern) -> Result<Plan, PlanError> {
    let version = Version::new(version)?;
    let mut plan = version_plan(version);
    place_format(&mut plan.grid, level, mask);
    plan.grid.fill_unclaimed(PixelRole::Data);
    apply_level(&mut plan, level);
    apply_mask(&mut plan, mask);
    debug!(
        "plan: version={} level={} mask={} size={}",
        plan.version,
        plan.level,
        plan.mask,
        plan.size()
    );
    Ok(plan)
}

/// Build one plan per mask pattern, in mask id order.
///
/// A mask-selection stage scores these candidates after the payload is
/// written. Plans are built in parallel.
pub fn build_mask_candidates(version: u8, level: ECLevel) -> Result<Vec<Plan>, PlanError> {
    Version::new(version)?;
    MaskPattern::ALL
        .par_iter()
        .map(|&mask| build_plan(version, level, mask))
        .collect()
}
