use log::debug;

use super::tables::ec_block_info;
use crate::models::{ECLevel, PixelRole, Plan};

/// Codeword counts for one version and level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    /// Data codewords
    pub data_bytes: usize,
    /// Error correction codewords, all blocks
    pub check_bytes: usize,
    /// Error correction blocks
    pub blocks: usize,
    /// Leftover modules past the last whole codeword
    pub remainder_bits: usize,
}

/// Split the plan's Data/Check modules into data and check codewords for `level`
pub fn capacity(plan: &Plan, level: ECLevel) -> Capacity {
    let data_modules =
        plan.grid.count_role(PixelRole::Data) + plan.grid.count_role(PixelRole::Check);
    let total = data_modules / 8;
    let info = ec_block_info(plan.version, level);
    let check_bytes = info.num_blocks * info.ecc_per_block;
    Capacity {
        data_bytes: total - check_bytes,
        check_bytes,
        blocks: info.num_blocks,
        remainder_bits: data_modules % 8,
    }
}

/// Record the level and its codeword counts on a version-only plan
pub fn apply_level(plan: &mut Plan, level: ECLevel) {
    let cap = capacity(plan, level);
    plan.level = level;
    plan.data_bytes = cap.data_bytes;
    plan.check_bytes = cap.check_bytes;
    plan.blocks = cap.blocks;
    debug!(
        "level: version={} level={} data_bytes={} check_bytes={} blocks={} remainder_bits={}",
        plan.version, level, cap.data_bytes, cap.check_bytes, cap.blocks, cap.remainder_bits
    );
}
