use crate::models::{ECLevel, Version};

/// Alignment box placement for one version.
///
/// Along each axis the upper-left corners run 4, `apos`, `apos + astride`,
/// ... while they stay within `size - 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentSpacing {
    /// Second corner offset
    pub apos: usize,
    /// Step between later corners
    pub astride: usize,
}

const fn spacing(apos: usize, astride: usize) -> AlignmentSpacing {
    AlignmentSpacing { apos, astride }
}

// Index: [version], entry 0 unused. Version 1 has no alignment box, so its
// first jump lands past the grid.
static ALIGNMENT_SPACING: [AlignmentSpacing; 41] = [
    spacing(0, 0),
    // 1-10
    spacing(100, 100),
    spacing(16, 100),
    spacing(20, 100),
    spacing(24, 100),
    spacing(28, 100),
    spacing(32, 100),
    spacing(20, 16),
    spacing(22, 18),
    spacing(24, 20),
    spacing(26, 22),
    // 11-20
    spacing(28, 24),
    spacing(30, 26),
    spacing(32, 28),
    spacing(24, 20),
    spacing(24, 22),
    spacing(24, 24),
    spacing(28, 24),
    spacing(28, 26),
    spacing(28, 28),
    spacing(32, 28),
    // 21-30
    spacing(26, 22),
    spacing(24, 24),
    spacing(28, 24),
    spacing(26, 26),
    spacing(30, 26),
    spacing(28, 28),
    spacing(32, 28),
    spacing(24, 24),
    spacing(28, 24),
    spacing(24, 26),
    // 31-40
    spacing(28, 26),
    spacing(32, 26),
    spacing(28, 28),
    spacing(32, 28),
    spacing(28, 24),
    spacing(22, 26),
    spacing(26, 26),
    spacing(30, 26),
    spacing(24, 28),
    spacing(28, 28),
];

/// Alignment spacing for `version`
pub fn alignment_spacing(version: Version) -> AlignmentSpacing {
    ALIGNMENT_SPACING[version.number() as usize]
}

/// Upper-left coordinates of alignment box candidates along one axis
pub fn alignment_offsets(version: Version) -> Vec<usize> {
    let AlignmentSpacing { apos, astride } = alignment_spacing(version);
    let last = version.size() - 9;
    let mut offsets = Vec::new();
    let mut at = 4;
    while at <= last {
        offsets.push(at);
        at = if at == 4 { apos } else { at + astride };
    }
    offsets
}

/// Error correction block layout for one version and level
pub struct EcBlockInfo {
    /// Number of blocks
    pub num_blocks: usize,
    /// Check codewords in each block
    pub ecc_per_block: usize,
}

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12, 13,
        14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Block layout for `version` at `ec_level`
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let v = version.number() as usize;
    let idx = ec_level.index();
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}
