/// Version information placement for QR codes v7+
use log::debug;

use super::bch::{self, VERSION_GENERATOR};
use crate::models::{Pixel, PixelGrid, PixelRole, Version};

/// Version info is 18 bits (6 data + 12 ECC)
pub const VERSION_BITS: usize = 18;

/// The 18-bit version word, or `None` below version 7
pub fn version_info(version: Version) -> Option<u32> {
    if !version.has_version_info() {
        return None;
    }
    Some(bch::encode(version.number() as u32, VERSION_GENERATOR, 12))
}

/// Cell `(x, y)` of version bit `i` in the 6x3 block beside the bottom-left finder
pub fn bottom_left_position(i: usize, size: usize) -> (usize, usize) {
    (i / 3, size - 11 + i % 3)
}

/// Cell `(x, y)` of version bit `i` in the 3x6 block beside the top-right finder
pub fn top_right_position(i: usize, size: usize) -> (usize, usize) {
    (size - 11 + i % 3, i / 3)
}

/// Write both copies of the version information; no-op below version 7
pub fn place_version(grid: &mut PixelGrid, version: Version) {
    let Some(word) = version_info(version) else {
        return;
    };
    let size = grid.size();
    for i in 0..VERSION_BITS {
        let mut p = PixelRole::VersionInfo.pixel() | Pixel::offset(i);
        if (word >> i) & 1 == 1 {
            p |= Pixel::BLACK;
        }
        let (x, y) = bottom_left_position(i, size);
        grid.set(x, y, p);
        let (x, y) = top_right_position(i, size);
        grid.set(x, y, p);
    }
    debug!("version info: version={} word=0x{:05X}", version, word);
}

/// Read back both copies, as rendered colors (dark = 1)
pub fn read_version(grid: &PixelGrid) -> (u32, u32) {
    let size = grid.size();
    let mut bottom_left = 0u32;
    let mut top_right = 0u32;
    for i in 0..VERSION_BITS {
        let (x, y) = bottom_left_position(i, size);
        bottom_left |= (grid.get(x, y).is_dark() as u32) << i;
        let (x, y) = top_right_position(i, size);
        top_right |= (grid.get(x, y).is_dark() as u32) << i;
    }
    (bottom_left, top_right)
}
