/// Format information placement (error correction level + mask id)
use log::debug;

use super::bch::{self, FORMAT_GENERATOR};
use crate::models::{ECLevel, MaskPattern, Pixel, PixelGrid, PixelRole};

/// Number of format bits
pub const FORMAT_BITS: usize = 15;
/// XOR constant keeping format info from rendering all-light
pub const FORMAT_MASK: u16 = 0x5412;

/// Format info is 15 bits (5 data + 10 ECC), before the 0x5412 XOR
pub fn format_codeword(level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((level.format_bits() as u32) << 3) | mask.id() as u32;
    bch::encode(data, FORMAT_GENERATOR, 10) as u16
}

/// The 15-bit format word as drawn, after the 0x5412 XOR
pub fn format_info(level: ECLevel, mask: MaskPattern) -> u16 {
    format_codeword(level, mask) ^ FORMAT_MASK
}

/// Cell `(x, y)` of format bit `i` in the copy wrapped around the top-left
/// finder: down column 8, then leftwards along row 8, skipping timing.
pub fn top_left_position(i: usize) -> (usize, usize) {
    match i {
        0..=5 => (8, i),
        6..=7 => (8, i + 1),
        8 => (7, 8),
        _ => (14 - i, 8),
    }
}

/// Cell `(x, y)` of format bit `i` in the copy split between the top-right
/// (row 8) and bottom-left (column 8) finders.
pub fn split_position(i: usize, size: usize) -> (usize, usize) {
    if i < 8 {
        (size - 1 - i, 8)
    } else {
        (8, size - FORMAT_BITS + i)
    }
}

/// Write both copies of the format information into `grid`
pub fn place_format(grid: &mut PixelGrid, level: ECLevel, mask: MaskPattern) {
    let codeword = format_codeword(level, mask);
    let size = grid.size();
    for i in 0..FORMAT_BITS {
        let mut p = PixelRole::Format.pixel() | Pixel::offset(i);
        if (codeword >> i) & 1 == 1 {
            p |= Pixel::BLACK;
        }
        if (FORMAT_MASK >> i) & 1 == 1 {
            p ^= Pixel::BLACK | Pixel::INVERT;
        }
        let (x, y) = top_left_position(i);
        grid.set(x, y, p);
        let (x, y) = split_position(i, size);
        grid.set(x, y, p);
    }
    debug!(
        "format: level={} mask={} codeword=0x{:04X} drawn=0x{:04X}",
        level,
        mask,
        codeword,
        codeword ^ FORMAT_MASK
    );
}

/// Read back both drawn copies, as rendered colors (dark = 1)
pub fn read_format(grid: &PixelGrid) -> (u16, u16) {
    let size = grid.size();
    let mut top_left = 0u16;
    let mut split = 0u16;
    for i in 0..FORMAT_BITS {
        let (x, y) = top_left_position(i);
        top_left |= (grid.get(x, y).is_dark() as u16) << i;
        let (x, y) = split_position(i, size);
        split |= (grid.get(x, y).is_dark() as u16) << i;
    }
    (top_left, split)
}

/// Recover level and mask from a drawn format word, if it is a valid codeword
pub fn decode_format(drawn: u16) -> Option<(ECLevel, MaskPattern)> {
    let codeword = drawn ^ FORMAT_MASK;
    if !bch::is_codeword(codeword as u32, FORMAT_GENERATOR, 10) {
        return None;
    }
    let data = (codeword >> 10) as u8;
    let level = ECLevel::from_format_bits(data >> 3);
    let mask = MaskPattern::from_bits(data & 0x07)?;
    Some((level, mask))
}
