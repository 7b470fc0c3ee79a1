//! Function pattern geometry: timing strips, finder boxes, alignment boxes
//! and the dark module.

use log::{debug, trace};

use super::tables::alignment_offsets;
use crate::models::{Pixel, PixelGrid, PixelRole, Version};

/// Timing strips run along row and column 6
pub const TIMING_INDEX: usize = 6;
/// Finder box side length
pub const POSITION_SIZE: usize = 7;
/// Alignment box side length
pub const ALIGNMENT_SIZE: usize = 5;

/// Upper-left corners of the three finder boxes, as `(x, y)`
pub fn position_corners(size: usize) -> [(usize, usize); 3] {
    [(0, 0), (size - POSITION_SIZE, 0), (0, size - POSITION_SIZE)]
}

/// Allocate the grid for `version` and stamp every geometry pattern on it
pub fn build_grid(version: Version) -> PixelGrid {
    let size = version.size();
    let mut grid = PixelGrid::new(size);

    // Timing markers (overwritten by boxes)
    for i in 0..size {
        let mut p = PixelRole::Timing.pixel();
        if i % 2 == 0 {
            p |= Pixel::BLACK;
        }
        grid.set(i, TIMING_INDEX, p);
        grid.set(TIMING_INDEX, i, p);
    }

    for (x, y) in position_corners(size) {
        position_box(&mut grid, x, y);
    }

    let offsets = alignment_offsets(version);
    let mut placed = 0;
    for &y in &offsets {
        for &x in &offsets {
            if overlaps_position_zone(size, x, y) {
                continue;
            }
            alignment_box(&mut grid, x, y);
            placed += 1;
            trace!("alignment box at ({}, {})", x, y);
        }
    }

    grid.set(8, size - 8, PixelRole::DarkModule.pixel() | Pixel::BLACK);

    debug!(
        "geometry: version={} size={} alignment_boxes={}",
        version, size, placed
    );
    grid
}

/// True if a 5x5 box at `(x, y)` would touch a finder box or its separator
pub fn overlaps_position_zone(size: usize, x: usize, y: usize) -> bool {
    let zone = POSITION_SIZE + 1;
    let hits = |zx: usize, zy: usize| {
        x < zx + zone && zx < x + ALIGNMENT_SIZE && y < zy + zone && zy < y + ALIGNMENT_SIZE
    };
    hits(0, 0) || hits(size - zone, 0) || hits(0, size - zone)
}

/// Draw a finder (large) box with upper-left corner at `(x, y)`, plus its
/// light separator wherever it falls inside the grid.
fn position_box(grid: &mut PixelGrid, x: usize, y: usize) {
    let pos = PixelRole::Position.pixel();
    for dy in 0..POSITION_SIZE {
        for dx in 0..POSITION_SIZE {
            let ring = dx == 0 || dx == 6 || dy == 0 || dy == 6;
            let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
            let p = if ring || core { pos | Pixel::BLACK } else { pos };
            grid.set(x + dx, y + dy, p);
        }
    }

    // Separator: one ring outside the box. Coordinates are shifted by one so
    // the left/top edge can be expressed without going negative.
    let size = grid.size();
    for d in 0..POSITION_SIZE + 2 {
        for (sx, sy) in [(0, d), (POSITION_SIZE + 1, d), (d, 0), (d, POSITION_SIZE + 1)] {
            let (gx, gy) = (x + sx, y + sy);
            if gx == 0 || gy == 0 || gx > size || gy > size {
                continue;
            }
            grid.set(gx - 1, gy - 1, pos);
        }
    }
}

/// Draw an alignment (small) box with upper-left corner at `(x, y)`
fn alignment_box(grid: &mut PixelGrid, x: usize, y: usize) {
    let align = PixelRole::Alignment.pixel();
    for dy in 0..ALIGNMENT_SIZE {
        for dx in 0..ALIGNMENT_SIZE {
            let ring = dx == 0 || dx == 4 || dy == 0 || dy == 4;
            let center = dx == 2 && dy == 2;
            let p = if ring || center { align | Pixel::BLACK } else { align };
            grid.set(x + dx, y + dy, p);
        }
    }
}
