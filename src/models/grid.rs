use super::pixel::{Pixel, PixelRole};

/// Square, row-major grid of plan pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: usize,
    cells: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a grid of `size` x `size` unclaimed pixels
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Pixel::default(); size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get pixel at column `x`, row `y`.
    ///
    /// Returns an unclaimed pixel outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        if x >= self.size || y >= self.size {
            return Pixel::default();
        }
        self.cells[y * self.size + x]
    }

    /// Set pixel at column `x`, row `y`. Writes outside the grid are dropped.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        if x >= self.size || y >= self.size {
            return;
        }
        self.cells[y * self.size + x] = pixel;
    }

    /// Mutable access to the pixel at column `x`, row `y`
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells.get_mut(y * self.size + x)
    }

    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> &[Pixel] {
        &self.cells[y * self.size..(y + 1) * self.size]
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate mutably over rows, top to bottom
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        self.cells.chunks_mut(self.size.max(1))
    }

    /// Iterate over `(x, y, pixel)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &p)| (i % size, i / size, p))
    }

    /// Number of pixels carrying `role`
    pub fn count_role(&self, role: PixelRole) -> usize {
        self.cells.iter().filter(|p| p.role() == role).count()
    }

    /// Assign `role` to every pixel still unclaimed
    pub fn fill_unclaimed(&mut self, role: PixelRole) {
        for p in self.cells.iter_mut() {
            if p.role() == PixelRole::None {
                *p = role.pixel();
            }
        }
    }

    /// Raw pixels in row-major order
    pub fn as_slice(&self) -> &[Pixel] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_grid() {
        let mut grid = PixelGrid::new(21);
        assert_eq!(grid.size(), 21);
        assert_eq!(grid.rows().count(), 21);

        grid.set(3, 4, PixelRole::Timing.pixel() | Pixel::BLACK);
        assert_eq!(grid.get(3, 4).role(), PixelRole::Timing);
        assert!(grid.get(3, 4).is_black());
        assert_eq!(grid.row(4)[3], grid.get(3, 4));
        assert_eq!(grid.get(4, 3), Pixel::default());

        if let Some(p) = grid.get_mut(3, 4) {
            p.set_invert(true);
        }
        assert!(grid.get(3, 4).is_inverted());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = PixelGrid::new(21);
        grid.set(21, 0, PixelRole::Position.pixel()); // Should not panic
        assert_eq!(grid.get(21, 0), Pixel::default());
        assert!(grid.get_mut(0, 21).is_none());
    }

    #[test]
    fn test_fill_unclaimed() {
        let mut grid = PixelGrid::new(5);
        grid.set(0, 0, PixelRole::Position.pixel());
        grid.fill_unclaimed(PixelRole::Data);
        assert_eq!(grid.count_role(PixelRole::Position), 1);
        assert_eq!(grid.count_role(PixelRole::Data), 24);
        assert_eq!(grid.count_role(PixelRole::None), 0);
    }

    #[test]
    fn test_iter_coordinates() {
        let mut grid = PixelGrid::new(3);
        grid.set(2, 1, PixelRole::Check.pixel());
        let (x, y, _) = grid
            .iter()
            .find(|(_, _, p)| p.role() == PixelRole::Check)
            .unwrap();
        assert_eq!((x, y), (2, 1));
    }
}
