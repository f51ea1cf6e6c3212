//! Pixel access functions
//!
//! Checked and unchecked getters/setters addressed by `(row, column)`.

use super::{Channel, PixelGrid, PixelGridMut};
use crate::color;
use crate::error::{Error, Result};

impl PixelGrid {
    #[inline]
    fn offset(&self, row: u32, column: u32) -> Option<usize> {
        (row < self.rows() && column < self.columns())
            .then(|| row as usize * self.columns() as usize + column as usize)
    }

    /// Get the packed sample at `(row, column)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, row: u32, column: u32) -> Option<u32> {
        self.offset(row, column).map(|i| self.data()[i])
    }

    /// Get the packed sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the flattened offset lies outside the grid.
    #[inline]
    pub fn get_pixel_unchecked(&self, row: u32, column: u32) -> u32 {
        self.data()[row as usize * self.columns() as usize + column as usize]
    }

    /// Get RGB values at `(row, column)`.
    pub fn get_rgb(&self, row: u32, column: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(row, column).map(color::extract_rgb)
    }

    /// Get the first-channel value at `(row, column)`.
    ///
    /// For replicated grids this is the grayscale value.
    pub fn get_gray(&self, row: u32, column: u32) -> Option<u8> {
        self.get_pixel(row, column).map(color::red)
    }

    /// Get the first-channel value without bounds checking.
    #[inline]
    pub fn get_gray_unchecked(&self, row: u32, column: u32) -> u8 {
        color::red(self.get_pixel_unchecked(row, column))
    }

    /// Collect one channel into a row-major vector.
    pub fn channel_values(&self, channel: Channel) -> Vec<u8> {
        self.data().iter().map(|&p| channel.extract(p)).collect()
    }
}

impl PixelGridMut {
    fn checked_offset(&self, row: u32, column: u32) -> Result<usize> {
        if row >= self.rows() || column >= self.columns() {
            return Err(Error::IndexOutOfBounds {
                row,
                column,
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        Ok(row as usize * self.columns() as usize + column as usize)
    }

    /// Get the packed sample at `(row, column)`.
    pub fn get_pixel(&self, row: u32, column: u32) -> Option<u32> {
        self.checked_offset(row, column).ok().map(|i| self.data()[i])
    }

    /// Set an RGB sample at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, row: u32, column: u32, r: u8, g: u8, b: u8) -> Result<()> {
        let i = self.checked_offset(row, column)?;
        self.data_mut()[i] = color::compose_rgb(r, g, b);
        Ok(())
    }

    /// Set a replicated grayscale sample at `(row, column)`.
    pub fn set_gray(&mut self, row: u32, column: u32, value: u8) -> Result<()> {
        let i = self.checked_offset(row, column)?;
        self.data_mut()[i] = color::compose_gray(value);
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds() {
        let grid = PixelGrid::new(2, 3).unwrap();
        assert_eq!(grid.get_pixel(1, 2), Some(0));
        assert_eq!(grid.get_pixel(2, 0), None);
        assert_eq!(grid.get_rgb(0, 3), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = PixelGridMut::new(3, 2).unwrap();
        grid.set_rgb(2, 1, 10, 20, 30).unwrap();
        grid.set_gray(0, 0, 99).unwrap();
        let grid: PixelGrid = grid.into();
        assert_eq!(grid.get_rgb(2, 1), Some((10, 20, 30)));
        assert_eq!(grid.get_rgb(0, 0), Some((99, 99, 99)));
        assert_eq!(grid.get_gray(2, 1), Some(10));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = PixelGridMut::new(3, 2).unwrap();
        let err = grid.set_gray(1, 2, 0).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { row: 1, column: 2, .. }));
    }

    #[test]
    fn test_channel_values() {
        let grid = PixelGrid::from_rgb(1, 2, &[(1, 2, 3), (4, 5, 6)]).unwrap();
        assert_eq!(grid.channel_values(Channel::Green), vec![2, 5]);
    }
}
