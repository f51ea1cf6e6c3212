//! Histogram generation for pixel grids
//!
//! Counts sample values of one channel band into 256 bins. Histograms are
//! derived data: transforms recompute them on every call.

use crate::grid::{Channel, PixelGrid};

/// Number of bins in a channel histogram.
pub const HISTOGRAM_BINS: usize = 256;

/// 256-bin count of sample values for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_BINS],
}

impl Histogram {
    /// Build a histogram directly from bin counts.
    pub fn from_counts(counts: [u64; HISTOGRAM_BINS]) -> Self {
        Histogram { counts }
    }

    /// Count the values of an iterator of samples.
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> Self {
        let mut counts = [0u64; HISTOGRAM_BINS];
        for v in values {
            counts[v as usize] += 1;
        }
        Histogram { counts }
    }

    /// All bin counts, indexed by sample value.
    #[inline]
    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Count for a single sample value.
    #[inline]
    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Sum of all bins.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Lowest sample value with a non-zero count.
    pub fn min_value(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Highest sample value with a non-zero count.
    pub fn max_value(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }

    /// Non-zero bin counts in value order.
    pub fn nonzero_counts(&self) -> Vec<u64> {
        self.counts.iter().copied().filter(|&c| c > 0).collect()
    }

    /// Number of distinct sample values present.
    pub fn distinct_values(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

impl PixelGrid {
    /// Histogram of one channel band.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_core::{Channel, PixelGrid};
    ///
    /// let grid = PixelGrid::from_gray(2, 2, &[0, 0, 7, 255]).unwrap();
    /// let hist = grid.channel_histogram(Channel::Red);
    /// assert_eq!(hist.count(0), 2);
    /// assert_eq!(hist.total(), 4);
    /// ```
    pub fn channel_histogram(&self, channel: Channel) -> Histogram {
        Histogram::from_values(self.data().iter().map(|&p| channel.extract(p)))
    }

    /// Histogram of the first channel (the gray value of replicated grids).
    pub fn gray_histogram(&self) -> Histogram {
        self.channel_histogram(Channel::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_pixels() {
        let grid = PixelGrid::from_gray(3, 4, &[1, 1, 2, 3, 4, 5, 5, 5, 9, 9, 0, 255]).unwrap();
        let hist = grid.gray_histogram();
        assert_eq!(hist.total(), 12);
        assert_eq!(hist.count(5), 3);
        assert_eq!(hist.count(6), 0);
    }

    #[test]
    fn test_extrema() {
        let hist = Histogram::from_values([40u8, 12, 200, 12]);
        assert_eq!(hist.min_value(), Some(12));
        assert_eq!(hist.max_value(), Some(200));
        assert_eq!(Histogram::from_values(std::iter::empty()).min_value(), None);
    }

    #[test]
    fn test_nonzero_counts_keep_order() {
        let hist = Histogram::from_values([7u8, 3, 3, 250, 7, 7]);
        assert_eq!(hist.nonzero_counts(), vec![2, 3, 1]);
        assert_eq!(hist.distinct_values(), 3);
    }

    #[test]
    fn test_channel_selection() {
        let grid = PixelGrid::from_rgb(1, 2, &[(1, 2, 3), (1, 9, 3)]).unwrap();
        assert_eq!(grid.channel_histogram(Channel::Green).count(9), 1);
        assert_eq!(grid.channel_histogram(Channel::Blue).count(3), 2);
    }
}
