//! The horizontal extent of a diagram.

use nonempty::NonEmpty;

use crate::layout::Error;

/// The fraction of the span used as padding when it exceeds the minimum.
pub const PADDING_FRACTION: f64 = 0.05;

/// The default minimum padding in genomic coordinate units.
pub const DEFAULT_MIN_PADDING: u64 = 100;

/// The smallest and largest position across every track, along with the
/// horizontal padding around them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// The smallest position.
    min: u64,

    /// The largest position.
    max: u64,

    /// The horizontal padding.
    padding: f64,
}

impl Extent {
    /// Attempts to compute the [`Extent`] of a pool of positions.
    ///
    /// The padding is the larger of `min_padding` and five percent of the
    /// span.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::layout::Extent;
    ///
    /// let extent = Extent::try_from_positions([100, 150, 200], 100)?;
    /// assert_eq!(extent.padding(), 100.0);
    /// assert_eq!(extent.x_range(), (0.0, 300.0));
    ///
    /// assert!(Extent::try_from_positions(Vec::new(), 100).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_positions<I>(positions: I, min_padding: u64) -> Result<Self, Error>
    where
        I: IntoIterator<Item = u64>,
    {
        let pool = NonEmpty::from_vec(positions.into_iter().collect()).ok_or(Error::EmptyInput)?;

        let min = pool.tail.iter().copied().fold(pool.head, u64::min);
        let max = pool.tail.iter().copied().fold(pool.head, u64::max);
        let padding = (min_padding as f64).max((max - min) as f64 * PADDING_FRACTION);

        Ok(Self { min, max, padding })
    }

    /// Gets the smallest position.
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Gets the largest position.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Gets the horizontal padding.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Gets the padded horizontal range to draw.
    pub fn x_range(&self) -> (f64, f64) {
        (
            self.min as f64 - self.padding,
            self.max as f64 + self.padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_padding() -> Result<(), Box<dyn std::error::Error>> {
        let extent = Extent::try_from_positions([200, 100], 100)?;

        assert_eq!(extent.min(), 100);
        assert_eq!(extent.max(), 200);
        assert_eq!(extent.padding(), 100.0);
        assert_eq!(extent.x_range(), (0.0, 300.0));

        Ok(())
    }

    #[test]
    fn test_proportional_padding() -> Result<(), Box<dyn std::error::Error>> {
        let extent = Extent::try_from_positions([30701980, 30703588, 30695943, 30706365], 100)?;

        assert_eq!(extent.min(), 30695943);
        assert_eq!(extent.max(), 30706365);
        assert!((extent.padding() - 521.1).abs() < 1e-6);

        Ok(())
    }

    #[test]
    fn test_single_position() -> Result<(), Box<dyn std::error::Error>> {
        let extent = Extent::try_from_positions([50], 0)?;
        assert_eq!(extent.padding(), 0.0);
        assert_eq!(extent.x_range(), (50.0, 50.0));
        Ok(())
    }

    #[test]
    fn test_empty_pool() {
        let err = Extent::try_from_positions(std::iter::empty(), 100).unwrap_err();
        assert_eq!(err, Error::EmptyInput);
    }
}
