//! Linear mapping from data coordinates onto pixels.

/// The multipliers tried (in order) when picking a tick step.
const NICE_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// A linear map from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    /// The data domain.
    domain: (f64, f64),

    /// The pixel range.
    range: (f64, f64),
}

impl Scale {
    /// Creates a new [`Scale`].
    ///
    /// A zero-width domain is widened by one half unit on either side so that
    /// its single value maps onto the middle of the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::render::Scale;
    ///
    /// let scale = Scale::new((0.0, 300.0), (60.0, 660.0));
    /// assert_eq!(scale.map(150.0), 360.0);
    ///
    /// // An inverted range flips the axis.
    /// let scale = Scale::new((0.0, 1.0), (500.0, 100.0));
    /// assert_eq!(scale.map(1.0), 100.0);
    /// ```
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if domain.1 - domain.0 == 0.0 {
            (domain.0 - 0.5, domain.1 + 0.5)
        } else {
            domain
        };

        Self { domain, range }
    }

    /// Gets the data domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Maps a data value onto the pixel range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Returns evenly spaced "nice" tick values within `[lo, hi]`, aiming for at
/// most `target` ticks.
///
/// Steps are one, two, or five times a power of ten.
///
/// # Examples
///
/// ```
/// use trackplot::render::scale::ticks;
///
/// assert_eq!(ticks(0.0, 300.0, 4), vec![0.0, 100.0, 200.0, 300.0]);
/// assert_eq!(ticks(-90.0, 90.0, 4), vec![-50.0, 0.0, 50.0]);
/// ```
pub fn ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !(hi - lo).is_finite() || hi <= lo || target == 0 {
        return Vec::new();
    }

    let raw = (hi - lo) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = NICE_STEPS
        .iter()
        .map(|m| m * magnitude)
        .find(|step| (hi - lo) / step <= target as f64)
        .unwrap_or(10.0 * magnitude);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;

    (first..=last).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_domain() {
        let scale = Scale::new((50.0, 50.0), (0.0, 100.0));
        assert_eq!(scale.domain(), (49.5, 50.5));
        assert_eq!(scale.map(50.0), 50.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(ticks(5.0, 5.0, 5).is_empty());
        assert!(ticks(0.0, 1.0, 0).is_empty());

        let values = ticks(30695421.9, 30706886.1, 8);
        assert!(!values.is_empty());
        assert!(values.len() <= 9);
        assert!(values.iter().all(|v| *v >= 30695421.9 && *v <= 30706886.1));
        assert!(values.windows(2).all(|w| w[1] > w[0]));
    }
}
