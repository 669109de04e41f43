//! A closed interval of 1-based genomic positions.
//!
//! ```text
//! | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 |
//! -------------------------------------
//! |   |   | X | X | X | X | X |   |   |  <= 3-7
//! |   |   |   |   |   | X |   |   |   |  <= 6-6
//! ```
//!
//! Intervals are written as `<start>-<stop>`. The start may equal the stop,
//! but it may never be greater than it.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::core::Direction;

/// The delimiter between the start and the stop of an interval.
pub const INTERVAL_DELIMITER: char = '-';

/// The number of expected fields in an interval.
pub const NUM_INTERVAL_FIELDS: usize = 2;

/// An error related to the parsing of an interval.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An incorrect number of fields when splitting on the delimiter.
    IncorrectNumberOfFields(usize),
    /// An invalid start position.
    InvalidStart(ParseIntError),
    /// An invalid stop position.
    InvalidStop(ParseIntError),
    /// The start position is greater than the stop position.
    StartGreaterThanStop(u64, u64),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in interval: expected {} fields, found {} fields",
                NUM_INTERVAL_FIELDS, n
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start: {}", err),
            ParseError::InvalidStop(err) => write!(f, "invalid stop: {}", err),
            ParseError::StartGreaterThanStop(start, stop) => {
                write!(f, "start ({}) is greater than stop ({})", start, stop)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A closed interval consisting of a start and a stop position.
///
/// Intervals order by start position first and stop position second.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Interval {
    /// The start position.
    start: u64,

    /// The stop position.
    stop: u64,
}

impl Interval {
    /// Attempts to create a new [`Interval`].
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::core::Interval;
    ///
    /// let interval = Interval::try_new(100, 200)?;
    /// assert_eq!(interval.start(), 100);
    /// assert_eq!(interval.stop(), 200);
    ///
    /// assert!(Interval::try_new(200, 100).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(start: u64, stop: u64) -> Result<Self, ParseError> {
        if start > stop {
            return Err(ParseError::StartGreaterThanStop(start, stop));
        }

        Ok(Self { start, stop })
    }

    /// Gets the start position of the interval.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the stop position of the interval.
    pub fn stop(&self) -> u64 {
        self.stop
    }

    /// Consumes `self` and attaches a [`Direction`].
    pub fn with_direction(self, direction: Direction) -> DirectedInterval {
        DirectedInterval::new(self, direction)
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(INTERVAL_DELIMITER).collect::<Vec<_>>();

        if parts.len() != NUM_INTERVAL_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let start = parts[0].trim().parse().map_err(ParseError::InvalidStart)?;
        let stop = parts[1].trim().parse().map_err(ParseError::InvalidStop)?;

        Interval::try_new(start, stop)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.start, INTERVAL_DELIMITER, self.stop)
    }
}

/// An [`Interval`] with a [`Direction`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DirectedInterval {
    /// The interval.
    interval: Interval,

    /// The direction.
    direction: Direction,
}

impl DirectedInterval {
    /// Creates a new [`DirectedInterval`].
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::core::DirectedInterval;
    /// use trackplot::core::Direction;
    /// use trackplot::core::Interval;
    ///
    /// let interval = DirectedInterval::new(Interval::try_new(1, 5)?, Direction::Reverse);
    /// assert_eq!(interval.start(), 1);
    /// assert_eq!(interval.direction(), Direction::Reverse);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(interval: Interval, direction: Direction) -> Self {
        Self {
            interval,
            direction,
        }
    }

    /// Gets the undirected interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Gets the direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Gets the start position.
    pub fn start(&self) -> u64 {
        self.interval.start()
    }

    /// Gets the stop position.
    pub fn stop(&self) -> u64 {
        self.interval.stop()
    }
}

impl std::fmt::Display for DirectedInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.interval, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_interval() -> Result<(), Box<dyn std::error::Error>> {
        let interval = "30702432-30702470".parse::<Interval>()?;
        assert_eq!(interval.start(), 30702432);
        assert_eq!(interval.stop(), 30702470);

        let interval = "5-5".parse::<Interval>()?;
        assert_eq!(interval.start(), interval.stop());

        Ok(())
    }

    #[test]
    fn test_interval_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        for (start, stop) in [(0, 0), (1, 2), (100, 200), (999_999_999, 1_000_000_000)] {
            let interval = format!("{start}-{stop}").parse::<Interval>()?;
            assert_eq!((interval.start(), interval.stop()), (start, stop));
            assert_eq!(interval.to_string(), format!("{start}-{stop}"));
        }

        Ok(())
    }

    #[test]
    fn test_start_greater_than_stop() {
        let err = "50-10".parse::<Interval>().unwrap_err();
        assert_eq!(err, ParseError::StartGreaterThanStop(50, 10));
        assert_eq!(err.to_string(), "start (50) is greater than stop (10)");
    }

    #[test]
    fn test_invalid_start() {
        let err = "abc-10".parse::<Interval>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidStart(_)));
        assert_eq!(err.to_string(), "invalid start: invalid digit found in string");
    }

    #[test]
    fn test_invalid_stop() {
        let err = "10-".parse::<Interval>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid stop: cannot parse integer from empty string"
        );
    }

    #[test]
    fn test_invalid_number_of_fields() {
        let err = "1-2-3".parse::<Interval>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of fields in interval: expected 2 fields, found 3 fields"
        );

        let err = "100".parse::<Interval>().unwrap_err();
        assert_eq!(err, ParseError::IncorrectNumberOfFields(1));

        // A negative position splits into too many fields.
        let err = "-5-10".parse::<Interval>().unwrap_err();
        assert_eq!(err, ParseError::IncorrectNumberOfFields(3));
    }

    #[test]
    fn test_interval_ordering() -> Result<(), Box<dyn std::error::Error>> {
        let a = Interval::try_new(1, 10)?;
        let b = Interval::try_new(1, 20)?;
        let c = Interval::try_new(2, 3)?;

        let mut intervals = vec![c, b, a];
        intervals.sort();
        assert_eq!(intervals, vec![a, b, c]);

        Ok(())
    }

    #[test]
    fn test_directed_interval_display() -> Result<(), Box<dyn std::error::Error>> {
        let interval = Interval::try_new(1, 5)?.with_direction(Direction::Forward);
        assert_eq!(interval.to_string(), "1-5 FW");
        Ok(())
    }
}
