//! A read record.
//!
//! A read record is written as three whitespace-separated fields: the read id
//! (followed by a colon), the interval, and the direction.
//!
//! ```text
//! 66592: 30703331-30703402 FW
//! ```

use std::str::FromStr;

use crate::core::direction;
use crate::core::interval;
use crate::core::DirectedInterval;
use crate::core::Direction;
use crate::core::Interval;

/// The suffix trailing the read id.
pub const ID_SUFFIX: char = ':';

/// The number of expected fields in a read record.
pub const NUM_READ_FIELDS: usize = 3;

/// The expected format of a read record.
pub const READ_FORMAT: &str = "id: start-stop direction";

/// An error related to the parsing of a read record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of whitespace-separated fields.
    IncorrectNumberOfFields(usize),
    /// An invalid direction.
    InvalidDirection(direction::ParseDirectionError),
    /// An invalid interval.
    InvalidInterval(interval::ParseError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in read: expected {} fields, found {} fields",
                NUM_READ_FIELDS, n
            ),
            ParseError::InvalidDirection(err) => write!(f, "invalid direction: {}", err),
            ParseError::InvalidInterval(err) => write!(f, "invalid interval: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

/// One fragment of a sequenced read.
///
/// Several records may share the same id, in which case they are fragments of
/// the same molecule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Read {
    /// The read id.
    id: String,

    /// The directed interval covered by this fragment.
    interval: DirectedInterval,
}

impl Read {
    /// Creates a new [`Read`].
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::core::Direction;
    /// use trackplot::core::Interval;
    /// use trackplot::record::Read;
    ///
    /// let interval = Interval::try_new(1, 5)?.with_direction(Direction::Forward);
    /// let read = Read::new("a", interval);
    ///
    /// assert_eq!(read.id(), "a");
    /// assert_eq!(read.to_string(), "a: 1-5 FW");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(id: impl Into<String>, interval: DirectedInterval) -> Self {
        Self {
            id: id.into(),
            interval,
        }
    }

    /// Gets the read id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the directed interval.
    pub fn interval(&self) -> &DirectedInterval {
        &self.interval
    }

    /// Consumes `self` and returns the id and the directed interval.
    pub fn into_parts(self) -> (String, DirectedInterval) {
        (self.id, self.interval)
    }
}

impl FromStr for Read {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_whitespace().collect::<Vec<_>>();

        if parts.len() != NUM_READ_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let id = parts[0].trim_end_matches(ID_SUFFIX);
        let direction = parts[2]
            .parse::<Direction>()
            .map_err(ParseError::InvalidDirection)?;
        let interval = parts[1]
            .parse::<Interval>()
            .map_err(ParseError::InvalidInterval)?;

        Ok(Read::new(id, interval.with_direction(direction)))
    }
}

impl std::fmt::Display for Read {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} {}", self.id, ID_SUFFIX, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_read() -> Result<(), Box<dyn std::error::Error>> {
        let read = "66592: 30703331-30703402 FW".parse::<Read>()?;

        assert_eq!(read.id(), "66592");
        assert_eq!(read.interval().start(), 30703331);
        assert_eq!(read.interval().stop(), 30703402);
        assert_eq!(read.interval().direction(), Direction::Forward);

        let read = "r1:\t5-10   RW".parse::<Read>()?;
        assert_eq!(read.id(), "r1");
        assert_eq!(read.interval().direction(), Direction::Reverse);

        Ok(())
    }

    #[test]
    fn test_id_without_colon_or_empty() -> Result<(), Box<dyn std::error::Error>> {
        let read = "r1 5-10 FW".parse::<Read>()?;
        assert_eq!(read.id(), "r1");

        let read = ": 5-10 FW".parse::<Read>()?;
        assert_eq!(read.id(), "");

        let read = "r1:: 5-10 FW".parse::<Read>()?;
        assert_eq!(read.id(), "r1");

        Ok(())
    }

    #[test]
    fn test_invalid_number_of_fields() {
        let err = "r1: 5-10".parse::<Read>().unwrap_err();
        assert!(matches!(err, ParseError::IncorrectNumberOfFields(2)));
        assert_eq!(
            err.to_string(),
            "invalid number of fields in read: expected 3 fields, found 2 fields"
        );

        let err = "r1: 5-10 FW extra".parse::<Read>().unwrap_err();
        assert!(matches!(err, ParseError::IncorrectNumberOfFields(4)));
    }

    #[test]
    fn test_invalid_direction() {
        let err = "r1: 5-10 XY".parse::<Read>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidDirection(_)));
        assert_eq!(
            err.to_string(),
            "invalid direction: parse direction error: XY is not a valid direction, \
             expected 'FW' or 'RW'"
        );
    }

    #[test]
    fn test_invalid_interval() {
        let err = "r1: 10-5 FW".parse::<Read>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid interval: start (10) is greater than stop (5)"
        );

        let err = "r1: abc FW".parse::<Read>().unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidInterval(interval::ParseError::IncorrectNumberOfFields(1))
        ));
    }

    #[test]
    fn test_read_display() -> Result<(), Box<dyn std::error::Error>> {
        let read = "a:   1-5   RW".parse::<Read>()?;
        assert_eq!(read.to_string(), "a: 1-5 RW");
        Ok(())
    }
}
