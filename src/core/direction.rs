//! The direction in which a read fragment was sequenced.

use std::io;
use std::str::FromStr;

/// The textual form of [`Direction::Forward`].
pub const FORWARD: &str = "FW";

/// The textual form of [`Direction::Reverse`].
pub const REVERSE: &str = "RW";

/// An error related to the parsing of a direction.
#[derive(Debug)]
pub struct ParseDirectionError(io::Error);

impl std::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse direction error: {}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

/// The direction of a read interval.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Direction {
    /// The forward direction (`FW`).
    Forward,
    /// The reverse direction (`RW`).
    Reverse,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            FORWARD => Ok(Self::Forward),
            REVERSE => Ok(Self::Reverse),
            c => Err(ParseDirectionError(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{c} is not a valid direction, expected '{FORWARD}' or '{REVERSE}'"),
            ))),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "{FORWARD}"),
            Direction::Reverse => write!(f, "{REVERSE}"),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() -> Result<(), Box<dyn std::error::Error>> {
        let direction: Direction = "FW".parse()?;
        assert_eq!(direction, Direction::Forward);

        let direction: Direction = "RW".parse()?;
        assert_eq!(direction, Direction::Reverse);

        let err = "XY".parse::<Direction>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse direction error: XY is not a valid direction, expected 'FW' or 'RW'"
        );

        // Matching is exact.
        assert!("fw".parse::<Direction>().is_err());
        assert!(" FW".parse::<Direction>().is_err());

        Ok(())
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Forward.to_string(), "FW");
        assert_eq!(Direction::Reverse.to_string(), "RW");
    }
}
