//! A line within a track file.
//!
//! Each non-empty line starts with a keyword naming the track, followed by
//! whitespace and the value for that track:
//!
//! ```text
//! # sample 7
//! exon 30702432-30702470
//! gap 30702500-30702600
//! read 82151: 30701980-30702033 RW
//! ```

use std::str::FromStr;

use crate::core::interval;
use crate::core::Interval;
use crate::record::read;
use crate::record::Read;

/// The prefix of a comment line.
pub const COMMENT_PREFIX: char = '#';

/// The keyword for an exon line.
pub const EXON_KEYWORD: &str = "exon";

/// The keyword for a gap line.
pub const GAP_KEYWORD: &str = "gap";

/// The keyword for a read line.
pub const READ_KEYWORD: &str = "read";

/// An error associated with parsing a line of a track file.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid exon record.
    InvalidExonRecord(interval::ParseError, String),
    /// An invalid gap record.
    InvalidGapRecord(interval::ParseError, String),
    /// An invalid read record.
    InvalidReadRecord(read::ParseError, String),
    /// A keyword that does not name a track.
    UnknownKeyword(String),
    /// A keyword with no value following it.
    MissingValue(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidExonRecord(err, line) => {
                write!(f, "invalid exon record: {}\n\nline: {}", err, line)
            }
            ParseError::InvalidGapRecord(err, line) => {
                write!(f, "invalid gap record: {}\n\nline: {}", err, line)
            }
            ParseError::InvalidReadRecord(err, line) => {
                write!(f, "invalid read record: {}\n\nline: {}", err, line)
            }
            ParseError::UnknownKeyword(keyword) => write!(
                f,
                "unknown keyword: expected one of '{}', '{}', or '{}', found '{}'",
                EXON_KEYWORD, GAP_KEYWORD, READ_KEYWORD, keyword
            ),
            ParseError::MissingValue(line) => {
                write!(f, "missing value after keyword\n\nline: {}", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within a track file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty (or whitespace only) line.
    Empty,
    /// A comment line.
    Comment,
    /// An exon line.
    Exon(Interval),
    /// A gap line.
    Gap(Interval),
    /// A read line.
    Read(Read),
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Ok(Self::Empty);
        } else if trimmed.starts_with(COMMENT_PREFIX) {
            return Ok(Self::Comment);
        }

        let (keyword, value) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, value)) => (keyword, value.trim()),
            None => match trimmed {
                EXON_KEYWORD | GAP_KEYWORD | READ_KEYWORD => {
                    return Err(ParseError::MissingValue(s.into()))
                }
                _ => return Err(ParseError::UnknownKeyword(trimmed.into())),
            },
        };

        match keyword {
            EXON_KEYWORD => value
                .parse::<Interval>()
                .map(Line::Exon)
                .map_err(|e| ParseError::InvalidExonRecord(e, s.into())),
            GAP_KEYWORD => value
                .parse::<Interval>()
                .map(Line::Gap)
                .map_err(|e| ParseError::InvalidGapRecord(e, s.into())),
            READ_KEYWORD => value
                .parse::<Read>()
                .map(Line::Read)
                .map_err(|e| ParseError::InvalidReadRecord(e, s.into())),
            other => Err(ParseError::UnknownKeyword(other.into())),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Empty => write!(f, ""),
            Line::Comment => write!(f, "{}", COMMENT_PREFIX),
            Line::Exon(interval) => write!(f, "{} {}", EXON_KEYWORD, interval),
            Line::Gap(interval) => write!(f, "{} {}", GAP_KEYWORD, interval),
            Line::Read(read) => write!(f, "{} {}", READ_KEYWORD, read),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_empty_and_comment_lines() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("".parse::<Line>()?, Line::Empty);
        assert_eq!("  \t".parse::<Line>()?, Line::Empty);
        assert_eq!("# sample 6".parse::<Line>()?, Line::Comment);
        assert_eq!("   #indented".parse::<Line>()?, Line::Comment);
        Ok(())
    }

    #[test]
    pub fn test_valid_track_lines() -> Result<(), Box<dyn std::error::Error>> {
        let line = "exon 557720-557758".parse::<Line>()?;
        assert_eq!(line, Line::Exon(Interval::try_new(557720, 557758)?));

        let line = "gap\t10-20".parse::<Line>()?;
        assert_eq!(line, Line::Gap(Interval::try_new(10, 20)?));

        let line = "read 36778: 555924-556023 RW".parse::<Line>()?;
        assert!(matches!(line, Line::Read(_)));
        if let Line::Read(read) = line {
            assert_eq!(read.id(), "36778");
        }

        Ok(())
    }

    #[test]
    pub fn test_invalid_exon_line() {
        let err = "exon 20-10".parse::<Line>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid exon record: start (20) is greater than stop (10)\n\nline: exon 20-10"
        );
    }

    #[test]
    pub fn test_invalid_read_line() {
        let err = "read a: 1-5".parse::<Line>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid read record: invalid number of fields in read: expected 3 fields, found 2 \
             fields\n\nline: read a: 1-5"
        );
    }

    #[test]
    pub fn test_unknown_keyword() {
        let err = "intron 1-5".parse::<Line>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown keyword: expected one of 'exon', 'gap', or 'read', found 'intron'"
        );

        let err = "1-5".parse::<Line>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownKeyword(_)));
    }

    #[test]
    pub fn test_missing_value() {
        let err = "exon".parse::<Line>().unwrap_err();
        assert!(matches!(err, ParseError::MissingValue(_)));
    }

    #[test]
    pub fn test_line_display() -> Result<(), Box<dyn std::error::Error>> {
        let line = "read  a:  1-5  FW".parse::<Line>()?;
        assert_eq!(line.to_string(), "read a: 1-5 FW");
        Ok(())
    }
}
