//! The parsed input batch for a single diagram.

use std::io::BufRead;

use tracing::debug;

use crate::core::interval;
use crate::core::Interval;
use crate::line::Line;
use crate::reader;
use crate::reader::Reader;
use crate::record::read;
use crate::record::Read;

/// The expected format of an exon or gap interval.
pub const INTERVAL_FORMAT: &str = "start-stop";

/// An error related to building [`Tracks`].
#[derive(Debug)]
pub enum Error {
    /// An exon that could not be parsed.
    InvalidExon(interval::ParseError, String),
    /// A gap that could not be parsed.
    InvalidGap(interval::ParseError, String),
    /// A read that could not be parsed.
    InvalidRead(read::ParseError, String),
    /// An error reading a track file.
    Reader(reader::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidExon(err, literal) => write!(
                f,
                "invalid exon format: {literal}. Expected '{INTERVAL_FORMAT}': {err}"
            ),
            Error::InvalidGap(err, literal) => write!(
                f,
                "invalid gap format: {literal}. Expected '{INTERVAL_FORMAT}': {err}"
            ),
            Error::InvalidRead(err, literal) => write!(
                f,
                "invalid read format: {literal}. Expected '{}': {err}",
                read::READ_FORMAT
            ),
            Error::Reader(err) => write!(f, "reader error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The exons, gaps, and reads that make up one diagram.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tracks {
    /// The exons, all drawn on the bottom row.
    exons: Vec<Interval>,

    /// The gaps, each drawn on its own row in input order.
    gaps: Vec<Interval>,

    /// The read fragments in input order.
    reads: Vec<Read>,
}

impl Tracks {
    /// Creates a new [`Tracks`] from already parsed values.
    pub fn new(exons: Vec<Interval>, gaps: Vec<Interval>, reads: Vec<Read>) -> Self {
        Self { exons, gaps, reads }
    }

    /// Attempts to parse [`Tracks`] from textual exons, gaps, and reads.
    ///
    /// Parsing stops at the first invalid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::Tracks;
    ///
    /// let tracks = Tracks::try_from_strs(
    ///     ["30702432-30702470"],
    ///     Vec::<&str>::new(),
    ///     ["66592: 30703331-30703402 FW", "66592: 30702122-30702169 RW"],
    /// )?;
    ///
    /// assert_eq!(tracks.exons().len(), 1);
    /// assert!(tracks.gaps().is_empty());
    /// assert_eq!(tracks.reads().len(), 2);
    ///
    /// let err = Tracks::try_from_strs(["50-10"], Vec::<&str>::new(), Vec::<&str>::new())
    ///     .unwrap_err();
    /// assert!(err.to_string().starts_with("invalid exon format: 50-10"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_strs<E, G, R>(exons: E, gaps: G, reads: R) -> Result<Self>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let exons = exons
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                s.parse::<Interval>()
                    .map_err(|e| Error::InvalidExon(e, s.into()))
            })
            .collect::<Result<Vec<_>>>()?;

        let gaps = gaps
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                s.parse::<Interval>()
                    .map_err(|e| Error::InvalidGap(e, s.into()))
            })
            .collect::<Result<Vec<_>>>()?;

        let reads = reads
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                s.parse::<Read>()
                    .map_err(|e| Error::InvalidRead(e, s.into()))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            exons = exons.len(),
            gaps = gaps.len(),
            reads = reads.len(),
            "parsed tracks"
        );

        Ok(Self::new(exons, gaps, reads))
    }

    /// Attempts to read [`Tracks`] from a track file.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::Reader;
    /// use trackplot::Tracks;
    ///
    /// let data = b"# sample 6\nexon 557720-557758\n\nread 36778: 555924-556023 RW\n";
    /// let tracks = Tracks::try_from_reader(Reader::new(&data[..]))?;
    ///
    /// assert_eq!(tracks.exons().len(), 1);
    /// assert_eq!(tracks.reads()[0].id(), "36778");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_reader<T>(mut reader: Reader<T>) -> Result<Self>
    where
        T: BufRead,
    {
        let mut tracks = Self::default();
        let mut buffer = String::new();

        while let Some(line) = reader.read_line(&mut buffer).map_err(Error::Reader)? {
            match line {
                Line::Empty | Line::Comment => {}
                Line::Exon(interval) => tracks.exons.push(interval),
                Line::Gap(interval) => tracks.gaps.push(interval),
                Line::Read(read) => tracks.reads.push(read),
            }
        }

        debug!(
            exons = tracks.exons.len(),
            gaps = tracks.gaps.len(),
            reads = tracks.reads.len(),
            "read tracks"
        );

        Ok(tracks)
    }

    /// Appends every track of `other` after the tracks of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackplot::Tracks;
    ///
    /// let none = Vec::<&str>::new();
    /// let mut tracks = Tracks::try_from_strs(["1-10"], none.clone(), ["a: 1-5 FW"])?;
    /// tracks.extend(Tracks::try_from_strs(none.clone(), ["2-3"], ["b: 6-8 RW"])?);
    ///
    /// assert_eq!(tracks.gaps().len(), 1);
    /// assert_eq!(tracks.reads()[1].id(), "b");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn extend(&mut self, other: Tracks) {
        self.exons.extend(other.exons);
        self.gaps.extend(other.gaps);
        self.reads.extend(other.reads);
    }

    /// Gets the exons.
    pub fn exons(&self) -> &[Interval] {
        &self.exons
    }

    /// Gets the gaps.
    pub fn gaps(&self) -> &[Interval] {
        &self.gaps
    }

    /// Gets the reads.
    pub fn reads(&self) -> &[Read] {
        &self.reads
    }

    /// Returns whether no intervals were supplied at all.
    pub fn is_empty(&self) -> bool {
        self.exons.is_empty() && self.gaps.is_empty() && self.reads.is_empty()
    }

    /// Returns every start and stop position across all tracks.
    pub fn positions(&self) -> impl Iterator<Item = u64> + '_ {
        self.exons
            .iter()
            .chain(self.gaps.iter())
            .copied()
            .chain(self.reads.iter().map(|read| read.interval().interval()))
            .flat_map(|interval| [interval.start(), interval.stop()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_try_from_strs() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tracks = Tracks::try_from_strs(
            ["100-200", "300-400"],
            ["210-290"],
            ["a: 1-5 FW", "a: 10-15 RW", "b: 20-25 FW"],
        )?;

        assert_eq!(tracks.exons().len(), 2);
        assert_eq!(tracks.gaps().len(), 1);
        assert_eq!(tracks.reads().len(), 3);
        assert!(!tracks.is_empty());

        let mut positions = tracks.positions().collect::<Vec<_>>();
        positions.sort();
        assert_eq!(positions.first(), Some(&1));
        assert_eq!(positions.last(), Some(&400));
        assert_eq!(positions.len(), 12);

        Ok(())
    }

    #[test]
    fn test_invalid_exon() {
        let err = Tracks::try_from_strs(["abc-10"], NONE, NONE).unwrap_err();
        assert!(matches!(err, Error::InvalidExon(_, ref literal) if literal == "abc-10"));
        assert_eq!(
            err.to_string(),
            "invalid exon format: abc-10. Expected 'start-stop': invalid start: invalid digit \
             found in string"
        );
    }

    #[test]
    fn test_invalid_gap() {
        let err = Tracks::try_from_strs(["1-2"], ["50-10"], NONE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid gap format: 50-10. Expected 'start-stop': start (50) is greater than \
             stop (10)"
        );
    }

    #[test]
    fn test_invalid_read() {
        let err = Tracks::try_from_strs(NONE, NONE, ["r1: 5-10 XY"]).unwrap_err();
        assert!(matches!(err, Error::InvalidRead(_, ref literal) if literal == "r1: 5-10 XY"));
        assert!(err
            .to_string()
            .starts_with("invalid read format: r1: 5-10 XY. Expected 'id: start-stop direction'"));
    }

    #[test]
    fn test_empty() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tracks = Tracks::try_from_strs(NONE, NONE, NONE)?;
        assert!(tracks.is_empty());
        assert_eq!(tracks.positions().count(), 0);
        Ok(())
    }
}
