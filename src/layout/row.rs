//! Rows of a diagram and their vertical positions.
//!
//! Rows are stacked from the bottom up: the exon row sits at `y = 0`, each gap
//! gets the next row in input order, and each read group gets a row above the
//! gaps in the order its id was first seen.

use nonempty::NonEmpty;

use crate::core::Direction;
use crate::core::Interval;
use crate::layout::primitive::Category;

/// The vertical position of the exon row.
pub const EXON_ROW_Y: f64 = 0.0;

/// Gets the vertical position of the gap at `index` (0-based).
pub fn gap_row_y(index: usize, vertical_spacing: f64) -> f64 {
    (index + 1) as f64 * vertical_spacing
}

/// Gets the vertical position of the read group at `ordinal` (0-based), given
/// the number of gap rows below it.
pub fn read_group_row_y(gap_count: usize, ordinal: usize, vertical_spacing: f64) -> f64 {
    (gap_count + ordinal + 1) as f64 * vertical_spacing
}

/// The kind of a row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    /// The row holding every exon.
    Exon,
    /// The row holding the gap at the given input index.
    Gap(usize),
    /// The row holding every fragment of the given read id.
    ReadGroup(String),
}

/// An interval placed on a row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span {
    /// The interval.
    interval: Interval,

    /// What the interval represents.
    category: Category,
}

impl Span {
    /// Creates a new [`Span`].
    pub fn new(interval: Interval, category: Category) -> Self {
        Self { interval, category }
    }

    /// Gets the interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Gets the category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Gets the direction, if this span is a read fragment.
    pub fn direction(&self) -> Option<Direction> {
        match self.category {
            Category::Read(direction) => Some(direction),
            Category::Exon | Category::Gap => None,
        }
    }
}

/// A horizontal track at a fixed vertical position.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// The kind of row.
    kind: Kind,

    /// The vertical position.
    y: f64,

    /// The spans in drawing order.
    spans: NonEmpty<Span>,
}

impl Row {
    /// Creates a new [`Row`].
    pub fn new(kind: Kind, y: f64, spans: NonEmpty<Span>) -> Self {
        Self { kind, y, spans }
    }

    /// Gets the kind of row.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Gets the vertical position.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Gets the spans in drawing order.
    pub fn spans(&self) -> &NonEmpty<Span> {
        &self.spans
    }

    /// Returns whether consecutive spans on this row are joined by connectors.
    ///
    /// Only read groups are connected. Exons share a row but are independent
    /// of one another.
    pub fn is_connected(&self) -> bool {
        matches!(self.kind, Kind::ReadGroup(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_positions() {
        assert_eq!(gap_row_y(0, 0.2), 0.2);
        assert_eq!(gap_row_y(1, 0.5), 1.0);
        assert_eq!(read_group_row_y(2, 0, 0.5), 1.5);
        assert_eq!(read_group_row_y(0, 1, 0.5), 1.0);
    }
}
