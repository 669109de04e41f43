//! Drawable primitives emitted by the layout engine.
//!
//! Horizontal positions are genomic coordinates and vertical positions are
//! track units (multiples of the vertical spacing). Mapping either onto a
//! drawing surface is the job of a [renderer](crate::render).

use crate::core::Direction;

/// The stroke width of an interval segment.
pub const SEGMENT_WIDTH: f64 = 4.0;

/// The stroke width of a connector.
pub const CONNECTOR_WIDTH: f64 = 1.0;

/// The opacity of a connector.
pub const CONNECTOR_OPACITY: f64 = 0.5;

/// The rotation of a coordinate label in degrees (counter-clockwise).
pub const LABEL_ROTATION: f64 = 90.0;

/// What an interval represents.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    /// An exon on the reference track.
    Exon,
    /// A gap on the reference track.
    Gap,
    /// A read fragment sequenced in the given direction.
    Read(Direction),
}

/// A thick horizontal line representing one interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// The leftmost genomic position.
    pub start: u64,
    /// The rightmost genomic position.
    pub stop: u64,
    /// The vertical position.
    pub y: f64,
    /// What the segment represents.
    pub category: Category,
    /// The stroke color.
    pub color: String,
    /// The stroke width.
    pub width: f64,
}

/// The stroke pattern of a connector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineStyle {
    /// A continuous line, joining intervals of the same direction.
    Solid,
    /// A dotted line, joining intervals of opposite directions.
    Dotted,
}

/// A thin line joining the end of one interval to the start of the next
/// interval within a read group.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    /// The stop position of the preceding interval.
    pub from: u64,
    /// The start position of the following interval.
    pub to: u64,
    /// The vertical position.
    pub y: f64,
    /// The stroke pattern.
    pub style: LineStyle,
    /// The stroke color (that of the preceding interval).
    pub color: String,
    /// The stroke width.
    pub width: f64,
    /// The stroke opacity.
    pub opacity: f64,
}

/// The horizontal alignment of a label relative to its anchor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alignment {
    /// The text extends to the right of the anchor.
    Left,
    /// The text extends to the left of the anchor.
    Right,
}

/// A coordinate label.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The text.
    pub text: String,
    /// The horizontal anchor in genomic coordinates.
    pub x: f64,
    /// The vertical anchor in track units.
    pub y: f64,
    /// The rotation in degrees (counter-clockwise).
    pub rotation: f64,
    /// The horizontal alignment.
    pub alignment: Alignment,
}

/// One legend entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegendEntry {
    /// The text of the entry.
    pub text: String,
    /// The color of the entry's swatch.
    pub color: String,
}

/// Formats a position with `,` as the thousands separator.
///
/// # Examples
///
/// ```
/// use trackplot::layout::primitive::format_position;
///
/// assert_eq!(format_position(7), "7");
/// assert_eq!(format_position(30702432), "30,702,432");
/// ```
pub fn format_position(position: u64) -> String {
    let digits = position.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(0), "0");
        assert_eq!(format_position(100), "100");
        assert_eq!(format_position(1000), "1,000");
        assert_eq!(format_position(557720), "557,720");
        assert_eq!(format_position(1_000_000_000), "1,000,000,000");
    }
}
