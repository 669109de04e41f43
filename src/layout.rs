//! The layout engine.
//!
//! A [`Layout`] turns parsed [`Tracks`] into the drawable primitives of a
//! diagram in four steps:
//!
//! 1. the [`Extent`] of every position across all tracks is computed, along
//!    with the horizontal padding;
//! 2. every exon, gap, and read group is assigned a [`Row`];
//! 3. the fragments of each read group are put into drawing order (see
//!    [`ReadGroup::ordered()`]);
//! 4. segments, coordinate labels, connectors, and legend entries are emitted
//!    for every row.
//!
//! ```
//! use trackplot::layout::LineStyle;
//! use trackplot::layout::Options;
//! use trackplot::Layout;
//! use trackplot::Tracks;
//!
//! let tracks = Tracks::try_from_strs(
//!     ["100-200"],
//!     ["120-140", "150-160"],
//!     ["a: 100-110 FW", "a: 130-150 RW"],
//! )?;
//!
//! let layout = Layout::try_new(&tracks, &Options::default())?;
//!
//! assert_eq!(layout.rows().len(), 4);
//! assert_eq!(layout.segments().len(), 5);
//! assert_eq!(layout.connectors().len(), 1);
//! assert_eq!(layout.connectors()[0].style, LineStyle::Dotted);
//! assert_eq!(layout.x_range(), (0.0, 300.0));
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;

use nonempty::NonEmpty;
use tracing::debug;
use tracing::trace;

use crate::core::Direction;
use crate::Tracks;

pub mod extent;
pub mod group;
pub mod primitive;
pub mod row;

pub use extent::Extent;
pub use group::group_reads;
pub use group::ReadGroup;
pub use primitive::Alignment;
pub use primitive::Category;
pub use primitive::Connector;
pub use primitive::Label;
pub use primitive::LegendEntry;
pub use primitive::LineStyle;
pub use primitive::Segment;
pub use row::Row;
pub use row::Span;

/// The default vertical distance between rows, in track units.
pub const DEFAULT_VERTICAL_SPACING: f64 = 0.2;

/// An error related to computing a [`Layout`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// No exons, gaps, or reads were supplied, so there is no extent.
    EmptyInput,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyInput => write!(
                f,
                "empty input: at least one exon, gap, or read is required to compute an extent"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The placement of coordinate labels relative to the ends of an interval.
///
/// The vertical offsets are in track units and do not scale with the vertical
/// spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelOffsets {
    /// The padding is divided by this to get the horizontal offset.
    pub horizontal_divisor: f64,
    /// How far above the row the start label sits.
    pub above: f64,
    /// How far below the row the stop label sits.
    pub below: f64,
}

impl Default for LabelOffsets {
    fn default() -> Self {
        Self {
            horizontal_divisor: 10.0,
            above: 0.05,
            below: 0.07,
        }
    }
}

/// The colors assigned to each [`Category`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    /// The color of exons.
    pub exon: String,
    /// The color of gaps.
    pub gap: String,
    /// The color of forward read fragments.
    pub forward: String,
    /// The color of reverse read fragments.
    pub reverse: String,
}

impl Palette {
    /// Gets the color for a category.
    pub fn color(&self, category: Category) -> &str {
        match category {
            Category::Exon => &self.exon,
            Category::Gap => &self.gap,
            Category::Read(Direction::Forward) => &self.forward,
            Category::Read(Direction::Reverse) => &self.reverse,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            exon: String::from("red"),
            gap: String::from("blue"),
            forward: String::from("darkgreen"),
            reverse: String::from("purple"),
        }
    }
}

/// Options for computing a [`Layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// The vertical distance between rows.
    pub vertical_spacing: f64,
    /// The smallest horizontal padding, in genomic coordinate units.
    pub min_padding: u64,
    /// Whether to emit coordinate labels.
    pub show_coordinates: bool,
    /// The placement of coordinate labels.
    pub label_offsets: LabelOffsets,
    /// The colors of each category.
    pub palette: Palette,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
            min_padding: extent::DEFAULT_MIN_PADDING,
            show_coordinates: true,
            label_offsets: LabelOffsets::default(),
            palette: Palette::default(),
        }
    }
}

/// A legend key, emitted at most once per diagram.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum LegendKey {
    /// The exon row.
    Exon,
    /// Any gap row.
    Gap,
    /// The read group with the given id.
    ReadGroup(String),
}

/// The drawable primitives of a diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// The horizontal extent.
    extent: Extent,

    /// The vertical distance between rows.
    vertical_spacing: f64,

    /// The rows, bottom to top.
    rows: Vec<Row>,

    /// One segment per interval.
    segments: Vec<Segment>,

    /// Two labels per interval when coordinates are shown.
    labels: Vec<Label>,

    /// Connectors between consecutive read fragments.
    connectors: Vec<Connector>,

    /// The legend entries.
    legend: Vec<LegendEntry>,
}

impl Layout {
    /// Attempts to lay out the given [`Tracks`].
    ///
    /// Fails only when the tracks hold no intervals at all.
    pub fn try_new(tracks: &Tracks, options: &Options) -> Result<Self> {
        let extent = Extent::try_from_positions(tracks.positions(), options.min_padding)?;
        debug!(
            min = extent.min(),
            max = extent.max(),
            padding = extent.padding(),
            "computed extent"
        );

        let rows = assign_rows(tracks, options.vertical_spacing);
        debug!(rows = rows.len(), "assigned rows");

        let mut layout = Self {
            extent,
            vertical_spacing: options.vertical_spacing,
            rows: Vec::with_capacity(rows.len()),
            segments: Vec::new(),
            labels: Vec::new(),
            connectors: Vec::new(),
            legend: Vec::new(),
        };

        let mut emitted = HashSet::new();

        for row in rows {
            trace!(kind = ?row.kind(), y = row.y(), spans = row.spans().len(), "emitting row");
            layout.emit_row(&row, options, &mut emitted);
            layout.rows.push(row);
        }

        Ok(layout)
    }

    /// Emits the primitives for a single row.
    fn emit_row(&mut self, row: &Row, options: &Options, emitted: &mut HashSet<LegendKey>) {
        let palette = &options.palette;
        let y = row.y();

        for span in row.spans().iter() {
            let interval = span.interval();
            let color = palette.color(span.category());

            self.segments.push(Segment {
                start: interval.start(),
                stop: interval.stop(),
                y,
                category: span.category(),
                color: color.to_string(),
                width: primitive::SEGMENT_WIDTH,
            });

            if let Some((key, text)) = legend_key(row, span) {
                if emitted.insert(key) {
                    self.legend.push(LegendEntry {
                        text,
                        color: color.to_string(),
                    });
                }
            }

            if options.show_coordinates {
                self.emit_labels(span, y, &options.label_offsets);
            }
        }

        if row.is_connected() {
            for (a, b) in row.spans().iter().zip(row.spans().iter().skip(1)) {
                let style = if a.direction() == b.direction() {
                    LineStyle::Solid
                } else {
                    LineStyle::Dotted
                };

                self.connectors.push(Connector {
                    from: a.interval().stop(),
                    to: b.interval().start(),
                    y,
                    style,
                    color: palette.color(a.category()).to_string(),
                    width: primitive::CONNECTOR_WIDTH,
                    opacity: primitive::CONNECTOR_OPACITY,
                });
            }
        }
    }

    /// Emits the start and stop labels for a single span.
    fn emit_labels(&mut self, span: &Span, y: f64, offsets: &LabelOffsets) {
        let interval = span.interval();
        let dx = self.extent.padding() / offsets.horizontal_divisor;

        self.labels.push(Label {
            text: primitive::format_position(interval.start()),
            x: interval.start() as f64 - dx,
            y: y + offsets.above,
            rotation: primitive::LABEL_ROTATION,
            alignment: Alignment::Right,
        });

        self.labels.push(Label {
            text: primitive::format_position(interval.stop()),
            x: interval.stop() as f64 + dx,
            y: y - offsets.below,
            rotation: primitive::LABEL_ROTATION,
            alignment: Alignment::Left,
        });
    }

    /// Gets the horizontal extent.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Gets the padded horizontal range to draw.
    pub fn x_range(&self) -> (f64, f64) {
        self.extent.x_range()
    }

    /// Gets the vertical range to draw, leaving one row of space above and
    /// below the outermost rows.
    pub fn y_range(&self) -> (f64, f64) {
        let top = self
            .rows
            .iter()
            .map(|row| row.y())
            .fold(row::EXON_ROW_Y, f64::max);

        (
            row::EXON_ROW_Y - self.vertical_spacing,
            top + self.vertical_spacing,
        )
    }

    /// Gets the vertical distance between rows.
    pub fn vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }

    /// Gets the rows, bottom to top.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Gets the segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Gets the coordinate labels.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Gets the connectors.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Gets the legend entries.
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }
}

/// Gets the legend key and text for a span.
fn legend_key(row: &Row, span: &Span) -> Option<(LegendKey, String)> {
    match (row.kind(), span.category()) {
        (_, Category::Exon) => Some((LegendKey::Exon, String::from("Exon 1"))),
        (_, Category::Gap) => Some((LegendKey::Gap, String::from("Gap 1"))),
        (row::Kind::ReadGroup(id), Category::Read(direction)) => Some((
            LegendKey::ReadGroup(id.clone()),
            format!("Read {id} {direction}"),
        )),
        (_, Category::Read(_)) => None,
    }
}

/// Assigns every exon, gap, and read group to a row.
fn assign_rows(tracks: &Tracks, vertical_spacing: f64) -> Vec<Row> {
    let mut rows = Vec::new();

    let exons = tracks
        .exons()
        .iter()
        .map(|exon| Span::new(*exon, Category::Exon))
        .collect::<Vec<_>>();

    if let Some(spans) = NonEmpty::from_vec(exons) {
        rows.push(Row::new(row::Kind::Exon, row::EXON_ROW_Y, spans));
    }

    for (index, gap) in tracks.gaps().iter().enumerate() {
        rows.push(Row::new(
            row::Kind::Gap(index),
            row::gap_row_y(index, vertical_spacing),
            NonEmpty::new(Span::new(*gap, Category::Gap)),
        ));
    }

    let gap_count = tracks.gaps().len();

    for (ordinal, group) in group_reads(tracks.reads()).into_iter().enumerate() {
        if let Some(ordered) = group.ordered() {
            let spans = ordered.map(|interval| {
                Span::new(interval.interval(), Category::Read(interval.direction()))
            });

            rows.push(Row::new(
                row::Kind::ReadGroup(group.id().to_string()),
                row::read_group_row_y(gap_count, ordinal, vertical_spacing),
                spans,
            ));
        }
    }

    rows
}
