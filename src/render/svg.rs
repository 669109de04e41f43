//! An SVG [renderer](crate::render::Renderer).
//!
//! ```
//! use trackplot::layout::Options;
//! use trackplot::render::svg;
//! use trackplot::render::Figure;
//! use trackplot::render::Renderer as _;
//! use trackplot::Layout;
//! use trackplot::Tracks;
//!
//! let tracks = Tracks::try_from_strs(["557720-557758"], Vec::<&str>::new(), [
//!     "36778: 555924-556023 RW",
//!     "36778: 563427-563526 FW",
//! ])?;
//! let layout = Layout::try_new(&tracks, &Options::default())?;
//!
//! let figure = Figure::new(&layout, "Sample 6", (12.0, 6.0), 10.0);
//! let document = svg::Renderer::default().render(&figure)?;
//!
//! assert!(document.to_string().contains("Sample 6"));
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use ::svg::node::element::Line;
use ::svg::node::element::Rectangle;
use ::svg::node::element::Text;
use ::svg::Document;
use tracing::debug;

use crate::layout::primitive::format_position;
use crate::layout::Alignment;
use crate::layout::LineStyle;
use crate::render;
use crate::render::scale::ticks;
use crate::render::Figure;
use crate::render::Scale;

/// The default resolution in pixels per inch.
pub const DEFAULT_DPI: f64 = 100.0;

/// Space left of the plot area, in pixels.
const MARGIN_LEFT: f64 = 70.0;

/// Space right of the plot area, in pixels.
const MARGIN_RIGHT: f64 = 30.0;

/// Space above the plot area, in pixels.
const MARGIN_TOP: f64 = 70.0;

/// Space below the plot area, in pixels.
const MARGIN_BOTTOM: f64 = 70.0;

/// The number of grid lines to aim for.
const TICK_TARGET: usize = 8;

/// The color of text.
const TEXT_COLOR: &str = "black";

/// The color of grid lines.
const GRID_COLOR: &str = "#b0b0b0";

/// The opacity of grid lines.
const GRID_OPACITY: f64 = 0.7;

/// The ratio of gap length to dot length in a dotted stroke.
const DOT_GAP_RATIO: f64 = 1.65;

/// How far above the plot area the legend is anchored, as a fraction of the
/// plot area height.
const LEGEND_RAISE: f64 = 0.15;

/// An error related to rendering an SVG.
#[derive(Debug)]
pub enum Error {
    /// The figure is too small (or not finite) to hold a plot area.
    InvalidFigureSize(f64, f64),
    /// The font size is not a positive, finite number.
    InvalidFontSize(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFigureSize(width, height) => write!(
                f,
                "invalid figure size: {width}x{height} inches leaves no room for the plot area"
            ),
            Error::InvalidFontSize(size) => write!(f, "invalid font size: {size}"),
        }
    }
}

impl std::error::Error for Error {}

/// Renders a [`Figure`] into an SVG [`Document`].
#[derive(Clone, Debug)]
pub struct Renderer {
    /// The resolution in pixels per inch.
    dpi: f64,
}

impl Renderer {
    /// Creates a new [`Renderer`] with the given resolution.
    pub fn new(dpi: f64) -> Self {
        Self { dpi }
    }

    /// Converts points into pixels.
    fn points(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_DPI)
    }
}

/// The pixel geometry of a figure.
struct Frame {
    /// The document width.
    width: f64,
    /// The document height.
    height: f64,
    /// The left edge of the plot area.
    left: f64,
    /// The right edge of the plot area.
    right: f64,
    /// The top edge of the plot area.
    top: f64,
    /// The bottom edge of the plot area.
    bottom: f64,
}

impl render::Renderer for Renderer {
    type Output = Document;
    type Error = Error;

    fn render(self, figure: &Figure<'_>) -> Result<Self::Output, Self::Error> {
        let (inches_w, inches_h) = figure.size();
        let width = inches_w * self.dpi;
        let height = inches_h * self.dpi;

        if !width.is_finite()
            || !height.is_finite()
            || width <= MARGIN_LEFT + MARGIN_RIGHT
            || height <= MARGIN_TOP + MARGIN_BOTTOM
        {
            return Err(Error::InvalidFigureSize(inches_w, inches_h));
        }

        if !figure.font_size().is_finite() || figure.font_size() <= 0.0 {
            return Err(Error::InvalidFontSize(figure.font_size()));
        }

        let frame = Frame {
            width,
            height,
            left: MARGIN_LEFT,
            right: width - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: height - MARGIN_BOTTOM,
        };

        let layout = figure.layout();
        let x = Scale::new(layout.x_range(), (frame.left, frame.right));
        let y = Scale::new(layout.y_range(), (frame.bottom, frame.top));

        let font = self.points(figure.font_size());
        let mut doc = Document::new()
            .set("viewBox", (0, 0, frame.width, frame.height))
            .set("width", frame.width)
            .set("height", frame.height)
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", frame.width)
                    .set("height", frame.height)
                    .set("fill", "#ffffff"),
            );

        // Grid and tick labels.
        let (lo, hi) = x.domain();
        for tick in ticks(lo, hi, TICK_TARGET) {
            let px = x.map(tick);
            doc = doc
                .add(
                    Line::new()
                        .set("x1", px)
                        .set("y1", frame.top)
                        .set("x2", px)
                        .set("y2", frame.bottom)
                        .set("stroke", GRID_COLOR)
                        .set("stroke-width", 1)
                        .set("stroke-dasharray", "4,4")
                        .set("stroke-opacity", GRID_OPACITY),
                )
                .add(
                    Text::new(format_tick(tick))
                        .set("x", px)
                        .set("y", frame.bottom + font + 4.0)
                        .set("text-anchor", "middle")
                        .set("font-family", "sans-serif")
                        .set("font-size", font)
                        .set("fill", TEXT_COLOR),
                );
        }

        doc = doc.add(
            Rectangle::new()
                .set("x", frame.left)
                .set("y", frame.top)
                .set("width", frame.right - frame.left)
                .set("height", frame.bottom - frame.top)
                .set("fill", "none")
                .set("stroke", TEXT_COLOR)
                .set("stroke-width", 1),
        );

        for segment in layout.segments() {
            doc = doc.add(
                Line::new()
                    .set("x1", x.map(segment.start as f64))
                    .set("y1", y.map(segment.y))
                    .set("x2", x.map(segment.stop as f64))
                    .set("y2", y.map(segment.y))
                    .set("stroke", segment.color.as_str())
                    .set("stroke-width", self.points(segment.width))
                    .set("stroke-linecap", "square"),
            );
        }

        for connector in layout.connectors() {
            let stroke = self.points(connector.width);
            let mut line = Line::new()
                .set("x1", x.map(connector.from as f64))
                .set("y1", y.map(connector.y))
                .set("x2", x.map(connector.to as f64))
                .set("y2", y.map(connector.y))
                .set("stroke", connector.color.as_str())
                .set("stroke-width", stroke)
                .set("stroke-opacity", connector.opacity);

            if connector.style == LineStyle::Dotted {
                line = line.set(
                    "stroke-dasharray",
                    format!("{},{}", stroke, stroke * DOT_GAP_RATIO),
                );
            }

            doc = doc.add(line);
        }

        for label in layout.labels() {
            let (px, py) = (x.map(label.x), y.map(label.y));
            let mut text = Text::new(label.text.as_str())
                .set("x", px)
                .set("y", py)
                .set("transform", format!("rotate({} {} {})", -label.rotation, px, py))
                .set("font-family", "sans-serif")
                .set("font-size", font)
                .set("fill", TEXT_COLOR);

            // Rotated text sits left of its anchor unless hung from it.
            if label.alignment == Alignment::Left {
                text = text.set("dominant-baseline", "hanging");
            }

            doc = doc.add(text);
        }

        doc = self.add_titles(doc, figure, &frame);
        doc = self.add_legend(doc, figure, &frame);

        debug!(
            width = frame.width,
            height = frame.height,
            segments = layout.segments().len(),
            connectors = layout.connectors().len(),
            labels = layout.labels().len(),
            "rendered svg"
        );

        Ok(doc)
    }
}

impl Renderer {
    /// Adds the figure title and the axis titles.
    fn add_titles(&self, doc: Document, figure: &Figure<'_>, frame: &Frame) -> Document {
        let title_font = self.points(figure.font_size() + 4.0);
        let axis_font = self.points(figure.font_size() + 2.0);
        let middle_y = (frame.top + frame.bottom) / 2.0;
        let axis_x = MARGIN_LEFT / 3.0;

        doc.add(
            Text::new(figure.title())
                .set("x", frame.width / 2.0)
                .set("y", title_font + 8.0)
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", title_font)
                .set("fill", TEXT_COLOR),
        )
        .add(
            Text::new(render::X_AXIS_TITLE)
                .set("x", (frame.left + frame.right) / 2.0)
                .set("y", frame.height - axis_font)
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", axis_font)
                .set("fill", TEXT_COLOR),
        )
        .add(
            Text::new(render::Y_AXIS_TITLE)
                .set("x", axis_x)
                .set("y", middle_y)
                .set("transform", format!("rotate(-90 {} {})", axis_x, middle_y))
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", axis_font)
                .set("fill", TEXT_COLOR),
        )
    }

    /// Adds the legend box, anchored at the upper right of the plot area.
    fn add_legend(&self, mut doc: Document, figure: &Figure<'_>, frame: &Frame) -> Document {
        let legend = figure.layout().legend();
        if legend.is_empty() {
            return doc;
        }

        let font = self.points(figure.font_size());
        let row_height = font * 1.6;
        let swatch = 20.0;
        let longest = legend
            .iter()
            .map(|entry| entry.text.chars().count())
            .max()
            .unwrap_or(0) as f64;

        let box_width = swatch + 24.0 + longest * font * 0.6;
        let box_height = row_height * legend.len() as f64 + 8.0;
        let box_x = frame.right - box_width;
        let box_y = (frame.top - LEGEND_RAISE * (frame.bottom - frame.top)).max(4.0);

        doc = doc.add(
            Rectangle::new()
                .set("x", box_x)
                .set("y", box_y)
                .set("width", box_width)
                .set("height", box_height)
                .set("fill", "#ffffff")
                .set("fill-opacity", 0.8)
                .set("stroke", "#cccccc")
                .set("stroke-width", 1),
        );

        for (i, entry) in legend.iter().enumerate() {
            let cy = box_y + 4.0 + row_height * (i as f64 + 0.5);

            doc = doc
                .add(
                    Line::new()
                        .set("x1", box_x + 8.0)
                        .set("y1", cy)
                        .set("x2", box_x + 8.0 + swatch)
                        .set("y2", cy)
                        .set("stroke", entry.color.as_str())
                        .set("stroke-width", self.points(4.0)),
                )
                .add(
                    Text::new(entry.text.as_str())
                        .set("x", box_x + 16.0 + swatch)
                        .set("y", cy)
                        .set("dominant-baseline", "middle")
                        .set("font-family", "sans-serif")
                        .set("font-size", font)
                        .set("fill", TEXT_COLOR),
                );
        }

        doc
    }
}

/// Formats a tick value, using thousands separators for whole numbers.
fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < u64::MAX as f64 {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}", sign, format_position(value.abs() as u64))
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Options;
    use crate::render::Renderer as _;
    use crate::Layout;
    use crate::Tracks;

    fn layout() -> Layout {
        let tracks = Tracks::try_from_strs(
            ["100-200"],
            ["120-140"],
            ["a: 100-110 FW", "a: 130-150 RW", "a: 160-170 RW"],
        )
        .unwrap();

        Layout::try_new(&tracks, &Options::default()).unwrap()
    }

    #[test]
    fn test_render() -> Result<(), Box<dyn std::error::Error>> {
        let layout = layout();
        let figure = Figure::new(&layout, "Genomic Intervals", (12.0, 6.0), 10.0);
        let svg = Renderer::default().render(&figure)?.to_string();

        assert!(svg.contains("width=\"1200\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("Genomic Intervals"));
        assert!(svg.contains("Genomic Position"));
        assert!(svg.contains("Tracks"));
        assert!(svg.contains("Read a FW"));
        assert!(svg.contains("purple"));
        assert!(svg.contains("rotate(-90"));

        Ok(())
    }

    #[test]
    fn test_invalid_figure_size() {
        let layout = layout();
        let figure = Figure::new(&layout, "", (0.5, 6.0), 10.0);
        let err = Renderer::default().render(&figure).unwrap_err();
        assert!(matches!(err, Error::InvalidFigureSize(_, _)));
    }

    #[test]
    fn test_invalid_font_size() {
        let layout = layout();
        let figure = Figure::new(&layout, "", (12.0, 6.0), -1.0);
        let err = Renderer::default().render(&figure).unwrap_err();
        assert_eq!(err.to_string(), "invalid font size: -1");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(30700000.0), "30,700,000");
        assert_eq!(format_tick(-1500.0), "-1,500");
        assert_eq!(format_tick(0.5), "0.5");
    }
}
