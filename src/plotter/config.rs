//! Configuration for a [`Plotter`](crate::Plotter).

use crate::layout;
use crate::layout::extent::DEFAULT_MIN_PADDING;
use crate::layout::LabelOffsets;
use crate::layout::Palette;
use crate::layout::DEFAULT_VERTICAL_SPACING;
use crate::render::DEFAULT_FIGURE_SIZE;
use crate::render::DEFAULT_FONT_SIZE;
use crate::render::DEFAULT_TITLE;

/// Construction-time configuration shared by every diagram a
/// [`Plotter`](crate::Plotter) draws.
///
/// # Examples
///
/// ```
/// use trackplot::Config;
///
/// let config = Config::default()
///     .with_exon_color("red")
///     .with_interval_color("navy")
///     .with_vertical_spacing(0.4);
///
/// assert_eq!(config.interval_color(), "navy");
/// assert_eq!(config.vertical_spacing(), 0.4);
/// assert_eq!(config.figure_size(), (12.0, 6.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The figure size in inches (width, height).
    figure_size: (f64, f64),

    /// The color of exons.
    exon_color: String,

    /// The color of gaps.
    interval_color: String,

    /// The color of forward read fragments.
    fw_color: String,

    /// The color of reverse read fragments.
    rw_color: String,

    /// The base font size in points.
    font_size: f64,

    /// The vertical distance between rows.
    vertical_spacing: f64,

    /// The placement of coordinate labels.
    label_offsets: LabelOffsets,
}

impl Config {
    /// Sets the figure size in inches (width, height).
    pub fn with_figure_size(mut self, width: f64, height: f64) -> Self {
        self.figure_size = (width, height);
        self
    }

    /// Sets the color of exons.
    pub fn with_exon_color(mut self, color: impl Into<String>) -> Self {
        self.exon_color = color.into();
        self
    }

    /// Sets the color of gaps.
    pub fn with_interval_color(mut self, color: impl Into<String>) -> Self {
        self.interval_color = color.into();
        self
    }

    /// Sets the color of forward read fragments.
    pub fn with_fw_color(mut self, color: impl Into<String>) -> Self {
        self.fw_color = color.into();
        self
    }

    /// Sets the color of reverse read fragments.
    pub fn with_rw_color(mut self, color: impl Into<String>) -> Self {
        self.rw_color = color.into();
        self
    }

    /// Sets the base font size in points.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the vertical distance between rows.
    pub fn with_vertical_spacing(mut self, vertical_spacing: f64) -> Self {
        self.vertical_spacing = vertical_spacing;
        self
    }

    /// Sets the placement of coordinate labels.
    pub fn with_label_offsets(mut self, label_offsets: LabelOffsets) -> Self {
        self.label_offsets = label_offsets;
        self
    }

    /// Gets the figure size in inches (width, height).
    pub fn figure_size(&self) -> (f64, f64) {
        self.figure_size
    }

    /// Gets the color of exons.
    pub fn exon_color(&self) -> &str {
        &self.exon_color
    }

    /// Gets the color of gaps.
    pub fn interval_color(&self) -> &str {
        &self.interval_color
    }

    /// Gets the color of forward read fragments.
    pub fn fw_color(&self) -> &str {
        &self.fw_color
    }

    /// Gets the color of reverse read fragments.
    pub fn rw_color(&self) -> &str {
        &self.rw_color
    }

    /// Gets the base font size in points.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Gets the vertical distance between rows.
    pub fn vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }

    /// Gets the placement of coordinate labels.
    pub fn label_offsets(&self) -> LabelOffsets {
        self.label_offsets
    }

    /// Combines this configuration with per-diagram options into layout
    /// options.
    pub fn layout_options(&self, options: &PlotOptions) -> layout::Options {
        layout::Options {
            vertical_spacing: self.vertical_spacing,
            min_padding: options.min_padding,
            show_coordinates: options.show_coordinates,
            label_offsets: self.label_offsets,
            palette: Palette {
                exon: self.exon_color.clone(),
                gap: self.interval_color.clone(),
                forward: self.fw_color.clone(),
                reverse: self.rw_color.clone(),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let palette = Palette::default();

        Self {
            figure_size: DEFAULT_FIGURE_SIZE,
            exon_color: palette.exon,
            interval_color: palette.gap,
            fw_color: palette.forward,
            rw_color: palette.reverse,
            font_size: DEFAULT_FONT_SIZE,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
            label_offsets: LabelOffsets::default(),
        }
    }
}

/// Per-diagram options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlotOptions {
    /// The title, if any.
    pub title: Option<String>,
    /// Whether to draw coordinate labels.
    pub show_coordinates: bool,
    /// The smallest horizontal padding, in genomic coordinate units.
    pub min_padding: u64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: Some(String::from(DEFAULT_TITLE)),
            show_coordinates: true,
            min_padding: DEFAULT_MIN_PADDING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.figure_size(), (12.0, 6.0));
        assert_eq!(config.exon_color(), "red");
        assert_eq!(config.interval_color(), "blue");
        assert_eq!(config.fw_color(), "darkgreen");
        assert_eq!(config.rw_color(), "purple");
        assert_eq!(config.font_size(), 10.0);
        assert_eq!(config.vertical_spacing(), 0.2);

        let options = PlotOptions::default();
        assert_eq!(options.title.as_deref(), Some("Genomic Intervals"));
        assert!(options.show_coordinates);
        assert_eq!(options.min_padding, 100);
    }

    #[test]
    fn test_layout_options() {
        let config = Config::default()
            .with_interval_color("navy")
            .with_fw_color("green")
            .with_vertical_spacing(0.4);

        let options = config.layout_options(&PlotOptions {
            show_coordinates: false,
            min_padding: 5,
            ..Default::default()
        });

        assert_eq!(options.vertical_spacing, 0.4);
        assert_eq!(options.min_padding, 5);
        assert!(!options.show_coordinates);
        assert_eq!(options.palette.gap, "navy");
        assert_eq!(options.palette.forward, "green");
        assert_eq!(options.palette.exon, "red");
    }
}
