//! Rendering of a [`Layout`] onto a drawing surface.
//!
//! The layout engine knows nothing about pixels, fonts, or files. A
//! [`Renderer`] receives a finished [`Figure`] and is consumed by the call, so
//! any surface it holds is released on every exit path.

use crate::Layout;

pub mod scale;
pub mod svg;

pub use scale::Scale;

/// The default figure size in inches (width, height).
pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (12.0, 6.0);

/// The default font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// The default title.
pub const DEFAULT_TITLE: &str = "Genomic Intervals";

/// The title of the horizontal axis.
pub const X_AXIS_TITLE: &str = "Genomic Position";

/// The title of the vertical axis.
pub const Y_AXIS_TITLE: &str = "Tracks";

/// Everything a [`Renderer`] needs to draw one diagram.
#[derive(Clone, Copy, Debug)]
pub struct Figure<'a> {
    /// The laid out primitives.
    layout: &'a Layout,

    /// The title.
    title: &'a str,

    /// The figure size in inches (width, height).
    size: (f64, f64),

    /// The base font size in points.
    font_size: f64,
}

impl<'a> Figure<'a> {
    /// Creates a new [`Figure`].
    pub fn new(layout: &'a Layout, title: &'a str, size: (f64, f64), font_size: f64) -> Self {
        Self {
            layout,
            title,
            size,
            font_size,
        }
    }

    /// Gets the layout.
    pub fn layout(&self) -> &'a Layout {
        self.layout
    }

    /// Gets the title.
    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Gets the figure size in inches (width, height).
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Gets the base font size in points.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}

/// A drawing surface for a [`Figure`].
pub trait Renderer {
    /// What the renderer produces.
    type Output;

    /// An error raised while rendering.
    type Error: std::error::Error;

    /// Draws the figure, consuming the renderer.
    fn render(self, figure: &Figure<'_>) -> Result<Self::Output, Self::Error>;
}
