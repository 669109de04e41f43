//! The entry point tying parsing, layout, and rendering together.

use std::convert::Infallible;

use tracing::debug;

use crate::layout;
use crate::render::Figure;
use crate::render::Renderer;
use crate::tracks;
use crate::Layout;
use crate::Tracks;

pub mod config;

pub use config::Config;
pub use config::PlotOptions;

/// An error related to plotting a diagram.
#[derive(Debug)]
pub enum Error<E = Infallible> {
    /// An exon, gap, or read could not be parsed.
    Tracks(tracks::Error),

    /// The tracks could not be laid out.
    Layout(layout::Error),

    /// The renderer failed.
    Render(E),
}

impl<E> std::fmt::Display for Error<E>
where
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Tracks(err) => write!(f, "tracks error: {err}"),
            Error::Layout(err) => write!(f, "layout error: {err}"),
            Error::Render(err) => write!(f, "render error: {err}"),
        }
    }
}

impl<E> std::error::Error for Error<E> where E: std::error::Error {}

/// Lays out and renders genomic interval track diagrams.
///
/// A plotter holds no state besides its [`Config`], so one plotter can draw
/// any number of independent diagrams.
///
/// # Examples
///
/// ```
/// use trackplot::render::svg;
/// use trackplot::Config;
/// use trackplot::PlotOptions;
/// use trackplot::Plotter;
///
/// let plotter = Plotter::new(Config::default().with_vertical_spacing(0.4));
///
/// let document = plotter.plot_intervals(
///     ["30702432-30702470"],
///     Vec::<&str>::new(),
///     [
///         "66592: 30703331-30703402 FW",
///         "66592: 30702122-30702169 RW",
///         "66592: 30702001-30702033 RW",
///         "66592: 30703584-30703611 FW",
///     ],
///     &PlotOptions::default(),
///     svg::Renderer::default(),
/// )?;
///
/// assert!(document.to_string().contains("30,702,432"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Plotter {
    /// The configuration.
    config: Config,
}

impl Plotter {
    /// Creates a new [`Plotter`].
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Gets the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses and lays out a diagram without rendering it.
    pub fn layout<E, G, R>(
        &self,
        exons: E,
        gaps: G,
        reads: R,
        options: &PlotOptions,
    ) -> Result<Layout, Error>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        self.try_layout(exons, gaps, reads, options)
    }

    /// Parses, lays out, and renders a diagram.
    ///
    /// Nothing is handed to the renderer unless parsing and layout both
    /// succeed.
    pub fn plot_intervals<E, G, R, T>(
        &self,
        exons: E,
        gaps: G,
        reads: R,
        options: &PlotOptions,
        renderer: T,
    ) -> Result<T::Output, Error<T::Error>>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
        T: Renderer,
    {
        let layout = self.try_layout(exons, gaps, reads, options)?;
        self.render(&layout, options, renderer)
    }

    /// Lays out already parsed [`Tracks`].
    pub fn layout_tracks(&self, tracks: &Tracks, options: &PlotOptions) -> Result<Layout, Error> {
        Layout::try_new(tracks, &self.config.layout_options(options)).map_err(Error::Layout)
    }

    /// Renders an existing [`Layout`].
    pub fn render<T>(
        &self,
        layout: &Layout,
        options: &PlotOptions,
        renderer: T,
    ) -> Result<T::Output, Error<T::Error>>
    where
        T: Renderer,
    {
        let figure = Figure::new(
            layout,
            options.title.as_deref().unwrap_or_default(),
            self.config.figure_size(),
            self.config.font_size(),
        );

        renderer.render(&figure).map_err(Error::Render)
    }

    /// Parses and lays out a diagram, for any renderer error type.
    fn try_layout<E, G, R, X>(
        &self,
        exons: E,
        gaps: G,
        reads: R,
        options: &PlotOptions,
    ) -> Result<Layout, Error<X>>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let tracks = Tracks::try_from_strs(exons, gaps, reads).map_err(Error::Tracks)?;
        let layout =
            Layout::try_new(&tracks, &self.config.layout_options(options)).map_err(Error::Layout)?;

        debug!(
            rows = layout.rows().len(),
            segments = layout.segments().len(),
            "laid out diagram"
        );

        Ok(layout)
    }
}
