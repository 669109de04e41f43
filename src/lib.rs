//! `trackplot` is a crate for laying out and rendering genomic interval track
//! diagrams.
//!
//! A diagram stacks three kinds of tracks on horizontal rows that share a
//! genomic coordinate axis:
//!
//! - **exons**, all drawn on the bottom row;
//! - **gaps**, each drawn on its own row above the exons, in input order;
//! - **read groups**, one row per read id above the gaps, in the order each id
//!   is first seen. Consecutive fragments of a read are joined by a thin
//!   connector, solid when both fragments were sequenced in the same direction
//!   and dotted otherwise.
//!
//! The crate is split along the same pipeline the data flows through:
//!
//! - Parsing. Exons and gaps are [`core::Interval`]s written as
//!   `<start>-<stop>`; reads are [`record::Read`]s written as
//!   `<id>: <start>-<stop> <FW|RW>`. Both are collected into [`Tracks`],
//!   either from strings via [`Tracks::try_from_strs()`] or from a track file
//!   via [`Reader`].
//! - Layout. A [`Layout`] turns [`Tracks`] into rows, segments, coordinate
//!   labels, connectors, and legend entries. It does not know about pixels.
//! - Rendering. A [`render::Renderer`] draws a [`Layout`]. An SVG renderer is
//!   provided in [`render::svg`].
//!
//! Most users will go through a [`Plotter`], which does all three:
//!
//! ```
//! use trackplot::render::svg;
//! use trackplot::Config;
//! use trackplot::PlotOptions;
//! use trackplot::Plotter;
//!
//! let plotter = Plotter::new(
//!     Config::default()
//!         .with_interval_color("navy")
//!         .with_vertical_spacing(0.4),
//! );
//!
//! let document = plotter.plot_intervals(
//!     ["557720-557758"],
//!     Vec::<&str>::new(),
//!     ["36778: 555924-556023 RW", "36778: 563427-563526 FW"],
//!     &PlotOptions::default(),
//!     svg::Renderer::default(),
//! )?;
//!
//! println!("{}", document);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! If you only need the geometry (for instance, to draw it with another
//! toolkit), stop at the layout:
//!
//! ```
//! use trackplot::layout::LineStyle;
//! use trackplot::PlotOptions;
//! use trackplot::Plotter;
//!
//! let layout = Plotter::default().layout(
//!     Vec::<&str>::new(),
//!     Vec::<&str>::new(),
//!     ["a: 1-5 FW", "a: 10-15 FW", "a: 20-25 RW"],
//!     &PlotOptions::default(),
//! )?;
//!
//! let styles = layout.connectors().iter().map(|c| c.style).collect::<Vec<_>>();
//! assert_eq!(styles, vec![LineStyle::Solid, LineStyle::Dotted]);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod core;
pub mod layout;
pub mod line;
pub mod plotter;
pub mod reader;
pub mod record;
pub mod render;
pub mod tracks;

pub use line::Line;

pub use self::layout::Layout;
pub use self::plotter::Config;
pub use self::plotter::PlotOptions;
pub use self::plotter::Plotter;
pub use self::reader::Reader;
pub use self::tracks::Tracks;
