//! A binary to draw a genomic interval track diagram as an SVG.
//!
//! ```shell
//! cargo run --release --bin=trackplot --features=binaries -- \
//!     --exon 557720-557758 \
//!     --read "36778: 555924-556023 RW" \
//!     --read "36778: 563427-563526 FW" \
//!     --output sample.svg
//! ```
//!
//! Tracks may also be read from a track file (optionally gzipped) with
//! `--input`. Values given on the command line are appended after the values
//! in the file.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;
use trackplot::Config;
use trackplot::PlotOptions;
use trackplot::Plotter;
use trackplot::Reader;
use trackplot::Tracks;
use trackplot::layout::Palette;
use trackplot::layout::extent::DEFAULT_MIN_PADDING;
use trackplot::render::DEFAULT_TITLE;
use trackplot::render::svg::Renderer as SvgRenderer;

/// The extension of gzipped track files.
const GZIP_EXTENSION: &str = "gz";

/// Draws exons, gaps, and grouped read fragments on stacked tracks.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// A track file with one `exon`, `gap`, or `read` per line. Files ending
    /// in `.gz` are decompressed.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// An exon, as `<start>-<stop>`. May be repeated.
    #[arg(long = "exon", value_name = "START-STOP")]
    exons: Vec<String>,

    /// A gap, as `<start>-<stop>`. May be repeated.
    #[arg(long = "gap", value_name = "START-STOP")]
    gaps: Vec<String>,

    /// A read fragment, as `"<id>: <start>-<stop> <FW|RW>"`. May be repeated.
    #[arg(long = "read", value_name = "READ")]
    reads: Vec<String>,

    /// Where to write the SVG. Written to stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The title of the diagram.
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Whether to hide the coordinate labels.
    #[arg(long, default_value_t = false)]
    no_coordinates: bool,

    /// The smallest horizontal padding, in genomic coordinate units.
    #[arg(long, default_value_t = DEFAULT_MIN_PADDING)]
    min_padding: u64,

    /// The vertical distance between rows.
    #[arg(long, default_value_t = 0.2)]
    vertical_spacing: f64,

    /// The base font size in points.
    #[arg(long, default_value_t = 10.0)]
    font_size: f64,

    /// The figure width in inches.
    #[arg(long, default_value_t = 12.0)]
    width: f64,

    /// The figure height in inches.
    #[arg(long, default_value_t = 6.0)]
    height: f64,

    /// The color of exons.
    #[arg(long)]
    exon_color: Option<String>,

    /// The color of gaps.
    #[arg(long)]
    gap_color: Option<String>,

    /// The color of forward read fragments.
    #[arg(long)]
    fw_color: Option<String>,

    /// The color of reverse read fragments.
    #[arg(long)]
    rw_color: Option<String>,

    #[command(flatten)]
    verbose: Verbosity,
}

impl Args {
    /// Builds the plotter configuration from the arguments.
    fn config(&self) -> Config {
        let palette = Palette::default();

        Config::default()
            .with_figure_size(self.width, self.height)
            .with_font_size(self.font_size)
            .with_vertical_spacing(self.vertical_spacing)
            .with_exon_color(self.exon_color.clone().unwrap_or(palette.exon))
            .with_interval_color(self.gap_color.clone().unwrap_or(palette.gap))
            .with_fw_color(self.fw_color.clone().unwrap_or(palette.forward))
            .with_rw_color(self.rw_color.clone().unwrap_or(palette.reverse))
    }

    /// Builds the per-diagram options from the arguments.
    fn options(&self) -> PlotOptions {
        PlotOptions {
            title: Some(self.title.clone()),
            show_coordinates: !self.no_coordinates,
            min_padding: self.min_padding,
        }
    }
}

/// Opens a track file, decompressing it if needed.
fn open(path: &Path) -> Result<Reader<Box<dyn BufRead>>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let inner: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some(GZIP_EXTENSION) => Box::new(BufReader::new(GzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    Ok(Reader::new(inner))
}

/// Gathers the tracks from the track file and the command line.
fn tracks(args: &Args) -> Result<Tracks> {
    let mut tracks = match &args.input {
        Some(path) => Tracks::try_from_reader(open(path)?)
            .with_context(|| format!("reading tracks from {}", path.display()))?,
        None => Tracks::default(),
    };

    let inline = Tracks::try_from_strs(&args.exons, &args.gaps, &args.reads)
        .context("parsing tracks from the command line")?;
    tracks.extend(inline);

    if tracks.is_empty() {
        bail!("no exons, gaps, or reads were provided: use `--input`, `--exon`, `--gap`, or `--read`");
    }

    Ok(tracks)
}

/// Draws the diagram.
fn plot(args: &Args) -> Result<()> {
    let tracks = tracks(args)?;
    info!(
        exons = tracks.exons().len(),
        gaps = tracks.gaps().len(),
        reads = tracks.reads().len(),
        "gathered tracks"
    );

    let plotter = Plotter::new(args.config());
    let options = args.options();

    let layout = plotter
        .layout_tracks(&tracks, &options)
        .context("laying out tracks")?;
    let document = plotter
        .render(&layout, &options, SvgRenderer::default())
        .context("rendering svg")?;

    match &args.output {
        Some(path) => {
            svg::save(path, &document).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", document),
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(std::io::stderr)
            .init(),
    };

    plot(&args)
}
