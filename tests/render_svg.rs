use std::fs::File;
use std::io::BufReader;
use std::io::Write as _;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tempdir::TempDir;
use trackplot::PlotOptions;
use trackplot::Plotter;
use trackplot::Reader;
use trackplot::Tracks;
use trackplot::layout::LineStyle;
use trackplot::render::svg;

const TRACKS: &str = "\
# sample 2
exon 30702432-30702470

read 66592: 30703331-30703402 FW
read 66592: 30702122-30702169 RW
read 66592: 30702001-30702033 RW
read 66592: 30703584-30703611 FW
";

#[test]
fn test_track_file_to_svg() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new("trackplot")?;

    let tracks_path = dir.path().join("sample.tracks.gz");
    let mut encoder = GzEncoder::new(File::create(&tracks_path)?, Compression::default());
    encoder.write_all(TRACKS.as_bytes())?;
    encoder.finish()?;

    let reader = File::open(&tracks_path)
        .map(GzDecoder::new)
        .map(BufReader::new)
        .map(Reader::new)?;
    let tracks = Tracks::try_from_reader(reader)?;
    assert_eq!(tracks.exons().len(), 1);
    assert_eq!(tracks.reads().len(), 4);

    let plotter = Plotter::default();
    let options = PlotOptions::default();

    let layout = plotter.layout_tracks(&tracks, &options)?;
    let styles = layout
        .connectors()
        .iter()
        .map(|connector| connector.style)
        .collect::<Vec<_>>();
    assert_eq!(
        styles,
        vec![LineStyle::Solid, LineStyle::Dotted, LineStyle::Solid]
    );

    let document = plotter.render(&layout, &options, svg::Renderer::default())?;
    let svg_path = dir.path().join("sample.svg");
    ::svg::save(&svg_path, &document)?;

    let contents = std::fs::read_to_string(&svg_path)?;
    assert!(contents.starts_with("<svg"));
    assert!(contents.contains("Genomic Intervals"));
    assert!(contents.contains("Exon 1"));
    assert!(contents.contains("Read 66592 RW"));
    assert!(contents.contains("30,703,611"));

    Ok(())
}

#[test]
fn test_invalid_track_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new("trackplot")?;

    let tracks_path = dir.path().join("bad.tracks");
    std::fs::write(&tracks_path, "exon 1-10\nread r1: 5-10 XY\n")?;

    let reader = File::open(&tracks_path)
        .map(BufReader::new)
        .map(Reader::new)?;
    let err = Tracks::try_from_reader(reader).unwrap_err();
    assert!(err.to_string().starts_with("reader error: line 2:"));

    Ok(())
}
