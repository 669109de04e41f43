//! Prints the rows and connectors of a laid out track file as a table. This
//! is handy for checking where everything lands before rendering. Call the
//! program like so:
//!
//! ```
//! cargo run --release --example layout_table <TRACKS>
//! ```
//!
//! Track files ending in `.gz` are decompressed.

use std::env;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use flate2::read::GzDecoder;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;
use trackplot::PlotOptions;
use trackplot::Plotter;
use trackplot::Reader;
use trackplot::Tracks;
use trackplot::layout::row::Kind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let src = env::args().nth(1).expect("missing src");

    let file = File::open(&src)?;
    let inner: Box<dyn BufRead> = if src.ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let tracks = Tracks::try_from_reader(Reader::new(inner))?;
    let layout = Plotter::default().layout_tracks(&tracks, &PlotOptions::default())?;

    let mut builder = Builder::default();
    builder.push_record(["Row", "Y", "Start", "Stop", "Category", "Joined By"]);

    let mut connectors = layout.connectors().iter();

    for row in layout.rows() {
        let name = match row.kind() {
            Kind::Exon => String::from("Exons"),
            Kind::Gap(i) => format!("Gap {}", i + 1),
            Kind::ReadGroup(id) => format!("Read {id}"),
        };

        let spans = row.spans();
        for (i, span) in spans.iter().enumerate() {
            let joined_by = if row.is_connected() && i + 1 < spans.len() {
                connectors
                    .next()
                    .map(|c| format!("{:?} ({} -> {})", c.style, c.from, c.to))
                    .unwrap_or(String::from("<None>"))
            } else {
                String::from("--")
            };

            builder.push_record([
                name.clone(),
                format!("{:.2}", row.y()),
                span.interval().start().to_string(),
                span.interval().stop().to_string(),
                format!("{:?}", span.category()),
                joined_by,
            ]);
        }
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", table);

    let (lo, hi) = layout.x_range();
    println!("x range: {lo:.1} to {hi:.1}");
    println!("labels: {}", layout.labels().len());

    for entry in layout.legend() {
        println!("legend: {} ({})", entry.text, entry.color);
    }

    Ok(())
}
