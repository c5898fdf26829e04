use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use csv::WriterBuilder;
use env_logger::Builder;
use fs_err::File;
use log::LevelFilter;
use miette::{Context, IntoDiagnostic};
use serde::Serialize;

use spc_core::{read, Spectrum};

/// Decode a Galactic SPC spectral file and print a summary.
#[derive(Debug, Parser)]
struct Args {
    /// Path to the .spc file to decode.
    file_path: Utf8PathBuf,

    /// Also write a sibling `.csv` file with one `x,y` row per point, one
    /// blank line between spectra.
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Serialize)]
struct Record {
    x: f64,
    y: f64,
}

fn write_csv(path: &Utf8PathBuf, spectra: &[Spectrum]) -> miette::Result<()> {
    let output_path = path.with_extension("csv");
    let file = File::create(&output_path)
        .into_diagnostic()
        .wrap_err_with(|| format!("creating '{output_path}' failed"))?;

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_writer(file);

    for (index, spectrum) in spectra.iter().enumerate() {
        if index > 0 {
            writer.write_record(std::iter::empty::<&[u8]>()).into_diagnostic()?;
        }
        for (x, y) in spectrum.iter() {
            writer.serialize(Record { x, y }).into_diagnostic()?;
        }
    }

    writer.flush().into_diagnostic()?;
    log::info!("wrote {output_path}");
    Ok(())
}

fn main() -> miette::Result<()> {
    Builder::new().filter(None, LevelFilter::Info).init();

    let args = Args::parse();

    let spectra = read(&args.file_path)
        .into_diagnostic()
        .wrap_err_with(|| format!("decoding '{}' failed", args.file_path))?;

    for (index, spectrum) in spectra.iter().enumerate() {
        println!("spectrum {index}: {} point(s)", spectrum.len());
    }
    std::io::stdout().flush().into_diagnostic()?;

    if args.csv {
        write_csv(&args.file_path, &spectra)?;
    }

    Ok(())
}
