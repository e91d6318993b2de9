//! Hinge Frame Decoder CLI
//!
//! Command-line front end for the hinge-decoder library. It decodes hex
//! telemetry frames given on the command line or read from a file and prints
//! one JSON object per frame, keyed by the device identity token - the same
//! shape the uplink forwarder sends to the telemetry platform.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use hinge_decoder::{DecodeOutcome, DeviceFamily, FrameDecoder};
use serde_json::json;
use std::path::PathBuf;

/// Hinge Frame Decoder - decode Hinge555/Hinge572 telemetry frames
#[derive(Parser, Debug)]
#[command(name = "hinge-cli")]
#[command(about = "Decode Hinge555/Hinge572 hex telemetry frames", long_about = None)]
#[command(version)]
struct Args {
    /// Device family the frames belong to
    #[arg(short, long, value_enum)]
    family: Family,

    /// Hex frames to decode (one complete message each)
    #[arg(value_name = "FRAME")]
    frames: Vec<String>,

    /// Read frames from a file, one per line ('#' lines are comments)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Device family as a CLI value
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Family {
    Hinge555,
    Hinge572,
}

impl From<Family> for DeviceFamily {
    fn from(family: Family) -> Self {
        match family {
            Family::Hinge555 => DeviceFamily::Hinge555,
            Family::Hinge572 => DeviceFamily::Hinge572,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Hinge Frame Decoder CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", hinge_decoder::VERSION);

    let frames = collect_frames(&args)?;
    if frames.is_empty() {
        bail!("no frames to decode; pass FRAME arguments or --input <FILE>");
    }

    let decoder = FrameDecoder::new(args.family.into());
    let mut failed = 0usize;

    for (index, frame) in frames.iter().enumerate() {
        match decoder.decode(frame) {
            Ok(outcome) => print_outcome(&outcome, args.pretty)?,
            Err(e) => {
                eprintln!("frame {}: {}", index + 1, e);
                failed += 1;
            }
        }
    }

    log::info!("Decoded {} of {} frames", frames.len() - failed, frames.len());

    if failed > 0 {
        bail!("{} of {} frames failed to decode", failed, frames.len());
    }
    Ok(())
}

/// Gather frames from positional args and the optional input file
fn collect_frames(args: &Args) -> Result<Vec<String>> {
    let mut frames = args.frames.clone();

    if let Some(path) = &args.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read frames file {:?}", path))?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            frames.push(line.to_string());
        }
    }

    Ok(frames)
}

/// Print one decode outcome as a JSON object
fn print_outcome(outcome: &DecodeOutcome, pretty: bool) -> Result<()> {
    let value = match outcome {
        DecodeOutcome::Decoded { variant, record, token } => json!({
            "variant": variant,
            "token": token,
            "attributes": record,
        }),
        DecodeOutcome::Empty => json!({ "variant": "empty" }),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", rendered);
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
