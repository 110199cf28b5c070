use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::Parser;

use strategy_pdf::input::parse_document;
use strategy_pdf::style::Labels;
use strategy_pdf::{Error, Renderer};

#[derive(Parser)]
#[command(name = "strategy-pdf", version, about = "Render report sections from JSON into a PDF")]
struct Args {
    /// JSON file: an array of sections, or {"title": ..., "sections": [...]}
    input: PathBuf,

    /// Output PDF path (defaults to the input path with a .pdf extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title (overrides the title in the input file)
    #[arg(long)]
    title: Option<String>,

    /// PNG or JPEG logo for the cover page
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Cover date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Subtitle printed under the title
    #[arg(long)]
    subtitle: Option<String>,
}

fn run(args: Args) -> Result<PathBuf, Error> {
    let raw = std::fs::read_to_string(&args.input)?;
    let (title, sections) = parse_document(&raw, args.title)?;

    let logo = args.logo.as_ref().map(std::fs::read).transpose()?;

    let mut renderer = Renderer::new();
    if let Some(date) = args.date {
        renderer = renderer.with_date(date);
    }
    if let Some(subtitle) = args.subtitle {
        renderer = renderer.with_labels(Labels {
            subtitle,
            ..Labels::default()
        });
    }

    let bytes = renderer.render(&title, &sections, logo.as_deref())?;
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("pdf"));
    std::fs::write(&output, &bytes)?;
    Ok(output)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(output) => println!("Wrote {}", output.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
