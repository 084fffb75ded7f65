//! exhibits CLI - footnote and exhibit extraction tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use footnote_exhibits::extract::{load_pages, scan_page};
use footnote_exhibits::render::{self, ExportFormat, ExportOutcome, DEFAULT_MAX_CELL_WIDTH};
use footnote_exhibits::{
    create_sample_pdf, extract_file_with_options, ErrorMode, ExtractOptions, PageSelection,
    PdfLayoutSource,
};

const DEFAULT_INPUT: &str = "sample.pdf";
const DEFAULT_OUTPUT_STEM: &str = "final_complete_exhibits";

#[derive(Parser)]
#[command(name = "exhibits")]
#[command(version)]
#[command(about = "Link PDF footnotes to the sentences that cite them", long_about = None)]
struct Cli {
    /// Input PDF file (a sample document is generated when omitted and missing)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Fraction of the page height where the footnote region starts
    #[arg(long, value_name = "RATIO", default_value = "0.5")]
    split_ratio: f32,

    /// Scan pages one at a time
    #[arg(long)]
    sequential: bool,

    /// Fail on the first unreadable page instead of skipping it
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample PDF with three footnotes
    Sample {
        /// Output path
        #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
        output: PathBuf,
    },

    /// Show per-page scan information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Comma-separated values
    Csv,
    /// JSON array of records
    Json,
    /// Excel workbook
    Xlsx,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => ExportFormat::Csv,
            Format::Json => ExportFormat::Json,
            Format::Xlsx => ExportFormat::Xlsx,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Sample { output }) => cmd_sample(output),
        Some(Commands::Info { input, pages }) => cmd_info(input, pages.as_deref()),
        None => cmd_extract(&cli),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    Ok(match pages {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    })
}

fn cmd_extract(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = match &cli.input {
        Some(path) => path.clone(),
        None => {
            let path = PathBuf::from(DEFAULT_INPUT);
            if !path.exists() {
                create_sample_pdf(&path)?;
                println!("{} {}", "Created".green(), path.display());
            }
            path
        }
    };

    let mut options = ExtractOptions::new()
        .with_pages(parse_pages(cli.pages.as_deref())?)
        .with_split_ratio(cli.split_ratio)
        .with_parallel(!cli.sequential);
    if !cli.strict {
        options = options.with_error_mode(ErrorMode::Lenient);
    }

    log::debug!(
        "Extracting {} (pages {:?}, split ratio {}, parallel {})",
        input.display(),
        options.pages,
        options.split_ratio,
        options.parallel
    );
    let table = extract_file_with_options(&input, &options)?;

    if table.is_empty() {
        println!(
            "{} {}",
            "No footnote definitions found in".yellow(),
            input.display()
        );
        return Ok(());
    }

    print!("{}", render::to_text_table(&table, DEFAULT_MAX_CELL_WIDTH));
    println!();

    let format = ExportFormat::from(cli.format);
    let output = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!("{}.{}", DEFAULT_OUTPUT_STEM, format.extension()))
    });
    log::info!("Resolved output path {}", output.display());

    if let ExportOutcome::Written(path) = render::export(&table, &output, format)? {
        println!(
            "{} {} exhibits to {}",
            "Exported".green().bold(),
            table.exhibit_count(),
            path.display()
        );
    }

    if table.stats.unmatched_definitions > 0 {
        println!(
            "{} {} definitions have no citing sentence",
            "Note:".yellow(),
            table.stats.unmatched_definitions
        );
    }

    Ok(())
}

fn cmd_sample(output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Writing sample document to {}", output.display());
    create_sample_pdf(output)?;
    println!("{} {}", "Created".green(), output.display());
    Ok(())
}

fn cmd_info(input: &Path, pages: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let source = PdfLayoutSource::open(input)?;
    let options = ExtractOptions::new()
        .lenient()
        .with_pages(parse_pages(pages)?);
    let pages = load_pages(&source, &options)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), source.backend().version());
    println!("{}: {}", "Pages".bold(), pages.len());

    println!();
    println!("{}", "Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for page in &pages {
        let scan = scan_page(page, &options);
        match scan.baseline {
            Some(baseline) => println!(
                "{} {:>4}: baseline {:.1}pt, {} markers, {} definitions",
                "Page".bold(),
                page.number,
                baseline,
                scan.pointers.len(),
                scan.definitions.len()
            ),
            None => println!(
                "{} {:>4}: {}",
                "Page".bold(),
                page.number,
                "no text".dimmed()
            ),
        }
    }

    Ok(())
}
