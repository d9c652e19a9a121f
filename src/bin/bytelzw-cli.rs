//! bytelzw-cli - Command-line interface for bytelzw
//!
//! A command-line tool for compressing files and inspecting code streams.

use bytelzw::{CompressionOptions, Encoder, OUTPUT_CAPACITY};
use clap::{Args, Parser, Subcommand};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Sample inputs used by the `demo` subcommand
const DEMO_VECTORS: [(&str, &[u8]); 3] = [
    (
        "ptr1",
        &[
            0x03, 0x74, 0x04, 0x04, 0x04, 0x35, 0x35, 0x64, 0x64, 0x64, 0x64, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x56, 0x45, 0x56, 0x56, 0x56, 0x09, 0x09, 0x09,
        ],
    ),
    ("ptr2", b"thisisthe"),
    ("ptr3", b"thisthis"),
];

#[derive(Parser)]
#[command(name = "bytelzw-cli")]
#[command(about = "A CLI tool for single-byte-code LZW compression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a raw code stream
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output code stream file
        output: PathBuf,

        /// Maximum number of codes to emit
        #[arg(short, long, default_value_t = OUTPUT_CAPACITY)]
        capacity: usize,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Show bytes before and after compression
    Inspect {
        #[command(flatten)]
        source: InspectSource,

        /// Maximum number of codes to emit
        #[arg(short, long, default_value_t = OUTPUT_CAPACITY)]
        capacity: usize,
    },

    /// Inspect the built-in sample vectors
    Demo,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InspectSource {
    /// Input given as hex digits
    #[arg(long)]
    hex: Option<String>,

    /// Input given as text
    #[arg(long)]
    text: Option<String>,

    /// Input read from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl InspectSource {
    fn load(&self) -> Result<(String, Vec<u8>), Box<dyn std::error::Error>> {
        if let Some(digits) = &self.hex {
            let bytes = hex::decode(digits.replace(' ', ""))
                .map_err(|e| format!("Invalid hex input: {}", e))?;
            Ok(("hex".to_string(), bytes))
        } else if let Some(text) = &self.text {
            Ok(("text".to_string(), text.as_bytes().to_vec()))
        } else if let Some(path) = &self.file {
            Ok((path.display().to_string(), fs::read(path)?))
        } else {
            Err("No input given".into())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: logger unavailable: {}", e);
    }

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            capacity,
            force,
        } => compress_file(&input, &output, capacity, force, cli.quiet),
        Commands::Inspect { source, capacity } => source
            .load()
            .and_then(|(name, data)| inspect(&name, &data, capacity))
            .map(|report| print!("{}", report)),
        Commands::Demo => run_demo().map(|report| print!("{}", report)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn compress_file(
    input: &PathBuf,
    output: &PathBuf,
    capacity: usize,
    force: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Check if input file exists
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    // Check if output file exists and force flag
    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }

    debug!(
        "Compressing '{}' to '{}' (capacity {})",
        input.display(),
        output.display(),
        capacity
    );

    let start_time = Instant::now();
    let input_data = fs::read(input)?;

    let encoder = Encoder::new(CompressionOptions::new().with_output_capacity(capacity));
    let encoded = encoder
        .encode(&input_data)
        .map_err(|e| format!("Compression failed: {}", e))?;

    fs::write(output, encoded.codes())?;

    let stats = encoded.stats();
    if !quiet {
        println!("✓ Compression successful!");
        println!("  Input:   {} bytes", stats.bytes_processed);
        println!("  Output:  {} bytes", stats.codes_emitted);
        println!("  Ratio:   {:.1}%", stats.compression_ratio * 100.0);
        println!("  Learned: {} phrases", stats.learned_phrases);
        println!("  Time:    {:.2?}", start_time.elapsed());
    }

    Ok(())
}

/// Render the before/after report for one input
fn inspect(
    name: &str,
    data: &[u8],
    capacity: usize,
) -> Result<String, Box<dyn std::error::Error>> {
    let encoder = Encoder::new(CompressionOptions::new().with_output_capacity(capacity));
    let encoded = encoder
        .encode(data)
        .map_err(|e| format!("Compression of {} failed: {}", name, e))?;

    let mut report = String::new();
    report.push_str(&format!(
        "Number of bytes in {} before compression: {}\n",
        name,
        data.len()
    ));
    report.push_str(&format!("Byte array before compression: {}\n", spaced_hex(data)));
    report.push_str(&format!(
        "Number of bytes in {} after compression: {}\n",
        name,
        encoded.len()
    ));
    report.push_str(&format!("New byte array: {}\n", spaced_hex(encoded.codes())));
    Ok(report)
}

fn run_demo() -> Result<String, Box<dyn std::error::Error>> {
    let mut report = String::new();
    for (name, data) in DEMO_VECTORS {
        report.push_str(&inspect(name, data, OUTPUT_CAPACITY)?);
        report.push('\n');
    }
    Ok(report)
}

fn spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}
