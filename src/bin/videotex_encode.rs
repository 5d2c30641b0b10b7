//! Videotex Headless Encoder
//!
//! Compiles a JSON command tree into protocol codes.
//! Reads the tree from stdin or a file and prints the codes.

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use videotex_term::command::{self, Command};
use videotex_term::stream::Stream;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut input_file: Option<String> = None;
    let mut output_format = OutputFormat::Hex;
    let mut trim = false;
    let mut optimize = false;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-x" | "--hex" => {
                output_format = OutputFormat::Hex;
            },
            "--trim" => {
                trim = true;
            },
            "--optimize" => {
                optimize = true;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    // Read input
    let tree: Vec<Command> = match &input_file {
        Some(path) => match command::load(Path::new(path)) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("Error loading '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => {
            // Read from stdin
            let mut data = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            match command::from_json(&data) {
                Ok(tree) => tree,
                Err(e) => {
                    eprintln!("Error parsing command tree: {}", e);
                    return ExitCode::FAILURE;
                },
            }
        },
    };

    let mut stream = match command::compile(&tree) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("Error compiling command tree: {}", e);
            return ExitCode::FAILURE;
        },
    };

    // Row passes treat the whole output as one display row
    if optimize {
        stream = stream.optimize_row();
    }
    if trim {
        stream = stream.trim_row();
    }
    tracing::info!(codes = stream.len(), "encoded");

    // Output result
    match output_format {
        OutputFormat::Hex => println!("{}", to_hex(&stream)),
        OutputFormat::Json => match serde_json::to_string(&stream) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing codes: {}", e);
                return ExitCode::FAILURE;
            },
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Hex,
    Json,
}

fn to_hex(stream: &Stream) -> String {
    stream
        .iter()
        .map(|code| format!("{:02x}", code))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_help() {
    println!("Videotex Headless Encoder");
    println!();
    println!("Usage: videotex-encode [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>  Read the command tree from file");
    println!("  -x, --hex          Print codes as hex (default)");
    println!("  -j, --json         Print codes as a JSON array");
    println!("      --optimize     Compact the output as one display row");
    println!("                     (cursor positioning resets the tracked colors)");
    println!("      --trim         Drop trailing controls of the output row");
    println!("  -h, --help         Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  echo '[{{\"type\":\"content-string\",\"value\":\"AAAA\"}}]' | videotex-encode --optimize");
    println!("  videotex-encode --json page.json > page.codes.json");
}
