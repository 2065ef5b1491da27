use std::fs;
use std::path::PathBuf;

use clap::Parser;

use tripplan::{Config, PlanResponse};

#[derive(Parser)]
#[command(name = "tripplan")]
#[command(about = "Render trip-plan service output to PDF or HTML")]
struct Cli {
    /// Plan response JSON, or plain text treated as a single section
    input: PathBuf,

    /// Output file (defaults to input name with .pdf or .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit an HTML fragment instead of a PDF
    #[arg(long)]
    html: bool,

    /// Styling config TOML
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Read input file
    let raw = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let plan = if cli.input.extension().is_some_and(|ext| ext == "json") {
        match PlanResponse::from_json(&raw) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        PlanResponse::from_text(&raw)
    };

    if let Some(error) = &plan.error {
        eprintln!("Error: planning service reported: {}", error);
        std::process::exit(1);
    }

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::compiled_default(),
    };

    // Determine output path
    let extension = if cli.html { "html" } else { "pdf" };
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(extension));

    let bytes = if cli.html {
        tripplan::plan_to_html(&plan, &config).into_bytes()
    } else {
        match tripplan::plan_to_pdf(&plan, &config) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = fs::write(&output, bytes) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}
