use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glosscan::core::model::TextObservation;
use glosscan::layout::{self, LayoutConfig};
use glosscan::parse::parse_lines;
use glosscan::pipeline::{export_result, scan_page, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "glosscan")]
#[command(version, about = "Recover structured word lists from photographed vocabulary sheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a photographed sheet into a word list
    Scan {
        /// Input page image (png/jpg)
        input: PathBuf,

        /// Output directory (default: ./<input_name>_output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Recognition languages passed to the recognizer script
        #[arg(long, default_value = "en+sv")]
        lang: String,

        /// Recognizer script to invoke
        #[arg(long)]
        script: Option<PathBuf>,

        /// Row clustering threshold in normalized page units
        #[arg(long, default_value_t = 0.03)]
        row_threshold: f32,

        /// Keep intermediate state and write the HTML debug view
        #[arg(short, long)]
        debug: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Scan multiple sheet images
    Batch {
        /// Input page images
        inputs: Vec<PathBuf>,

        /// Output directory for all results
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Recognition languages passed to the recognizer script
        #[arg(long, default_value = "en+sv")]
        lang: String,

        /// Recognizer script to invoke
        #[arg(long)]
        script: Option<PathBuf>,

        /// Row clustering threshold in normalized page units
        #[arg(long, default_value_t = 0.03)]
        row_threshold: f32,

        /// Keep intermediate state and write the HTML debug view
        #[arg(short, long)]
        debug: bool,
    },

    /// Replay captured recognizer output and show the reconstruction
    Inspect {
        /// JSON file holding an array of observations
        input: PathBuf,

        /// Row clustering threshold in normalized page units
        #[arg(long, default_value_t = 0.03)]
        row_threshold: f32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            input,
            output,
            lang,
            script,
            row_threshold,
            debug,
            quiet,
        } => scan_single(input, output, lang, script, row_threshold, debug, quiet),
        Commands::Batch {
            inputs,
            output,
            lang,
            script,
            row_threshold,
            debug,
        } => scan_batch(inputs, output, lang, script, row_threshold, debug),
        Commands::Inspect {
            input,
            row_threshold,
        } => inspect(input, row_threshold),
    }
}

#[allow(clippy::too_many_arguments)]
fn scan_single(
    input: PathBuf,
    output: Option<PathBuf>,
    lang: String,
    script: Option<PathBuf>,
    row_threshold: f32,
    debug: bool,
    quiet: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }

    let output_dir = output.unwrap_or_else(|| {
        let stem = input.file_stem().unwrap().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    if !quiet {
        println!("[*] Scanning: {}", input.display());
        println!("[*] Output: {}", output_dir.display());
    }

    let mut config = PipelineConfig::new(input.clone(), output_dir.clone());
    config.lang = lang;
    config.script = script;
    config.layout = LayoutConfig { row_threshold };
    config.debug = debug;

    let result = scan_page(&config)
        .with_context(|| format!("Failed to scan: {}", input.display()))?;

    if !quiet {
        println!(
            "[+] Recognized {} pair(s){}",
            result.pairs.len(),
            result
                .title
                .as_deref()
                .map(|title| format!(", title: {title}"))
                .unwrap_or_default()
        );
    }

    export_result(&result, &config.output)
        .with_context(|| format!("Failed to export to: {}", output_dir.display()))?;

    if !quiet {
        println!("[+] Results saved to: {}", output_dir.display());
    }

    Ok(())
}

fn scan_batch(
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    lang: String,
    script: Option<PathBuf>,
    row_threshold: f32,
    debug: bool,
) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("No input files specified");
    }

    let base_output = output.unwrap_or_else(|| PathBuf::from("batch_output"));

    println!("[*] Batch scanning {} file(s)", inputs.len());
    println!("[*] Base output: {}\n", base_output.display());

    let mut success = 0;
    let mut failed = 0;

    for (i, input) in inputs.iter().enumerate() {
        println!("[{}/{}] Scanning: {}", i + 1, inputs.len(), input.display());

        if !input.exists() {
            eprintln!("  [!] Skipped: file does not exist");
            failed += 1;
            continue;
        }

        let stem = input.file_stem().unwrap().to_string_lossy();
        let output_dir = base_output.join(&*stem);

        match scan_single(
            input.clone(),
            Some(output_dir),
            lang.clone(),
            script.clone(),
            row_threshold,
            debug,
            true,
        ) {
            Ok(_) => {
                println!("  [+] Success");
                success += 1;
            }
            Err(e) => {
                eprintln!("  [!] Failed: {}", e);
                failed += 1;
            }
        }
    }

    println!("\n[*] Summary: {} succeeded, {} failed", success, failed);

    if failed > 0 {
        anyhow::bail!("{} file(s) failed to scan", failed);
    }

    Ok(())
}

fn inspect(input: PathBuf, row_threshold: f32) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let data = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;
    let observations: Vec<TextObservation> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse observations from: {}", input.display()))?;

    println!("Observations: {}", observations.len());

    let layout_config = LayoutConfig { row_threshold };
    let lines = layout::build_lines(&observations, &layout_config);

    println!("\nReconstructed lines:");
    for (index, line) in lines.iter().enumerate() {
        println!("{:>3}: {}", index + 1, line);
    }

    let result = parse_lines(&lines);
    println!("\nTitle: {}", result.title.as_deref().unwrap_or("(none)"));
    println!("Pairs: {}", result.pairs.len());
    for pair in &result.pairs {
        println!("  {} = {}", pair.foreign, pair.native);
    }

    Ok(())
}
