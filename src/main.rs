use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use annotext::annotation::model::AnnotationRecord;
use annotext::export::{Exporter, JsonExporter, TextExporter};
use annotext::pipeline::annotation_formats;

#[derive(Parser, Debug)]
#[command(name = "annotext")]
#[command(version, about = "Reading-order text reconstruction from per-symbol OCR annotations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert one batch-annotation JSON file
    Convert {
        /// Input batch-annotation JSON file
        input: PathBuf,

        /// Output directory (default: ./<input_name>_output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Original document filename to record in the output
        /// (default: the input file stem)
        #[arg(long)]
        filename: Option<String>,

        /// Suppress status output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Convert multiple batch-annotation JSON files
    Batch {
        /// Input batch-annotation JSON files
        inputs: Vec<PathBuf>,

        /// Output directory for all results
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show page/line/phrase counts for a batch-annotation JSON file
    Info {
        /// Input batch-annotation JSON file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            filename,
            quiet,
        } => convert_single(input, output, filename, quiet),
        Commands::Batch { inputs, output } => convert_batch(inputs, output),
        Commands::Info { input } => show_info(input),
    }
}

fn read_batch(input: &PathBuf) -> Result<Vec<AnnotationRecord>> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }
    let data = fs::read_to_string(input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;
    let batch: Vec<AnnotationRecord> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse batch annotation: {}", input.display()))?;
    Ok(batch)
}

fn input_stem(input: &PathBuf) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

fn convert_single(
    input: PathBuf,
    output: Option<PathBuf>,
    filename: Option<String>,
    quiet: bool,
) -> Result<()> {
    let batch = read_batch(&input)?;

    let output_dir =
        output.unwrap_or_else(|| PathBuf::from(format!("{}_output", input_stem(&input))));
    let filename = filename.unwrap_or_else(|| input_stem(&input));

    if !quiet {
        println!("[*] Processing: {}", input.display());
        println!("[*] Output: {}", output_dir.display());
    }

    let formats = annotation_formats(batch, &filename)
        .with_context(|| format!("Failed to process annotation: {}", input.display()))?;

    JsonExporter::new(output_dir.clone()).export(&formats)?;
    TextExporter::new(output_dir.clone()).export(&formats)?;

    if !quiet {
        println!("[✓] Done! Results saved to: {}", output_dir.display());
    }

    Ok(())
}

fn convert_batch(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("No input files specified");
    }

    let base_output = output.unwrap_or_else(|| PathBuf::from("batch_output"));

    println!("[*] Batch processing {} file(s)", inputs.len());
    println!("[*] Base output: {}\n", base_output.display());

    let mut success = 0;
    let mut failed = 0;

    for (i, input) in inputs.iter().enumerate() {
        println!("[{}/{}] Processing: {}", i + 1, inputs.len(), input.display());

        let output_dir = base_output.join(input_stem(input));
        match convert_single(input.clone(), Some(output_dir), None, true) {
            Ok(_) => {
                println!("  [✓] Success");
                success += 1;
            }
            Err(e) => {
                eprintln!("  [✗] Failed: {}", e);
                failed += 1;
            }
        }
    }

    println!("\n[*] Summary: {} succeeded, {} failed", success, failed);

    if failed > 0 {
        anyhow::bail!("{} file(s) failed to process", failed);
    }

    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    let batch = read_batch(&input)?;
    let formats = annotation_formats(batch, &input_stem(&input))?;

    let pages = formats.line_list.pages.len();
    let lines: usize = formats
        .line_list
        .pages
        .iter()
        .map(|page| page.lines.len())
        .sum();
    let phrases: usize = formats
        .line_list
        .pages
        .iter()
        .flat_map(|page| page.lines.iter())
        .map(|line| line.phrases.len())
        .sum();
    let words: usize = formats
        .line_list
        .pages
        .iter()
        .flat_map(|page| page.lines.iter())
        .flat_map(|line| line.phrases.iter())
        .map(|phrase| phrase.words.len())
        .sum();

    println!("Annotation Information");
    println!("======================");
    println!("File: {}", input.display());
    println!("Pages: {}", pages);
    println!("Lines: {}", lines);
    println!("Phrases: {}", phrases);
    println!("Line words: {}", words);

    Ok(())
}
