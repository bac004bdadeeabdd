//! Icon set generation utility.
//!
//! Resizes one source image into the 10 PNG variants of a macOS
//! `.appiconset` and writes the `Contents.json` manifest describing them.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use iconset_gen::commands::{generate, verify};
use iconset_gen::iconset::{IconSetError, Progress};
use iconset_gen::resize;

#[derive(Parser)]
#[command(name = "iconset-gen")]
#[command(about = "Generate macOS .appiconset icon sets from a source image")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate resized icons and Contents.json from a source image
    Generate {
        /// Source image (ideally a 1024x1024 PNG)
        source: PathBuf,

        /// Output icon set directory (deleted and recreated)
        #[arg(short, long, default_value = "AppIcon.appiconset")]
        output: PathBuf,

        /// Resize engine: image (in-process), sips (macOS tool)
        #[arg(long, default_value = "image")]
        engine: String,
    },
    /// Verify an existing icon set against its Contents.json
    Verify {
        /// Icon set directory to check
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            source,
            output,
            engine,
        } => run_generate(source, output, &engine),
        Commands::Verify { dir } => match verify::run(&dir) {
            Ok(count) => {
                println!("Verified {} images in {}", count, dir.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_generate(source: PathBuf, output: PathBuf, engine: &str) -> Result<(), IconSetError> {
    let resizer = resize::from_name(engine)?;

    let summary = generate::run(&source, &output, resizer.as_ref(), |event| match event {
        Progress::Generated { filename } => println!("Generated {}", filename),
        Progress::Failed { filename, reason } => {
            println!("Error generating {}: {}", filename, reason)
        }
    })?;

    if summary.failed.is_empty() {
        println!("Successfully generated icon set at {}", output.display());
    } else {
        println!(
            "Generated icon set at {} ({} of {} images)",
            output.display(),
            summary.written.len(),
            summary.written.len() + summary.failed.len()
        );
    }

    Ok(())
}
