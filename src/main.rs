use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::Rng;

use lockhide::{parse_lock_list, run_batch, Algorithm, DonorPool, LockImageBuilder, NUM_ALGORITHMS};

/// Generate puzzle images that visually conceal lock codes.
#[derive(Parser)]
#[command(name = "lockhide")]
#[command(version)]
#[command(about = "Hide lock codes in puzzle images using pixel-level steganography")]
struct Cli {
    /// Directory of donor photographs used as camouflage
    #[arg(long, default_value = "images")]
    images: PathBuf,

    /// Directory the generated PNG files are written to
    #[arg(long, default_value = ".")]
    out: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one image hiding the code for a single lock
    Single {
        /// Lock identifier, also used as the output file name
        name: String,

        /// The code to hide
        code: String,

        /// Algorithm id 0..6; picked at random when omitted
        #[arg(long)]
        algorithm: Option<u8>,
    },

    /// Generate images for a tab-separated lock list, grouped by name prefix
    Batch {
        /// Lock list: a header line, then name<TAB>code rows
        #[arg(default_value = "Lockout.txt")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lockhide: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();
    let donors = DonorPool::open(&cli.images)?;

    match cli.command {
        Commands::Single { name, code, algorithm } => {
            let id = algorithm.unwrap_or_else(|| rng.random_range(0..NUM_ALGORITHMS));
            let algorithm = Algorithm::from_id(id)?;

            let mut img = LockImageBuilder::new(format!("{name}-{code}")).build()?;
            img.apply(algorithm, 0, &donors, &mut rng)?;

            let path = cli.out.join(format!("{name}.png"));
            img.save(&path)?;
            println!("Saved {}", path.display());
        }
        Commands::Batch { file } => {
            let text = fs::read_to_string(&file)
                .map_err(|e| format!("could not load lock file {}: {e}", file.display()))?;
            let locks = parse_lock_list(&text)?;
            let written = run_batch(locks, &donors, &cli.out, &mut rng)?;
            println!("Generated {} images in {}", written.len(), cli.out.display());
        }
    }
    Ok(())
}
