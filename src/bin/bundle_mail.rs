use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mail_bundler::golden::{self, Verification};
use mail_bundler::{Bundler, BundlerConfig, loader, report};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const INPUT_FILE: &str = "input.txt";
const OUTPUT_FILE: &str = "output.txt";

#[derive(Parser)]
#[command(name = "bundle-mail")]
#[command(about = "Bundle letters by normalized destination address")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, global = true, help = "Normalize letters on all cores")]
    parallel: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Verify bundling against golden output, stopping at the first failure
    Check {
        /// Directories holding input.txt and output.txt
        #[arg(required = true)]
        levels: Vec<PathBuf>,
    },
    /// Print the bundles built from a letter file
    Dump {
        /// Letter file in the four-lines-per-letter format
        input: PathBuf,

        #[arg(long, help = "Print CSV instead of the plain text table")]
        csv: bool,

        #[arg(short, long, help = "Write to this file instead of stdout")]
        output: Option<PathBuf>,
    },
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "mail_bundler=debug,bundle_mail=debug,info"
    } else {
        "mail_bundler=info,bundle_mail=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn check_level(bundler: &Bundler, dir: &Path) -> mail_bundler::Result<bool> {
    let input = loader::load_letters_from_path(dir.join(INPUT_FILE))?;
    let expected = golden::load_golden_from_path(dir.join(OUTPUT_FILE))?;

    println!("Running test {}", dir.display());
    let (bundles, _) = bundler.bundle_with_summary(&input)?;

    let passed = match golden::verify(&bundles, &expected, &input) {
        Verification::Passed => true,
        Verification::Failed(mismatch) => {
            println!("\n{mismatch}");
            false
        }
    };

    println!("----------------------------");
    println!("{}", if passed { "Success!" } else { "Fail" });
    Ok(passed)
}

fn dump(
    bundler: &Bundler,
    input: &Path,
    csv: bool,
    output: Option<&Path>,
) -> mail_bundler::Result<()> {
    let letters = loader::load_letters_from_path(input)?;
    let (bundles, _) = bundler.bundle_with_summary(&letters)?;

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    if csv {
        report::write_csv(&bundles, writer)
    } else {
        report::write_table(&bundles, writer)
    }
}

fn run(cli: Cli) -> mail_bundler::Result<bool> {
    let bundler = Bundler::with_config(
        BundlerConfig::builder()
            .parallel(cli.parallel)
            .log_bundles(cli.verbose)
            .build(),
    );

    match cli.command {
        Command::Check { levels } => {
            for level in &levels {
                if !check_level(&bundler, level)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Command::Dump { input, csv, output } => {
            dump(&bundler, &input, csv, output.as_deref())?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
