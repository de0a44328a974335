use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_readall::{read_all, ReadOptions, WholeReader};

#[derive(Parser, Debug)]
#[clap(name = "fs-readall")]
#[clap(about = "Load whole files into memory", long_about = None)]
struct Cli {
    #[clap(long, global = true, help = "JSON file with reader options")]
    config: Option<PathBuf>,
    #[clap(
        long,
        global = true,
        help = "Capacity of the first buffer, overrides the config file"
    )]
    initial_capacity: Option<usize>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read every resource and print a summary line for each
    Load {
        #[clap(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Write the bytes of one resource to stdout
    Cat { path: PathBuf },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let reader = WholeReader::new(options(&cli)?);

    match cli.command {
        Command::Load { paths } => Ok(load(&reader, &paths)),
        Command::Cat { path } => {
            let buf = reader
                .read_path(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(buf.as_bytes())?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn options(cli: &Cli) -> anyhow::Result<ReadOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let data = read_all(path).with_context(|| {
                format!("Couldn't load config {}", path.display())
            })?;
            ReadOptions::from_json(data.as_bytes()).with_context(|| {
                format!("Invalid config {}", path.display())
            })?
        }
        None => ReadOptions::default(),
    };
    if let Some(initial_capacity) = cli.initial_capacity {
        options = options.with_initial_capacity(initial_capacity);
    }
    log::debug!("Using {:?}", options);
    Ok(options)
}

/// A failed resource is reported and skipped, the rest are still loaded.
fn load(reader: &WholeReader, paths: &[PathBuf]) -> ExitCode {
    let mut failed = 0;
    for path in paths {
        if !load_one(reader, path) {
            failed += 1;
        }
    }

    if failed > 0 {
        log::warn!("{} of {} resources failed to load", failed, paths.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_one(reader: &WholeReader, path: &Path) -> bool {
    match reader.read_path(path) {
        Ok(buf) => {
            let stats = buf.stats();
            println!(
                "{}: {} bytes, {} growths, capacity {}",
                path.display(),
                buf.len(),
                stats.growths,
                stats.capacity
            );
            true
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            false
        }
    }
}
