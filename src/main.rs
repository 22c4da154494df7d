use anyhow::{Context, Result};
use arith_mean::{input::read_values, mean};
use clap::Parser;
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// File with the values, `-` or nothing for stdin
    input: Option<PathBuf>,

    /// Number of decimal places to print
    #[arg(long)]
    precision: Option<usize>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::debug!("{args:#?}");

    let values = match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
            read_values(BufReader::new(file)).with_context(|| format!("failed to read {path:?}"))?
        }
        _ => read_values(io::stdin().lock()).context("failed to read stdin")?,
    };

    log::info!("read {} values", values.len());
    if values.is_empty() {
        log::warn!("no values given, mean is undefined");
    }

    let result = mean(&values);
    match args.precision {
        Some(precision) => println!("{result:.precision$}"),
        None => println!("{result}"),
    }

    Ok(())
}
