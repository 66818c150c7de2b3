use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use markdown_toc_config::Config;
use markdown_toc_engine::{
    NumberingOptions,
    io::{process_file, update_in_place},
    numbering::{DEFAULT_MAX_TOC_DEPTH, DEFAULT_MIN_DEPTH},
};
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

/// Number Markdown headings and regenerate the table of contents between
/// `<!-- toc -->` and `<!-- tocstop -->`.
#[derive(Debug, Parser)]
#[command(name = "markdown-toc", version, long_about = None)]
struct Args {
    /// Markdown files to process
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Heading marker length counted as the top numbered level [default: 2]
    #[arg(long, value_name = "N")]
    min_depth: Option<usize>,

    /// Deepest numbered level listed in the TOC [default: 3]
    #[arg(long, value_name = "N")]
    max_toc_depth: Option<usize>,

    /// Update files in place
    #[arg(short, long, default_value_t = false)]
    inplace: bool,

    /// Read defaults from this config file instead of the standard location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Flags win over the config file, which wins over the built-in defaults.
    fn numbering_options(&self, config: &Config) -> NumberingOptions {
        NumberingOptions {
            min_depth: self
                .min_depth
                .or(config.min_depth)
                .unwrap_or(DEFAULT_MIN_DEPTH),
            max_toc_depth: self
                .max_toc_depth
                .or(config.max_toc_depth)
                .unwrap_or(DEFAULT_MAX_TOC_DEPTH),
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            log::debug!("Config path: {}", path.display());
            Config::load_from_path(&path)?
                .ok_or_else(|| anyhow!("Config file not found: {}", path.display()))
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let options = args.numbering_options(&config);
    log::debug!("Numbering options: {options:?}");

    let mut out = stdout().lock();
    for path in &args.files {
        if args.inplace {
            update_in_place(path, &options)
                .with_context(|| format!("Failed to update {}", path.display()))?;
        } else {
            let rendered = process_file(path, &options)
                .with_context(|| format!("Failed to process {}", path.display()))?;
            out.write_all(rendered.as_bytes())?;
        }
    }
    out.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    run(&args)
}
