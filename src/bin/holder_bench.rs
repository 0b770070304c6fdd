use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use holder_bench::report::{render_json, render_summary, render_text};
use holder_bench::{measure_holders, BenchConfig, WordList};

#[derive(Parser, Debug)]
#[command(
    name = "holder-bench",
    about = "Times bulk insert/remove of a word list across array and linked stacks and queues",
    version
)]
struct Cli {
    /// Whitespace separated word list
    words: PathBuf,

    /// TOML file with nwords, rounds, holders and color
    #[arg(long)]
    config: Option<PathBuf>,

    /// Words per full round; also the capacity of AS and AQ
    #[arg(long)]
    nwords: Option<usize>,

    /// Number of rounds (K = 1..=rounds)
    #[arg(long)]
    rounds: Option<usize>,

    /// Comma separated holder tags, e.g. AS,LQ
    #[arg(long)]
    holders: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable coloured output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn load_config(&self) -> Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => BenchConfig::default(),
        };

        if let Some(nwords) = self.nwords {
            config.nwords = nwords;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(list) = &self.holders {
            config.holders = BenchConfig::parse_holders(list)?;
        }
        if self.no_color {
            config.color = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.load_config()?;
    tracing::debug!(?config, "effective configuration");

    let words = WordList::from_file(&cli.words)?;
    let report = measure_holders(&words, &config).context("benchmark aborted")?;

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        if !config.color {
            colored::control::set_override(false);
        }
        print!("{}", render_text(&report, config.color));
        print!("{}", render_summary(&report, config.color));
    }

    Ok(())
}
