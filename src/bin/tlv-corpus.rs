//! Generate a TLV test corpus
//!
//! ```bash
//! tlv-corpus --output corpus --per-count 10 --max 16
//! tlv-corpus --config corpus.toml --verbose
//! ```
//!
//! Flags override values from the config file.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tlv_corpus::{CorpusGenerator, DirectoryPersister, Runner, RunnerConfig};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "tlv-corpus")]
#[command(about = "Enumerate TLV container files for parser test corpora")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// Files written per section count
    #[arg(long)]
    per_count: Option<usize>,

    /// Smallest section count
    #[arg(long)]
    min: Option<u8>,

    /// Largest section count
    #[arg(long)]
    max: Option<u8>,

    /// Skip writing manifest.json
    #[arg(long)]
    no_manifest: bool,

    /// Log every written file
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<RunnerConfig> {
        let mut config = match &self.config {
            Some(path) => RunnerConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RunnerConfig::default(),
        };

        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(cap) = self.per_count {
            config.files_per_section_count = cap;
        }
        if let Some(min) = self.min {
            config.min_section_count = min;
        }
        if let Some(max) = self.max {
            config.max_section_count = max;
        }
        if self.no_manifest {
            config.write_manifest = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = args.into_config()?;

    let mut persister = DirectoryPersister::create(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    if config.write_manifest {
        persister = persister.with_manifest();
    }

    let runner = Runner::new(config)?;
    let mut generator = CorpusGenerator::new();
    let summary = runner.run(&mut generator, &mut persister)?;

    println!(
        "Generated {} files ({} bytes) in {}",
        summary.files_written,
        summary.bytes_written,
        persister.root().display()
    );
    Ok(())
}
