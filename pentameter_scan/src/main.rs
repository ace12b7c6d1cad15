// CLI entry point for the iambic scansion engine.
//
// Scans each phrase given on the command line, or one phrase per line of
// stdin when none are given, and prints one output line per phrase. Logs go
// to stderr (filter with `RUST_LOG`), so stdout carries only scansion output.
//
// Usage:
//   scan [OPTIONS] [PHRASE...]
//     --lexicon <PATH>        Extra JSON lexicon, merged over the embedded one
//                             (repeatable)
//     --no-default-lexicon    Start from an empty store instead of the
//                             embedded lexicon
//     --config <PATH>         ScanConfig JSON
//     --format <FORMAT>       plain | brackets | ansi | json (default: ansi)
//     --strategy <STRATEGY>   search | exhaustive (overrides the config)

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pentameter_scan::{
    AnnotatedResult, AnsiRenderer, BracketRenderer, PlainRenderer, ScanConfig, Scanner, Strategy,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Plain,
    Brackets,
    Ansi,
    Json,
}

/// Iambic and iambic pentameter scansion.
#[derive(Parser, Debug)]
#[command(name = "scan")]
#[command(version)]
struct Args {
    /// Phrases to scan. Reads stdin line by line when empty.
    phrase: Vec<String>,

    /// Extra JSON lexicon files, merged over the embedded lexicon.
    #[arg(long, env = "PENTAMETER_LEXICON")]
    lexicon: Vec<PathBuf>,

    /// Do not load the embedded lexicon.
    #[arg(long)]
    no_default_lexicon: bool,

    /// Scanner configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "ansi")]
    format: Format,

    /// Overrides the strategy from the config file.
    #[arg(long)]
    strategy: Option<Strategy>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pentameter_scan=info,pentameter_lang=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let store = pentameter_scan::build_store(&args.lexicon, !args.no_default_lexicon)
        .context("Failed to load lexicons")?;
    let mut config = match &args.config {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScanConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    info!(words = store.len(), strategy = ?config.strategy, "scanner ready");

    let phrases = if args.phrase.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .context("Failed to read phrases from stdin")?
    } else {
        args.phrase.clone()
    };

    let scanner = Scanner::new(&store, config);
    let mut failures = 0;
    for (phrase, result) in phrases.iter().zip(scanner.scan_batch(&phrases)) {
        match result {
            Ok(result) => println!("{}", format_result(&result, args.format)?),
            Err(e) => {
                warn!(phrase = %phrase, error = %e, "phrase not scanned");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!(
            "{failures} of {} phrases could not be scanned",
            phrases.len()
        );
    }
    Ok(())
}

fn format_result(result: &AnnotatedResult, format: Format) -> Result<String> {
    let text = match format {
        Format::Json => return Ok(serde_json::to_string(result)?),
        Format::Plain => result.render_with(PlainRenderer::default()),
        Format::Brackets => result.render_with(BracketRenderer::default()),
        Format::Ansi => result.render_with(AnsiRenderer::default()),
    };
    Ok(format!("{text}\t{}", verdict(result)))
}

fn verdict(result: &AnnotatedResult) -> String {
    if result.is_iambic_pentameter() {
        "iambic pentameter".to_string()
    } else if result.is_iambic() {
        format!("iambic ({} syllables)", result.syllable_count())
    } else {
        format!(
            "not iambic ({} of {} syllables off)",
            result.mismatch_count(),
            result.syllable_count()
        )
    }
}
