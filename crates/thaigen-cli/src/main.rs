mod logging;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use thaigen_generate::{
    GenerationEngine, GenerationError, HttpFetcher, OfflineFetcher, ReferenceFetcher,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("logging error: {0}")]
    Logging(#[from] logging::LoggingError),
    #[error("settings error: {0}")]
    Settings(#[from] settings::SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("failed to write report: {0}")]
    Report(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "thaigen",
    version,
    about = "Random Thai names, addresses and phone numbers that might not really exist"
)]
struct Cli {
    /// Number of randomized sentences [default: 500].
    #[arg(long)]
    n_sentences: Option<u64>,
    /// Output file name.
    #[arg(long, default_value = "randomized_sentences.txt")]
    out_file: PathBuf,
    /// Probability of adding a pronoun in front of each sentence [default: 0].
    #[arg(long, value_parser = parse_probability)]
    p_pronoun: Option<f64>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML settings file with reference locations and phrase lists.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Append NDJSON logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Write the run report as JSON to this file.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Never download the address table.
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Only log warnings and errors.
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.log_file.as_deref())?;

    let mut options = settings::load_options(cli.config.as_deref())?;
    if let Some(n_sentences) = cli.n_sentences {
        options.n_sentences = n_sentences;
    }
    if let Some(p_pronoun) = cli.p_pronoun {
        options.p_pronoun = p_pronoun;
    }
    if cli.seed.is_some() {
        options.seed = cli.seed;
    }

    let fetcher: Box<dyn ReferenceFetcher> = if cli.offline {
        Box::new(OfflineFetcher)
    } else {
        Box::new(HttpFetcher::new()?)
    };

    let engine = GenerationEngine::new(options);
    let report = engine.run(fetcher.as_ref(), &cli.out_file).await?;

    if let Some(path) = cli.report.as_deref() {
        let encoded = serde_json::to_vec_pretty(&report)
            .map_err(|err| CliError::Report(err.to_string()))?;
        std::fs::write(path, encoded).map_err(|err| CliError::Report(err.to_string()))?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    Ok(())
}

fn parse_probability(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|err| format!("'{value}' is not a number: {err}"))?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err(format!("{parsed} is not within [0, 1]"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_with_defaults() {
        let cli = Cli::try_parse_from(["thaigen"]).expect("parse");
        assert_eq!(cli.out_file, PathBuf::from("randomized_sentences.txt"));
        assert!(cli.n_sentences.is_none());
        assert!(cli.p_pronoun.is_none());
        assert!(!cli.offline);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let result = Cli::try_parse_from(["thaigen", "--p-pronoun", "1.5"]);
        assert!(result.is_err());
        let cli = Cli::try_parse_from(["thaigen", "--p-pronoun", "0.3", "--n-sentences", "5"])
            .expect("parse");
        assert_eq!(cli.p_pronoun, Some(0.3));
        assert_eq!(cli.n_sentences, Some(5));
    }
}
