// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to
// its use case. Printing happens here and nowhere else.
//
//   1. `build`   — feature table for a candidate file
//   2. `inspect` — features of one candidate, with fallbacks
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BuildArgs, Commands, InspectArgs};

#[derive(Parser, Debug)]
#[command(
    name = "aqg-features",
    version,
    about = "Compute ranking features for candidate answers in question generation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Build(args)   => run_build(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    use crate::application::build_features_use_case::BuildFeaturesUseCase;

    tracing::info!("Building features for candidates in: {}", args.input.display());

    let report = BuildFeaturesUseCase::new(args.into()).execute()?;

    tracing::info!(
        "Done: {} rows, {} defaulted features",
        report.rows,
        report.fallbacks
    );
    if let Some(path) = &report.classifier_path {
        tracing::info!("Classifier for ranking stage: {}", path);
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let use_case = InspectUseCase::new(&args.config())?;
    let outcome  = use_case.inspect(&args.candidate());

    for (kind, value) in outcome.features.iter() {
        println!("{:<38} {}", kind.key(), value);
    }
    if !outcome.fallbacks.is_empty() {
        println!("\nDefaulted:");
        for fallback in &outcome.fallbacks {
            println!("  {fallback}");
        }
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokens::TokenPolicy;
    use crate::infra::table_writer::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_args_map_to_config() {
        let cli = Cli::try_parse_from([
            "aqg-features", "build",
            "--input", "in.jsonl",
            "--format", "csv",
            "--token-policy", "tagger",
            "--jobs", "4",
            "--classifier-path", "ranker.bin",
        ])
        .unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        let cfg: crate::application::build_features_use_case::FeatureConfig = args.into();
        assert_eq!(cfg.format, OutputFormat::Csv);
        assert_eq!(cfg.token_policy, TokenPolicy::Tagger);
        assert_eq!(cfg.jobs, 4);
        assert_eq!(cfg.classifier_path.as_deref(), Some("ranker.bin"));
        assert_eq!(cfg.output, None);
    }

    #[test]
    fn test_inspect_requires_answer() {
        assert!(Cli::try_parse_from(["aqg-features", "inspect"]).is_err());
        let cli = Cli::try_parse_from(["aqg-features", "inspect", "--answer", "many apples"]).unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.candidate().answer.as_deref(), Some("many apples"));
        assert_eq!(args.candidate().question.as_deref(), Some(""));
    }
}
