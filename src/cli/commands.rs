// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `build` and `inspect`, and
// all their flags. The clap value enums here mirror the
// application-layer enums so that Layer 2 never sees clap types.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::build_features_use_case::FeatureConfig;
use crate::data::tokens::TokenPolicy;
use crate::domain::candidate::Candidate;
use crate::infra::table_writer::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the feature table for a file of candidates
    Build(BuildArgs),

    /// Compute and explain the features of one candidate
    Inspect(InspectArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FormatArg {
    Jsonl,
    Json,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Jsonl => OutputFormat::Jsonl,
            FormatArg::Json  => OutputFormat::Json,
            FormatArg::Csv   => OutputFormat::Csv,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum TokenPolicyArg {
    /// Split surface features on whitespace
    Whitespace,
    /// Use the tagger's tokens everywhere
    Tagger,
}

impl From<TokenPolicyArg> for TokenPolicy {
    fn from(p: TokenPolicyArg) -> Self {
        match p {
            TokenPolicyArg::Whitespace => TokenPolicy::Whitespace,
            TokenPolicyArg::Tagger     => TokenPolicy::Tagger,
        }
    }
}

/// Lexicon and tokenisation flags shared by both subcommands
#[derive(Args, Debug)]
pub struct LexiconArgs {
    /// Stop-word list, one word per line (default: built-in English list)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Quantifier-word list, one word per line (default: built-in list)
    #[arg(long)]
    pub quantifiers: Option<PathBuf>,

    /// Tokenisation used by the surface features
    #[arg(long, value_enum, default_value_t = TokenPolicyArg::Whitespace)]
    pub token_policy: TokenPolicyArg,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Candidate file: a JSON array or JSON Lines of
    /// {"Question", "Answer", "Sentence"} records
    #[arg(long)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output layout
    #[arg(long, value_enum, default_value_t = FormatArg::Jsonl)]
    pub format: FormatArg,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Worker threads: 1 runs on the main thread, 0 uses every core
    #[arg(long, default_value_t = 1)]
    pub jobs: usize,

    /// Write a CSV of every defaulted feature to this path
    #[arg(long)]
    pub diagnostics: Option<PathBuf>,

    /// Classifier resource for the ranking stage; passed through unused
    #[arg(long, env = "CLASSIFIER_PATH")]
    pub classifier_path: Option<String>,
}

impl From<BuildArgs> for FeatureConfig {
    fn from(a: BuildArgs) -> Self {
        FeatureConfig {
            input:           a.input,
            output:          a.output,
            format:          a.format.into(),
            stopwords:       a.lexicon.stopwords,
            quantifiers:     a.lexicon.quantifiers,
            token_policy:    a.lexicon.token_policy.into(),
            jobs:            a.jobs,
            diagnostics:     a.diagnostics,
            classifier_path: a.classifier_path,
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The candidate answer span
    #[arg(long)]
    pub answer: String,

    /// The generated question
    #[arg(long, default_value = "")]
    pub question: String,

    /// The source sentence
    #[arg(long, default_value = "")]
    pub sentence: String,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

impl InspectArgs {
    pub fn candidate(&self) -> Candidate {
        Candidate::new(&self.question, &self.answer, &self.sentence)
    }

    pub fn config(&self) -> FeatureConfig {
        FeatureConfig {
            stopwords:    self.lexicon.stopwords.clone(),
            quantifiers:  self.lexicon.quantifiers.clone(),
            token_policy: self.lexicon.token_policy.into(),
            ..FeatureConfig::default()
        }
    }
}
