// 🖥️ CLI Shell
// Argument parsing + output rendering; all analysis lives in the library

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use std::io::{Read, Write};
use std::path::PathBuf;

use document_insight::{analyze_lines, analyze_text, load, AnalysisOutcome, Profile};

#[derive(Parser, Debug)]
#[command(
    name = "document-insight",
    version,
    about = "Extract labeled amounts from a document, score them and write a summary paragraph."
)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "stdin"])))]
pub struct Cli {
    /// Path to the document (.pdf, .docx or .doc)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read the document text from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Labeling convention used by the document
    #[arg(long, value_enum, default_value_t = ProfileArg::Financial)]
    pub profile: ProfileArg,

    /// Print one JSON object with score and narrative
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileArg {
    Context,
    Financial,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Context => Profile::Context,
            ProfileArg::Financial => Profile::Financial,
        }
    }
}

impl Cli {
    /// Default log directive when RUST_LOG is unset
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "document_insight=warn",
            1 => "document_insight=info",
            _ => "document_insight=debug",
        }
    }

    /// Run the analysis; output is only written once everything succeeded
    pub fn run(&self) -> Result<()> {
        let profile = Profile::from(self.profile);

        let outcome = match &self.file {
            Some(path) => {
                let lines = load(path)?;
                analyze_lines(profile, &lines)?
            }
            None => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .context("Failed to read standard input")?;
                analyze_text(profile, &raw)?
            }
        };

        let rendered = if self.json {
            serde_json::to_string_pretty(&outcome.to_json())?
        } else {
            render_text(&outcome)?
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", rendered)?;
        Ok(())
    }
}

/// Two-section text output: results JSON, then the narrative
pub fn render_text(outcome: &AnalysisOutcome) -> Result<String> {
    let results = serde_json::to_string_pretty(&outcome.result_json())?;

    Ok(format!(
        "{}\n{}\n\n{}\n{}",
        outcome.profile.results_heading(),
        results,
        outcome.profile.narrative_heading(),
        outcome.narrative,
    ))
}

// ============================================================================
// TESTS
// ============================================================================
