// Document Insight - Core Library
// Exposes the extraction/scoring/reporting pipeline for the CLI, agents and tests

pub mod analysis;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod profile;
pub mod report;
pub mod score;

// Re-export commonly used types
pub use analysis::{analyze_lines, analyze_text, AnalysisOutcome};
pub use error::{InsightError, Result};
pub use extractor::{
    extract_all, extract_value, parse_amount, split_lines,
    ExtractionResult, FieldExtractor, LabeledAmount,
};
pub use loader::{detect_format, get_loader, load, DocumentFormat, TextLoader};
pub use profile::{Label, Profile, Role, Shape};
pub use report::{format_amount, generate_narrative, Tier};
pub use score::ScoreBreakdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
