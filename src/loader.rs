// 📂 Document Loader
// PDF / DOCX -> plain text lines, dispatched by file extension

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{InsightError, Result};
#[cfg(feature = "pdf")]
use crate::extractor::split_lines;

// ============================================================================
// CORE TYPES
// ============================================================================

/// DocumentFormat - which backend reads the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
        }
    }

    /// Cargo feature that compiles the backend in
    pub fn feature(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    #[cfg_attr(all(feature = "pdf", feature = "docx"), allow(dead_code))]
    fn unavailable(&self) -> InsightError {
        InsightError::DependencyUnavailable {
            format: self.name(),
            feature: self.feature(),
        }
    }
}

/// TextLoader - turns one document into lines of text
pub trait TextLoader {
    fn load(&self, file_path: &Path) -> Result<Vec<String>>;

    fn format(&self) -> DocumentFormat;
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Detect format from the (case-insensitive) file extension
///
/// `.doc` goes to the DOCX backend.
pub fn detect_format(file_path: &Path) -> Result<DocumentFormat> {
    let extension = file_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => Ok(DocumentFormat::Pdf),
        "docx" | "doc" => Ok(DocumentFormat::Docx),
        _ => Err(InsightError::UnsupportedFormat {
            extension: if extension.is_empty() {
                String::new()
            } else {
                format!(".{}", extension)
            },
        }),
    }
}

pub fn get_loader(format: DocumentFormat) -> Box<dyn TextLoader> {
    match format {
        DocumentFormat::Pdf => Box::new(PdfLoader),
        DocumentFormat::Docx => Box::new(DocxLoader),
    }
}

/// Load a document as text lines
pub fn load(file_path: &Path) -> Result<Vec<String>> {
    let format = detect_format(file_path)?;
    let lines = get_loader(format).load(file_path)?;

    tracing::info!(
        path = %file_path.display(),
        format = format.name(),
        lines = lines.len(),
        "loaded document"
    );

    Ok(lines)
}

// ============================================================================
// PDF
// ============================================================================

pub struct PdfLoader;

impl TextLoader for PdfLoader {
    #[cfg(feature = "pdf")]
    fn load(&self, file_path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(file_path).map_err(|e| InsightError::io(file_path, e))?;

        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| InsightError::parse(file_path, format!("{:?}", e)))?;

        Ok(split_lines(&text))
    }

    #[cfg(not(feature = "pdf"))]
    fn load(&self, _file_path: &Path) -> Result<Vec<String>> {
        Err(self.format().unavailable())
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }
}

// ============================================================================
// DOCX
// ============================================================================

/// One line per paragraph; runs inside a paragraph are concatenated
pub struct DocxLoader;

impl TextLoader for DocxLoader {
    #[cfg(feature = "docx")]
    fn load(&self, file_path: &Path) -> Result<Vec<String>> {
        use docx_rs::DocumentChild;

        let bytes = std::fs::read(file_path).map_err(|e| InsightError::io(file_path, e))?;

        let docx = docx_rs::read_docx(&bytes)
            .map_err(|e| InsightError::parse(file_path, format!("{:?}", e)))?;

        let lines = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(lines)
    }

    #[cfg(not(feature = "docx"))]
    fn load(&self, _file_path: &Path) -> Result<Vec<String>> {
        Err(self.format().unavailable())
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }
}

#[cfg(feature = "docx")]
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    use docx_rs::{ParagraphChild, RunChild};

    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

// ============================================================================
// TESTS
// ============================================================================
