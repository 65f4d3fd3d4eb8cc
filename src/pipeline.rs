//! End-to-end orchestration of a deduction run.
//!
//! Each stage is an explicit call so a presentation layer can stop after any
//! of them: show the dataset, then compute deductions for a chosen
//! threshold, then render. Nothing is cached between calls.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::calculation::calculate_deductions;
use crate::config::ConfigLoader;
use crate::dataset::DatasetBuilder;
use crate::error::{EngineError, EngineResult};
use crate::extract::{PdfTextExtractor, TextExtractor};
use crate::models::{Dataset, DeductionResult, Diagnostics};
use crate::parser::parse_records;
use crate::report::{ReportArtifact, render_report};

/// Number of characters of extracted text kept for display.
pub const TEXT_EXCERPT_CHARS: usize = 500;

/// A parsed input file: its dataset plus what was skipped along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedTimesheet {
    /// The accepted rows.
    pub dataset: Dataset,
    /// Line counts and rejected lines.
    pub diagnostics: Diagnostics,
    /// The start of the extracted text, for checking what the parser saw.
    pub text_excerpt: String,
}

/// Returns the first [`TEXT_EXCERPT_CHARS`] characters of `text`.
pub fn text_excerpt(text: &str) -> String {
    text.chars().take(TEXT_EXCERPT_CHARS).collect()
}

/// Parses extracted text and builds its dataset.
///
/// # Errors
///
/// Returns `EmptyDataset` if no line was accepted, however many were
/// rejected.
pub fn load_dataset(raw_text: &str, builder: &DatasetBuilder) -> EngineResult<LoadedTimesheet> {
    let parsed = parse_records(raw_text);
    let diagnostics = parsed.diagnostics();
    let text_excerpt = text_excerpt(raw_text);

    let dataset = builder
        .build(parsed.records, parsed.total_lines, parsed.rejected.len())
        .inspect_err(|_| {
            warn!(excerpt = %text_excerpt, "No records recovered from extracted text");
        })?;

    info!(
        total_lines = diagnostics.total_lines,
        accepted = diagnostics.accepted,
        rejected = diagnostics.rejected.len(),
        "Loaded timesheet"
    );

    Ok(LoadedTimesheet {
        dataset,
        diagnostics,
        text_excerpt,
    })
}

/// The configured stages of a deduction run.
#[derive(Clone)]
pub struct TimesheetPipeline {
    config: ConfigLoader,
    builder: DatasetBuilder,
    extractor: Arc<dyn TextExtractor>,
}

impl TimesheetPipeline {
    /// Creates a pipeline that reads PDF uploads with [`PdfTextExtractor`].
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        Self::with_extractor(config, Arc::new(PdfTextExtractor))
    }

    /// Creates a pipeline with a custom text extractor.
    pub fn with_extractor(
        config: ConfigLoader,
        extractor: Arc<dyn TextExtractor>,
    ) -> EngineResult<Self> {
        let builder = config.dataset_builder()?;
        Ok(Self {
            config,
            builder,
            extractor,
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Extracts text from an uploaded document.
    pub fn extract(&self, document: &[u8]) -> EngineResult<String> {
        self.extractor.extract_text(document).inspect_err(|err| {
            warn!(error = %err, "Text extraction failed");
        })
    }

    /// Extracts, parses and builds the dataset for an uploaded document.
    pub fn load_document(&self, document: &[u8]) -> EngineResult<LoadedTimesheet> {
        let text = self.extract(document)?;
        load_dataset(&text, &self.builder)
    }

    /// Parses already-extracted text and builds its dataset.
    pub fn load_text(&self, raw_text: &str) -> EngineResult<LoadedTimesheet> {
        load_dataset(raw_text, &self.builder)
    }

    /// Resolves a caller-supplied threshold against the configured default.
    pub fn threshold_or_default(&self, threshold_hours: Option<u32>) -> u32 {
        threshold_hours.unwrap_or_else(|| self.config.threshold_hours())
    }

    /// Computes deductions for every row.
    pub fn calculate(
        &self,
        dataset: &Dataset,
        threshold_hours: u32,
    ) -> EngineResult<Vec<DeductionResult>> {
        calculate_deductions(dataset, threshold_hours)
    }

    /// Loads a document and computes its deductions, stopping before render.
    ///
    /// The returned results can be rendered with [`render`](Self::render) as
    /// many times as needed.
    pub fn evaluate(
        &self,
        document: &[u8],
        threshold_hours: Option<u32>,
    ) -> EngineResult<Evaluation> {
        let timesheet = self.load_document(document)?;
        let threshold_hours = self.threshold_or_default(threshold_hours);
        let results = self.calculate(&timesheet.dataset, threshold_hours)?;

        Ok(Evaluation {
            diagnostics: timesheet.diagnostics,
            threshold_hours,
            results,
            text_excerpt: timesheet.text_excerpt,
        })
    }

    /// Renders results into a PDF report.
    ///
    /// On failure the results are untouched and can be rendered again.
    pub fn render(&self, results: &[DeductionResult]) -> EngineResult<ReportArtifact> {
        render_report(results).inspect_err(|err| {
            if let EngineError::RenderError { message } = err {
                warn!(error = %message, rows = results.len(), "Report rendering failed");
            }
        })
    }
}

/// The computed outcome of one document, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Line counts and rejected lines.
    pub diagnostics: Diagnostics,
    /// The threshold that was applied.
    pub threshold_hours: u32,
    /// One result per accepted row.
    pub results: Vec<DeductionResult>,
    /// The start of the extracted text.
    pub text_excerpt: String,
}
