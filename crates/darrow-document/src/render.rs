// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Renderer capability — the seam between callers and the concrete DOCX/PDF
// encoders.

use darrow_core::error::Result;
use darrow_core::{DocumentSnapshot, FormattingProfile};
use serde::{Deserialize, Serialize};

/// Output formats the core can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Docx,
    Pdf,
}

impl ExportFormat {
    /// MIME type for uploads and downloads.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Pdf => "application/pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

/// Turns a document snapshot into a complete output buffer.
///
/// Implementations hold no per-call state: a render either returns the whole
/// document or an error, and concurrent calls never observe each other.
pub trait Renderer {
    fn format(&self) -> ExportFormat;

    fn render(&self, document: &DocumentSnapshot, profile: &FormattingProfile)
    -> Result<Vec<u8>>;
}

/// The renderer for `format`, with default settings.
pub fn renderer_for(format: ExportFormat) -> Box<dyn Renderer + Send + Sync> {
    match format {
        ExportFormat::Docx => Box::new(crate::docx::writer::DocxWriter::new()),
        ExportFormat::Pdf => Box::new(crate::pdf::writer::PdfWriter::a4()),
    }
}
