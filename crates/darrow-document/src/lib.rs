// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// darrow-document — the document rendering core.
//
// Fills `{{PLACEHOLDER}}` templates, validates the filled body, splits it into
// classified segments (heading / body / signature / table), and renders those
// segments to DOCX (`docx-rs`) or PDF (`printpdf`). Every render is a pure
// function of the document snapshot and the formatting profile.

pub mod docx;
pub mod export;
pub mod fill;
pub mod pdf;
pub mod render;
pub mod segment;
pub mod templates;
pub mod validate;

// Re-export the primary structs so callers can use `darrow_document::PdfWriter` etc.
pub use docx::writer::DocxWriter;
pub use export::{ExportOutcome, ExportedFile, export_document};
pub use fill::PlaceholderFiller;
pub use pdf::inspect::PdfInspector;
pub use pdf::writer::PdfWriter;
pub use render::{ExportFormat, Renderer};
pub use segment::{Segment, SegmentKind, segment_document};
pub use validate::{ValidationReport, validate_document, validate_generated_document};
