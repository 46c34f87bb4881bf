// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Darrow.

use thiserror::Error;

/// Top-level error type for all Darrow operations.
///
/// Advisory findings (validation reports, pre-flight option checks) are
/// returned as plain values and never appear here. Everything in this enum
/// aborts the call that produced it.
#[derive(Debug, Error)]
pub enum DarrowError {
    // -- Input errors --
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    // -- Rendering errors --
    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("invalid page geometry: {0}")]
    Geometry(String),

    #[error("text cannot be encoded in the PDF base font: {0:?}")]
    UnencodableText(char),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DarrowError>;
