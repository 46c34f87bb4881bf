// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the people drafting documents.
//
// Each technical error maps to a plain-English message with a suggestion.
// Severity drives how the surrounding application presents it.

use crate::error::DarrowError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth trying again as-is.
    Transient,
    /// The user must change something (title, content, layout settings).
    ActionRequired,
}

/// A human-readable error with a plain English message and a suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether retrying the same request could succeed.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `DarrowError` into a `HumanError`.
pub fn humanize_error(err: &DarrowError) -> HumanError {
    match err {
        // -- Input errors --
        DarrowError::InvalidInput(detail) => HumanError {
            message: "Some document details are missing or invalid.".into(),
            suggestion: format!("Check the document and try again. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        DarrowError::UnknownDocumentType(kind) => HumanError {
            message: "That kind of document isn't available.".into(),
            suggestion: format!(
                "Choose a charter, SAFE, offer letter, stock purchase agreement, or board consent. (Requested: {kind})"
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Rendering errors --
        DarrowError::Docx(_) => HumanError {
            message: "We couldn't create the Word document.".into(),
            suggestion: "Try the PDF download instead, or try again in a moment.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        DarrowError::Pdf(_) => HumanError {
            message: "We couldn't create the PDF.".into(),
            suggestion: "Try the Word download instead, or try again in a moment.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        DarrowError::Geometry(detail) => HumanError {
            message: "The page layout settings don't fit on the page.".into(),
            suggestion: format!("Reduce the margins or choose a larger paper size. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        DarrowError::UnencodableText(ch) => HumanError {
            message: "The document contains a character the PDF font can't print.".into(),
            suggestion: format!(
                "Replace or remove the character {ch:?}, or download the Word version instead."
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Storage --
        DarrowError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path and try again."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "Darrow doesn't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or choose a different location."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "Something went wrong reading or writing a file.".into(),
                    suggestion: format!("Try again. ({io_err})"),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        DarrowError::Serialization(_) => HumanError {
            message: "A settings or document file is not valid JSON.".into(),
            suggestion: "Check the file for typos such as missing commas or quotes.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}
