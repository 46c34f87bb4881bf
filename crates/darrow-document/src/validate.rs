// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Validators — structural checks on filled document bodies and pre-flight
// checks on render inputs. Findings are advisory: they are returned as
// messages, never raised as errors.

use darrow_core::DocumentType;
use serde::Serialize;
use tracing::{instrument, warn};

use crate::fill::{PlaceholderFiller, remaining_placeholders};

/// Minimum trimmed body length, in characters.
pub const MIN_BODY_CHARS: usize = 500;
/// Longest accepted document title, in characters.
pub const MAX_TITLE_CHARS: usize = 255;

pub const TOO_SHORT: &str = "Generated document appears to be too short";
pub const EMPTY_SECTIONS: &str = "Document contains empty sections";
pub const SAFE_TERMINOLOGY: &str = "SAFE document must contain SAFE terminology";
pub const CHARTER_LANGUAGE: &str = "Delaware charter must contain proper legal language";

/// Outcome of a validation pass. Serialises as `{ "isValid", "errors" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check a filled body against the structural rules for its type.
pub fn validate_document(document_type: DocumentType, body: &str) -> ValidationReport {
    let mut errors = Vec::new();

    if body.trim().chars().count() < MIN_BODY_CHARS {
        errors.push(TOO_SHORT.to_owned());
    }

    if body.contains("\n\n\n\n") {
        errors.push(EMPTY_SECTIONS.to_owned());
    }

    match document_type {
        DocumentType::SafePost => {
            if !body.contains("SAFE") && !body.contains("Simple Agreement") {
                errors.push(SAFE_TERMINOLOGY.to_owned());
            }
        }
        DocumentType::DelawareCharter => {
            if !body.contains("Delaware") || !body.contains("Certificate of Incorporation") {
                errors.push(CHARTER_LANGUAGE.to_owned());
            }
        }
        DocumentType::OfferLetter | DocumentType::Rspa | DocumentType::BoardConsent => {}
    }

    ValidationReport::from_errors(errors)
}

/// Auto-fill whatever placeholders the generator left behind, then validate
/// the filled content. Returns the report together with the filled body,
/// which callers may use even when the report is not valid.
#[instrument(skip(filler, generated), fields(generated_len = generated.len()))]
pub fn validate_generated_document(
    filler: &PlaceholderFiller,
    document_type: DocumentType,
    generated: &str,
) -> (ValidationReport, String) {
    let filled = filler.fill_unfilled(generated);

    let leftover = remaining_placeholders(&filled);
    if !leftover.is_empty() {
        warn!(?leftover, "Some placeholders could not be auto-filled");
    }

    let report = validate_document(document_type, &filled);
    if !report.is_valid {
        warn!(errors = ?report.errors, "Generated document failed validation");
    }

    (report, filled)
}

/// Pre-flight check of render inputs.
pub fn validate_render_options(title: &str, content: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push("Document title is required".to_owned());
    }
    if content.trim().is_empty() {
        errors.push("Document content is required".to_owned());
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        errors.push(format!(
            "Document title is too long (max {MAX_TITLE_CHARS} characters)"
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn padded(seed: &str, len: usize) -> String {
        let mut body = seed.to_owned();
        while body.chars().count() < len {
            body.push('x');
        }
        body.truncate(len);
        body
    }

    #[test]
    fn too_short_boundary() {
        let short = validate_document(DocumentType::Rspa, &padded("Agreement ", 499));
        assert!(short.errors.iter().any(|e| e == TOO_SHORT));

        let ok = validate_document(DocumentType::Rspa, &padded("Agreement ", 500));
        assert!(ok.is_valid, "{:?}", ok.errors);
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let body = format!("   {}   ", padded("a", 499));
        let report = validate_document(DocumentType::Rspa, &body);
        assert_eq!(report.errors, vec![TOO_SHORT.to_owned()]);
    }

    #[test]
    fn four_newlines_flag_empty_sections() {
        let body = padded("Intro\n\n\n\nMore", 600);
        let report = validate_document(DocumentType::BoardConsent, &body);
        assert_eq!(report.errors, vec![EMPTY_SECTIONS.to_owned()]);

        let body = padded("Intro\n\n\nMore", 600);
        assert!(validate_document(DocumentType::BoardConsent, &body).is_valid);
    }

    #[test]
    fn safe_needs_terminology() {
        let body = padded("Investment agreement ", 600);
        let report = validate_document(DocumentType::SafePost, &body);
        assert_eq!(report.errors, vec![SAFE_TERMINOLOGY.to_owned()]);

        let with_acronym = padded("This SAFE ", 600);
        assert!(validate_document(DocumentType::SafePost, &with_acronym).is_valid);

        let with_phrase = padded("A Simple Agreement ", 600);
        assert!(validate_document(DocumentType::SafePost, &with_phrase).is_valid);
    }

    #[test]
    fn charter_needs_both_phrases() {
        let only_state = padded("Delaware ", 600);
        let report = validate_document(DocumentType::DelawareCharter, &only_state);
        assert_eq!(report.errors, vec![CHARTER_LANGUAGE.to_owned()]);

        let both = padded("Delaware Certificate of Incorporation ", 600);
        assert!(validate_document(DocumentType::DelawareCharter, &both).is_valid);
    }

    #[test]
    fn generated_document_is_filled_before_validation() {
        let filler = PlaceholderFiller::for_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        let body = padded("This SAFE is dated {{DATE}} for {{INVESTOR_NAME}}. ", 600);

        let (report, filled) =
            validate_generated_document(&filler, DocumentType::SafePost, &body);
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(filled.contains("January 5, 2026"));
        assert!(filled.contains("[INVESTOR_NAME]"));
        assert!(remaining_placeholders(&filled).is_empty());
    }

    #[test]
    fn report_serialises_camel_case() {
        let report = validate_document(DocumentType::Rspa, "short");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["isValid"], serde_json::Value::Bool(false));
        assert_eq!(json["errors"][0], TOO_SHORT);
    }

    #[test]
    fn render_options_preflight() {
        assert!(validate_render_options("Charter", "Body").is_empty());

        let errors = validate_render_options("  ", "");
        assert_eq!(
            errors,
            vec![
                "Document title is required".to_owned(),
                "Document content is required".to_owned()
            ]
        );

        let long_title = "T".repeat(256);
        let errors = validate_render_options(&long_title, "Body");
        assert_eq!(
            errors,
            vec!["Document title is too long (max 255 characters)".to_owned()]
        );
    }
}
