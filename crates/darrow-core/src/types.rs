// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Darrow document renderer.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DarrowError;

/// Twips per inch (1/20 of a point).
pub const TWIPS_PER_INCH: u32 = 1440;

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of legal documents Darrow knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Delaware Certificate of Incorporation.
    DelawareCharter,
    /// Post-money Simple Agreement for Future Equity.
    SafePost,
    /// Employment offer letter.
    OfferLetter,
    /// Restricted Stock Purchase Agreement.
    Rspa,
    /// Board or stockholder written consent.
    BoardConsent,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        Self::DelawareCharter,
        Self::SafePost,
        Self::OfferLetter,
        Self::Rspa,
        Self::BoardConsent,
    ];

    /// Stable snake-case tag, as stored by the surrounding application.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::DelawareCharter => "delaware_charter",
            Self::SafePost => "safe_post",
            Self::OfferLetter => "offer_letter",
            Self::Rspa => "rspa",
            Self::BoardConsent => "board_consent",
        }
    }

    /// Human-facing name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DelawareCharter => "Delaware Charter",
            Self::SafePost => "YC SAFE (Post-Money)",
            Self::OfferLetter => "Offer Letter",
            Self::Rspa => "Restricted Stock Purchase Agreement",
            Self::BoardConsent => "Board & Stockholder Consent",
        }
    }

    /// Subject line embedded in exported document metadata.
    pub fn subject(&self) -> String {
        match self {
            Self::OfferLetter => "Employment Offer Letter".to_owned(),
            other => format!("Legal Document - {}", other.tag()),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocumentType {
    type Err = DarrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.tag() == s.trim())
            .ok_or_else(|| DarrowError::UnknownDocumentType(s.to_owned()))
    }
}

/// Lifecycle states of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Created, not yet sent for generation.
    Draft,
    /// Generation in flight.
    Generating,
    /// Body generated and filled.
    Completed,
    /// Generation failed; see the document's error field.
    Error,
}

/// A document as owned by the surrounding application.
///
/// The rendering core never mutates or persists this; it consumes a
/// [`DocumentSnapshot`] taken at the start of each render call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub document_type: DocumentType,
    pub body: String,
    pub status: DocumentStatus,
    pub docx_url: Option<String>,
    pub pdf_url: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(title: impl Into<String>, document_type: DocumentType) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::new(),
            title: title.into(),
            document_type,
            body: String::new(),
            status: DocumentStatus::Draft,
            docx_url: None,
            pdf_url: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_generating(&mut self) {
        self.status = DocumentStatus::Generating;
        self.error_message = None;
        self.updated_at = Utc::now();
    }

    /// Store the generated body. Previously exported files are stale now.
    pub fn mark_completed(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.status = DocumentStatus::Completed;
        self.docx_url = None;
        self.pdf_url = None;
        self.updated_at = Utc::now();
    }

    pub fn mark_error(&mut self, message: impl Into<String>) {
        self.status = DocumentStatus::Error;
        self.error_message = Some(message.into());
        self.updated_at = Utc::now();
    }

    /// Immutable view consumed by a single render call.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            title: self.title.clone(),
            body: self.body.clone(),
            document_type: self.document_type,
            created_at: self.created_at,
        }
    }
}

/// The (title, body, type) tuple a render call works from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub title: String,
    pub body: String,
    #[serde(alias = "documentType")]
    pub document_type: DocumentType,
    #[serde(default = "Utc::now", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl DocumentSnapshot {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        document_type: DocumentType,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            document_type,
            created_at: Utc::now(),
        }
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    Letter,
    Legal,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::Letter => (215.9, 279.4),
            Self::Legal => (215.9, 355.6),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm as f32, *height_mm as f32),
        }
    }

    /// Dimensions in twips (width, height), as word processors expect them.
    pub fn dimensions_twips(&self) -> (u32, u32) {
        match self {
            Self::A4 => (11906, 16838),
            Self::Letter => (12240, 15840),
            Self::Legal => (12240, 20160),
            Self::Custom { .. } => {
                let (w, h) = self.dimensions_mm();
                (mm_to_twips(w), mm_to_twips(h))
            }
        }
    }

    /// Dimensions in PDF points (width, height).
    pub fn dimensions_pt(&self) -> (f32, f32) {
        let (w, h) = self.dimensions_twips();
        (w as f32 / 20.0, h as f32 / 20.0)
    }
}

fn mm_to_twips(mm: f32) -> u32 {
    (mm / 25.4 * TWIPS_PER_INCH as f32).round() as u32
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Legal-document default: one inch all round, 1.25 in on the binding edge.
    pub fn legal() -> Self {
        Self {
            top: TWIPS_PER_INCH,
            right: TWIPS_PER_INCH,
            bottom: TWIPS_PER_INCH,
            left: 1800,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::legal()
    }
}
