// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Formatting profile — the caller-supplied rendering configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DarrowError, Result};
use crate::types::{Margins, PaperSize};

/// Extra room reserved inside the top margin when a header is printed.
pub const HEADER_ALLOWANCE_TWIPS: u32 = 360;
/// Extra room reserved inside the bottom margin when a footer is printed.
pub const FOOTER_ALLOWANCE_TWIPS: u32 = 360;
/// Distance from the page edge to the header/footer block.
pub const HEADER_FOOTER_DISTANCE_TWIPS: u32 = 720;

/// Rendering knobs for one render call.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// profile. The core never reads ambient configuration; anything that
/// affects output goes through here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingProfile {
    pub paper_size: PaperSize,
    pub margins: Margins,
    pub font_family: String,
    /// Body font size in half-points (24 = 12 pt).
    pub font_size: usize,
    /// Line pitch in twips (480 = 24 pt).
    pub line_spacing: u32,
    #[serde(alias = "useHeaders")]
    pub use_headers: bool,
    #[serde(alias = "useFooters")]
    pub use_footers: bool,
    #[serde(alias = "pageNumbering")]
    pub page_numbering: bool,
    #[serde(alias = "caseTitle")]
    pub case_title: Option<String>,
    #[serde(alias = "courtName")]
    pub court_name: Option<String>,
    /// Upper-case the document title paragraph.
    pub uppercase_title: bool,
    pub table_style: TableStyle,
}

impl Default for FormattingProfile {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::Legal,
            margins: Margins::legal(),
            font_family: "Times New Roman".to_owned(),
            font_size: 24,
            line_spacing: 480,
            use_headers: false,
            use_footers: false,
            page_numbering: false,
            case_title: None,
            court_name: None,
            uppercase_title: true,
            table_style: TableStyle::default(),
        }
    }
}

impl FormattingProfile {
    /// Load a profile from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// True when the DOCX writer emits a footer part: a footer line, page
    /// numbers, or both.
    pub fn has_footer(&self) -> bool {
        self.use_footers || self.page_numbering
    }

    /// Margins after making room for enabled headers and footers.
    pub fn effective_margins(&self) -> Margins {
        let mut margins = self.margins;
        if self.use_headers {
            margins.top += HEADER_ALLOWANCE_TWIPS;
        }
        if self.has_footer() {
            margins.bottom += FOOTER_ALLOWANCE_TWIPS;
        }
        margins
    }

    /// Reject profiles that leave no printable area or no legible text.
    pub fn validate_geometry(&self) -> Result<()> {
        let (width, height) = self.paper_size.dimensions_twips();
        let margins = self.effective_margins();

        if width == 0 || height == 0 {
            return Err(DarrowError::Geometry(format!(
                "page size {width}x{height} twips has no area"
            )));
        }
        if margins.left + margins.right >= width {
            return Err(DarrowError::Geometry(format!(
                "horizontal margins ({} + {}) leave no room on a {} twip wide page",
                margins.left, margins.right, width
            )));
        }
        if margins.top + margins.bottom >= height {
            return Err(DarrowError::Geometry(format!(
                "vertical margins ({} + {}) leave no room on a {} twip tall page",
                margins.top, margins.bottom, height
            )));
        }
        if self.font_size == 0 || self.line_spacing == 0 {
            return Err(DarrowError::Geometry(
                "font size and line spacing must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Appearance of tables built by the DOCX writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    pub borders: bool,
    pub header_shading: bool,
    pub alternating_rows: bool,
    /// Table width as a percentage of the text column.
    pub width_percent: u8,
    pub header_fill: String,
    pub alternate_fill: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            borders: true,
            header_shading: true,
            alternating_rows: false,
            width_percent: 100,
            header_fill: "D9D9D9".to_owned(),
            alternate_fill: "F2F2F2".to_owned(),
        }
    }
}
