// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF inspector — open rendered PDF buffers with `lopdf` to check pagination
// and page text.

use darrow_core::error::{DarrowError, Result};
use lopdf::{Document, Object};
use tracing::{debug, instrument};

/// Read-only view over an existing PDF.
pub struct PdfInspector {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfInspector {
    /// Create an inspector from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            DarrowError::Pdf(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");
        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Text drawn on a single page (1-indexed).
    pub fn page_text(&self, page_number: u32) -> Result<String> {
        let total = self.page_count();
        if page_number == 0 || page_number as usize > total {
            return Err(DarrowError::Pdf(format!(
                "page {} out of range (document has {} pages)",
                page_number, total
            )));
        }
        self.document
            .extract_text(&[page_number])
            .map_err(|err| DarrowError::Pdf(format!("cannot extract page {page_number}: {err}")))
    }

    /// `/Title` from the document information dictionary, if present.
    pub fn title(&self) -> Option<String> {
        self.info_string(b"Title")
    }

    pub fn author(&self) -> Option<String> {
        self.info_string(b"Author")
    }

    pub fn creator(&self) -> Option<String> {
        self.info_string(b"Creator")
    }

    pub fn producer(&self) -> Option<String> {
        self.info_string(b"Producer")
    }

    pub fn subject(&self) -> Option<String> {
        self.info_string(b"Subject")
    }

    fn info_string(&self, key: &[u8]) -> Option<String> {
        let info = match self.document.trailer.get(b"Info").ok()? {
            Object::Reference(id) => self.document.get_object(*id).ok()?,
            other => other,
        };
        let raw = info.as_dict().ok()?.get(key).ok()?.as_str().ok()?;
        Some(decode_pdf_string(raw))
    }
}

/// Decode a PDF text string: UTF-16BE with a byte-order mark, then UTF-8,
/// then Latin-1.
fn decode_pdf_string(raw: &[u8]) -> String {
    match raw {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        _ => match std::str::from_utf8(raw) {
            Ok(text) => text.to_owned(),
            Err(_) => raw.iter().map(|&b| b as char).collect(),
        },
    }
}
