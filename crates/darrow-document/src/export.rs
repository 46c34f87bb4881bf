// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export — run each requested renderer on its own and name the results.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use darrow_core::error::Result;
use darrow_core::{DocumentSnapshot, FormattingProfile};
use tracing::{info, instrument, warn};

use crate::render::{ExportFormat, renderer_for};

/// A rendered file ready to be stored or downloaded.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// Write the file into `dir` under its export filename.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        info!(path = %path.display(), bytes = self.bytes.len(), "Wrote export");
        Ok(path)
    }
}

/// Result of one requested format.
#[derive(Debug)]
pub struct ExportOutcome {
    pub format: ExportFormat,
    pub result: Result<ExportedFile>,
}

impl ExportOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Render `document` once per entry in `formats`.
///
/// Every format is attempted regardless of earlier failures; the outcomes
/// come back in request order.
#[instrument(skip_all, fields(title = %document.title, formats = formats.len()))]
pub fn export_document(
    document: &DocumentSnapshot,
    profile: &FormattingProfile,
    formats: &[ExportFormat],
) -> Vec<ExportOutcome> {
    let date = document.created_at.date_naive();

    formats
        .iter()
        .map(|&format| {
            let result = renderer_for(format)
                .render(document, profile)
                .map(|bytes| ExportedFile {
                    filename: export_filename(&document.title, date, format),
                    mime_type: format.mime_type(),
                    bytes,
                });
            match &result {
                Ok(file) => info!(?format, filename = %file.filename, "Export succeeded"),
                Err(err) => warn!(?format, %err, "Export failed"),
            }
            ExportOutcome { format, result }
        })
        .collect()
}

/// `Board Consent` on 2026-10-17 as PDF becomes `Board_Consent_2026-10-17.pdf`.
pub fn export_filename(title: &str, date: NaiveDate, format: ExportFormat) -> String {
    let stem: String = title
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    format!("{stem}_{}.{}", date.format("%Y-%m-%d"), format.extension())
}
