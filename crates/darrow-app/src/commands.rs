// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Subcommand handlers. `render` returns a per-format summary; the binary exits
// non-zero only when every requested format failed.

use std::collections::HashMap;
use std::path::Path;

use darrow_core::error::{DarrowError, Result};
use darrow_core::human_errors::humanize_error;
use darrow_core::{DocumentSnapshot, DocumentType, FormattingProfile};
use darrow_document::templates::{required_fields, template_for};
use darrow_document::validate::validate_render_options;
use darrow_document::{PlaceholderFiller, export_document, validate_generated_document};
use tracing::{info, warn};

use crate::cli::{RenderArgs, TemplateArgs};

/// Outcome of `darrow render`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub written: usize,
    pub failed: usize,
}

impl RenderSummary {
    /// True when every requested format failed.
    pub fn all_failed(&self) -> bool {
        self.written == 0 && self.failed > 0
    }
}

pub fn render(args: &RenderArgs) -> Result<RenderSummary> {
    let mut snapshot: DocumentSnapshot = read_json(&args.input)?;
    let profile = match &args.profile {
        Some(path) => FormattingProfile::from_json_file(path)?,
        None => FormattingProfile::default(),
    };
    let values: HashMap<String, String> = match &args.values {
        Some(path) => read_json(path)?,
        None => HashMap::new(),
    };

    let filler = PlaceholderFiller::new();
    let filled = filler.fill(&snapshot.body, &values);
    let (report, body) = validate_generated_document(&filler, snapshot.document_type, &filled);
    for message in &report.errors {
        warn!(%message, "Validation");
    }
    snapshot.body = body;

    let problems = validate_render_options(&snapshot.title, &snapshot.body);
    if !problems.is_empty() {
        return Err(DarrowError::InvalidInput(problems.join("; ")));
    }

    std::fs::create_dir_all(&args.out_dir)?;

    let mut summary = RenderSummary::default();
    for outcome in export_document(&snapshot, &profile, &args.format.formats()) {
        match outcome.result.and_then(|file| file.write_to(&args.out_dir)) {
            Ok(path) => {
                println!("{}", path.display());
                summary.written += 1;
            }
            Err(err) => {
                let human = humanize_error(&err);
                eprintln!(
                    "{} export failed: {} {}",
                    outcome.format.extension(),
                    human.message,
                    human.suggestion
                );
                summary.failed += 1;
            }
        }
    }

    info!(written = summary.written, failed = summary.failed, "Render finished");
    Ok(summary)
}

pub fn template(args: &TemplateArgs) -> Result<()> {
    let document_type: DocumentType = args.document_type.parse()?;
    if args.fields {
        for field in required_fields(document_type) {
            println!("{field}");
        }
    } else {
        println!("{}", template_for(document_type));
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
