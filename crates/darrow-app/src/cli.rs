// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use darrow_document::ExportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "darrow",
    version,
    about = "Fill, validate, and render legal documents to DOCX and PDF"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a document snapshot to DOCX and/or PDF.
    Render(RenderArgs),
    /// Print the compiled-in template for a document type.
    Template(TemplateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// JSON document snapshot: title, body, document_type.
    #[arg(long)]
    pub input: PathBuf,

    /// JSON formatting profile; defaults apply to missing fields.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// JSON object of placeholder values.
    #[arg(long)]
    pub values: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatChoice::Both)]
    pub format: FormatChoice,
}

#[derive(Args, Debug, Clone)]
pub struct TemplateArgs {
    /// Document type tag, e.g. `delaware_charter`.
    pub document_type: String,

    /// List the required placeholder fields instead of the template text.
    #[arg(long, default_value_t = false)]
    pub fields: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatChoice {
    Docx,
    Pdf,
    Both,
}

impl FormatChoice {
    pub fn formats(self) -> Vec<ExportFormat> {
        match self {
            Self::Docx => vec![ExportFormat::Docx],
            Self::Pdf => vec![ExportFormat::Pdf],
            Self::Both => vec![ExportFormat::Docx, ExportFormat::Pdf],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_arguments() {
        let cli = Cli::parse_from([
            "darrow", "render", "--input", "doc.json", "--format", "pdf", "--out-dir", "out",
        ]);
        let Commands::Render(args) = cli.command else {
            panic!("expected render subcommand");
        };
        assert_eq!(args.input, PathBuf::from("doc.json"));
        assert_eq!(args.format.formats(), vec![ExportFormat::Pdf]);
        assert_eq!(args.out_dir, PathBuf::from("out"));
        assert!(args.profile.is_none());
    }

    #[test]
    fn format_defaults_to_both() {
        let cli = Cli::parse_from(["darrow", "render", "--input", "doc.json"]);
        let Commands::Render(args) = cli.command else {
            panic!("expected render subcommand");
        };
        assert_eq!(args.format.formats().len(), 2);
    }

    #[test]
    fn parses_template_arguments() {
        let cli = Cli::parse_from(["darrow", "template", "safe_post", "--fields"]);
        let Commands::Template(args) = cli.command else {
            panic!("expected template subcommand");
        };
        assert_eq!(args.document_type, "safe_post");
        assert!(args.fields);
    }
}
