// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DOCX writer — converts classified segments into a paginated OOXML document
// using `docx-rs`.
//
// `docx-rs` uses a consuming builder: every `add_*` call takes the document
// by value and hands it back, and `build().pack()` zips the parts into any
// `Write + Seek` sink.

use std::io::Cursor;
use std::sync::LazyLock;

use darrow_core::error::{DarrowError, Result};
use darrow_core::{DocumentSnapshot, DocumentType, FormattingProfile};
use darrow_core::config::HEADER_FOOTER_DISTANCE_TWIPS;
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, Footer, Header, Level, LevelJc,
    LevelText, LineSpacing, NumPages, NumberFormat, Numbering, PageMargin, PageNum, Paragraph,
    Run, RunFonts, SpecialIndentType, Start,
};
use regex::Regex;
use tracing::{debug, info, instrument};

use crate::docx::table::legal_table;
use crate::render::{ExportFormat, Renderer};
use crate::segment::{Segment, SegmentKind, segment_document};

/// `**bold**` spans inside body text.
static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").expect("bold span pattern is valid"));
/// "1." style numbered clauses.
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("numbered pattern is valid"));
/// "(a)" style lettered sub-clauses.
static LETTERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([a-z]\)").expect("lettered pattern is valid"));

/// Numbering definition id declared on every document.
const LEGAL_NUMBERING_ID: usize = 1;

const TITLE_SIZE: usize = 28;
const HEADER_FOOTER_SIZE: usize = 20;
const HANGING_INDENT: i32 = 360;
const LETTER_INDENT: i32 = 360;
const BLOCK_INDENT: i32 = 720;

/// Creates word-processing documents from document snapshots.
pub struct DocxWriter {
    /// Text appended after the case title in the footer.
    confidentiality_suffix: String,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxWriter {
    pub fn new() -> Self {
        Self {
            confidentiality_suffix: "Confidential".to_owned(),
        }
    }

    pub fn set_confidentiality_suffix(&mut self, suffix: impl Into<String>) {
        self.confidentiality_suffix = suffix.into();
    }

    /// Render `document` to DOCX bytes.
    ///
    /// Fails with [`DarrowError::Geometry`] before any work if the profile's
    /// page geometry is unusable, and with [`DarrowError::Docx`] if packing
    /// the archive fails. No partial buffer is ever returned.
    #[instrument(skip_all, fields(title = %document.title, doc_type = %document.document_type))]
    pub fn create_document(
        &self,
        document: &DocumentSnapshot,
        profile: &FormattingProfile,
    ) -> Result<Vec<u8>> {
        let docx = self.compose(document, profile)?;

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|err| DarrowError::Docx(format!("failed to package document: {err}")))?;
        let output = cursor.into_inner();

        debug!(bytes = output.len(), "DOCX packaged");
        Ok(output)
    }

    /// Build the document tree: page setup, header, footer, title and one
    /// block per segment.
    fn compose(&self, document: &DocumentSnapshot, profile: &FormattingProfile) -> Result<Docx> {
        profile.validate_geometry()?;
        info!(paper = ?profile.paper_size, "Creating DOCX");

        let body = strip_html_tags(&document.body);
        let segments = segment_document(&body, document.document_type);

        let (width, height) = profile.paper_size.dimensions_twips();
        let margins = profile.effective_margins();
        let mut docx = Docx::new()
            .page_size(width, height)
            .page_margin(
                PageMargin::new()
                    .top(margins.top as i32)
                    .right(margins.right as i32)
                    .bottom(margins.bottom as i32)
                    .left(margins.left as i32)
                    .header(HEADER_FOOTER_DISTANCE_TWIPS as i32)
                    .footer(HEADER_FOOTER_DISTANCE_TWIPS as i32),
            )
            .default_fonts(fonts(&profile.font_family))
            .default_size(profile.font_size)
            .add_abstract_numbering(legal_numbering())
            .add_numbering(Numbering::new(LEGAL_NUMBERING_ID, LEGAL_NUMBERING_ID));

        if profile.use_headers {
            docx = docx.header(self.header(document.document_type, profile));
        }
        if profile.has_footer() {
            docx = docx.footer(self.footer(profile));
        }

        docx = docx.add_paragraph(title_paragraph(&document.title, profile));

        let mut paragraphs = 1usize;
        let mut tables = 0usize;
        for segment in &segments {
            if segment.page_break_before {
                docx = docx.add_paragraph(page_break());
                paragraphs += 1;
            }
            match &segment.kind {
                SegmentKind::Heading { centered, all_caps } => {
                    docx = docx.add_paragraph(heading_paragraph(segment, *centered, *all_caps, profile));
                    paragraphs += 1;
                }
                SegmentKind::Signature => {
                    docx = docx.add_paragraph(signature_paragraph(&segment.lines, profile));
                    paragraphs += 1;
                }
                SegmentKind::Body { indented } => {
                    docx = docx.add_paragraph(legal_paragraph(&segment.text(), *indented, profile));
                    paragraphs += 1;
                }
                SegmentKind::Table(data) => {
                    docx = docx.add_table(legal_table(
                        data,
                        &profile.table_style,
                        &profile.font_family,
                        profile.font_size,
                    ));
                    tables += 1;
                }
            }
        }

        debug!(
            segments = segments.len(),
            paragraphs,
            tables,
            "DOCX layout complete"
        );
        Ok(docx)
    }

    fn header(&self, document_type: DocumentType, profile: &FormattingProfile) -> Header {
        let label = profile
            .court_name
            .as_deref()
            .unwrap_or_else(|| document_type.display_name());

        let mut header = Header::new();
        if let Some(case_title) = &profile.case_title {
            header = header.add_paragraph(
                Paragraph::new()
                    .add_run(small_run(case_title, profile).bold())
                    .align(AlignmentType::Center),
            );
        }
        header.add_paragraph(
            Paragraph::new()
                .add_run(small_run(&label.to_uppercase(), profile))
                .align(AlignmentType::Center),
        )
    }

    fn footer(&self, profile: &FormattingProfile) -> Footer {
        let mut numbers = Paragraph::new()
            .add_run(small_run("Page ", profile))
            .add_page_num(PageNum::new());
        if profile.page_numbering {
            numbers = numbers
                .add_run(small_run(" of ", profile))
                .add_num_pages(NumPages::new());
        }

        let mut footer = Footer::new().add_paragraph(numbers.align(AlignmentType::Center));
        if profile.use_footers {
            if let Some(case_title) = &profile.case_title {
                footer = footer.add_paragraph(
                    Paragraph::new()
                        .add_run(small_run(
                            &format!("{case_title} - {}", self.confidentiality_suffix),
                            profile,
                        ))
                        .align(AlignmentType::Center),
                );
            }
        }
        footer
    }
}

impl Renderer for DocxWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }

    fn render(&self, document: &DocumentSnapshot, profile: &FormattingProfile) -> Result<Vec<u8>> {
        self.create_document(document, profile)
    }
}

// -- Paragraph builders -------------------------------------------------------

fn fonts(family: &str) -> RunFonts {
    RunFonts::new().ascii(family).hi_ansi(family).cs(family)
}

fn text_run(text: &str, profile: &FormattingProfile) -> Run {
    Run::new()
        .add_text(text)
        .size(profile.font_size)
        .fonts(fonts(&profile.font_family))
}

fn small_run(text: &str, profile: &FormattingProfile) -> Run {
    Run::new()
        .add_text(text)
        .size(HEADER_FOOTER_SIZE)
        .fonts(fonts(&profile.font_family))
}

fn title_paragraph(title: &str, profile: &FormattingProfile) -> Paragraph {
    let text = if profile.uppercase_title {
        title.to_uppercase()
    } else {
        title.to_owned()
    };
    Paragraph::new()
        .add_run(
            Run::new()
                .add_text(text)
                .bold()
                .size(TITLE_SIZE)
                .fonts(fonts(&profile.font_family)),
        )
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().before(0).after(480))
}

fn heading_paragraph(
    segment: &Segment,
    centered: bool,
    all_caps: bool,
    profile: &FormattingProfile,
) -> Paragraph {
    let line = segment.lines.first().map(String::as_str).unwrap_or_default();
    let text = strip_bold_markers(line);
    let text = if all_caps { text.to_uppercase() } else { text };

    let (alignment, before) = if centered {
        (AlignmentType::Center, 0)
    } else {
        (AlignmentType::Left, 240)
    };

    Paragraph::new()
        .add_run(text_run(&text, profile).bold())
        .align(alignment)
        .line_spacing(LineSpacing::new().before(before).after(240))
}

/// Each line becomes its own run; "Date:" fields get a rule to sign on.
fn signature_paragraph(lines: &[String], profile: &FormattingProfile) -> Paragraph {
    let mut paragraph = Paragraph::new();
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            paragraph = paragraph.add_run(Run::new().add_break(BreakType::TextWrapping));
        }
        let text = if line.contains("Date:") {
            line.replace("Date:", "Date: _______________")
        } else {
            line.clone()
        };
        paragraph = paragraph.add_run(text_run(&text, profile));
    }
    paragraph
        .align(AlignmentType::Left)
        .line_spacing(LineSpacing::new().before(480).after(240))
}

/// Justified body paragraph with inline bold spans and clause indentation.
fn legal_paragraph(text: &str, indented: bool, profile: &FormattingProfile) -> Paragraph {
    let trimmed = text.trim();
    let numbered = NUMBERED.is_match(trimmed);
    let lettered = LETTERED.is_match(trimmed);
    let bold_lead = trimmed.starts_with("**");

    let mut paragraph = Paragraph::new();
    for run in formatted_runs(text, profile) {
        paragraph = paragraph.add_run(run);
    }

    let spacing = if bold_lead {
        LineSpacing::new().before(200).after(200)
    } else {
        LineSpacing::new().before(0).after(120)
    };
    paragraph = paragraph
        .line_spacing(spacing.line(profile.line_spacing as i32))
        .align(if bold_lead {
            AlignmentType::Left
        } else {
            AlignmentType::Both
        });

    let left = if indented {
        BLOCK_INDENT
    } else if lettered {
        LETTER_INDENT
    } else {
        0
    };
    let hanging = numbered.then_some(SpecialIndentType::Hanging(HANGING_INDENT));
    if left > 0 || hanging.is_some() {
        paragraph = paragraph.indent(Some(left), hanging, None, None);
    }
    paragraph
}

/// Split `text` on `**bold**` spans into alternating plain and bold runs.
/// Whitespace-only gaps between spans are dropped.
fn formatted_runs(text: &str, profile: &FormattingProfile) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut cursor = 0;

    for span in BOLD_SPAN.find_iter(text) {
        let plain = &text[cursor..span.start()];
        if !plain.trim().is_empty() {
            runs.push(text_run(plain, profile));
        }
        let inner = &span.as_str()[2..span.as_str().len() - 2];
        runs.push(text_run(inner, profile).bold());
        cursor = span.end();
    }

    let tail = &text[cursor..];
    if !tail.trim().is_empty() {
        runs.push(text_run(tail, profile));
    }

    if runs.is_empty() {
        runs.push(text_run(text, profile));
    }
    runs
}

fn page_break() -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_break(BreakType::Page))
        .line_spacing(LineSpacing::new().after(240))
}

/// Decimal, "(a)", and lower-roman levels for manually numbered clauses.
fn legal_numbering() -> AbstractNumbering {
    let levels = [
        (0usize, "decimal", "%1.", 720),
        (1, "lowerLetter", "(%2)", 1440),
        (2, "lowerRoman", "%3.", 2160),
    ];
    levels.into_iter().fold(
        AbstractNumbering::new(LEGAL_NUMBERING_ID),
        |numbering, (level, format, text, left)| {
            numbering.add_level(
                Level::new(
                    level,
                    Start::new(1),
                    NumberFormat::new(format),
                    LevelText::new(text),
                    LevelJc::new("left"),
                )
                .indent(
                    Some(left),
                    Some(SpecialIndentType::Hanging(HANGING_INDENT)),
                    None,
                    None,
                ),
            )
        },
    )
}

fn strip_bold_markers(line: &str) -> String {
    line.replace("**", "").trim().to_owned()
}

/// Drop anything that looks like an HTML tag; editors sometimes leave them.
fn strip_html_tags(text: &str) -> String {
    static TAG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
    TAG.replace_all(text, "").into_owned()
}
