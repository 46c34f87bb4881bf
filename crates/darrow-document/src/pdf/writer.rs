// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — lays out a document snapshot on fixed-size pages using
// `printpdf` 0.8 and the standard Times faces.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Positions are in points from the bottom-left corner.

use std::sync::LazyLock;

use darrow_core::error::Result;
use darrow_core::{DocumentSnapshot, FormattingProfile, PaperSize};
use printpdf::{
    BuiltinFont, Color, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt,
    Rgb, TextItem,
};
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::pdf::metrics::{normalize_for_pdf, text_width};
use crate::render::{ExportFormat, Renderer};
use crate::segment::{Segment, SegmentKind, Segmenter, is_centered_heading};

const MARGIN: f32 = 50.0;
const TITLE_SIZE: f32 = 18.0;
const TITLE_GAP: f32 = 20.0;
const BODY_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 14.0;
const HEADING_SIZE: f32 = 14.0;
const HEADING_LINE_HEIGHT: f32 = 18.0;
const PARAGRAPH_GAP: f32 = 8.0;
const BLOCK_INDENT: f32 = 36.0;
const FOOTER_SIZE: f32 = 10.0;
const FOOTER_Y: f32 = 30.0;
const FOOTER_GRAY: f32 = 0.5;

const DEFAULT_METADATA: &str = "Darrow";

static BLOCK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h[1-6][^>]*>").expect("heading tag pattern is valid"));
static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</h[1-6]>|<p[^>]*>|</p>|<br\s*/?>").expect("block tag pattern is valid")
});
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Creates fixed-layout PDF documents from document snapshots.
///
/// Page geometry is fixed per writer (A4 by default); the formatting profile
/// only affects the DOCX output.
pub struct PdfWriter {
    /// Paper size for page creation.
    paper_size: PaperSize,
    author: Option<String>,
    creator: Option<String>,
    producer: Option<String>,
}

impl PdfWriter {
    /// Create a new writer targeting the given paper size.
    pub fn new(paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            author: None,
            creator: None,
            producer: None,
        }
    }

    /// Create a new writer defaulting to A4.
    pub fn a4() -> Self {
        Self::new(PaperSize::A4)
    }

    pub fn set_paper_size(&mut self, paper_size: PaperSize) {
        self.paper_size = paper_size;
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = Some(author.into());
    }

    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.creator = Some(creator.into());
    }

    pub fn set_producer(&mut self, producer: impl Into<String>) {
        self.producer = Some(producer.into());
    }

    /// Render `document` to PDF bytes.
    ///
    /// Text that the standard fonts cannot encode aborts the whole render
    /// with [`darrow_core::DarrowError::UnencodableText`].
    #[instrument(skip_all, fields(title = %document.title, doc_type = %document.document_type))]
    pub fn create_document(&self, document: &DocumentSnapshot) -> Result<Vec<u8>> {
        let (page_w, page_h) = self.paper_size.dimensions_mm();
        let (page_w, page_h) = (Mm(page_w), Mm(page_h));
        info!(paper = ?self.paper_size, "Creating PDF");

        let pages = self.layout(document)?;
        let total = pages.len();

        let mut doc = PdfDocument::new(&document.title);
        doc.metadata.info.author =
            self.author.clone().unwrap_or_else(|| DEFAULT_METADATA.to_owned());
        doc.metadata.info.creator =
            self.creator.clone().unwrap_or_else(|| DEFAULT_METADATA.to_owned());
        doc.metadata.info.producer =
            self.producer.clone().unwrap_or_else(|| DEFAULT_METADATA.to_owned());
        doc.metadata.info.subject = document.document_type.subject();

        let pdf_pages: Vec<PdfPage> = pages
            .into_iter()
            .map(|ops| PdfPage::new(page_w, page_h, ops))
            .collect();
        doc.with_pages(pdf_pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "printpdf reported warnings while saving");
        }

        debug!(pages = total, bytes = output.len(), "PDF saved");
        Ok(output)
    }

    /// Lay `document` out into per-page drawing operations, footers included.
    fn layout(&self, document: &DocumentSnapshot) -> Result<Vec<Vec<Op>>> {
        let (page_w, page_h) = self.paper_size.dimensions_mm();
        let (page_w, page_h) = (Mm(page_w).into_pt().0, Mm(page_h).into_pt().0);

        let title = normalize_for_pdf(document.title.trim())?.to_uppercase();
        let content = normalize_for_pdf(&clean_html(&document.body))?;
        let segments = Segmenter::new(None)
            .without_markdown_headings()
            .whole_paragraph_headings()
            .segment(&content);

        let mut layout = PageLayout::new(page_w, page_h);
        layout.title(&title);
        for segment in &segments {
            layout.segment(segment);
        }
        let mut pages = layout.finish();

        let total = pages.len();
        for (idx, ops) in pages.iter_mut().enumerate() {
            let footer = format!("Page {} of {}", idx + 1, total);
            let width = text_width(&footer, BuiltinFont::TimesRoman, FOOTER_SIZE);
            let x = (page_w - width) / 2.0;
            ops.push(Op::SetFillColor {
                col: Color::Rgb(Rgb {
                    r: FOOTER_GRAY,
                    g: FOOTER_GRAY,
                    b: FOOTER_GRAY,
                    icc_profile: None,
                }),
            });
            push_text(ops, &footer, x, FOOTER_Y, BuiltinFont::TimesRoman, FOOTER_SIZE);
        }

        debug!(segments = segments.len(), pages = total, "PDF layout complete");
        Ok(pages)
    }
}

impl Renderer for PdfWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, document: &DocumentSnapshot, _profile: &FormattingProfile) -> Result<Vec<u8>> {
        self.create_document(document)
    }
}

// -- Layout -------------------------------------------------------------------

/// Running vertical cursor over a growing list of pages.
struct PageLayout {
    page_w: f32,
    page_h: f32,
    pages: Vec<Vec<Op>>,
    current: Vec<Op>,
    cursor_y: f32,
}

impl PageLayout {
    fn new(page_w: f32, page_h: f32) -> Self {
        Self {
            page_w,
            page_h,
            pages: Vec::new(),
            current: Vec::new(),
            cursor_y: page_h - MARGIN,
        }
    }

    fn content_width(&self) -> f32 {
        self.page_w - 2.0 * MARGIN
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor_y = self.page_h - MARGIN;
    }

    /// Start a new page if `height` more points would cross the bottom margin.
    fn ensure_room(&mut self, height: f32) {
        if self.cursor_y - height < MARGIN {
            self.new_page();
        }
    }

    fn line(&mut self, text: &str, x: f32, font: BuiltinFont, size: f32, advance: f32) {
        self.ensure_room(advance);
        push_text(&mut self.current, text, x, self.cursor_y, font, size);
        self.cursor_y -= advance;
    }

    fn centered_x(&self, text: &str, font: BuiltinFont, size: f32) -> f32 {
        let width = text_width(text, font, size);
        (MARGIN + (self.content_width() - width) / 2.0).max(MARGIN)
    }

    fn title(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        self.ensure_room(TITLE_SIZE + TITLE_GAP);
        let lines = wrap_text(title, BuiltinFont::TimesBold, TITLE_SIZE, self.content_width());
        let last = lines.len().saturating_sub(1);
        for (idx, line) in lines.iter().enumerate() {
            let x = self.centered_x(line, BuiltinFont::TimesBold, TITLE_SIZE);
            let advance = if idx == last {
                TITLE_SIZE + TITLE_GAP
            } else {
                TITLE_SIZE + 4.0
            };
            self.line(line, x, BuiltinFont::TimesBold, TITLE_SIZE, advance);
        }
    }

    fn segment(&mut self, segment: &Segment) {
        if segment.page_break_before && !self.current.is_empty() {
            self.new_page();
        }

        match &segment.kind {
            SegmentKind::Heading { .. } => {
                let centered = segment.lines.iter().any(|line| is_centered_heading(line));
                for line in &segment.lines {
                    let text = strip_bold_markers(line);
                    self.paragraph(
                        &text,
                        BuiltinFont::TimesBold,
                        HEADING_SIZE,
                        HEADING_LINE_HEIGHT,
                        0.0,
                        centered,
                    );
                }
            }
            SegmentKind::Body { indented } => {
                let indent = if *indented { BLOCK_INDENT } else { 0.0 };
                let text = strip_bold_markers(&segment.text());
                self.body(&text, BuiltinFont::TimesRoman, indent);
            }
            SegmentKind::Signature => {
                for line in &segment.lines {
                    let text = strip_bold_markers(line);
                    self.body(&text, BuiltinFont::TimesRoman, 0.0);
                }
            }
            SegmentKind::Table(data) => {
                if !data.headers.is_empty() {
                    self.body(&data.headers.join("  "), BuiltinFont::TimesBold, 0.0);
                }
                for row in &data.rows {
                    self.body(&row.join("  "), BuiltinFont::TimesRoman, 0.0);
                }
            }
        }

        self.cursor_y -= PARAGRAPH_GAP;
    }

    fn body(&mut self, text: &str, font: BuiltinFont, indent: f32) {
        self.paragraph(text, font, BODY_SIZE, LINE_HEIGHT, indent, false);
    }

    /// Greedy-wrap `text` and draw it line by line.
    fn paragraph(
        &mut self,
        text: &str,
        font: BuiltinFont,
        size: f32,
        line_height: f32,
        indent: f32,
        centered: bool,
    ) {
        let width = self.content_width() - indent;
        for line in wrap_text(text, font, size, width) {
            let x = if centered {
                self.centered_x(&line, font, size)
            } else {
                MARGIN + indent
            };
            self.line(&line, x, font, size, line_height);
        }
    }

    fn finish(mut self) -> Vec<Vec<Op>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

fn push_text(ops: &mut Vec<Op>, text: &str, x: f32, y: f32, font: BuiltinFont, size: f32) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point { x: Pt(x), y: Pt(y) },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(size),
        font,
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_owned())],
        font,
    });
    ops.push(Op::EndTextSection);
}

// -- Text helpers -------------------------------------------------------------

/// Greedy word wrap by measured width. Words wider than `max_width` are
/// broken at character boundaries.
fn wrap_text(text: &str, font: BuiltinFont, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, font, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if text_width(word, font, size) <= max_width {
            current = word.to_owned();
            continue;
        }

        for ch in word.chars() {
            current.push(ch);
            if text_width(&current, font, size) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::replace(&mut current, ch.to_string()));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Convert simple HTML to blank-line separated plain text.
fn clean_html(content: &str) -> String {
    let text = BLOCK_OPEN.replace_all(content, "\n\n");
    let text = BLOCK_CLOSE.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .trim()
        .to_owned()
}

fn strip_bold_markers(text: &str) -> String {
    text.replace("**", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::inspect::PdfInspector;
    use darrow_core::{DarrowError, DocumentType};

    fn snapshot(body: &str) -> DocumentSnapshot {
        DocumentSnapshot::new("Board Consent", body, DocumentType::BoardConsent)
    }

    fn long_body() -> String {
        let paragraph = "The Board of Directors of the Corporation hereby approves the \
            issuance of shares of Common Stock to the founders on the terms set out in the \
            Restricted Stock Purchase Agreement presented to the Board.";
        vec![paragraph; 80].join("\n\n")
    }

    #[test]
    fn short_document_is_one_page_with_footer() {
        let bytes = PdfWriter::a4()
            .create_document(&snapshot("RESOLVED, that the bylaws are adopted."))
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let inspector = PdfInspector::from_bytes(&bytes).unwrap();
        assert_eq!(inspector.page_count(), 1);
        assert!(inspector.page_text(1).unwrap().contains("Page 1 of 1"));
    }

    #[test]
    fn overflowing_body_paginates_with_distinct_footers() {
        let bytes = PdfWriter::a4().create_document(&snapshot(&long_body())).unwrap();
        let inspector = PdfInspector::from_bytes(&bytes).unwrap();

        let total = inspector.page_count();
        assert!(total > 1, "expected several pages, got {total}");
        for page in 1..=total {
            let text = inspector.page_text(page as u32).unwrap();
            assert!(
                text.contains(&format!("Page {page} of {total}")),
                "page {page} footer missing"
            );
        }
    }

    #[test]
    fn empty_body_still_produces_a_page() {
        let bytes = PdfWriter::a4().create_document(&snapshot("")).unwrap();
        let inspector = PdfInspector::from_bytes(&bytes).unwrap();
        assert_eq!(inspector.page_count(), 1);
    }

    #[test]
    fn unencodable_text_aborts_render() {
        let err = PdfWriter::a4()
            .create_document(&snapshot("Governed by the laws of \u{4E2D}\u{56FD}."))
            .unwrap_err();
        assert!(matches!(err, DarrowError::UnencodableText(_)));
    }

    #[derive(Debug)]
    struct Drawn {
        text: String,
        font: BuiltinFont,
        size: f32,
        x: f32,
    }

    /// Text runs in drawing order, with the font, size and x they were set with.
    fn drawn(ops: &[Op]) -> Vec<Drawn> {
        let mut runs = Vec::new();
        let (mut size, mut x) = (0.0, 0.0);
        for op in ops {
            match op {
                Op::SetTextCursor { pos } => x = pos.x.0,
                Op::SetFontSizeBuiltinFont { size: pt, .. } => size = pt.0,
                Op::WriteTextBuiltinFont { items, font } => {
                    let text = items
                        .iter()
                        .map(|item| match item {
                            TextItem::Text(text) => text.as_str(),
                            _ => "",
                        })
                        .collect();
                    runs.push(Drawn {
                        text,
                        font: *font,
                        size,
                        x,
                    });
                }
                _ => {}
            }
        }
        runs
    }

    fn find<'a>(runs: &'a [Drawn], text: &str) -> &'a Drawn {
        runs.iter()
            .find(|run| run.text == text)
            .unwrap_or_else(|| panic!("{text:?} was not drawn: {runs:?}"))
    }

    #[test]
    fn heading_and_body_are_separate_blocks() {
        let doc = snapshot("ARTICLE FIRST: NAME\n\nThis corporation shall have perpetual existence.");
        let pages = PdfWriter::a4().layout(&doc).unwrap();
        let runs = drawn(&pages[0]);

        let heading = find(&runs, "ARTICLE FIRST: NAME");
        assert_eq!(heading.font, BuiltinFont::TimesBold);
        assert_eq!(heading.size, HEADING_SIZE);
        assert_eq!(heading.x, MARGIN);

        let body = find(&runs, "This corporation shall have perpetual existence.");
        assert_eq!(body.font, BuiltinFont::TimesRoman);
        assert_eq!(body.size, BODY_SIZE);
    }

    #[test]
    fn multi_line_charter_heading_is_bold_and_centered() {
        let doc = snapshot(
            "CERTIFICATE OF INCORPORATION\nOF\nACME ROBOTICS, INC.\n\nFIRST: The name is Acme Robotics, Inc.",
        );
        let pages = PdfWriter::a4().layout(&doc).unwrap();
        let runs = drawn(&pages[0]);

        for line in ["CERTIFICATE OF INCORPORATION", "OF", "ACME ROBOTICS, INC."] {
            let run = find(&runs, line);
            assert_eq!(run.font, BuiltinFont::TimesBold, "{line}");
            assert_eq!(run.size, HEADING_SIZE, "{line}");
            assert!(run.x > MARGIN, "{line} is not centered");
        }
        let of = find(&runs, "OF");
        let centre = of.x + text_width("OF", BuiltinFont::TimesBold, HEADING_SIZE) / 2.0;
        let page_w = Mm(PaperSize::A4.dimensions_mm().0).into_pt().0;
        assert!((centre - page_w / 2.0).abs() < 0.5);

        let first = find(&runs, "FIRST: The name is Acme Robotics, Inc.");
        assert_eq!(first.font, BuiltinFont::TimesRoman);
        assert_eq!(first.x, MARGIN);
    }

    #[test]
    fn title_is_bold_upper_case_and_centered() {
        let pages = PdfWriter::a4().layout(&snapshot("Body.")).unwrap();
        let runs = drawn(&pages[0]);
        let title = &runs[0];
        assert_eq!(title.text, "BOARD CONSENT");
        assert_eq!(title.font, BuiltinFont::TimesBold);
        assert_eq!(title.size, TITLE_SIZE);
        assert!(title.x > MARGIN);
    }

    #[test]
    fn footer_is_centered_on_configured_paper() {
        let mut writer = PdfWriter::a4();
        writer.set_paper_size(PaperSize::Letter);
        let pages = writer.layout(&snapshot("Body.")).unwrap();
        let runs = drawn(&pages[0]);

        let footer = find(&runs, "Page 1 of 1");
        assert_eq!(footer.size, FOOTER_SIZE);
        let width = text_width("Page 1 of 1", BuiltinFont::TimesRoman, FOOTER_SIZE);
        let centre = footer.x + width / 2.0;
        let page_w = Mm(PaperSize::Letter.dimensions_mm().0).into_pt().0;
        assert!((centre - page_w / 2.0).abs() < 0.5);
    }

    #[test]
    fn accented_text_reads_back_as_ascii() {
        let doc = snapshot("Soci\u{e9}t\u{e9} G\u{e9}n\u{e9}rale \u{a7} 5 na\u{ef}ve");
        let bytes = PdfWriter::a4().create_document(&doc).unwrap();
        let text = PdfInspector::from_bytes(&bytes).unwrap().page_text(1).unwrap();
        assert!(text.contains("Societe Generale Sec. 5 naive"), "{text:?}");
    }

    #[test]
    fn metadata_defaults_and_overrides() {
        let doc = DocumentSnapshot::new(
            "Statuts de la Soci\u{e9}t\u{e9}",
            "Body.",
            DocumentType::DelawareCharter,
        );

        let bytes = PdfWriter::a4().create_document(&doc).unwrap();
        let inspector = PdfInspector::from_bytes(&bytes).unwrap();
        assert_eq!(
            inspector.title().as_deref(),
            Some("Statuts de la Soci\u{e9}t\u{e9}")
        );
        assert_eq!(inspector.author().as_deref(), Some(DEFAULT_METADATA));
        assert_eq!(inspector.creator().as_deref(), Some(DEFAULT_METADATA));
        assert_eq!(inspector.producer().as_deref(), Some(DEFAULT_METADATA));
        assert_eq!(inspector.subject(), Some(DocumentType::DelawareCharter.subject()));
        assert!(inspector.page_text(1).unwrap().contains("STATUTS DE LA SOCIETE"));

        let mut writer = PdfWriter::a4();
        writer.set_author("Jane Counsel");
        writer.set_creator("Darrow CLI");
        writer.set_producer("Darrow Renderer");
        let bytes = writer.create_document(&doc).unwrap();
        let inspector = PdfInspector::from_bytes(&bytes).unwrap();
        assert_eq!(inspector.author().as_deref(), Some("Jane Counsel"));
        assert_eq!(inspector.creator().as_deref(), Some("Darrow CLI"));
        assert_eq!(inspector.producer().as_deref(), Some("Darrow Renderer"));
    }

    #[test]
    fn renderer_ignores_profile_geometry() {
        let mut profile = FormattingProfile::default();
        profile.margins.top = 50_000;
        let bytes = PdfWriter::a4()
            .render(&snapshot("Short body."), &profile)
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn wrapped_lines_fit_content_width() {
        let text = long_body();
        let max = 495.0;
        let lines = wrap_text(&text[..600], BuiltinFont::TimesRoman, BODY_SIZE, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, BuiltinFont::TimesRoman, BODY_SIZE) <= max);
        }
    }

    #[test]
    fn oversized_words_are_broken() {
        let word = "X".repeat(200);
        let lines = wrap_text(&word, BuiltinFont::TimesRoman, BODY_SIZE, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn overflow_starts_new_page() {
        let mut layout = PageLayout::new(595.0, 200.0);
        for _ in 0..20 {
            layout.line("line", MARGIN, BuiltinFont::TimesRoman, BODY_SIZE, LINE_HEIGHT);
        }
        // (200 - 2 * 50) / 14 lines fit per page.
        assert_eq!(layout.finish().len(), 3);
    }

    #[test]
    fn html_is_reduced_to_paragraphs() {
        let cleaned = clean_html("<h1>Title</h1><p>A &amp; B&nbsp;&lt;C&gt;</p><p><strong>D</strong></p>");
        assert_eq!(cleaned, "Title\n\nA & B <C>\n\nD");
    }
}
