// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text segmenter — splits raw document text into blank-line separated
// sections and classifies each one with an ordered set of heuristic rules.
//
// Rule order per section: pipe table, heading (first line), signature block
// (offer letters only), body.

use std::sync::LazyLock;

use darrow_core::DocumentType;
use regex::Regex;
use tracing::{debug, instrument};

/// Two newlines with only whitespace between them.
static SECTION_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("section break pattern is valid"));

/// Keywords that mark a short line as a heading.
pub const HEADING_KEYWORDS: [&str; 7] = [
    "CERTIFICATE",
    "AGREEMENT",
    "RESOLVED",
    "WHEREAS",
    "ARTICLE",
    "SECTION",
    "Re:",
];

/// Headings must be shorter than this many characters.
pub const MAX_HEADING_CHARS: usize = 100;

/// Offer-letter sections containing this phrase start on a new page.
pub const ACCEPTANCE_PHRASE: &str = "I have read and understood";

const SIGNATURE_MARKERS: [&str; 4] = ["Date:", "_____", "By:", "ACCEPTANCE"];

/// Header row plus data rows of a pipe table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Classification of one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Heading {
        /// Title-style headings ("CERTIFICATE ...", "... AGREEMENT") are centred.
        centered: bool,
        /// The source line had no lower-case letters.
        all_caps: bool,
    },
    Body {
        /// The source section started with a tab or four spaces.
        indented: bool,
    },
    Signature,
    Table(TableData),
}

/// A classified run of text produced for a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Trimmed, non-empty source lines.
    pub lines: Vec<String>,
    pub first: bool,
    pub page_break_before: bool,
}

impl Segment {
    fn new(kind: SegmentKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            lines,
            first: false,
            page_break_before: false,
        }
    }

    /// Lines joined into a single paragraph.
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, SegmentKind::Heading { .. })
    }
}

/// Configurable segmenter. DOCX rendering uses the full rule set; PDF
/// rendering disables the markdown-bold heading trigger, has no
/// document-type specific rules, and keeps heading paragraphs whole.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    document_type: Option<DocumentType>,
    markdown_headings: bool,
    whole_headings: bool,
}

impl Segmenter {
    pub fn new(document_type: Option<DocumentType>) -> Self {
        Self {
            document_type,
            markdown_headings: true,
            whole_headings: false,
        }
    }

    /// Do not treat `**bold**` first lines as headings.
    pub fn without_markdown_headings(mut self) -> Self {
        self.markdown_headings = false;
        self
    }

    /// Emit a heading section as one heading segment holding all of its
    /// lines, instead of a heading line followed by body lines.
    pub fn whole_paragraph_headings(mut self) -> Self {
        self.whole_headings = true;
        self
    }

    fn is_offer_letter(&self) -> bool {
        self.document_type == Some(DocumentType::OfferLetter)
    }

    /// Split and classify `text`. Output order is input order.
    #[instrument(skip_all, fields(text_len = text.len(), document_type = ?self.document_type))]
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let normalized = text.replace("\r\n", "\n");
        let mut segments = Vec::new();

        for raw_section in SECTION_BREAK.split(&normalized) {
            let section = raw_section.trim();
            if section.is_empty() {
                continue;
            }
            let lines: Vec<String> = section
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect();

            let start = segments.len();
            self.classify_section(raw_section, section, lines, &mut segments);

            if self.is_offer_letter() && section.contains(ACCEPTANCE_PHRASE) {
                if let Some(segment) = segments.get_mut(start) {
                    segment.page_break_before = true;
                }
            }
        }

        if segments.is_empty() {
            let fallback = match text.trim() {
                "" => "Empty document",
                trimmed => trimmed,
            };
            segments.push(Segment::new(
                SegmentKind::Body { indented: false },
                vec![fallback.to_owned()],
            ));
        }

        if let Some(first) = segments.first_mut() {
            first.first = true;
        }

        debug!(segments = segments.len(), "Text segmented");
        segments
    }

    fn classify_section(
        &self,
        raw_section: &str,
        section: &str,
        lines: Vec<String>,
        out: &mut Vec<Segment>,
    ) {
        if let Some(table) = parse_pipe_table(&lines) {
            out.push(Segment::new(SegmentKind::Table(table), lines));
            return;
        }

        let first_line = &lines[0];
        if is_heading_line(first_line, self.markdown_headings) {
            let kind = SegmentKind::Heading {
                centered: is_centered_heading(first_line),
                all_caps: is_all_caps(first_line),
            };
            if self.whole_headings {
                out.push(Segment::new(kind, lines));
                return;
            }
            out.push(Segment::new(kind, vec![first_line.clone()]));
            for line in &lines[1..] {
                out.push(Segment::new(
                    SegmentKind::Body { indented: false },
                    vec![line.clone()],
                ));
            }
            return;
        }

        if self.is_offer_letter() && SIGNATURE_MARKERS.iter().any(|m| section.contains(m)) {
            out.push(Segment::new(SegmentKind::Signature, lines));
            return;
        }

        out.push(Segment::new(
            SegmentKind::Body {
                indented: starts_indented(raw_section),
            },
            lines,
        ));
    }
}

/// Segment `text` with every rule enabled for `document_type`.
pub fn segment_document(text: &str, document_type: DocumentType) -> Vec<Segment> {
    Segmenter::new(Some(document_type)).segment(text)
}

/// Heading test applied to a section's first line.
pub fn is_heading_line(line: &str, markdown_headings: bool) -> bool {
    line.chars().count() < MAX_HEADING_CHARS
        && (is_all_caps(line)
            || HEADING_KEYWORDS.iter().any(|keyword| line.contains(keyword))
            || (markdown_headings && is_markdown_bold(line)))
}

pub fn is_centered_heading(line: &str) -> bool {
    line.contains("CERTIFICATE") || line.contains("AGREEMENT")
}

/// True when upper-casing changes nothing. Lines without letters qualify.
pub fn is_all_caps(line: &str) -> bool {
    line == line.to_uppercase()
}

/// `**...**` with a closing marker after the opening one.
pub fn is_markdown_bold(line: &str) -> bool {
    line.strip_prefix("**")
        .is_some_and(|rest| rest.contains("**"))
}

fn starts_indented(raw_section: &str) -> bool {
    let first_line = raw_section.trim_start_matches('\n');
    first_line.starts_with("    ") || first_line.starts_with('\t')
}

/// Parse a section as a `| a | b |` table. Needs at least two rows; rows
/// made only of dashes and colons are separators and are dropped.
fn parse_pipe_table(lines: &[String]) -> Option<TableData> {
    if lines.len() < 2
        || !lines
            .iter()
            .all(|line| line.len() >= 2 && line.starts_with('|') && line.ends_with('|'))
    {
        return None;
    }

    let mut rows = lines
        .iter()
        .map(|line| {
            line[1..line.len() - 1]
                .split('|')
                .map(|cell| cell.trim().to_owned())
                .collect::<Vec<_>>()
        })
        .filter(|cells| !is_separator_row(cells));

    let headers = rows.next()?;
    Some(TableData {
        headers,
        rows: rows.collect(),
    })
}

fn is_separator_row(cells: &[String]) -> bool {
    cells.iter().all(|cell| {
        !cell.is_empty() && cell.chars().all(|ch| ch == '-' || ch == ':')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(segments: &[Segment]) -> Vec<&SegmentKind> {
        segments.iter().map(|s| &s.kind).collect()
    }

    #[test]
    fn article_line_is_heading_and_prose_is_body() {
        assert!(is_heading_line("ARTICLE FIRST: NAME", true));
        assert!(!is_heading_line(
            "This corporation shall have perpetual existence.",
            true
        ));
    }

    #[test]
    fn long_upper_case_line_is_not_heading() {
        let line = "A".repeat(100);
        assert!(!is_heading_line(&line, true));
        assert!(is_heading_line(&line[..99], true));
    }

    #[test]
    fn markdown_bold_trigger_can_be_disabled() {
        assert!(is_heading_line("**Employment Terms**", true));
        assert!(!is_heading_line("**Employment Terms**", false));
        assert!(!is_markdown_bold("**unterminated"));
    }

    #[test]
    fn heading_section_splits_into_heading_and_lines() {
        let text = "CERTIFICATE OF INCORPORATION\nOF\nAcme, Inc.\n\nFIRST: The name is Acme, Inc.";
        let segments = segment_document(text, DocumentType::DelawareCharter);

        assert_eq!(
            kinds(&segments),
            vec![
                &SegmentKind::Heading {
                    centered: true,
                    all_caps: true
                },
                &SegmentKind::Body { indented: false },
                &SegmentKind::Body { indented: false },
                // "FIRST: The name is Acme, Inc." has lower-case letters and no keyword.
                &SegmentKind::Body { indented: false },
            ]
        );
        assert!(segments[0].first);
        assert!(!segments[1].first);
        assert_eq!(segments[2].lines, vec!["Acme, Inc.".to_owned()]);
    }

    #[test]
    fn whole_paragraph_headings_keep_every_line() {
        let text = "CERTIFICATE OF INCORPORATION\nOF\nAcme, Inc.\n\nFIRST: The name is Acme, Inc.";
        let segments = Segmenter::new(None)
            .without_markdown_headings()
            .whole_paragraph_headings()
            .segment(text);

        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0].kind,
            SegmentKind::Heading {
                centered: true,
                all_caps: true
            }
        );
        assert_eq!(
            segments[0].lines,
            vec!["CERTIFICATE OF INCORPORATION", "OF", "Acme, Inc."]
        );
        assert_eq!(segments[1].kind, SegmentKind::Body { indented: false });
    }

    #[test]
    fn body_lines_join_into_one_paragraph() {
        let text = "This corporation shall\nhave perpetual existence.";
        let segments = segment_document(text, DocumentType::DelawareCharter);
        assert_eq!(segments.len(), 1);
        assert_eq!(
            segments[0].text(),
            "This corporation shall have perpetual existence."
        );
    }

    #[test]
    fn crlf_and_whitespace_only_lines_separate_sections() {
        let text = "First paragraph here.\r\n  \r\nSecond paragraph here.";
        let segments = segment_document(text, DocumentType::Rspa);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn offer_letter_signature_and_page_break() {
        let text = "Dear Jane,\n\nWelcome aboard.\n\nI have read and understood this offer.\nSignature: ________\nDate:";
        let segments = segment_document(text, DocumentType::OfferLetter);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].kind, SegmentKind::Signature);
        assert!(segments[2].page_break_before);
        assert!(!segments[1].page_break_before);
    }

    #[test]
    fn signature_rules_only_apply_to_offer_letters() {
        let text = "Signed by the parties.\nBy: ________";
        let segments = segment_document(text, DocumentType::Rspa);
        assert_eq!(segments[0].kind, SegmentKind::Body { indented: false });
        assert!(!segments[0].page_break_before);
    }

    #[test]
    fn headings_win_over_signatures() {
        let text = "ACCEPTANCE\nDate: ____";
        let segments = segment_document(text, DocumentType::OfferLetter);
        assert!(segments[0].is_heading());
    }

    #[test]
    fn indented_section_is_flagged() {
        let text = "Intro paragraph.\n\n    quoted clause continues here.";
        let segments = segment_document(text, DocumentType::Rspa);
        assert_eq!(segments[1].kind, SegmentKind::Body { indented: true });
        assert_eq!(segments[0].kind, SegmentKind::Body { indented: false });
    }

    #[test]
    fn pipe_table_is_parsed() {
        let text = "| Service | Rate |\n|---|:---:|\n| Review | $350 |\n| Drafting | $400 |";
        let segments = segment_document(text, DocumentType::Rspa);
        let SegmentKind::Table(table) = &segments[0].kind else {
            panic!("expected table, got {:?}", segments[0].kind);
        };
        assert_eq!(table.headers, vec!["Service", "Rate"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Drafting", "$400"]);
    }

    #[test]
    fn empty_input_yields_placeholder_segment() {
        let segments = segment_document("   \n\n  ", DocumentType::Rspa);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].lines, vec!["Empty document".to_owned()]);
        assert!(segments[0].first);
    }

    #[test]
    fn order_is_preserved() {
        let text = "b paragraph.\n\na paragraph.\n\nb paragraph.";
        let segments = segment_document(text, DocumentType::Rspa);
        let texts: Vec<String> = segments.iter().map(Segment::text).collect();
        assert_eq!(texts, vec!["b paragraph.", "a paragraph.", "b paragraph."]);
    }
}
