// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bordered tables for legal documents (fee schedules, cap tables).

use darrow_core::TableStyle;
use docx_rs::{
    Paragraph, Run, RunFonts, Shading, ShdType, Table, TableBorders, TableCell,
    TableLayoutType, TableRow, WidthType,
};

use crate::segment::TableData;

/// `docx-rs` expresses percentage widths in fiftieths of a percent.
const PCT_UNITS_PER_PERCENT: usize = 50;

/// Build a table from a header row and data rows.
///
/// Short rows are padded with empty cells so every row spans the full width.
pub fn legal_table(data: &TableData, style: &TableStyle, font_family: &str, font_size: usize) -> Table {
    let columns = data
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(data.headers.len()))
        .max()
        .unwrap_or(0)
        .max(1);
    let width_percent = usize::from(style.width_percent.clamp(1, 100));
    let cell_width = width_percent * PCT_UNITS_PER_PERCENT / columns;

    let header = TableRow::new(
        (0..columns)
            .map(|idx| {
                let text = data.headers.get(idx).map(String::as_str).unwrap_or("");
                let cell = cell(text, true, font_family, font_size, cell_width);
                if style.header_shading {
                    cell.shading(fill(&style.header_fill))
                } else {
                    cell
                }
            })
            .collect(),
    );

    let body = data.rows.iter().enumerate().map(|(row_idx, row)| {
        let shaded = style.alternating_rows && row_idx % 2 == 1;
        TableRow::new(
            (0..columns)
                .map(|idx| {
                    let text = row.get(idx).map(String::as_str).unwrap_or("");
                    let cell = cell(text, false, font_family, font_size, cell_width);
                    if shaded {
                        cell.shading(fill(&style.alternate_fill))
                    } else {
                        cell
                    }
                })
                .collect(),
        )
    });

    let rows: Vec<TableRow> = std::iter::once(header).chain(body).collect();

    let borders = if style.borders {
        TableBorders::new()
    } else {
        TableBorders::with_empty()
    };

    Table::new(rows)
        .set_borders(borders)
        .width(width_percent * PCT_UNITS_PER_PERCENT, WidthType::Pct)
        .layout(TableLayoutType::Autofit)
}

fn cell(text: &str, bold: bool, font_family: &str, font_size: usize, width: usize) -> TableCell {
    let mut run = Run::new()
        .add_text(text)
        .size(font_size)
        .fonts(RunFonts::new().ascii(font_family).hi_ansi(font_family));
    if bold {
        run = run.bold();
    }
    TableCell::new()
        .add_paragraph(Paragraph::new().add_run(run))
        .width(width, WidthType::Pct)
}

fn fill(color: &str) -> Shading {
    Shading::new().shd_type(ShdType::Clear).color("auto").fill(color)
}
