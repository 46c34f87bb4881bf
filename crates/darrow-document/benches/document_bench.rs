// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the darrow-document rendering pipeline, run on the
// compiled-in Delaware charter template padded out with generated articles so
// that both renderers paginate.

use std::collections::HashMap;

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use darrow_core::{DocumentSnapshot, DocumentType, FormattingProfile};
use darrow_document::templates::template_for;
use darrow_document::{DocxWriter, PdfWriter, PlaceholderFiller, segment_document};

const EXTRA_ARTICLES: usize = 40;

/// The filled charter followed by numbered filler articles, several pages long.
fn synthetic_charter() -> String {
    let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid calendar date");
    let filler = PlaceholderFiller::for_date(today);
    let values = HashMap::from([("COMPANY_NAME".to_owned(), "Acme Robotics, Inc.".to_owned())]);
    let mut body = filler.fill(template_for(DocumentType::DelawareCharter), &values);

    for n in 1..=EXTRA_ARTICLES {
        body.push_str(&format!(
            "\n\nARTICLE {n}: ADDITIONAL PROVISION\n\n\
             {n}. The Board of Directors may from time to time adopt, amend or repeal \
             resolutions governing the matters described in this Article, provided that no \
             such resolution shall conflict with the General Corporation Law of the State of \
             Delaware or with any other provision of this Certificate of Incorporation.\n\n\
             (a) Any stockholder may inspect the records kept under this Article during \
             ordinary business hours upon reasonable written notice to the Secretary."
        ));
    }
    body
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_segmentation(c: &mut Criterion) {
    let body = synthetic_charter();
    c.bench_function("segment multi-page charter", |b| {
        b.iter(|| black_box(segment_document(black_box(&body), DocumentType::DelawareCharter)));
    });
}

/// Both renderers on the same snapshot, so their costs can be compared.
fn bench_render(c: &mut Criterion) {
    let snapshot = DocumentSnapshot::new(
        "Certificate of Incorporation",
        synthetic_charter(),
        DocumentType::DelawareCharter,
    );
    let profile = FormattingProfile::default();
    let docx = DocxWriter::new();
    let pdf = PdfWriter::a4();

    c.bench_function("render docx", |b| {
        b.iter(|| black_box(docx.create_document(black_box(&snapshot), &profile)));
    });
    c.bench_function("render pdf", |b| {
        b.iter(|| black_box(pdf.create_document(black_box(&snapshot))));
    });
}

criterion_group!(benches, bench_segmentation, bench_render);
criterion_main!(benches);
