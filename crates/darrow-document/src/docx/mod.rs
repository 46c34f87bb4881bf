// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DOCX module — word-processing output built with `docx-rs`.

pub mod table;
pub mod writer;

pub use table::legal_table;
pub use writer::DocxWriter;
