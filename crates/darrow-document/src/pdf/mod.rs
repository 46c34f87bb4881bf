// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — fixed-layout rendering and inspection of rendered output.

pub mod inspect;
pub mod metrics;
pub mod writer;

pub use inspect::PdfInspector;
pub use writer::PdfWriter;
