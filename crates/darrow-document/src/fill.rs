// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Placeholder filler — substitutes `{{NAME}}` tokens with supplied values and
// resolves anything left over to a deterministic fallback.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Days, Local, NaiveDate};
use regex::{Captures, Regex};
use tracing::{debug, instrument};

/// Matches `{{NAME}}`. The name is the innermost run of non-`}` characters,
/// so malformed nesting such as `{{A{{B}}}}` is not treated specially.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid"));

/// Replaces placeholders in template text.
///
/// The filler is pinned to a calendar day so that every date-like fallback
/// produced by one filler is identical.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderFiller {
    today: NaiveDate,
}

impl Default for PlaceholderFiller {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderFiller {
    /// Filler using the local calendar day.
    pub fn new() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Filler pinned to a specific day.
    pub fn for_date(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replace every `{{NAME}}` with `values[NAME]` or its fallback.
    ///
    /// Names are trimmed and upper-cased before lookup, and the keys of
    /// `values` are upper-cased too, so matching is case-insensitive.
    #[instrument(skip_all, fields(template_len = template.len(), values = values.len()))]
    pub fn fill(&self, template: &str, values: &HashMap<String, String>) -> String {
        let values: HashMap<String, &str> = values
            .iter()
            .map(|(key, value)| (key.trim().to_uppercase(), value.as_str()))
            .collect();

        let mut supplied = 0usize;
        let mut fallbacks = 0usize;
        let filled = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
            let name = caps[1].trim().to_uppercase();
            match values.get(&name) {
                Some(value) => {
                    supplied += 1;
                    (*value).to_owned()
                }
                None => {
                    fallbacks += 1;
                    self.fallback(&name)
                }
            }
        });

        debug!(supplied, fallbacks, "Placeholders filled");
        filled.into_owned()
    }

    /// Resolve every remaining placeholder to its fallback value.
    pub fn fill_unfilled(&self, content: &str) -> String {
        self.fill(content, &HashMap::new())
    }

    /// Fallback for a placeholder nobody supplied. `name` is already
    /// upper-cased.
    ///
    /// Exact names first, then substring heuristics, then `[NAME]`.
    pub fn fallback(&self, name: &str) -> String {
        if let Some(value) = self.exact_fallback(name) {
            return value;
        }

        if name.contains("DATE") {
            format_long_date(self.today)
        } else if name.contains("NAME") {
            format!("[{name}]")
        } else if name.contains("AMOUNT") || name.contains("PRICE") {
            format!("$[{name}]")
        } else if name.contains("RATE") || name.contains("PERCENT") {
            format!("[{name}]%")
        } else {
            format!("[{name}]")
        }
    }

    // Fields whose fallback is plain `[NAME]` are left to the heuristics.
    fn exact_fallback(&self, name: &str) -> Option<String> {
        let value = match name {
            "DATE" | "CURRENT_DATE" | "TODAY_DATE" | "SIGNING_DATE" => {
                format_long_date(self.today)
            }
            "START_DATE" => format_long_date(self.days_from_today(14)),
            "OFFER_EXPIRATION_DATE" => format_long_date(self.days_from_today(7)),

            "DISCOUNT_RATE" => "20%".to_owned(),
            "VALUATION_CAP" | "INVESTMENT_AMOUNT" | "PURCHASE_PRICE" => format!("$[{name}]"),

            "STATE_OF_INCORPORATION" | "JURISDICTION" | "GOVERNING_LAW" => "Delaware".to_owned(),

            "EXEMPT_STATUS" => "an exempt".to_owned(),
            "PLAN_NAME" => "2024 Equity Incentive Plan".to_owned(),
            "VESTING_CLIFF" => "25".to_owned(),
            "MONTHLY_VESTING" => "2.08".to_owned(),

            "DEFAULT" => "[TO BE COMPLETED]".to_owned(),
            _ => return None,
        };
        Some(value)
    }

    fn days_from_today(&self, days: u64) -> NaiveDate {
        self.today
            .checked_add_days(Days::new(days))
            .unwrap_or(self.today)
    }
}

/// Names of the placeholders still present in `text`, in order of appearance.
pub fn remaining_placeholders(text: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_owned())
        .collect()
}

/// Long US date, e.g. "October 17, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
