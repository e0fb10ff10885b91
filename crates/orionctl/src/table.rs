//! Text table rendering.
//!
//! Two presentation modes:
//!
//! - **dense** -- one row per record via `tabled`, every cell truncated
//!   at [`DENSE_MAX_CELL`] characters, never wrapped. An empty record
//!   set still renders the header row.
//! - **detail** -- one labeled line per field with the label column
//!   aligned and values word-wrapped at [`DETAIL_WRAP`] characters;
//!   records are separated by a blank line.
//!
//! Purely presentational: both modes are deterministic for identical
//! input and never reorder or transform fields.

use std::fmt::Display;

use tabled::settings::object::Segment;
use tabled::settings::{Style, Width};
use tabled::{Table, Tabled};

/// Column width cap for dense summary tables.
pub const DENSE_MAX_CELL: usize = 50;

/// Wrap width for detail values.
pub const DETAIL_WRAP: usize = 80;

// ── Dense mode ───────────────────────────────────────────────────────

/// Render summary rows as a dense table.
pub fn dense<R: Tabled>(rows: &[R]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.modify(Segment::all(), Width::truncate(DENSE_MAX_CELL));
    table.to_string()
}

// ── Detail mode ──────────────────────────────────────────────────────

enum DetailRow {
    /// `label value` pair; the value wraps at [`DETAIL_WRAP`].
    Pair { label: String, value: String },
    /// Label-only line opening a nested block (`Subject:`).
    Heading(String),
    /// Record separator.
    Blank,
}

/// Builder for the verbose, one-field-per-line rendering.
#[derive(Default)]
pub struct Detail {
    rows: Vec<DetailRow>,
}

impl Detail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a labeled field. An empty label produces a continuation line
    /// aligned under the previous value (multi-entry fields).
    pub fn field(&mut self, label: &str, value: impl Display) {
        self.rows.push(DetailRow::Pair {
            label: label.to_owned(),
            value: value.to_string(),
        });
    }

    /// Add a label-only line opening a nested block.
    pub fn heading(&mut self, label: &str) {
        self.rows.push(DetailRow::Heading(label.to_owned()));
    }

    /// Add a blank separator line.
    pub fn blank(&mut self) {
        self.rows.push(DetailRow::Blank);
    }

    /// Render all rows with the label column aligned.
    pub fn render(&self) -> String {
        let label_width = self
            .rows
            .iter()
            .filter_map(|row| match row {
                DetailRow::Pair { label, .. } => Some(label.chars().count()),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for row in &self.rows {
            match row {
                DetailRow::Pair { label, value } => {
                    let wrapped = wrap(value, DETAIL_WRAP);
                    let mut parts = wrapped.into_iter();
                    let first = parts.next().unwrap_or_default();
                    lines.push(
                        format!("{label:<label_width$}  {first}")
                            .trim_end()
                            .to_owned(),
                    );
                    for cont in parts {
                        lines.push(format!("{:<label_width$}  {cont}", ""));
                    }
                }
                DetailRow::Heading(label) => lines.push(label.clone()),
                DetailRow::Blank => lines.push(String::new()),
            }
        }

        lines.join("\n")
    }
}

// ── Wrapping ─────────────────────────────────────────────────────────

/// Word-wrap `text` so no output line exceeds `width` characters.
/// Words longer than `width` are hard-split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for chunk in split_chunks(word, width) {
            let needed = if current.is_empty() {
                chunk.chars().count()
            } else {
                current.chars().count() + 1 + chunk.chars().count()
            };

            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&chunk);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split a single word into chunks of at most `width` characters.
fn split_chunks(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= width {
        return vec![word.to_owned()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use tabled::Tabled;

    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Description")]
        description: String,
    }

    #[test]
    fn dense_truncates_cells_at_cap() {
        let long = "x".repeat(120);
        let rows = vec![Row {
            id: "sub1".into(),
            description: long.clone(),
        }];

        let out = dense(&rows);

        assert!(!out.contains(&long));
        assert!(out.contains(&long[..DENSE_MAX_CELL]));
        assert!(!out.contains(&long[..DENSE_MAX_CELL + 1]));
    }

    #[test]
    fn dense_renders_header_only_for_empty_input() {
        let out = dense(&Vec::<Row>::new());

        assert!(out.contains("ID"));
        assert!(out.contains("Description"));
        // Border top, header, separator, border bottom -- no data rows.
        assert!(out.lines().count() <= 4);
    }

    #[test]
    fn dense_is_deterministic() {
        let rows = vec![
            Row {
                id: "a".into(),
                description: "first".into(),
            },
            Row {
                id: "b".into(),
                description: "second".into(),
            },
        ];
        assert_eq!(dense(&rows), dense(&rows));
    }

    #[test]
    fn detail_aligns_label_column() {
        let mut detail = Detail::new();
        detail.field("ID:", "sub1");
        detail.field("Description:", "short");

        let out = detail.render();

        assert_eq!(out, "ID:           sub1\nDescription:  short");
    }

    #[test]
    fn detail_wraps_values_at_cap() {
        let mut detail = Detail::new();
        detail.field("Description:", "word ".repeat(40).trim_end());

        let out = detail.render();

        assert!(out.lines().count() > 1);
        for line in out.lines() {
            assert!(
                line.chars().count() <= "Description:".len() + 2 + DETAIL_WRAP,
                "line too long: {line:?}"
            );
        }
    }

    #[test]
    fn detail_hard_splits_oversized_words() {
        let giant = "y".repeat(200);
        let mut detail = Detail::new();
        detail.field("URL:", &giant);

        let out = detail.render();

        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| l.chars().count() <= "URL:".len() + 2 + DETAIL_WRAP));
    }

    #[test]
    fn detail_headings_and_blanks_do_not_widen_labels() {
        let mut detail = Detail::new();
        detail.heading("Notification:");
        detail.field("    URL:", "http://localhost:1028");
        detail.blank();

        let out = detail.render();

        assert_eq!(
            out,
            "Notification:\n    URL:  http://localhost:1028\n"
        );
    }

    #[test]
    fn detail_empty_value_renders_bare_label() {
        let mut detail = Detail::new();
        detail.field("Status:", "");

        assert_eq!(detail.render(), "Status:");
    }

    #[test]
    fn detail_is_deterministic() {
        let build = || {
            let mut d = Detail::new();
            d.field("ID:", "r1");
            d.heading("Provider:");
            d.field("    URL:", "http://example.org");
            d.render()
        };
        assert_eq!(build(), build());
    }
}
