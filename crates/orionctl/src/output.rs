//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders fetched records in the format selected by `--output`. Table
//! mode uses the dense/detail renderers in [`crate::table`], structured
//! formats serialize the original records via serde, plain emits one
//! identifier per line.

use std::io::{self, Write};

use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::table::{self, Detail};

/// Render records as a summary listing in the chosen format.
///
/// - `table`: dense rows via the `Tabled` derive
/// - `json` / `yaml`: serializes the original records via serde
/// - `plain`: calls `id_fn` on each record to emit one id per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            table::dense(&rows)
        }
        OutputFormat::Json => render_json(data),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render records in full detail in the chosen format.
///
/// Table mode builds one [`Detail`] block per record, blank-line
/// separated, via `detail_fn`.
pub fn render_detail<T>(
    format: &OutputFormat,
    data: &[T],
    detail_fn: impl Fn(&T, &mut Detail),
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => {
            let mut detail = Detail::new();
            for (i, item) in data.iter().enumerate() {
                if i > 0 {
                    detail.blank();
                }
                detail_fn(item, &mut detail);
            }
            detail.render()
        }
        OutputFormat::Json => render_json(data),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single record in the chosen format (version metadata).
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T, &mut Detail),
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => {
            let mut detail = Detail::new();
            detail_fn(data, &mut detail);
            detail.render()
        }
        OutputFormat::Json => render_json(data),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
