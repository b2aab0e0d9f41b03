//! Terminal rendering for the entry and review views.
//!
//! All functions render to `String` so the interactive loop can write to any
//! sink; nothing here mutates session state.

use crate::core::catalog::{self, FieldKind, FieldSpec, FormSchema, SELECT_SENTINEL};
use crate::core::editor::{MSG_REQUIRED, Session};
use crate::core::output::{compact_line, pad_cell};
use rustc_hash::FxHashMap;
use std::env;

const MIN_BOX_WIDTH: usize = 40;
const MAX_BOX_WIDTH: usize = 50;
const BAR_SEGMENTS: usize = 20;
const MIN_CELL_WIDTH: usize = 6;
const MAX_CELL_WIDTH: usize = 24;
const VALUE_PREVIEW_CHARS: usize = 40;

pub fn terminal_width() -> usize {
    env::var("TERM_WIDTH")
        .ok()
        .and_then(|w| w.parse().ok())
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
        .unwrap_or(80)
}

fn effective_width() -> usize {
    terminal_width().max(MIN_BOX_WIDTH).min(MAX_BOX_WIDTH)
}

fn box_top(width: usize) -> String {
    format!("╔{}╗", "═".repeat(width.saturating_sub(2)))
}

fn box_bottom(width: usize) -> String {
    format!("╚{}╝", "═".repeat(width.saturating_sub(2)))
}

fn box_row(content: &str, width: usize) -> String {
    let content_len = content.chars().count();
    let padding = width.saturating_sub(2).saturating_sub(content_len);
    let left = padding / 2;
    let right = padding - left;
    format!("║{}{}{}║", " ".repeat(left), content, " ".repeat(right))
}

/// Boxed section banner.
pub fn banner(title: &str) -> String {
    use colored::Colorize;
    let width = effective_width();
    format!(
        "{}\n{}\n{}",
        box_top(width).bright_cyan(),
        box_row(title, width).bright_cyan().bold(),
        box_bottom(width).bright_cyan()
    )
}

/// Fixed-width completion bar, e.g. `[██████──────────────] 33%`.
pub fn progress_bar(ratio: f64) -> String {
    let clamped = ratio.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_SEGMENTS as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "─".repeat(BAR_SEGMENTS - filled),
        clamped
    )
}

fn kind_hint(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Number => "number",
        FieldKind::Dropdown { .. } => "choice",
        FieldKind::Date => "date",
        FieldKind::Password => "secret",
    }
}

fn display_value(field: &FieldSpec, values: &FxHashMap<String, String>) -> String {
    let raw = values.get(&field.name).map(String::as_str).unwrap_or("");
    if raw.is_empty() {
        return String::new();
    }
    match field.kind {
        FieldKind::Password => "•".repeat(raw.chars().count().min(8)),
        _ => compact_line(raw, VALUE_PREVIEW_CHARS),
    }
}

/// One field line: marker, label, kind hint, current value, and (for choice
/// fields) the option list prefixed with the label sentinel.
pub fn field_line(field: &FieldSpec, values: &FxHashMap<String, String>) -> String {
    use colored::Colorize;
    let marker = if field.required { "*" } else { " " };
    let mut line = format!(
        "  {} {} ({}): {}",
        marker.bright_red(),
        field.label.bold(),
        kind_hint(&field.kind),
        display_value(field, values)
    );
    if let FieldKind::Dropdown { options } = &field.kind {
        let mut choices = vec![field.label.as_str()];
        choices.extend(options.iter().map(String::as_str));
        line.push_str(&format!("\n      {}", choices.join(" | ").bright_black()));
    }
    line
}

/// The entry view: schema picker, field list, completion bar, submit control,
/// and the status line when it is visible.
pub fn render_entry_view(session: &Session) -> String {
    use colored::Colorize;
    let editor = &session.editor;
    let mut out = String::new();

    out.push_str(&banner("FORM ENTRY"));
    out.push('\n');

    let selected = editor.selected_schema.as_deref().unwrap_or("");
    let picker_mark = if selected.is_empty() { "▶" } else { " " };
    out.push_str(&format!(
        "  {} {}\n",
        picker_mark,
        SELECT_SENTINEL.bright_black()
    ));
    for name in catalog::schema_names() {
        let mark = if name == selected { "▶" } else { " " };
        out.push_str(&format!("  {} {}\n", mark, name));
    }
    out.push('\n');

    if editor.fields.is_empty() {
        out.push_str(&format!("  {}\n", "No schema selected.".bright_black()));
    } else {
        for field in &editor.fields {
            out.push_str(&field_line(field, &editor.values));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&format!("  {}\n", progress_bar(editor.completion)));
        out.push_str(&format!("  [ {} ]\n", editor.submit_label().bold()));
    }

    if editor.status_visible() {
        let status = if editor.status == MSG_REQUIRED {
            editor.status.bright_red()
        } else {
            editor.status.bright_green()
        };
        out.push_str(&format!("\n  {}\n", status));
    }
    out
}

fn column_width(label: &str, column: &[String]) -> usize {
    column
        .iter()
        .map(|v| v.chars().count())
        .chain(std::iter::once(label.chars().count()))
        .max()
        .unwrap_or(MIN_CELL_WIDTH)
        .clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
}

/// Per-schema table for one schema's records: field labels in schema order
/// plus an Actions column carrying the record id.
fn render_schema_table(schema: &FormSchema, session: &Session) -> String {
    use colored::Colorize;
    let records = session.store.records(&schema.name);
    let mut out = String::new();

    out.push_str(&banner(&schema.name));
    out.push('\n');

    let widths: Vec<usize> = schema
        .fields
        .iter()
        .map(|f| {
            let column: Vec<String> = records
                .iter()
                .map(|r| r.values.get(&f.name).cloned().unwrap_or_default())
                .collect();
            column_width(&f.label, &column)
        })
        .collect();

    let header = schema
        .fields
        .iter()
        .zip(&widths)
        .map(|(f, w)| pad_cell(&f.label, *w))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!("  {} | {}\n", header.bold(), "Actions".bold()));
    let rule_len = header.chars().count() + " | Actions".len();
    out.push_str(&format!("  {}\n", "─".repeat(rule_len)));

    for record in records {
        let row = schema
            .fields
            .iter()
            .zip(&widths)
            .map(|(f, w)| {
                let value = record.values.get(&f.name).map(String::as_str).unwrap_or("");
                let shown = match f.kind {
                    FieldKind::Password => "•".repeat(value.chars().count().min(8)),
                    _ => value.to_string(),
                };
                pad_cell(&shown, *w)
            })
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!(
            "  {} | {} {}\n",
            row,
            "edit/delete".bright_black(),
            record.id.bright_black()
        ));
    }
    out
}

/// The review view: one table per schema holding at least one record, in
/// catalog order, plus the go-back hint.
pub fn render_review_view(session: &Session) -> String {
    use colored::Colorize;
    let order = catalog::schema_names();
    let populated = session.store.populated(&order);
    let mut out = String::new();

    if populated.is_empty() {
        out.push_str(&format!("  {}\n", "No submissions yet.".bright_black()));
    } else {
        for name in populated {
            // Populated names come straight out of the catalog order.
            if let Ok(schema) = catalog::get_schema(name) {
                out.push_str(&render_schema_table(&schema, session));
                out.push('\n');
            }
        }
    }
    out.push_str(&format!(
        "  {}\n",
        "back: return to form entry".bright_black()
    ));
    out
}

/// Catalog dump for `schema show`.
pub fn render_schema(schema: &FormSchema) -> String {
    let empty = FxHashMap::default();
    let mut out = String::new();
    out.push_str(&banner(&schema.name));
    out.push('\n');
    for field in &schema.fields {
        out.push_str(&field_line(field, &empty));
        out.push('\n');
    }
    out
}
