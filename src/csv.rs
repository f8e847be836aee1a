// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use serde::Deserialize;

/// How a single line is cut into fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Every comma is a separator. Fields cannot carry commas.
    Simple,
    /// Double-quoted fields may carry commas; `""` inside quotes is a literal quote.
    #[default]
    Quoted,
}

pub const SEP: char = ',';

/* ---------------- Parsing ---------------- */

/// Split feed text into rows of trimmed fields. Header (if any) is the first row.
///
/// Rows are separated by `\n`; a trailing `\r` or other whitespace is dropped
/// and lines that are blank after trimming produce no row. Field counts are
/// not checked here.
pub fn parse_rows(text: &str, mode: SplitMode) -> Vec<Vec<String>> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| split_line(line, mode))
        .collect()
}

/// Cut one line into fields. Never fails: unbalanced quotes just run to end of line.
pub fn split_line(line: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Simple => line.split(SEP).map(|f| s!(f.trim())).collect(),
        SplitMode::Quoted => split_quoted(line),
    }
}

fn split_quoted(line: &str) -> Vec<String> {
    let mut row = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == SEP && !in_quotes => {
                row.push(trimmed(take(&mut field)));
            }
            _ => field.push(ch),
        }
    }

    // Flush the last field even if quotes were unterminated.
    row.push(trimmed(field));
    row
}

fn trimmed(field: String) -> String {
    let t = field.trim();
    if t.len() == field.len() { field } else { s!(t) }
}

/// Take the first row as header. `None` when there are no rows at all.
pub fn split_header(rows: &[Vec<String>]) -> Option<(&[String], &[Vec<String>])> {
    rows.split_first().map(|(header, data)| (header.as_slice(), data))
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table (optional header + rows) as text.
pub fn rows_to_string(header: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = header {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
