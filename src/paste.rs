//! Clipboard text to table rows
//!
//! Spreadsheets copy cells as tab separated text; exports and hand-written
//! tables use commas, semicolons or pipes. The delimiter is detected from
//! the first lines and the text is read with a flexible csv reader.

use std::io::Cursor;

/// Field separators recognized in pasted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
    Pipe,
}

impl Delimiter {
    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Pipe => b'|',
        }
    }
}

/// Detect the delimiter by counting candidates in the first few lines
///
/// Returns `None` for text without any separator, which is left to the
/// host's normal paste handling.
pub fn detect_delimiter(text: &str) -> Option<Delimiter> {
    let head: String = text.lines().take(5).collect::<Vec<_>>().join("\n");

    let tab_count = head.matches('\t').count();
    let comma_count = head.matches(',').count();
    let semi_count = head.matches(';').count();
    let pipe_count = head.matches('|').count();

    let max = tab_count.max(comma_count).max(semi_count).max(pipe_count);
    if max == 0 {
        return None;
    }

    // Ties go to tab: spreadsheet cells often contain commas
    if tab_count == max {
        Some(Delimiter::Tab)
    } else if pipe_count == max {
        Some(Delimiter::Pipe)
    } else if semi_count == max {
        Some(Delimiter::Semicolon)
    } else {
        Some(Delimiter::Comma)
    }
}

/// Parse delimited text into rows
///
/// Rows may have different lengths; callers normalize them. Returns `None`
/// when the text is blank, has no delimiter, or fails to parse. Without a
/// tab, at least two lines must agree on their field count, so prose such
/// as "Hello, world" is not taken for a table.
pub fn parse_rows(text: &str) -> Option<Vec<Vec<String>>> {
    if text.trim().is_empty() {
        return None;
    }
    let delimiter = detect_delimiter(text)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(text.as_bytes()));

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.trim().to_string()).collect();
                rows.push(row);
            }
            Err(e) => {
                tracing::warn!("Ignoring paste, parse error at line {}: {}", line + 1, e);
                return None;
            }
        }
    }

    // Markdown-style tables wrap rows in pipes
    if delimiter == Delimiter::Pipe {
        strip_outer_pipes(&mut rows);
        rows.retain(|row| !is_separator_row(row));
    }

    if delimiter != Delimiter::Tab && !has_agreeing_rows(&rows) {
        tracing::debug!("Ignoring paste, no two lines share a field count");
        return None;
    }

    (!rows.is_empty()).then_some(rows)
}

/// Truncate pasted rows to the configured table limits
pub fn clamp_to_limits(
    rows: &mut Vec<Vec<String>>,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
) {
    if let Some(max) = max_rows {
        if rows.len() > max {
            tracing::debug!("Paste truncated from {} to {} rows", rows.len(), max);
            rows.truncate(max);
        }
    }
    if let Some(max) = max_cols {
        for row in rows.iter_mut() {
            row.truncate(max);
        }
    }
}

fn has_agreeing_rows(rows: &[Vec<String>]) -> bool {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .map(Vec::len)
        .filter(|&len| len > 1)
        .any(|len| !seen.insert(len))
}

/// A markdown header rule such as `---`, `:--` or `:-:` in every cell
fn is_separator_row(row: &[String]) -> bool {
    !row.is_empty()
        && row.iter().all(|cell| {
            let rule = cell.strip_prefix(':').unwrap_or(cell);
            let rule = rule.strip_suffix(':').unwrap_or(rule);
            !rule.is_empty() && rule.bytes().all(|b| b == b'-')
        })
}

fn strip_outer_pipes(rows: &mut [Vec<String>]) {
    for row in rows.iter_mut() {
        if row.len() > 1 && row.first().is_some_and(|c| c.is_empty()) {
            row.remove(0);
        }
        if row.len() > 1 && row.last().is_some_and(|c| c.is_empty()) {
            row.pop();
        }
    }
}
