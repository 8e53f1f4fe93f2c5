//! Column-aligned table of record fields
//!
//! Widths are measured in terminal columns, not characters: East Asian wide
//! characters take two columns, everything else one.

use unicode_width::UnicodeWidthChar;

/// Printed instead of the table when nothing passes the filter
pub const NO_SCHEDULE: &str = "予定はありません";

/// Labels for the projected fields (date, priority, description)
pub const HEADER_LABELS: [&str; 3] = ["予定日", "NICE", "用事"];

pub const SEPARATOR: &str = " ";

/// Terminal columns occupied by `c`.
///
/// Only East Asian Wide characters count as two. Fullwidth forms and
/// ambiguous characters count as one, matching the terminals this tool
/// is used on.
pub fn char_width(c: char) -> usize {
    if is_fullwidth_form(c) {
        return 1;
    }
    match UnicodeWidthChar::width(c) {
        Some(2) => 2,
        _ => 1,
    }
}

pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

// East_Asian_Width=F code points
fn is_fullwidth_form(c: char) -> bool {
    matches!(c, '\u{3000}' | '\u{FF01}'..='\u{FF60}' | '\u{FFE0}'..='\u{FFE6}')
}

/// Rows of already formatted cells, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    rows: Vec<Vec<String>>,
}

impl FieldTable {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Render the table with a header row.
    ///
    /// `labels` name the trailing columns; leading columns get empty labels.
    /// Every line ends with a newline.
    pub fn render(&self, labels: &[&str]) -> String {
        let Some(first) = self.rows.first() else {
            return format!("{}\n", NO_SCHEDULE);
        };

        let ncols = first.len();
        let skip = labels.len().saturating_sub(ncols);
        let header: Vec<String> = std::iter::repeat_n("", ncols.saturating_sub(labels.len()))
            .chain(labels[skip..].iter().copied())
            .map(str::to_string)
            .collect();

        let mut widths = vec![0; ncols];
        for row in std::iter::once(&header).chain(self.rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(str_width(cell));
            }
        }

        let mut out = String::new();
        for row in std::iter::once(&header).chain(self.rows.iter()) {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| {
                    let padding = width.saturating_sub(str_width(cell));
                    format!("{}{}", cell, " ".repeat(padding))
                })
                .collect();
            out.push_str(&line.join(SEPARATOR));
            out.push('\n');
        }
        out
    }
}

impl From<Vec<Vec<String>>> for FieldTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// Keep the items accepted by `filter` and project each into a row of cells.
///
/// Input order is preserved; sort beforehand if needed.
pub fn make_field_table<T, I, F, P>(items: I, mut filter: F, project: P) -> FieldTable
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
    P: FnMut(T) -> Vec<String>,
{
    FieldTable {
        rows: items.into_iter().filter(|item| filter(item)).map(project).collect(),
    }
}
