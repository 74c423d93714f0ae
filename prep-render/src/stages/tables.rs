//! Stage 9: pipe tables
//!
//! A line-scoped state machine. Any trimmed line that contains `|` and does not already start
//! with markup is a row; a run of rows is one table. The first kept row is the header,
//! separator rows (only `-`, `:`, `|` and whitespace) are dropped, and the first separator
//! seen supplies column alignment. The run ends at the first line that is not a row.
//!
//! Pipes inside code spans and link targets were protected earlier, so they never split cells
//! and never make a line look like a row.

use crate::options::RenderOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    fn from_separator_cell(cell: &str) -> Self {
        let cell = cell.trim();
        match (cell.starts_with(':'), cell.ends_with(':') && cell.len() > 1) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            (true, false) => Alignment::Left,
            (false, false) => Alignment::None,
        }
    }

    fn style(self) -> &'static str {
        match self {
            Alignment::None => "",
            Alignment::Left => " style=\"text-align: left\"",
            Alignment::Center => " style=\"text-align: center\"",
            Alignment::Right => " style=\"text-align: right\"",
        }
    }
}

/// Rows collected for the table currently being scanned.
#[derive(Debug, Default)]
struct TableRun {
    active: bool,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    alignments: Vec<Alignment>,
}

impl TableRun {
    fn push_row(&mut self, line: &str) {
        self.active = true;
        let cells = parse_table_row(line);
        if is_separator_row(&cells) {
            if self.alignments.is_empty() {
                self.alignments = cells
                    .iter()
                    .map(|cell| Alignment::from_separator_cell(cell))
                    .collect();
            }
        } else if self.header.is_none() {
            self.header = Some(cells);
        } else {
            self.rows.push(cells);
        }
    }

    /// Close the run, returning its markup if it kept any row.
    fn finish(&mut self) -> Option<String> {
        let TableRun {
            header,
            rows,
            alignments,
            ..
        } = std::mem::take(self);
        let header = header?;
        let style = |column: usize| {
            alignments
                .get(column)
                .copied()
                .unwrap_or(Alignment::None)
                .style()
        };

        let mut html = String::from("<table class=\"prep-table\"><thead><tr>");
        for (i, cell) in header.iter().enumerate() {
            html.push_str(&format!(
                "<th class=\"prep-table-header\"{}>{cell}</th>",
                style(i)
            ));
        }
        html.push_str("</tr></thead>");

        if !rows.is_empty() {
            html.push_str("<tbody>");
            for row in &rows {
                html.push_str("<tr>");
                for (i, cell) in row.iter().enumerate() {
                    html.push_str(&format!(
                        "<td class=\"prep-table-cell\"{}>{cell}</td>",
                        style(i)
                    ));
                }
                html.push_str("</tr>");
            }
            html.push_str("</tbody>");
        }

        html.push_str("</table>");
        Some(html)
    }
}

/// Whether `line` takes part in table detection.
pub fn is_table_row(line: &str) -> bool {
    let line = line.trim();
    line.contains('|') && !line.starts_with('<')
}

/// Split a row into trimmed cells, ignoring one leading and one trailing pipe.
pub fn parse_table_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);

    line.split('|').map(|s| s.trim().to_string()).collect()
}

fn is_separator_row(cells: &[String]) -> bool {
    cells.iter().all(|cell| {
        cell.chars()
            .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
    })
}

pub fn apply(text: &str, _options: &RenderOptions) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run = TableRun::default();

    for line in text.split('\n') {
        if is_table_row(line) {
            run.push_row(line);
            continue;
        }
        if run.active {
            if let Some(table) = run.finish() {
                out.push(table);
            }
        }
        out.push(line.to_string());
    }
    if run.active {
        if let Some(table) = run.finish() {
            out.push(table);
        }
    }

    out.join("\n")
}
