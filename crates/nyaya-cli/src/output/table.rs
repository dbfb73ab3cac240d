//! Aligned plain-text tables.

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Column-aligned table. Numeric cells are right-aligned; when the total
/// width exceeds `max_width` the widest columns are narrowed first and their
/// cells end in `…`.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        shrink_to_fit(&mut widths, &self.headers, options.max_width);

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&clip(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join(GAP);

        let divider = "-".repeat(header_line.chars().count());
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(header_line);
        lines.push(divider);

        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = clip(row.get(index).map_or("-", String::as_str), *width);
                    let numeric = is_numeric(&cell);
                    let padded = pad(&cell, *width, numeric);
                    if options.color {
                        paint_status(&padded)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join(GAP);
            lines.push(line);
        }
        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .fold(header.chars().count().max(MIN_COLUMN), usize::max)
            })
            .collect()
    }
}

fn shrink_to_fit(widths: &mut [usize], headers: &[String], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * GAP.len();

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_end_matches('%');
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.' | '-'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

/// Color whole cells that name a session or dashboard state.
fn paint_status(cell: &str) -> String {
    let code = match cell.trim().to_ascii_lowercase().as_str() {
        "succeeded" | "ready" | "ok" | "backend running" => "32",
        "pending" | "loading" | "idle" => "33",
        "failed" | "no_data" | "unavailable" => "31",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}
