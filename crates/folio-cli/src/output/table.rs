#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Cells longer than this are cut and end in `...`.
    pub max_cell: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { max_cell: 60 }
    }
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let rows = rows
        .iter()
        .map(|row| {
            (0..headers.len())
                .map(|index| {
                    row.get(index)
                        .map_or_else(|| "-".to_string(), |cell| cell_text(cell, options.max_cell))
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(|row| width_of(&row[index]))
                .max()
                .unwrap_or(0)
                .max(width_of(header))
        })
        .collect();

    let header_line = join_cells(headers.iter().copied(), &widths);
    let divider = "-".repeat(width_of(&header_line));

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(
        rows.iter()
            .map(|row| join_cells(row.iter().map(String::as_str), &widths)),
    );
    lines.join("\n")
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(width_of(cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

/// First line only, truncated to `max` characters.
fn cell_text(value: &str, max: usize) -> String {
    let first = value.lines().next().unwrap_or_default();
    let multiline = first.len() < value.trim_end().len();

    if width_of(first) > max {
        let kept: String = first.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else if multiline {
        format!("{first}...")
    } else {
        first.to_string()
    }
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}
