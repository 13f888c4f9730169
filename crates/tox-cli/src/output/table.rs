//! Aligned plain-text tables.
//!
//! Widths are measured in characters, so names with non-ASCII letters and
//! the `…` truncation marker line up. Risk labels are colored when color is
//! on: High red, Medium/Moderate yellow, Low/Very Low green.

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

fn width_of(value: &str) -> usize {
    value.chars().count()
}

/// Render headers and string rows as an aligned table.
///
/// Numeric cells are right-aligned. Missing cells render as `-`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| width_of(cell))
                .max()
                .unwrap_or(0)
                .max(width_of(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false, None))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(width_of(header_line.trim_end()));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(cell, *width);
                let color = if options.color { risk_color(&text) } else { None };
                pad(&text, *width, looks_numeric(&text), color)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Shrink the widest columns one step at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > width_of(headers[*index]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if width_of(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'))
}

fn pad(value: &str, width: usize, right_align: bool, color: Option<&str>) -> String {
    let fill = " ".repeat(width.saturating_sub(width_of(value)));
    let painted = color.map_or_else(
        || value.to_string(),
        |code| format!("\u{1b}[{code}m{value}\u{1b}[0m"),
    );
    if right_align {
        format!("{fill}{painted}")
    } else {
        format!("{painted}{fill}")
    }
}

fn risk_color(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "high" => Some("31"),
        "medium" | "moderate" => Some("33"),
        "low" | "very low" => Some("32"),
        _ => None,
    }
}
