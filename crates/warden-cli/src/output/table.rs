/// Render an aligned table of string rows. Numeric cells are right-aligned;
/// compliance levels and activity states are colored when `color` is set.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], color: bool) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let padded = pad(value, *width, looks_numeric(value));
                if color {
                    colorize(value, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

fn pad(value: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.'))
}

fn colorize(value: &str, padded: &str) -> String {
    let code = match value {
        "good" | "completed" | "true" => "32",
        "warning" | "caution" | "in_progress" | "scheduled" => "33",
        "critical" | "false" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_and_right_aligns_numbers() {
        let rendered = render_table(
            &["id", "percentage"],
            &[
                vec!["m-1".into(), "93.3".into()],
                vec!["m-10".into(), "100".into()],
            ],
            false,
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "id    percentage");
        assert_eq!(lines[1], "----------------");
        assert_eq!(lines[2], "m-1         93.3");
        assert_eq!(lines[3], "m-10         100");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rendered = render_table(&["a", "b"], &[vec!["x".into()]], false);
        assert!(rendered.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn colors_compliance_levels_only_when_asked() {
        let rows = vec![vec!["critical".into()]];
        assert!(render_table(&["level"], &rows, true).contains("\u{1b}[31m"));
        assert!(!render_table(&["level"], &rows, false).contains('\u{1b}'));
    }
}
