#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table of string rows.
///
/// When `max_width` is set, the widest column is narrowed (with a trailing
/// `…`) until the table fits or every column is down to its header.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.trim_end().chars().count());
    let header_line = if options.color {
        format!("\u{1b}[1m{}\u{1b}[0m", header_line.trim_end())
    } else {
        header_line.trim_end().to_string()
    };

    let mut lines = vec![header_line, divider];
    lines.extend(rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                pad(&truncate(cell, *width), *width)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }));
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["age".into(), "Age".into()],
            vec!["maritalStatus".into(), "Marital Status".into()],
        ]
    }

    #[test]
    fn columns_are_aligned() {
        let table = render_table(&["key", "label"], &rows(), TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "key            label");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "age            Age");
        assert_eq!(lines[3], "maritalStatus  Marital Status");
    }

    #[test]
    fn wide_columns_are_truncated_to_fit() {
        let options = TableOptions {
            max_width: Some(24),
            color: false,
        };
        let table = render_table(&["key", "label"], &rows(), options);
        for line in table.lines() {
            assert!(line.chars().count() <= 24, "{line:?}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let table = render_table(&["a", "b"], &rows, TableOptions::default());
        assert!(table.lines().nth(2).unwrap().ends_with('-'));
    }
}
