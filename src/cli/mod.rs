//! ASCII table rendering for list screens (productos, pedidos, usuarios).
//! Rows are plain strings; numeric-looking cells are right-aligned and cells
//! are truncated to the detected terminal width.

use terminal_size::{terminal_size, Width};

/// Render a table with a header row. Prints nothing for an empty row set so
/// callers can fall back to a "no hay datos" line.
pub fn print_table(cols: &[&str], rows: &[Vec<String>]) -> bool {
    if rows.is_empty() {
        return false;
    }
    let max_col_width = column_cap();
    let mut widths: Vec<usize> = cols.iter().map(|s| display_len(s).min(max_col_width)).collect();
    for r in rows {
        for (i, cell) in r.iter().enumerate().take(cols.len()) {
            let w = display_len(cell);
            if w > widths[i] {
                widths[i] = w.min(max_col_width);
            }
        }
    }

    let sep = build_separator(&widths);
    println!("{}", sep);
    let header: Vec<String> = cols.iter().map(|c| c.to_string()).collect();
    println!("{}", build_row(&header, &widths));
    println!("{}", sep);
    for r in rows {
        println!("{}", build_row(r, &widths));
    }
    println!("{}", sep);
    println!("filas: {}", rows.len());
    true
}

/// Per-column width cap derived from the terminal, with a floor so narrow
/// terminals still get readable output.
fn column_cap() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).saturating_sub(4).max(20),
        None => 80,
    }
}

fn display_len(s: &str) -> usize {
    s.chars().count()
}

fn build_separator(widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('+');
    for w in widths {
        s.push_str(&"-".repeat(*w + 2));
        s.push('+');
    }
    s
}

fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('|');
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).cloned().unwrap_or_default();
        let text = truncate(&cell, *w);
        let align_right = is_numeric_like(&cell);
        s.push(' ');
        if align_right {
            let pad = w.saturating_sub(display_len(&text));
            s.push_str(&" ".repeat(pad));
            s.push_str(&text);
        } else {
            s.push_str(&text);
            let pad = w.saturating_sub(display_len(&text));
            s.push_str(&" ".repeat(pad));
        }
        s.push(' ');
        s.push('|');
    }
    s
}

fn truncate(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "…".to_string();
    }
    let take = max - 1;
    s.chars().take(take).collect::<String>() + "…"
}

fn is_numeric_like(s: &str) -> bool {
    // crude detection for aligning numbers to the right
    let st = s.trim();
    if st.is_empty() {
        return false;
    }
    let mut has_digit = false;
    for ch in st.chars() {
        if ch.is_ascii_digit() {
            has_digit = true;
            continue;
        }
        if ".-+eE,_".contains(ch) {
            continue;
        }
        return false;
    }
    has_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_render_nothing() {
        assert!(!print_table(&["id", "nombre"], &[]));
    }

    #[test]
    fn rows_render() {
        let rows = vec![vec!["1".to_string(), "Café".to_string()]];
        assert!(print_table(&["id", "nombre"], &rows));
    }

    #[test]
    fn numeric_detection() {
        assert!(is_numeric_like("42"));
        assert!(is_numeric_like(" 3.50 "));
        assert!(is_numeric_like("-1,000"));
        assert!(!is_numeric_like("Café"));
        assert!(!is_numeric_like(""));
        assert!(!is_numeric_like("..."));
    }

    #[test]
    fn truncate_keeps_short_and_marks_long() {
        assert_eq!(truncate("corto", 10), "corto");
        assert_eq!(truncate("demasiado largo", 6), "demas…");
        assert_eq!(truncate("xy", 1), "…");
    }

    #[test]
    fn row_padding_respects_alignment() {
        let widths = vec![4, 6];
        let row = build_row(&["7".to_string(), "Café".to_string()], &widths);
        assert_eq!(row, "|    7 | Café   |");
    }
}
