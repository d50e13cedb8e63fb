//! Five-row block-letter banner for digital mode.

/// Rows in every glyph.
pub const ROWS: usize = 5;

/// Columns in every glyph.
pub const GLYPH_WIDTH: usize = 3;

/// Block-letter rows for a supported character.
fn glyph(ch: char) -> Option<[&'static str; ROWS]> {
    let rows = match ch {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => ["   ", " █ ", "   ", " █ ", "   "],
        _ => return None,
    };
    Some(rows)
}

/// Render `text` as a five-row banner.
///
/// Glyphs are joined with a single space column. Characters without a glyph
/// are skipped; the result always has exactly [`ROWS`] rows of equal width.
///
/// ```
/// let rows = termclock::render::big_text("1:2");
/// assert_eq!(rows[1], "██   █    █");
/// ```
pub fn big_text(text: &str) -> [String; ROWS] {
    let mut rows: [String; ROWS] = Default::default();
    let mut first = true;
    for pattern in text.chars().filter_map(glyph) {
        for (row, part) in rows.iter_mut().zip(pattern) {
            if !first {
                row.push(' ');
            }
            row.push_str(part);
        }
        first = false;
    }
    rows
}

/// Display width in columns of the banner for `text`.
pub fn banner_width(text: &str) -> usize {
    let glyphs = text.chars().filter(|c| glyph(*c).is_some()).count();
    match glyphs {
        0 => 0,
        n => n * GLYPH_WIDTH + (n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(rows: &[String; ROWS]) -> Vec<usize> {
        rows.iter().map(|r| r.chars().count()).collect()
    }

    #[test]
    fn test_time_string_has_eight_blocks() {
        let rows = big_text("14:05:09");
        assert_eq!(widths(&rows), vec![8 * 3 + 7; ROWS]);
        assert_eq!(banner_width("14:05:09"), 31);

        // Every fourth column is the padding between blocks
        for row in &rows {
            let cols: Vec<char> = row.chars().collect();
            for sep in (3..cols.len()).step_by(4) {
                assert_eq!(cols[sep], ' ', "row {row:?} column {sep}");
            }
        }

        // First block is the "1"
        let first: Vec<String> = rows.iter().map(|r| r.chars().take(3).collect()).collect();
        assert_eq!(first, vec![" █ ", "██ ", " █ ", " █ ", "███"]);
    }

    #[test]
    fn test_empty_input_keeps_five_rows() {
        let rows = big_text("");
        assert_eq!(rows.len(), ROWS);
        assert!(rows.iter().all(String::is_empty));
    }

    #[test]
    fn test_unmapped_characters_are_skipped() {
        assert_eq!(big_text("1a2 PM"), big_text("12"));
        assert_eq!(banner_width("x"), 0);
    }

    #[test]
    fn test_rows_equal_for_long_input() {
        let rows = big_text("0123456789:0123456789");
        let w = widths(&rows);
        assert!(w.iter().all(|x| *x == w[0]));
        assert_eq!(w[0], banner_width("0123456789:0123456789"));
    }
}
