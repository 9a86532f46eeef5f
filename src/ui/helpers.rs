//! Shared rendering utilities.

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Fits `text` into exactly `width` columns: truncated with "…" when too
/// long, padded with spaces when too short. Counts characters, not bytes.
///
/// ```
/// use hackerstories::ui::helpers::fit;
///
/// assert_eq!(fit("Author", 8), "Author  ");
/// assert_eq!(fit("Dan Abramov", 6), "Dan A…");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{text}{}", " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let mut out: String = text.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}

/// Like [`fit`], but right-aligned. Used for numeric columns.
#[must_use]
pub fn fit_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        fit(text, width)
    } else {
        format!("{}{text}", " ".repeat(width - len))
    }
}

/// Left padding that centers `len` columns of content in `cols`.
#[must_use]
pub const fn center_offset(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("héllo", 5), "héllo");
        assert_eq!(fit("héllo wörld", 7), "héllo …");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn fit_right_aligns_numbers() {
        assert_eq!(fit_right("42", 5), "   42");
        assert_eq!(fit_right("123456", 4), "123…");
    }

    #[test]
    fn centering() {
        assert_eq!(center_offset(10, 30), 10);
        assert_eq!(center_offset(40, 30), 0);
    }
}
