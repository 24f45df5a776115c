use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Truncate then right-pad with spaces to exactly `cells` wide.
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    if w < cells {
        out.push_str(&" ".repeat(cells - w));
    }
    out
}

/// Keep the end of a string so it fits in `max_cells`, prefixing `…` when
/// anything was cut. Used where the most recent text matters (prompt input).
pub fn tail_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut kept: Vec<&str> = Vec::new();
    for grapheme in s.graphemes(true).rev() {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        kept.push(grapheme);
    }
    let mut result = String::from("\u{2026}");
    result.extend(kept.into_iter().rev());
    result
}

/// Remove the last grapheme cluster (one Backspace press).
pub fn pop_grapheme(s: &mut String) {
    if let Some((i, _)) = s.grapheme_indices(true).next_back() {
        s.truncate(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── display_width ──────────────────────────────────────────────

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn display_width_combining() {
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    // ── truncate_to_width ──────────────────────────────────────────

    #[test]
    fn truncate_no_truncation_needed() {
        assert_eq!(truncate_to_width("hi", 10), "hi");
    }

    #[test]
    fn truncate_exact_fit() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_tiny_budgets() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "…");
    }

    #[test]
    fn truncate_never_splits_wide_chars() {
        // 2 cells of budget after the ellipsis only fit one CJK char
        assert_eq!(truncate_to_width("你好世界", 4), "你…");
    }

    // ── fit_to_width ───────────────────────────────────────────────

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit_to_width("ab", 5), "ab   ");
    }

    #[test]
    fn fit_truncates_and_pads_wide_text() {
        let out = fit_to_width("你好世界", 4);
        assert_eq!(out, "你… ");
        assert_eq!(display_width(&out), 4);
    }

    // ── tail_to_width ──────────────────────────────────────────────

    #[test]
    fn tail_keeps_short_text() {
        assert_eq!(tail_to_width("abc", 5), "abc");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail_to_width("hello world", 6), "…world");
        assert_eq!(tail_to_width("hello", 1), "…");
        assert_eq!(tail_to_width("hello", 0), "");
    }

    // ── pop_grapheme ───────────────────────────────────────────────

    #[test]
    fn pop_removes_last_char() {
        let mut s = "abc".to_string();
        pop_grapheme(&mut s);
        assert_eq!(s, "ab");
    }

    #[test]
    fn pop_removes_whole_cluster() {
        let mut s = "cafe\u{0301}".to_string();
        pop_grapheme(&mut s);
        assert_eq!(s, "caf");
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut s = String::new();
        pop_grapheme(&mut s);
        assert_eq!(s, "");
    }
}
