//! Grapheme-cluster display width and column→byte conversions.
//!
//! Contract:
//! - Widths are computed per grapheme cluster, never per `char`, so a
//!   combining sequence counts as one unit with its base.
//! - Column limits are respected at cluster granularity: a cluster that
//!   would cross a limit is left on the far side, and zero-width clusters
//!   sitting exactly on a limit attach to the near side.
//! - Input is used verbatim; no normalization is applied.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of one grapheme cluster in terminal columns.
pub fn grapheme_width(cluster: &str) -> usize {
    cluster.width()
}

/// Total display width of a string in terminal columns.
pub fn string_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Byte offset reached after consuming as many whole clusters as fit in
/// `limit` columns, plus the columns actually consumed.
fn byte_at_column_limit(s: &str, limit: usize) -> (usize, usize) {
    let mut col = 0;
    for (offset, cluster) in s.grapheme_indices(true) {
        let w = grapheme_width(cluster);
        if col + w > limit {
            return (offset, col);
        }
        col += w;
    }
    (s.len(), col)
}

/// The byte range of `s` covering columns `[start_col, start_col + ncols)`.
///
/// Both edges land on cluster boundaries; a wide cluster straddling an edge
/// stays outside the range.
pub fn byte_range_of_columns(s: &str, start_col: usize, ncols: usize) -> Range<usize> {
    let (start, _) = byte_at_column_limit(s, start_col);
    let (end, _) = byte_at_column_limit(s, start_col + ncols);
    start..end.max(start)
}

/// The grapheme cluster covering column `col`, or `None` past the end of the
/// string's width.
pub fn grapheme_at_column(s: &str, col: usize) -> Option<&str> {
    let mut at = 0;
    for cluster in s.graphemes(true) {
        let w = grapheme_width(cluster);
        if at + w > col {
            return Some(cluster);
        }
        at += w;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn combining_mark_counts_with_base() {
        // e + combining acute is one column, same as the precomposed form.
        assert_eq!(string_width("e\u{0301}"), 1);
        assert_eq!(string_width("\u{00E9}"), 1);
    }

    #[test]
    fn cjk_is_double_width() {
        assert_eq!(string_width("漢字"), 4);
        assert_eq!(string_width("漢A"), 3);
    }

    #[test]
    fn byte_range_plain_ascii() {
        assert_eq!(byte_range_of_columns("hello", 0, 5), 0..5);
        assert_eq!(byte_range_of_columns("hello", 1, 3), 1..4);
        assert_eq!(byte_range_of_columns("hello", 4, 10), 4..5);
        assert_eq!(byte_range_of_columns("hello", 7, 2), 5..5);
    }

    #[test]
    fn byte_range_multibyte() {
        // "é" (2 bytes, 1 column) then "x".
        let s = "\u{00E9}x";
        assert_eq!(byte_range_of_columns(s, 0, 1), 0..2);
        assert_eq!(byte_range_of_columns(s, 1, 1), 2..3);
    }

    #[test]
    fn byte_range_does_not_split_wide_cluster() {
        // "漢" occupies columns 0..2. A start edge landing inside it stays
        // before the whole cluster, so the range grows to cluster boundaries
        // rather than slicing bytes out of the middle.
        let s = "漢A";
        assert_eq!(byte_range_of_columns(s, 1, 2), 0..4);
        assert_eq!(byte_range_of_columns(s, 2, 1), 3..4);
    }

    #[test]
    fn byte_range_keeps_trailing_zero_width() {
        // A combining mark cluster boundary: column edge at 1 falls after the
        // whole "e◌́" cluster.
        let s = "e\u{0301}z";
        assert_eq!(byte_range_of_columns(s, 0, 1), 0..3);
        assert_eq!(byte_range_of_columns(s, 1, 1), 3..4);
    }

    #[test]
    fn grapheme_lookup_by_column() {
        let s = "a漢b";
        assert_eq!(grapheme_at_column(s, 0), Some("a"));
        assert_eq!(grapheme_at_column(s, 1), Some("漢"));
        assert_eq!(grapheme_at_column(s, 2), Some("漢"));
        assert_eq!(grapheme_at_column(s, 3), Some("b"));
        assert_eq!(grapheme_at_column(s, 4), None);
    }
}
