/// Collapse every whitespace run (newlines included) to a single space and
/// trim the ends: "4 easy\n+  strides" -> "4 easy + strides".
pub fn normalize_cell(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True for cells that contain only whitespace.
pub fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_newlines_and_runs() {
        assert_eq!(normalize_cell("  4 easy\n+   strides \t"), "4 easy + strides");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(normalize_cell(" \n\t "), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \n "));
        assert!(!is_blank(" 5 "));
    }
}
