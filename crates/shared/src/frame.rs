//! Frame tokenizer

/// Split a frame into tokens on runs of whitespace.
///
/// Behaves like a regex split on `\s+` rather than `split_whitespace`: a
/// frame that starts (or ends) with whitespace yields an empty first (or
/// last) token, a blank frame yields two empty tokens and an empty frame a
/// single one. A leading blank therefore turns into an empty message kind.
///
/// Tabs delimit tokens like spaces do, so a tab can never reach a field
/// string.
pub fn tokenize(frame: &str) -> Vec<&str> {
    let mut tokens = Vec::new();

    if frame.starts_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens.extend(frame.split_whitespace());
    if frame.ends_with(char::is_whitespace) {
        tokens.push("");
    }

    if tokens.is_empty() {
        tokens.push("");
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_of_whitespace_are_one_delimiter() {
        assert_eq!(tokenize("sb  3\ta   1"), vec!["sb", "3", "a", "1"]);
    }

    #[test]
    fn test_boundary_whitespace_yields_empty_tokens() {
        assert_eq!(tokenize(" f 2"), vec!["", "f", "2"]);
        assert_eq!(tokenize("f 2 "), vec!["f", "2", ""]);
        assert_eq!(tokenize("   "), vec!["", ""]);
        assert_eq!(tokenize(" "), vec!["", ""]);
    }

    #[test]
    fn test_tab_inside_field_string_splits_it() {
        assert_eq!(tokenize("f 1 0\t1"), vec!["f", "1", "0", "1"]);
    }

    #[test]
    fn test_empty_frame() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(tokenize("endgame"), vec!["endgame"]);
    }
}
