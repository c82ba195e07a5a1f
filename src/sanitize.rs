/// Escapes `input` for safe use as a CSS identifier, following the
/// `CSS.escape` rules: control characters and awkward leading digits become
/// hex escapes with a trailing space, identifier-safe characters pass
/// through, and everything else gets a backslash prefix.
pub fn sanitize(input: &str) -> String {
    if input == "-" {
        return "\\-".to_string();
    }

    let first = input.chars().next();
    let mut result = String::with_capacity(input.len() * 2);

    for (i, c) in input.chars().enumerate() {
        if c == '\0' {
            result.push('\u{FFFD}');
        } else if matches!(c, '\u{01}'..='\u{1f}' | '\u{7f}') {
            result.push_str(&format!("\\{:x} ", c as u32));
        } else if i == 0 && c.is_ascii_digit() {
            result.push_str(&format!("\\{:x} ", c as u32));
        } else if i == 1 && c.is_ascii_digit() && first == Some('-') {
            result.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            result.push(c);
        } else {
            result.push('\\');
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_pass_through() {
        assert_eq!(sanitize("main-nav_2"), "main-nav_2");
    }

    #[test]
    fn lone_dash_is_escaped() {
        assert_eq!(sanitize("-"), "\\-");
    }

    #[test]
    fn nul_becomes_replacement_character() {
        assert_eq!(sanitize("a\0b"), "a\u{FFFD}b");
    }

    #[test]
    fn control_characters_become_hex_escapes() {
        assert_eq!(sanitize("a\u{1}b"), "a\\1 b");
        assert_eq!(sanitize("a\u{7f}b"), "a\\7f b");
    }

    #[test]
    fn leading_digit_becomes_hex_escape() {
        assert_eq!(sanitize("1st"), "\\31 st");
    }

    #[test]
    fn digit_after_leading_dash_becomes_hex_escape() {
        assert_eq!(sanitize("-9lives"), "-\\39 lives");
    }

    #[test]
    fn other_characters_get_a_backslash() {
        assert_eq!(sanitize("foo:bar"), "foo\\:bar");
        assert_eq!(sanitize("a.b c"), "a\\.b\\ c");
    }
}
