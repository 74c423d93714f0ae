//! Sentinel substitution for protected spans
//!
//!     Code bodies must come out of the pipeline exactly as they went in, but every stage after
//!     code extraction rewrites the whole text with patterns that would happily match inside
//!     them (emphasis, links, table pipes) and the whitespace stage folds every newline into a
//!     space. Rather than carrying a side table of extracted spans, the characters those stages
//!     look for are swapped for ASCII control characters while the span is built, and swapped
//!     back by the final `restore` stage.
//!
//!     The escape stage rewrites any sentinel found in the input to its numeric entity, so at
//!     the point a span is protected the sentinels are guaranteed to be absent from the text.

/// Characters hidden inside protected spans, paired with their stand-ins.
///
/// The first entry is the newline; inline code cannot contain one, so it only matters for
/// fenced code bodies.
pub const SENTINELS: [(char, char); 7] = [
    ('\n', '\u{11}'),
    ('`', '\u{12}'),
    ('*', '\u{13}'),
    ('~', '\u{14}'),
    ('[', '\u{15}'),
    ('|', '\u{16}'),
    ('_', '\u{17}'),
];

/// Whether `c` is one of the sentinel stand-ins.
pub fn is_sentinel(c: char) -> bool {
    SENTINELS.iter().any(|(_, sentinel)| *sentinel == c)
}

/// Replace every protected character in `span` with its sentinel.
pub fn protect(span: &str) -> String {
    span.chars()
        .map(|c| {
            SENTINELS
                .iter()
                .find(|(original, _)| *original == c)
                .map_or(c, |(_, sentinel)| *sentinel)
        })
        .collect()
}

/// Map every sentinel back to the character it stands for.
pub fn restore(text: &str) -> String {
    text.chars()
        .map(|c| {
            SENTINELS
                .iter()
                .find(|(_, sentinel)| *sentinel == c)
                .map_or(c, |(original, _)| *original)
        })
        .collect()
}

/// Restore sentinels for display, keeping protected newlines visible as `␤`.
///
/// Used when showing intermediate pipeline output, where a real newline would be
/// indistinguishable from a line boundary the later stages still act on.
pub fn reveal(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{11}' => '␤',
            other => SENTINELS
                .iter()
                .find(|(_, sentinel)| *sentinel == other)
                .map_or(other, |(original, _)| *original),
        })
        .collect()
}

/// Numeric entity for a sentinel that appeared in raw input.
pub fn entity(c: char) -> String {
    format!("&#{};", c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protect_then_restore_is_identity() {
        let span = "let x = a * b; // `tick` ~ [idx] | pipe\nnext";
        assert_eq!(restore(&protect(span)), span);
    }

    #[test]
    fn protected_span_has_no_markdown_delimiters() {
        let protected = protect("**bold** ~~gone~~ [a](b) | `c`\n");
        for (original, _) in SENTINELS {
            assert!(!protected.contains(original), "{original:?} leaked");
        }
    }

    #[test]
    fn reveal_marks_newlines() {
        assert_eq!(reveal(&protect("a\nb*c")), "a␤b*c");
    }

    #[test]
    fn entity_uses_decimal_code_point() {
        assert_eq!(entity('\u{11}'), "&#17;");
        assert!(is_sentinel('\u{16}'));
        assert!(!is_sentinel('a'));
    }
}
