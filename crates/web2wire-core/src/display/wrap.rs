//! Word wrap for fixed-width fonts

use heapless::Vec;

/// Split `text` into at most `L` lines of at most `limit` characters
///
/// Lines break at the last whitespace within the limit. A word longer
/// than the limit is broken mid-word. Whitespace at line boundaries is
/// dropped, and so is any text that does not fit into `L` lines.
pub fn wrap_lines<const L: usize>(text: &str, limit: usize) -> Vec<&str, L> {
    let mut lines = Vec::new();
    if limit == 0 {
        return lines;
    }

    let mut rest = text.trim_start();
    while !rest.is_empty() && !lines.is_full() {
        let Some((cut, _)) = rest.char_indices().nth(limit) else {
            let _ = lines.push(rest.trim_end());
            break;
        };

        let (line, next) = if rest[cut..].starts_with(char::is_whitespace) {
            rest.split_at(cut)
        } else if let Some(space) = rest[..cut].rfind(char::is_whitespace) {
            rest.split_at(space)
        } else {
            rest.split_at(cut)
        };

        let _ = lines.push(line.trim_end());
        rest = next.trim_start();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        let lines = wrap_lines::<3>("Alice Wu", 19);
        assert_eq!(lines.as_slice(), &["Alice Wu"]);
    }

    #[test]
    fn breaks_at_last_space() {
        let lines = wrap_lines::<4>("The quick brown fox jumps", 10);
        assert_eq!(lines.as_slice(), &["The quick", "brown fox", "jumps"]);
    }

    #[test]
    fn long_words_are_force_broken() {
        let lines = wrap_lines::<4>("Supercalifragilistic", 5);
        assert_eq!(lines.as_slice(), &["Super", "calif", "ragil", "istic"]);
    }

    #[test]
    fn extra_lines_are_dropped() {
        let lines = wrap_lines::<2>("aa bb cc dd", 2);
        assert_eq!(lines.as_slice(), &["aa", "bb"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let lines = wrap_lines::<2>("ÄÖÜ ÄÖÜ", 3);
        assert_eq!(lines.as_slice(), &["ÄÖÜ", "ÄÖÜ"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_lines::<3>("   ", 10).is_empty());
    }
}
