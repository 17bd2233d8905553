//! Cell wrapping.
//!
//! Content that does not fit its column is broken at the most meaningful
//! boundary available: list commas first, then path separators, then
//! whitespace, and only as a last resort inside a word. Leading and trailing
//! styling is peeled off before wrapping and re-applied to every line, so a
//! red cell stays red on each of its lines.

use crate::ansi::{self, chop_visible, split_wrapper, visible_length};

/// Wrap `text` into lines of at most `max_width` visible cells.
///
/// A width of zero is treated as one. The result always holds at least one
/// line.
#[must_use]
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let width = max_width.max(1);
    let wrapper = split_wrapper(text);
    let core = wrapper.core;

    if visible_length(core) <= width {
        return vec![text.to_string()];
    }

    let lines = if core.contains(',') {
        split_list(core, width)
    } else if core.contains('/') || core.contains('.') {
        split_path(core, width)
    } else {
        wrap_words(core, width)
    };

    lines.iter().map(|line| wrapper.apply(line)).collect()
}

/// Wrap one description bullet.
///
/// The first line starts with `marker`; continuation lines are indented by
/// the marker's width so they align under the bullet text.
#[must_use]
pub fn wrap_bullet(text: &str, max_width: usize, marker: &str) -> Vec<String> {
    let marker_width = visible_length(marker);
    let indent = " ".repeat(marker_width);
    let text_width = max_width.saturating_sub(marker_width);

    wrap(text, text_width)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{marker}{line}")
            } else {
                format!("{indent}{line}")
            }
        })
        .collect()
}

/// Break a comma-separated list between items.
///
/// Each item keeps its trailing comma so no text is lost at the break;
/// items on the same line are joined as `", "`.
fn split_list(content: &str, width: usize) -> Vec<String> {
    let items: Vec<&str> = content.split(',').map(str::trim).collect();
    let last = items.len() - 1;
    let tokens = items.iter().enumerate().filter_map(|(i, item)| {
        if i < last {
            Some(format!("{item},"))
        } else if item.is_empty() {
            None
        } else {
            Some((*item).to_string())
        }
    });
    rewrap_overflow(pack(tokens, " ", width), width)
}

/// Break a path, URL or dotted name before each `/`.
fn split_path(content: &str, width: usize) -> Vec<String> {
    let tokens = content.split('/').enumerate().filter_map(|(i, part)| {
        if i == 0 {
            (!part.is_empty()).then(|| part.to_string())
        } else {
            Some(format!("/{part}"))
        }
    });
    rewrap_overflow(pack(tokens, "", width), width)
}

/// Greedily pack tokens into lines, joining neighbours with `joiner`.
fn pack(tokens: impl Iterator<Item = String>, joiner: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for token in tokens {
        if line.is_empty() {
            line = token;
            continue;
        }
        let candidate = format!("{line}{joiner}{token}");
        if visible_length(&candidate) <= width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, token));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Word-wrap any packed line that is still too wide.
fn rewrap_overflow(lines: Vec<String>, width: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if visible_length(&line) > width {
            out.extend(wrap_words(&line, width));
        } else {
            out.push(line);
        }
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Greedy whitespace wrap; words wider than `width` are cut into chunks of
/// exactly `width` cells (the last chunk may be shorter).
///
/// Interior styling stays attached to the word that carries it.
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let width = max_width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = visible_length(word);

        if !line.is_empty() && line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
        } else {
            lines.extend(chunk_word(word, width));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn chunk_word(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = word;

    while ansi::visible_length(rest) > 0 {
        let (mut chunk, mut tail) = chop_visible(rest, width);
        if ansi::visible_length(chunk) == 0 {
            // A wide character that cannot fit at all still has to go somewhere.
            let forced = chop_visible(rest, width + 1);
            chunk = forced.0;
            tail = forced.1;
        }
        chunks.push(chunk.to_string());
        rest = tail;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::strip_styling;

    fn widths(lines: &[String]) -> Vec<usize> {
        lines.iter().map(|l| visible_length(l)).collect()
    }

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(wrap("short", 10), vec!["short"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("exactly10!", 10), vec!["exactly10!"]);
    }

    #[test]
    fn test_comma_list() {
        let lines = wrap("item1, item2, item3, a-very-long-item", 15);
        assert_eq!(lines, vec!["item1, item2,", "item3,", "a-very-long-ite", "m"]);
    }

    #[test]
    fn test_comma_list_keeps_items_together() {
        let lines = wrap("alpha, beta, gamma, delta", 11);
        assert_eq!(lines, vec!["alpha,", "beta,", "gamma,", "delta"]);
    }

    #[test]
    fn test_path_split() {
        let lines = wrap("github.com/user/long-package-name", 10);
        assert_eq!(lines, vec!["github.com", "/user", "/long-pack", "age-name"]);
        assert!(widths(&lines).iter().all(|&w| w <= 10));
    }

    #[test]
    fn test_dotted_name_without_slash_falls_back_to_words() {
        let lines = wrap("org.example.module", 8);
        assert_eq!(lines, vec!["org.exam", "ple.modu", "le"]);
    }

    #[test]
    fn test_word_wrap() {
        let lines = wrap("This is a long sentence that should be wrapped", 15);
        assert_eq!(
            lines,
            vec!["This is a long", "sentence that", "should be", "wrapped"]
        );
    }

    #[test]
    fn test_long_word_hard_split() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_long_word_between_words() {
        let lines = wrap_words("a abcdefgh b", 3);
        assert_eq!(lines, vec!["a", "abc", "def", "gh", "b"]);
    }

    #[test]
    fn test_zero_width_is_treated_as_one() {
        assert_eq!(wrap("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_wrapper_reapplied_per_line() {
        let text = "\x1b[31mone two three\x1b[0m";
        let lines = wrap(text, 7);
        assert_eq!(
            lines,
            vec!["\x1b[31mone two\x1b[0m", "\x1b[31mthree\x1b[0m"]
        );
    }

    #[test]
    fn test_styled_text_that_fits_is_untouched() {
        let text = "\x1b[1mbold\x1b[0m";
        assert_eq!(wrap(text, 4), vec![text]);
    }

    #[test]
    fn test_wide_characters_respect_cells() {
        let lines = wrap("日本語テキスト", 4);
        assert_eq!(lines, vec!["日本", "語テ", "キス", "ト"]);
    }

    #[test]
    fn test_wide_character_in_single_cell() {
        let lines = wrap("日本", 1);
        assert_eq!(lines, vec!["日", "本"]);
    }

    #[test]
    fn test_bullet_continuation_is_indented() {
        let lines = wrap_bullet("Special customer discount applied", 16, "• ");
        assert_eq!(
            lines,
            vec!["• Special", "  customer", "  discount", "  applied"]
        );
    }

    #[test]
    fn test_wrap_is_lossless() {
        let text = "alpha, beta/gamma delta.epsilon, zeta";
        let lines = wrap(text, 6);
        let rejoined: String = lines.join(" ").split_whitespace().collect();
        let original: String = text.split_whitespace().collect();
        assert_eq!(strip_styling(&rejoined), original);
    }
}
