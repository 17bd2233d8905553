//! Escape-sequence-aware text measurement.
//!
//! Cell text may carry CSI styling sequences (`ESC [ params letter`). They
//! occupy no terminal cells, so every width computation in the crate goes
//! through [`visible_length`] rather than measuring raw strings.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::cells;

/// Matches one CSI sequence, e.g. `\x1b[31m` or `\x1b[0K`.
static CSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("valid regex"));

/// Remove every CSI sequence from `text`.
///
/// Borrows when there is nothing to remove.
#[must_use]
pub fn strip_styling(text: &str) -> Cow<'_, str> {
    CSI_RE.replace_all(text, "")
}

/// Returns true if `text` contains at least one CSI sequence.
#[must_use]
pub fn has_styling(text: &str) -> bool {
    CSI_RE.is_match(text)
}

/// Number of terminal cells `text` occupies once styling is removed.
///
/// This counts cells, not code points: wide CJK characters and emoji take
/// two, so columns holding them line up on a terminal. For narrow text the
/// two counts agree, and wrapped chunks are then exactly `width` characters.
///
/// ```
/// use advisory_table::ansi::visible_length;
///
/// assert_eq!(visible_length("[31mred[0m"), 3);
/// assert_eq!(visible_length("日本"), 4);
/// ```
#[must_use]
pub fn visible_length(text: &str) -> usize {
    cells::cell_len(&strip_styling(text))
}

/// A string split into its leading escape run, printable core and trailing
/// escape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleWrapper<'a> {
    /// Contiguous CSI sequences anchored at the start.
    pub prefix: &'a str,
    /// Everything between the two runs. May still contain interior sequences.
    pub core: &'a str,
    /// Contiguous CSI sequences anchored at the end.
    pub suffix: &'a str,
}

impl StyleWrapper<'_> {
    /// Re-apply the wrapper around a piece of the core.
    #[must_use]
    pub fn apply(&self, line: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + line.len() + self.suffix.len());
        out.push_str(self.prefix);
        out.push_str(line);
        out.push_str(self.suffix);
        out
    }
}

fn csi_ranges(text: &str) -> Vec<Range<usize>> {
    CSI_RE.find_iter(text).map(|m| m.range()).collect()
}

/// Peel the leading and trailing escape runs off `text`.
///
/// If the string consists only of escape sequences, all of it lands in
/// `prefix` and `core` is empty.
#[must_use]
pub fn split_wrapper(text: &str) -> StyleWrapper<'_> {
    let ranges = csi_ranges(text);

    let mut start = 0;
    let mut leading = 0;
    for range in &ranges {
        if range.start != start {
            break;
        }
        start = range.end;
        leading += 1;
    }

    let mut end = text.len();
    for range in ranges[leading..].iter().rev() {
        if range.end != end {
            break;
        }
        end = range.start;
    }

    StyleWrapper {
        prefix: &text[..start],
        core: &text[start..end],
        suffix: &text[end..],
    }
}

/// Split `text` after at most `width` visible cells.
///
/// Escape sequences count as zero width and stay with the left half, so a
/// trailing reset right after the cut is not orphaned. A wide character that
/// would straddle the boundary goes to the right half.
#[must_use]
pub fn chop_visible(text: &str, width: usize) -> (&str, &str) {
    let ranges = csi_ranges(text);
    let mut next_range = ranges.iter().peekable();
    let mut used = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(range) = next_range.next_if(|r| r.start == pos) {
            pos = range.end;
            continue;
        }
        let Some(c) = text[pos..].chars().next() else {
            break;
        };
        let char_width = cells::get_character_cell_size(c);
        if used + char_width > width {
            break;
        }
        used += char_width;
        pos += c.len_utf8();
    }

    text.split_at(pos)
}
