//! Box drawing characters for table borders.
//!
//! A table only ever needs four kinds of line: the top edge, a content row,
//! an interior separator and the bottom edge. Every junction the layout emits
//! is taken from one of those rows, so swapping the glyph set swaps the whole
//! look of the table.

use std::fmt;

/// Box drawing character set.
///
/// Each row is 4 characters: [left, horizontal, junction, right].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxChars {
    /// Top edge: ┌─┬┐
    pub top: [char; 4],
    /// Content row: │ ││
    pub row: [char; 4],
    /// Interior separator: ├─┼┤
    pub mid: [char; 4],
    /// Bottom edge: └─┴┘
    pub bottom: [char; 4],
}

impl BoxChars {
    /// Create a new box from character arrays.
    #[must_use]
    pub const fn new(top: [char; 4], row: [char; 4], mid: [char; 4], bottom: [char; 4]) -> Self {
        Self {
            top,
            row,
            mid,
            bottom,
        }
    }

    /// Horizontal line character.
    #[must_use]
    pub const fn horizontal(&self) -> char {
        self.mid[1]
    }

    /// Vertical edge and column divider.
    #[must_use]
    pub const fn vertical(&self) -> char {
        self.row[0]
    }

    /// Junction where a vertical line continues through a horizontal one: ┼
    #[must_use]
    pub const fn cross(&self) -> char {
        self.mid[2]
    }

    /// Junction where a vertical line starts below a horizontal one: ┬
    #[must_use]
    pub const fn down_tee(&self) -> char {
        self.top[2]
    }

    /// Junction where a vertical line ends above a horizontal one: ┴
    #[must_use]
    pub const fn up_tee(&self) -> char {
        self.bottom[2]
    }

    /// Left edge meeting a separator: ├
    #[must_use]
    pub const fn left_tee(&self) -> char {
        self.mid[0]
    }

    /// Right edge meeting a separator: ┤
    #[must_use]
    pub const fn right_tee(&self) -> char {
        self.mid[3]
    }

    /// Build a plain border of the given column spans using one row's glyphs.
    ///
    /// Each span is the full horizontal run of a column, padding included.
    #[must_use]
    pub fn build_line(&self, spans: &[usize], chars: [char; 4]) -> String {
        let [left, line, junction, right] = chars;
        let mut result = String::new();
        result.push(left);
        for (i, &span) in spans.iter().enumerate() {
            result.extend(std::iter::repeat_n(line, span));
            if i + 1 < spans.len() {
                result.push(junction);
            }
        }
        result.push(right);
        result
    }
}

impl fmt::Display for BoxChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spans = [3, 3, 3];
        let v = self.vertical();
        writeln!(f, "{}", self.build_line(&spans, self.top))?;
        writeln!(f, "{v}   {v}   {v}   {v}")?;
        writeln!(f, "{}", self.build_line(&spans, self.mid))?;
        writeln!(f, "{v}   {v}   {v}   {v}")?;
        write!(f, "{}", self.build_line(&spans, self.bottom))
    }
}

/// ASCII box (safe for all terminals).
pub const ASCII: BoxChars = BoxChars::new(
    ['+', '-', '+', '+'],
    ['|', ' ', '|', '|'],
    ['+', '-', '+', '+'],
    ['+', '-', '+', '+'],
);

/// Unicode square/single line box.
pub const SQUARE: BoxChars = BoxChars::new(
    ['\u{250C}', '\u{2500}', '\u{252C}', '\u{2510}'], // ┌─┬┐
    ['\u{2502}', ' ', '\u{2502}', '\u{2502}'],        // │ ││
    ['\u{251C}', '\u{2500}', '\u{253C}', '\u{2524}'], // ├─┼┤
    ['\u{2514}', '\u{2500}', '\u{2534}', '\u{2518}'], // └─┴┘
);

/// Unicode rounded box.
pub const ROUNDED: BoxChars = BoxChars::new(
    ['\u{256D}', '\u{2500}', '\u{252C}', '\u{256E}'], // ╭─┬╮
    ['\u{2502}', ' ', '\u{2502}', '\u{2502}'],        // │ ││
    ['\u{251C}', '\u{2500}', '\u{253C}', '\u{2524}'], // ├─┼┤
    ['\u{2570}', '\u{2500}', '\u{2534}', '\u{256F}'], // ╰─┴╯
);
