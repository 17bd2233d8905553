//! Table - headers, rows and per-row advisory descriptions.
//!
//! A [`Table`] is a value holder: content and styling accumulate through
//! mutators, and [`Table::render`] turns the current state into box-drawn
//! text. Column widths are recomputed on every render unless the table
//! belongs to a [`TableGroup`](super::group::TableGroup), in which case the
//! group owns them.
//!
//! Mutators never fail. Out-of-range row or column indices are ignored.
//!
//! # Examples
//!
//! ```
//! use advisory_table::renderables::table::{Alignment, Table};
//!
//! let mut table = Table::new(["Name", "Age", "City"]);
//! table
//!     .set_console_width(80)
//!     .set_supports_styling(false)
//!     .set_alignment(1, Alignment::Right);
//! table.add_row(["Alice", "30", "New York"]);
//! table.add_row(["Bob", "25", "San Francisco"]);
//! table.add_description(0, "Special customer discount applied");
//!
//! let output = table.render();
//! assert!(output.contains("│ Alice │  30 │ New York      │"));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::r#box::{BoxChars, SQUARE};
use crate::style::StyleConfig;
use crate::terminal;

use super::group::GroupId;
use super::layout::Layout;
use super::widths;

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Split padding, extra space on the right.
    Center,
}

impl Alignment {
    /// Lay out `content` of `content_width` cells inside `width` cells.
    ///
    /// Content wider than `width` is returned with no padding.
    #[must_use]
    pub fn pad(self, content: &str, content_width: usize, width: usize) -> String {
        let total = width.saturating_sub(content_width);
        let (left, right) = match self {
            Self::Left => (0, total),
            Self::Right => (total, 0),
            Self::Center => (total / 2, total - total / 2),
        };
        format!("{}{content}{}", " ".repeat(left), " ".repeat(right))
    }
}

/// Error returned when parsing an alignment name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentParseError {
    /// The name is not one of `left`, `right`, `center`.
    Unknown(String),
}

impl fmt::Display for AlignmentParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(
                f,
                "unknown alignment '{name}', expected left, right or center"
            ),
        }
    }
}

impl std::error::Error for AlignmentParseError {}

impl FromStr for Alignment {
    type Err = AlignmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "centre" => Ok(Self::Center),
            _ => Err(AlignmentParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        };
        write!(f, "{name}")
    }
}

/// One advisory block rendered beneath a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// Shown as `[ title ]` above the bullets.
    pub title: Option<String>,
    /// Newline-separated bullet points.
    pub body: String,
}

impl Description {
    /// Bullet units of the body: trimmed, non-empty lines.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n').map(str::trim).filter(|line| !line.is_empty())
    }
}

/// A table of display strings with optional per-row descriptions.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    descriptions: BTreeMap<usize, Vec<Description>>,
    column_widths: Vec<usize>,
    alignments: Vec<Alignment>,
    max_widths: BTreeMap<usize, usize>,
    console_width: usize,
    fill_width: bool,
    dim_border: bool,
    borderless: bool,
    highlight_all_headers: bool,
    highlighted_headers: BTreeSet<usize>,
    supports_styling: bool,
    row_numbers: bool,
    box_style: &'static BoxChars,
    style: StyleConfig,
    group: Option<GroupId>,
}

impl Table {
    /// Create a table with a fixed set of headers.
    ///
    /// Console width and styling support are detected from the terminal.
    /// When styling is supported, borders are dimmed and all headers are
    /// highlighted by default.
    #[must_use]
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let supports_styling = terminal::supports_styling();
        Self {
            alignments: vec![Alignment::Left; headers.len()],
            headers,
            rows: Vec::new(),
            descriptions: BTreeMap::new(),
            column_widths: Vec::new(),
            max_widths: BTreeMap::new(),
            console_width: terminal::get_terminal_width(),
            fill_width: false,
            dim_border: supports_styling,
            borderless: false,
            highlight_all_headers: supports_styling,
            highlighted_headers: BTreeSet::new(),
            supports_styling,
            row_numbers: false,
            box_style: &SQUARE,
            style: StyleConfig::default(),
            group: None,
        }
    }

    /// Number of columns, fixed at construction.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Header strings as given.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows as stored: padded to the column count, excess cells preserved.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Description blocks attached to `row`, in insertion order.
    #[must_use]
    pub fn descriptions(&self, row: usize) -> &[Description] {
        self.descriptions.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of rows that carry at least one description.
    #[must_use]
    pub fn described_row_count(&self) -> usize {
        self.descriptions.len()
    }

    /// Content width of each column as of the last width computation.
    ///
    /// Empty until the table is rendered or its group is synced.
    #[must_use]
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Alignment of `column`, if it exists.
    #[must_use]
    pub fn alignment(&self, column: usize) -> Option<Alignment> {
        self.alignments.get(column).copied()
    }

    /// Per-column width cap, if one was set.
    #[must_use]
    pub fn max_width(&self, column: usize) -> Option<usize> {
        self.max_widths.get(&column).copied()
    }

    /// Total horizontal budget in cells.
    #[must_use]
    pub fn console_width(&self) -> usize {
        self.console_width
    }

    /// Whether escape sequences are emitted.
    #[must_use]
    pub fn supports_styling(&self) -> bool {
        self.supports_styling
    }

    /// The group this table belongs to, if any.
    #[must_use]
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    /// Append a row.
    ///
    /// Short rows are padded with empty cells; cells beyond the column count
    /// are kept but never rendered.
    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) -> &mut Self {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() < self.headers.len() {
            row.resize(self.headers.len(), String::new());
        }
        self.rows.push(row);
        self
    }

    /// Append an untitled description block to `row`.
    pub fn add_description(&mut self, row: usize, body: impl Into<String>) -> &mut Self {
        self.push_description(row, None, body.into())
    }

    /// Append a titled description block to `row`.
    pub fn add_description_with_title(
        &mut self,
        row: usize,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> &mut Self {
        let title = title.into();
        let title = (!title.is_empty()).then_some(title);
        self.push_description(row, title, body.into())
    }

    fn push_description(&mut self, row: usize, title: Option<String>, body: String) -> &mut Self {
        if row >= self.rows.len() {
            log::debug!(
                "ignoring description for row {row}: table has {} rows",
                self.rows.len()
            );
            return self;
        }
        self.descriptions
            .entry(row)
            .or_default()
            .push(Description { title, body });
        self
    }

    /// Set the alignment of `column`.
    pub fn set_alignment(&mut self, column: usize, alignment: Alignment) -> &mut Self {
        if let Some(slot) = self.alignments.get_mut(column) {
            *slot = alignment;
        }
        self
    }

    /// Cap the content width of `column`. Caps below
    /// [`MIN_CAP_WIDTH`](widths::MIN_CAP_WIDTH) are raised to it.
    pub fn set_max_width(&mut self, column: usize, width: usize) -> &mut Self {
        if column < self.headers.len() {
            self.max_widths.insert(column, width.max(widths::MIN_CAP_WIDTH));
        }
        self
    }

    /// Expand columns to consume the whole console width.
    pub fn set_fill_width(&mut self, fill: bool) -> &mut Self {
        self.fill_width = fill;
        self
    }

    /// Override the console width.
    pub fn set_console_width(&mut self, width: usize) -> &mut Self {
        self.console_width = width;
        self
    }

    /// Dim every border glyph (only when styling is supported).
    pub fn set_dim_border(&mut self, dim: bool) -> &mut Self {
        self.dim_border = dim;
        self
    }

    /// Replace every border glyph with a space of equal width.
    pub fn set_borderless(&mut self, borderless: bool) -> &mut Self {
        self.borderless = borderless;
        self
    }

    /// Highlight every header regardless of the highlighted index set.
    pub fn set_header_highlighting(&mut self, all: bool) -> &mut Self {
        self.highlight_all_headers = all;
        self
    }

    /// Replace the set of highlighted header indices.
    pub fn set_highlighted_headers(&mut self, indices: impl IntoIterator<Item = usize>) -> &mut Self {
        self.highlighted_headers = indices.into_iter().collect();
        self
    }

    /// Highlight one more header. Out-of-range indices are ignored.
    pub fn add_highlighted_header(&mut self, index: usize) -> &mut Self {
        if index < self.headers.len() {
            self.highlighted_headers.insert(index);
        }
        self
    }

    /// Remove all per-index header highlights.
    pub fn clear_highlighted_headers(&mut self) -> &mut Self {
        self.highlighted_headers.clear();
        self
    }

    /// Whether the header at `index` is rendered with the header style.
    #[must_use]
    pub fn is_highlighted_header(&self, index: usize) -> bool {
        self.highlight_all_headers || self.highlighted_headers.contains(&index)
    }

    /// Force styling on or off.
    ///
    /// With styling off, every escape sequence is removed from rendered
    /// content and no decoration is added. Stored content is not modified.
    pub fn set_supports_styling(&mut self, supported: bool) -> &mut Self {
        self.supports_styling = supported;
        self
    }

    /// Prefix each row with its 1-based number in a right-aligned `#` column.
    pub fn set_row_numbers(&mut self, enabled: bool) -> &mut Self {
        self.row_numbers = enabled;
        self
    }

    /// Choose the glyph set.
    pub fn set_box_style(&mut self, box_style: &'static BoxChars) -> &mut Self {
        self.box_style = box_style;
        self
    }

    /// Replace the escape styles used for borders, headers and titles.
    pub fn set_style_config(&mut self, style: StyleConfig) -> &mut Self {
        self.style = style;
        self
    }

    /// Natural width of each column: widest header or cell, capped.
    #[must_use]
    pub fn minimum_widths(&self) -> Vec<usize> {
        widths::minimum_widths(&self.headers, &self.rows, &self.max_widths)
    }

    /// Recompute column widths from content and fit them to the console.
    pub fn compute_column_widths(&mut self) {
        self.column_widths = self.minimum_widths();
        self.fit_to_console();
    }

    /// Fit the current widths to the console, keeping room for description
    /// blocks before and after shrinking.
    pub(crate) fn fit_to_console(&mut self) {
        let room = self.description_room();
        widths::reserve_merged_width(&mut self.column_widths, room);
        widths::fit_to_console(
            &mut self.column_widths,
            self.console_width,
            self.fill_width,
            &self.max_widths,
        );
        widths::reserve_merged_width(&mut self.column_widths, room);
    }

    /// Merged width the description blocks need, or zero without any.
    pub(crate) fn description_room(&self) -> usize {
        if self.descriptions.is_empty() {
            0
        } else {
            widths::MIN_MERGED_WIDTH
        }
    }

    pub(crate) fn assign_column_widths(&mut self, widths: Vec<usize>) {
        self.column_widths = widths;
    }

    pub(crate) fn join_group(&mut self, group: GroupId) {
        self.group = Some(group);
    }

    /// Render the table as newline-terminated lines of box-drawn text.
    ///
    /// Solo tables recompute their widths first. Grouped tables keep the
    /// widths assigned by their group's last sync; a grouped table that was
    /// never synced falls back to computing its own.
    pub fn render(&mut self) -> String {
        if self.row_numbers {
            return self.numbered_view().render();
        }
        if self.group.is_none() || self.column_widths.len() != self.headers.len() {
            self.compute_column_widths();
        }
        log::trace!("rendering table with widths {:?}", self.column_widths);
        Layout::new(self).render()
    }

    /// A solo copy with a leading `#` column.
    fn numbered_view(&self) -> Self {
        let mut view = Self {
            headers: std::iter::once("#".to_string())
                .chain(self.headers.iter().cloned())
                .collect(),
            rows: Vec::with_capacity(self.rows.len()),
            alignments: std::iter::once(Alignment::Right)
                .chain(self.alignments.iter().copied())
                .collect(),
            max_widths: self.max_widths.iter().map(|(&c, &w)| (c + 1, w)).collect(),
            highlighted_headers: self.highlighted_headers.iter().map(|i| i + 1).collect(),
            column_widths: Vec::new(),
            row_numbers: false,
            group: None,
            ..self.clone()
        };
        for (i, row) in self.rows.iter().enumerate() {
            view.rows.push(
                std::iter::once((i + 1).to_string())
                    .chain(row.iter().cloned())
                    .collect(),
            );
        }
        view
    }

    pub(crate) fn row_cells(&self, row: usize) -> &[String] {
        let cells = &self.rows[row];
        &cells[..self.headers.len().min(cells.len())]
    }

    pub(crate) fn alignments(&self) -> &[Alignment] {
        &self.alignments
    }

    pub(crate) fn box_style(&self) -> &'static BoxChars {
        self.box_style
    }

    pub(crate) fn style_config(&self) -> &StyleConfig {
        &self.style
    }

    pub(crate) fn dim_border(&self) -> bool {
        self.dim_border
    }

    pub(crate) fn borderless(&self) -> bool {
        self.borderless
    }
}
