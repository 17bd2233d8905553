//! Border and block layout.
//!
//! A rendered table is a sequence of blocks (the header, each data row, each
//! description block) separated by horizontal borders. The glyphs of a border
//! depend on the blocks on either side of it: data rows have one vertical
//! line per column, while a description block keeps column 1 and merges
//! columns 2..N into a single area. Where a column divider stops the border
//! uses `┴`, where one starts it uses `┬`, and where it continues it uses `┼`.
//!
//! ```text
//! ┌───────┬─────┬───────────────┐
//! │ Name  │ Age │ City          │   Header
//! ├───────┼─────┼───────────────┤   HeaderSeparator
//! │ Alice │ 30  │ New York      │   Row
//! │       ├─────┴───────────────┤   RowToDescription
//! │       │ • Special customer  │   Description
//! ├───────┼─────┬───────────────┤   DescriptionToRow
//! │ Bob   │ 25  │ San Francisco │   Row
//! └───────┴─────┴───────────────┘   Bottom
//! ```

use std::borrow::Cow;

use crate::ansi::{strip_styling, visible_length};
use crate::r#box::BoxChars;
use crate::wrap::{wrap, wrap_bullet};

use super::table::{Alignment, Description, Table};
use super::widths::{self, CELL_PADDING};

/// Marker placed before every description bullet.
pub const BULLET: &str = " • ";

/// What a block of lines contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Header cells, one logical column per table column.
    Header,
    /// Data cells, one logical column per table column.
    Row,
    /// Column 1 left blank, columns 2..N merged.
    Description,
}

/// A horizontal border, named by the blocks it separates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    /// Above the header.
    Top,
    /// Between the header and the first row.
    HeaderSeparator,
    /// Between two data rows: every divider continues.
    RowToRow,
    /// From a row into its first description: dividers 2..N stop.
    RowToDescription,
    /// Between two descriptions of one row: a single merged run.
    DescriptionToDescription,
    /// From a description into the next row: dividers 2..N start again.
    DescriptionToRow,
    /// Below a data row.
    Bottom,
    /// Below a description.
    DescriptionBottom,
}

impl Border {
    /// The border that follows a block of kind `above`, given what comes next.
    #[must_use]
    pub fn between(above: BlockKind, below: Option<BlockKind>) -> Self {
        match (above, below) {
            (BlockKind::Header, _) => Self::HeaderSeparator,
            (BlockKind::Row, Some(BlockKind::Description)) => Self::RowToDescription,
            (BlockKind::Row, Some(_)) => Self::RowToRow,
            (BlockKind::Row, None) => Self::Bottom,
            (BlockKind::Description, Some(BlockKind::Description)) => {
                Self::DescriptionToDescription
            }
            (BlockKind::Description, Some(_)) => Self::DescriptionToRow,
            (BlockKind::Description, None) => Self::DescriptionBottom,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Block<'t> {
    Header,
    Row(usize),
    Description(&'t Description),
}

impl Block<'_> {
    fn kind(&self) -> BlockKind {
        match self {
            Self::Header => BlockKind::Header,
            Self::Row(_) => BlockKind::Row,
            Self::Description(_) => BlockKind::Description,
        }
    }
}

/// One render pass over a table whose column widths are already settled.
pub(crate) struct Layout<'t> {
    table: &'t Table,
    widths: &'t [usize],
    box_chars: &'static BoxChars,
    styled: bool,
    dim: bool,
}

impl<'t> Layout<'t> {
    pub(crate) fn new(table: &'t Table) -> Self {
        let styled = table.supports_styling();
        Self {
            table,
            widths: table.column_widths(),
            box_chars: table.box_style(),
            styled,
            dim: styled && table.dim_border() && !table.style_config().border.is_plain(),
        }
    }

    pub(crate) fn render(&self) -> String {
        let b = self.box_chars;
        let mut out = String::new();

        push_line(&mut out, &self.edge(b.top[0], &self.spans(), b.down_tee(), b.top[3]));
        if self.widths.is_empty() {
            push_line(
                &mut out,
                &self.edge(b.bottom[0], &[], b.up_tee(), b.bottom[3]),
            );
            return out;
        }

        let blocks = self.blocks();
        for (i, block) in blocks.iter().enumerate() {
            for line in self.block_lines(*block) {
                push_line(&mut out, &line);
            }
            let next = blocks.get(i + 1).map(Block::kind);
            let border = Border::between(block.kind(), next);
            push_line(&mut out, &self.border(border));
            if block.kind() == BlockKind::Header && next.is_none() {
                push_line(&mut out, &self.border(Border::Bottom));
            }
        }
        out
    }

    /// Header, then each row followed by its descriptions.
    ///
    /// Descriptions need a column to hang under, so tables with fewer than
    /// two columns skip them.
    fn blocks(&self) -> Vec<Block<'t>> {
        let mut blocks = vec![Block::Header];
        let show_descriptions = self.widths.len() >= 2;
        for row in 0..self.table.rows().len() {
            blocks.push(Block::Row(row));
            if show_descriptions {
                blocks.extend(
                    self.table
                        .descriptions(row)
                        .iter()
                        .map(Block::Description),
                );
            }
        }
        blocks
    }

    fn block_lines(&self, block: Block<'_>) -> Vec<String> {
        match block {
            Block::Header => {
                let cells: Vec<Vec<String>> = self
                    .table
                    .headers()
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let highlight = self.styled && self.table.is_highlighted_header(i);
                        wrap(&self.view(header), self.widths[i])
                            .into_iter()
                            .map(|line| {
                                if highlight && !line.is_empty() {
                                    self.table.style_config().header.render(&line)
                                } else {
                                    line
                                }
                            })
                            .collect()
                    })
                    .collect();
                self.cell_lines(&cells)
            }
            Block::Row(row) => {
                let cells: Vec<Vec<String>> = self
                    .table
                    .row_cells(row)
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| wrap(&self.view(cell), self.widths[i]))
                    .collect();
                self.cell_lines(&cells)
            }
            Block::Description(description) => self.description_lines(description),
        }
    }

    /// Stored text as it should be rendered: verbatim, or stripped when
    /// styling is unsupported.
    fn view<'s>(&self, text: &'s str) -> Cow<'s, str> {
        if self.styled {
            Cow::Borrowed(text)
        } else {
            strip_styling(text)
        }
    }

    /// Lay wrapped cells side by side; shorter cells are padded with blanks.
    fn cell_lines(&self, cells: &[Vec<String>]) -> Vec<String> {
        let height = cells.iter().map(Vec::len).max().unwrap_or(0);
        let alignments = self.table.alignments();
        let vertical = self.glyph(self.box_chars.vertical());

        (0..height)
            .map(|line_no| {
                let mut line = vertical.clone();
                for (col, lines) in cells.iter().enumerate() {
                    let text = lines.get(line_no).map_or("", String::as_str);
                    line.push_str(&pad_cell(text, alignments[col], self.widths[col]));
                    line.push_str(&vertical);
                }
                line
            })
            .collect()
    }

    fn description_lines(&self, description: &Description) -> Vec<String> {
        let merged = self.merged_width();
        let mut content = Vec::new();

        if let Some(title) = &description.title {
            let title = self.view(title);
            let lines = wrap(&title, merged.saturating_sub(5));
            let last = lines.len() - 1;
            for (i, line) in lines.iter().enumerate() {
                let styled = if self.styled && !line.is_empty() {
                    self.table.style_config().title.render(line)
                } else {
                    line.clone()
                };
                let open = if i == 0 { " [ " } else { "   " };
                let close = if i == last { " ]" } else { "" };
                content.push(format!("{open}{styled}{close}"));
            }
        }

        for bullet in description.bullets() {
            content.extend(wrap_bullet(&self.view(bullet), merged.saturating_sub(1), BULLET));
        }

        let vertical = self.glyph(self.box_chars.vertical());
        let gutter = " ".repeat(self.spans()[0]);
        content
            .into_iter()
            .map(|text| {
                let pad = merged.saturating_sub(visible_length(&text));
                format!("{vertical}{gutter}{vertical}{text}{}{vertical}", " ".repeat(pad))
            })
            .collect()
    }

    fn border(&self, border: Border) -> String {
        let b = self.box_chars;
        let spans = self.spans();
        let (first, rest) = (spans[0], &spans[1..]);
        let merged = [self.merged_width()];
        let vertical = self.glyph(b.vertical());
        let gutter = " ".repeat(first);

        match border {
            Border::Top => self.edge(b.top[0], &spans, b.down_tee(), b.top[3]),
            Border::HeaderSeparator | Border::RowToRow => {
                self.edge(b.left_tee(), &spans, b.cross(), b.right_tee())
            }
            Border::Bottom => self.edge(b.bottom[0], &spans, b.up_tee(), b.bottom[3]),
            Border::RowToDescription => {
                let tail = self.edge(b.left_tee(), rest, b.up_tee(), b.right_tee());
                format!("{vertical}{gutter}{tail}")
            }
            Border::DescriptionToDescription => {
                let tail = self.edge(b.left_tee(), &merged, b.up_tee(), b.right_tee());
                format!("{vertical}{gutter}{tail}")
            }
            Border::DescriptionToRow => {
                let head = format!("{}{}", self.glyph(b.left_tee()), self.rule(first));
                let tail = self.edge(b.cross(), rest, b.down_tee(), b.right_tee());
                format!("{head}{tail}")
            }
            Border::DescriptionBottom => {
                let head = format!("{}{}", self.glyph(b.bottom[0]), self.rule(first));
                let tail = self.edge(b.up_tee(), &merged, b.up_tee(), b.bottom[3]);
                format!("{head}{tail}")
            }
        }
    }

    /// `left`, then a horizontal run per span separated by `junction`, then
    /// `right`.
    fn edge(&self, left: char, spans: &[usize], junction: char, right: char) -> String {
        let mut line = self.glyph(left);
        for (i, &span) in spans.iter().enumerate() {
            line.push_str(&self.rule(span));
            if i + 1 < spans.len() {
                line.push_str(&self.glyph(junction));
            }
        }
        line.push_str(&self.glyph(right));
        line
    }

    /// Full horizontal run of each column, padding included.
    fn spans(&self) -> Vec<usize> {
        self.widths.iter().map(|w| w + 2 * CELL_PADDING).collect()
    }

    fn merged_width(&self) -> usize {
        widths::merged_width(self.widths)
    }

    fn glyph(&self, c: char) -> String {
        if self.table.borderless() {
            " ".to_string()
        } else if self.dim {
            self.table.style_config().border.render(&c.to_string())
        } else {
            c.to_string()
        }
    }

    fn rule(&self, width: usize) -> String {
        if self.table.borderless() {
            " ".repeat(width)
        } else {
            let line: String = std::iter::repeat_n(self.box_chars.horizontal(), width).collect();
            if self.dim {
                self.table.style_config().border.render(&line)
            } else {
                line
            }
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn pad_cell(text: &str, alignment: Alignment, width: usize) -> String {
    let padding = " ".repeat(CELL_PADDING);
    let body = alignment.pad(text, visible_length(text), width);
    format!("{padding}{body}{padding}")
}
