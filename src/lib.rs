//! # advisory_table
//!
//! Box-drawn terminal tables with per-row advisory blocks.
//!
//! A table holds display strings. Any row can carry description blocks,
//! which render directly beneath it with column 1 left open and columns
//! 2..N merged into a single bulleted area. Cell content may carry escape
//! sequences; they never count toward widths and are stripped when the
//! output cannot show them.
//!
//! ## Quick Start
//!
//! ```
//! use advisory_table::prelude::*;
//!
//! let mut table = Table::new(["Name", "Age", "City"]);
//! table.set_console_width(80).set_supports_styling(false);
//! table.add_row(["Alice", "30", "New York"]);
//! table.add_row(["Bob", "25", "San Francisco"]);
//! table.add_description(0, "Special customer discount applied");
//!
//! print!("{}", table.render());
//! ```
//!
//! ## Core Concepts
//!
//! - **Table**: headers, rows, descriptions and render options
//! - **`TableGroup`**: several tables forced to the same column widths
//! - **Wrapping**: lists break at commas, paths at `/`, prose at spaces
//! - **Measurement**: widths are terminal cells, escape sequences excluded

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod ansi;
pub mod r#box;
pub mod cells;
pub mod logging;
pub mod renderables;
pub mod style;
pub mod sync;
pub mod terminal;
pub mod wrap;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::r#box::{ASCII, BoxChars, ROUNDED, SQUARE};
    pub use crate::logging::TableLogger;
    pub use crate::renderables::{
        Alignment, AlignmentParseError, Description, GroupId, Table, TableGroup,
    };
    pub use crate::style::{Attributes, Style, StyleConfig};
}

// Re-export key types at crate root
pub use renderables::{Alignment, Table, TableGroup};
pub use style::{Style, StyleConfig};
