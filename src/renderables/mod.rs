//! Table rendering.
//!
//! - [`Table`]: headers, rows and per-row description blocks
//! - [`TableGroup`]: tables that share column widths
//! - [`widths`]: natural widths and console fitting
//! - [`layout`]: the block sequence and the border glyphs between blocks
//!
//! # Examples
//!
//! ```
//! use advisory_table::renderables::Table;
//!
//! let mut table = Table::new(["Package", "Version"]);
//! table.set_console_width(80).set_supports_styling(false);
//! table.add_row(["regex", "1.12"]);
//! table.add_description_with_title(0, "Advisory", "Upgrade recommended");
//!
//! let output = table.render();
//! assert!(output.contains("[ Advisory ]"));
//! assert!(output.contains("• Upgrade recommended"));
//! ```

pub mod group;
pub mod layout;
pub mod table;
pub mod widths;

pub use group::{GroupId, TableGroup};
pub use layout::{BlockKind, Border};
pub use table::{Alignment, AlignmentParseError, Description, Table};
