//! Table groups: several tables sharing one set of column widths.
//!
//! A [`TableGroup`] owns its member tables. Each member only remembers the
//! [`GroupId`] of the group it joined, which tells it to keep the widths the
//! group assigned instead of computing its own on render.
//!
//! # Examples
//!
//! ```
//! use advisory_table::renderables::{Table, TableGroup};
//!
//! let mut group = TableGroup::new();
//! for name in ["short", "a much longer name"] {
//!     let mut table = Table::new(["Name", "Value"]);
//!     table.set_console_width(80).set_supports_styling(false);
//!     table.add_row([name, "1"]);
//!     group.add(table);
//! }
//! group.sync_column_widths();
//!
//! let widths: Vec<_> = group.tables().iter().map(|t| t.column_widths().to_vec()).collect();
//! assert_eq!(widths[0], widths[1]);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use super::table::Table;
use super::widths::{self, MAX_COLUMN_WIDTH};

static NEXT_GROUP_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`TableGroup`], carried by each member table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u64);

impl GroupId {
    fn next() -> Self {
        Self(NEXT_GROUP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Tables whose shared columns are forced to a common width.
#[derive(Debug)]
pub struct TableGroup {
    id: GroupId,
    tables: Vec<Table>,
    column_widths: Vec<usize>,
}

impl Default for TableGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl TableGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: GroupId::next(),
            tables: Vec::new(),
            column_widths: Vec::new(),
        }
    }

    /// This group's identity.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Take ownership of `table` and return a handle for further edits.
    pub fn add(&mut self, mut table: Table) -> &mut Table {
        table.join_group(self.id);
        let index = self.tables.len();
        self.tables.push(table);
        &mut self.tables[index]
    }

    /// Member tables in insertion order.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Mutable access to every member.
    pub fn tables_mut(&mut self) -> &mut [Table] {
        &mut self.tables
    }

    /// Mutable access to one member.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Table> {
        self.tables.get_mut(index)
    }

    /// Number of member tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Shared widths from the last sync. Empty before the first one.
    #[must_use]
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Compute the shared widths and hand them to every member.
    ///
    /// Columns are matched by position; only the first `min(column_count)`
    /// columns are shared. Each shared width is the widest member's natural
    /// width, clamped to the smallest cap any member declares for that
    /// column. Members then fit the result to their own console width.
    ///
    /// Call after all members are added and before rendering them.
    pub fn sync_column_widths(&mut self) {
        let Some(shared) = self.tables.iter().map(Table::column_count).min() else {
            return;
        };

        let naturals: Vec<Vec<usize>> = self.tables.iter().map(Table::minimum_widths).collect();
        self.column_widths = (0..shared)
            .map(|col| {
                let widest = naturals.iter().map(|w| w[col]).max().unwrap_or(0);
                let cap = self
                    .tables
                    .iter()
                    .filter_map(|t| t.max_width(col))
                    .fold(MAX_COLUMN_WIDTH, usize::min);
                widest.min(cap)
            })
            .collect();

        // A member whose last column is shared needs its description room
        // reserved in the shared widths, or fitting would widen it alone.
        let room = self
            .tables
            .iter()
            .filter(|t| t.column_count() == shared)
            .map(Table::description_room)
            .max()
            .unwrap_or(0);
        widths::reserve_merged_width(&mut self.column_widths, room);

        for (table, mut widths) in self.tables.iter_mut().zip(naturals) {
            widths[..shared].copy_from_slice(&self.column_widths);
            table.assign_column_widths(widths);
            table.fit_to_console();
        }
        log::debug!(
            "synced {} tables to shared widths {:?}",
            self.tables.len(),
            self.column_widths
        );
    }

    /// Render every member in insertion order.
    pub fn render(&mut self) -> String {
        self.tables.iter_mut().map(Table::render).collect()
    }
}
