//! End-to-end tests for table groups.
//!
//! Run with: RUST_LOG=advisory_table=debug cargo test --test e2e_group -- --nocapture

mod common;

use advisory_table::prelude::*;
use advisory_table::renderables::widths::MAX_COLUMN_WIDTH;
use common::{assert_rectangular, init_test_logging, line_widths, plain_table};

fn member(first_cell: &str) -> Table {
    let mut table = plain_table(&["Name", "Value"]);
    table.add_row([first_cell, "1"]);
    table
}

#[test]
fn e2e_group_widest_cell_wins() {
    init_test_logging();
    let mut group = TableGroup::new();
    group.add(member(&"a".repeat(25)));
    group.add(member("short"));
    group.sync_column_widths();

    for table in group.tables() {
        assert_eq!(table.column_widths()[0], 25);
    }

    let output = group.render();
    let widths = line_widths(&output);
    assert!(widths.iter().all(|&w| w == widths[0]), "{output}");
}

#[test]
fn e2e_group_global_cap() {
    init_test_logging();
    let mut group = TableGroup::new();
    group.add(member(&"a".repeat(90)));
    group.add(member("b"));
    group.sync_column_widths();
    assert!(
        group
            .tables()
            .iter()
            .all(|t| t.column_widths()[0] == MAX_COLUMN_WIDTH)
    );
}

#[test]
fn e2e_group_render_does_not_recompute() {
    init_test_logging();
    let mut group = TableGroup::new();
    group.add(member(&"a".repeat(20)));
    group.add(member("b"));
    group.sync_column_widths();

    let second = group.get_mut(1).map(Table::render).unwrap_or_default();
    assert!(second.contains(&format!("│ b{} │ 1     │", " ".repeat(19))), "{second}");
    assert_rectangular(&second);
}

#[test]
fn e2e_group_members_keep_own_descriptions() {
    init_test_logging();
    let mut group = TableGroup::new();
    group
        .add(member("alpha"))
        .add_description_with_title(0, "Advisory", "Only in the first table");
    group.add(member("beta-gamma"));
    group.sync_column_widths();

    let output = group.render();
    assert_eq!(output.matches("[ Advisory ]").count(), 1);
    assert_eq!(output.matches('┌').count(), 2);
    assert_rectangular(&output);
}

#[test_log::test]
fn e2e_group_empty_render() {
    let mut group = TableGroup::new();
    group.sync_column_widths();
    assert!(group.is_empty());
    assert!(group.column_widths().is_empty());
    assert_eq!(group.render(), "");
}

#[test]
fn e2e_group_members_edit_after_add() {
    let mut group = TableGroup::new();
    let id = group.id();
    group.add(member("x")).set_alignment(1, Alignment::Right);
    for table in group.tables_mut() {
        table.add_row(["later", "22"]);
    }
    group.sync_column_widths();

    assert!(group.tables().iter().all(|t| t.group() == Some(id)));
    let output = group.render();
    assert!(output.contains("│ later │    22 │"), "{output}");
}

#[test]
fn e2e_group_adding_after_sync_needs_resync() {
    let mut group = TableGroup::new();
    group.add(member("first"));
    group.sync_column_widths();
    group.add(member("a-much-longer-name"));

    // Never synced: computes its own widths.
    let late = group.get_mut(1).map(Table::render).unwrap_or_default();
    assert!(late.contains("│ a-much-longer-name │"));
    assert_eq!(group.tables()[0].column_widths()[0], 5);

    group.sync_column_widths();
    assert_eq!(group.tables()[0].column_widths()[0], 18);
}
