//! Column width allocation.
//!
//! Widths are content widths: the cells between a column's padding. A table
//! with widths `w` occupies `1 + Σ(w[i] + 3)` cells (left edge, then each
//! column's content, two padding spaces and its right divider).

use std::collections::BTreeMap;

use crate::ansi::visible_length;

/// Global cap on a column's natural width.
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Shrinking never takes a column below this width.
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Spaces on each side of cell content.
pub const CELL_PADDING: usize = 1;

/// Smallest per-column cap: the width of the widest single character, so a
/// capped column never has to hold a character wider than itself.
pub const MIN_CAP_WIDTH: usize = 2;

/// Narrowest merged description area: the ` [ ` and ` ]` title frame around
/// [`MIN_COLUMN_WIDTH`] cells of text. Bullets need one cell less.
pub const MIN_MERGED_WIDTH: usize = 5 + MIN_COLUMN_WIDTH;

/// Total rendered width of a table with the given content widths.
#[must_use]
pub fn total_width(widths: &[usize]) -> usize {
    1 + widths
        .iter()
        .map(|w| w + 2 * CELL_PADDING + 1)
        .sum::<usize>()
}

/// Width of columns 2..N merged together, dividers included.
#[must_use]
pub fn merged_width(widths: &[usize]) -> usize {
    let rest = widths.get(1..).unwrap_or_default();
    rest.iter().map(|w| w + 2 * CELL_PADDING).sum::<usize>() + rest.len().saturating_sub(1)
}

/// Widen the last column until [`merged_width`] reaches `room`.
///
/// Tables with fewer than two columns have no merged area and are left
/// alone.
pub fn reserve_merged_width(widths: &mut [usize], room: usize) {
    if widths.len() < 2 {
        return;
    }
    let missing = room.saturating_sub(merged_width(widths));
    if let Some(last) = widths.last_mut() {
        *last += missing;
    }
    if missing > 0 {
        log::trace!("widened last column by {missing} cells for descriptions");
    }
}

/// Widest visible header or cell per column, clamped to the global cap and
/// any per-column cap.
///
/// Cells beyond the header count are ignored.
#[must_use]
pub fn minimum_widths(
    headers: &[String],
    rows: &[Vec<String>],
    max_widths: &BTreeMap<usize, usize>,
) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| visible_length(h)).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(visible_length(cell));
        }
    }

    for (i, width) in widths.iter_mut().enumerate() {
        *width = (*width).min(column_cap(i, max_widths));
    }
    widths
}

fn column_cap(column: usize, max_widths: &BTreeMap<usize, usize>) -> usize {
    max_widths
        .get(&column)
        .map_or(MAX_COLUMN_WIDTH, |&cap| cap.min(MAX_COLUMN_WIDTH))
}

/// Shrink `widths` to fit `console_width`, or grow them to fill it when
/// `fill` is set.
///
/// Shrinking stops at [`MIN_COLUMN_WIDTH`]; anything still overflowing is
/// left to overflow.
pub fn fit_to_console(
    widths: &mut [usize],
    console_width: usize,
    fill: bool,
    max_widths: &BTreeMap<usize, usize>,
) {
    let total = total_width(widths);
    if total > console_width {
        shrink(widths, total - console_width);
    } else if fill && total < console_width {
        expand(widths, console_width - total, max_widths);
    }
    log::trace!("fitted widths {widths:?} into {console_width} cells (fill: {fill})");
}

/// Take `excess` cells away, always from the currently widest column.
///
/// Wide columns give up a fifth of the remaining excess at a time rather
/// than one cell per pass.
fn shrink(widths: &mut [usize], mut excess: usize) {
    while excess > 0 {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > MIN_COLUMN_WIDTH)
            .fold(None::<(usize, usize)>, |best, (i, &w)| match best {
                Some((_, best_w)) if best_w >= w => best,
                _ => Some((i, w)),
            });

        let Some((idx, width)) = widest else {
            log::debug!("cannot shrink further, {excess} cells of overflow remain");
            break;
        };

        let step = if excess > 5 && width > 10 {
            (excess / 5).min(width - MIN_COLUMN_WIDTH)
        } else {
            1
        };
        widths[idx] -= step;
        excess = excess.saturating_sub(step);
    }
}

/// Spread `extra` cells evenly over columns below their cap; the first
/// columns take the remainder.
fn expand(widths: &mut [usize], extra: usize, max_widths: &BTreeMap<usize, usize>) {
    let below_cap = |i: usize, w: usize| max_widths.get(&i).is_none_or(|&cap| w < cap);

    let expandable = widths
        .iter()
        .enumerate()
        .filter(|&(i, &w)| below_cap(i, w))
        .count();
    if expandable == 0 {
        return;
    }

    let per_column = extra / expandable;
    let mut remainder = extra % expandable;

    for (i, width) in widths.iter_mut().enumerate() {
        if !below_cap(i, *width) {
            continue;
        }
        *width += per_column;
        if remainder > 0 {
            *width += 1;
            remainder -= 1;
        }
        if let Some(&cap) = max_widths.get(&i) {
            *width = (*width).min(cap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_total_width() {
        assert_eq!(total_width(&[]), 1);
        assert_eq!(total_width(&[5, 3, 13]), 31);
    }

    #[test]
    fn test_minimum_widths_from_headers_and_cells() {
        let headers = strings(&["Name", "Age", "City"]);
        let rows = vec![
            strings(&["Alice", "30", "New York"]),
            strings(&["Bob", "25", "San Francisco"]),
        ];
        assert_eq!(minimum_widths(&headers, &rows, &BTreeMap::new()), [5, 3, 13]);
    }

    #[test]
    fn test_minimum_widths_ignore_styling() {
        let headers = strings(&["H"]);
        let rows = vec![strings(&["\x1b[31mred\x1b[0m"])];
        assert_eq!(minimum_widths(&headers, &rows, &BTreeMap::new()), [3]);
    }

    #[test]
    fn test_minimum_widths_caps() {
        let headers = strings(&["A", "B"]);
        let rows = vec![vec![
            "x".repeat(80),
            "ThisIsLong".to_string(),
            "ignored-extra-cell".repeat(5),
        ]];
        let caps = BTreeMap::from([(1, 5)]);
        assert_eq!(minimum_widths(&headers, &rows, &caps), [MAX_COLUMN_WIDTH, 5]);
    }

    #[test]
    fn test_per_column_cap_above_global_cap() {
        let headers = strings(&["A"]);
        let rows = vec![vec!["x".repeat(80)]];
        let caps = BTreeMap::from([(0, 70)]);
        assert_eq!(minimum_widths(&headers, &rows, &caps), [MAX_COLUMN_WIDTH]);
    }

    #[test]
    fn test_merged_width() {
        assert_eq!(merged_width(&[]), 0);
        assert_eq!(merged_width(&[5]), 0);
        assert_eq!(merged_width(&[5, 3, 13]), 21);
    }

    #[test]
    fn test_reserve_merged_width_grows_last_column() {
        let mut widths = vec![4, 1];
        reserve_merged_width(&mut widths, MIN_MERGED_WIDTH);
        assert_eq!(widths, [4, 6]);
        assert_eq!(merged_width(&widths), MIN_MERGED_WIDTH);

        let mut three = vec![4, 1, 1];
        reserve_merged_width(&mut three, MIN_MERGED_WIDTH);
        assert_eq!(three, [4, 1, 2]);
    }

    #[test]
    fn test_reserve_merged_width_leaves_wide_tables() {
        let mut widths = vec![5, 3, 13];
        reserve_merged_width(&mut widths, MIN_MERGED_WIDTH);
        assert_eq!(widths, [5, 3, 13]);

        let mut single = vec![1];
        reserve_merged_width(&mut single, MIN_MERGED_WIDTH);
        assert_eq!(single, [1]);
    }

    #[test]
    fn test_fit_leaves_fitting_widths_alone() {
        let mut widths = vec![5, 3, 13];
        fit_to_console(&mut widths, 80, false, &BTreeMap::new());
        assert_eq!(widths, [5, 3, 13]);
    }

    #[test]
    fn test_shrink_to_console() {
        let mut widths = vec![40, 40, 10];
        fit_to_console(&mut widths, 60, false, &BTreeMap::new());
        assert!(total_width(&widths) <= 60, "{widths:?}");
        assert!(widths.iter().all(|&w| w >= MIN_COLUMN_WIDTH));
        assert_eq!(widths[2], 10);
    }

    #[test]
    fn test_shrink_takes_widest_first() {
        let mut widths = vec![10, 8];
        // total 25, budget 24
        fit_to_console(&mut widths, 24, false, &BTreeMap::new());
        assert_eq!(widths, [9, 8]);
    }

    #[test]
    fn test_shrink_stops_at_floor() {
        let mut widths = vec![20, 20, 20];
        fit_to_console(&mut widths, 5, false, &BTreeMap::new());
        assert_eq!(widths, [3, 3, 3]);
    }

    #[test]
    fn test_shrink_never_raises_narrow_columns() {
        let mut widths = vec![1, 2, 30];
        fit_to_console(&mut widths, 10, false, &BTreeMap::new());
        assert_eq!(widths, [1, 2, 3]);
    }

    #[test]
    fn test_expand_fills_console() {
        let mut widths = vec![5, 7];
        // total 19, budget 50: 31 spare cells, 16 + 15
        fit_to_console(&mut widths, 50, true, &BTreeMap::new());
        assert_eq!(widths, [21, 22]);
        assert_eq!(total_width(&widths), 50);
    }

    #[test]
    fn test_expand_respects_caps() {
        let mut widths = vec![5, 7];
        let caps = BTreeMap::from([(0, 8)]);
        fit_to_console(&mut widths, 50, true, &caps);
        assert_eq!(widths, [8, 22]);
    }

    #[test]
    fn test_expand_skips_capped_columns() {
        let mut widths = vec![5, 7];
        let caps = BTreeMap::from([(0, 5)]);
        fit_to_console(&mut widths, 50, true, &caps);
        assert_eq!(widths, [5, 38]);
        assert_eq!(total_width(&widths), 50);
    }

    #[test]
    fn test_no_expand_without_fill() {
        let mut widths = vec![5, 7];
        fit_to_console(&mut widths, 50, false, &BTreeMap::new());
        assert_eq!(widths, [5, 7]);
    }
}
