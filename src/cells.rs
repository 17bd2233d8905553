//! Unicode character cell width calculations.
//!
//! Column widths are measured in terminal cells, not bytes: most characters
//! take one cell, CJK ideographs and many emoji take two, and control
//! characters take none.

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use unicode_width::UnicodeWidthChar;

use crate::sync::lock_recover;

/// Minimum string length to cache (shorter strings have minimal overhead).
const CACHE_MIN_LEN: usize = 8;

/// Number of distinct strings remembered by the width cache.
const CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(1024).unwrap();

/// LRU cache for `cell_len` calculations.
///
/// A table measures every cell at least twice (allocation, then padding),
/// so longer strings are remembered.
static CELL_LEN_CACHE: LazyLock<Mutex<LruCache<String, usize>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(CACHE_CAPACITY)));

/// Get the cell width of a single character.
#[must_use]
pub fn get_character_cell_size(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[inline]
fn compute_cell_width(text: &str) -> usize {
    text.chars().map(get_character_cell_size).sum()
}

/// Get the total cell width of a string.
///
/// The string must already be free of escape sequences; see
/// [`crate::ansi::visible_length`] for styled input.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    if text.len() < CACHE_MIN_LEN {
        return compute_cell_width(text);
    }

    if let Some(&cached) = lock_recover(&CELL_LEN_CACHE).get(text) {
        return cached;
    }

    let width = compute_cell_width(text);
    lock_recover(&CELL_LEN_CACHE).put(text.to_string(), width);
    width
}
