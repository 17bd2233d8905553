//! Mutex helpers shared by the width cache and the logger.
//!
//! Both guarded values are safe to reuse after a panicking holder: the cell
//! width cache only ever holds recomputable widths, and the logger keeps the
//! last printed timestamp and its output sink. Locks therefore recover from poison instead of
//! propagating it.

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering the inner value if a previous holder panicked.
///
/// ```rust
/// use std::sync::Mutex;
/// use advisory_table::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// assert_eq!(*lock_recover(&mutex), 42);
/// ```
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::debug!("recovered poisoned mutex");
        poisoned.into_inner()
    })
}
