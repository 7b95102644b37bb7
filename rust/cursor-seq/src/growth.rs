//! Capacity policy of the backing store.
//!
//! A full store grows to `⌊capacity × GROWTH_NUMERATOR / GROWTH_DENOMINATOR⌋ + GROWTH_INCREMENT`
//! slots, i.e. `⌊1.25 × capacity⌋ + 1`. For every capacity of at least
//! [`MIN_CAPACITY`] the grown capacity is strictly larger, so a single
//! growth step always makes room for one more item.

/// Smallest capacity a backing store may have, even when empty.
pub const MIN_CAPACITY: usize = 1;

pub const GROWTH_NUMERATOR: usize = 5;

pub const GROWTH_DENOMINATOR: usize = 4;

pub const GROWTH_INCREMENT: usize = 1;

/// Returns the capacity a full store of `capacity` slots grows to.
///
/// Saturates at `usize::MAX`.
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    // floor(c * N / D) split into whole and remainder parts so that
    // the multiplication cannot overflow for large capacities.
    let whole = (capacity / GROWTH_DENOMINATOR).saturating_mul(GROWTH_NUMERATOR);
    let rem = (capacity % GROWTH_DENOMINATOR) * GROWTH_NUMERATOR / GROWTH_DENOMINATOR;
    whole.saturating_add(rem).saturating_add(GROWTH_INCREMENT)
}

/// Clamps a requested capacity to at least [`MIN_CAPACITY`] and at least `count`.
#[inline]
pub fn clamp_capacity(requested: usize, count: usize) -> usize {
    requested.max(MIN_CAPACITY).max(count)
}
