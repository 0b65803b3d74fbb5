//! Bounded binary search over a non-decreasing slice.
//!
//! The slice is assumed to be sorted; nothing here checks it. Two guard clauses
//! short-circuit the obvious misses (empty input, target outside
//! `[nums[0], nums[n-1]]`) before the bisection loop starts.

use std::cmp::Ordering;
use std::fmt::Debug;

/// Sentinel returned by [`search`] when the target is absent.
pub const NOT_FOUND: isize = -1;

/// Index of an element equal to `target`, or `None`.
///
/// With duplicates, any matching index may be returned.
pub fn position<T: Ord + Debug>(nums: &[T], target: &T) -> Option<usize> {
    tracing::debug!(len = nums.len(), ?target, "binary search");

    let (first, last) = match (nums.first(), nums.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            tracing::debug!("empty input");
            return None;
        }
    };

    if target < first || target > last {
        tracing::debug!(?first, ?last, "target outside array bounds");
        return None;
    }

    // Inclusive bounds.
    let mut left = 0usize;
    let mut right = nums.len() - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        let value = &nums[mid];
        tracing::trace!(index = mid, ?value, "checking");

        match target.cmp(value) {
            Ordering::Equal => {
                tracing::debug!(index = mid, "found target");
                return Some(mid);
            }
            Ordering::Less => {
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
            Ordering::Greater => left = mid + 1,
        }
    }

    None
}

/// Sentinel-style search: the index of `target`, or [`NOT_FOUND`] (-1).
pub fn search<T: Ord + Debug>(nums: &[T], target: &T) -> isize {
    // Slice lengths never exceed isize::MAX.
    position(nums, target).map_or(NOT_FOUND, |index| index as isize)
}
