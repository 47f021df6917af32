//! Array exercises: single-pass scans over integer slices.
//!
//! Each function is pure, allocates at most O(n) auxiliary state, and runs
//! in a single pass (or two sweeps for [`product_except_self`]):
//!
//! - [`two_sum`]: hash-map complement lookup
//! - [`contains_duplicate`]: seen-set membership
//! - [`max_profit`]: running-minimum scan
//! - [`product_except_self`]: prefix/suffix products, no division
//!
//! # Examples
//!
//! ```
//! use practicar::array::two_sum;
//!
//! assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
//! assert_eq!(two_sum(&[1, 2, 3], 100), None);
//! ```

use std::collections::{HashMap, HashSet};

/// Finds two distinct indices whose elements sum to `target`.
///
/// Returns `Some((i, j))` with `i < j` and `nums[i] + nums[j] == target`,
/// or `None` when no such pair exists. The same element is never used
/// twice, but two equal elements at different indices are a valid pair.
///
/// Single pass: for each element, look up the complement among elements
/// already seen, then record the element itself. O(n) time, O(n) space.
///
/// # Examples
///
/// ```
/// use practicar::array::two_sum;
///
/// assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
/// assert_eq!(two_sum(&[-1, -2, -3, -4, -5], -8), Some((2, 4)));
/// ```
#[must_use]
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (j, &num) in nums.iter().enumerate() {
        if let Some(&i) = seen.get(&(target - num)) {
            return Some((i, j));
        }
        seen.entry(num).or_insert(j);
    }
    None
}

/// Returns true iff some value occurs more than once in `nums`.
///
/// # Examples
///
/// ```
/// use practicar::array::contains_duplicate;
///
/// assert!(contains_duplicate(&[1, 2, 3, 1]));
/// assert!(!contains_duplicate(&[]));
/// ```
#[must_use]
pub fn contains_duplicate(nums: &[i64]) -> bool {
    let mut seen: HashSet<i64> = HashSet::with_capacity(nums.len());
    nums.iter().any(|&num| !seen.insert(num))
}

/// Maximum gain from one buy followed by one later sell, floored at 0.
///
/// Equals `max(prices[j] - prices[i])` over all `i < j`, or 0 when every
/// such difference is negative (or when fewer than two prices exist).
/// Single pass tracking the running minimum buy price.
///
/// # Examples
///
/// ```
/// use practicar::array::max_profit;
///
/// assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 5);
/// assert_eq!(max_profit(&[7, 6, 4, 3, 1]), 0);
/// ```
#[must_use]
pub fn max_profit(prices: &[i64]) -> i64 {
    let mut best = 0;
    let mut min_price = i64::MAX;
    for &price in prices {
        min_price = min_price.min(price);
        best = best.max(price - min_price);
    }
    best
}

/// For each index, the product of every other element — without division.
///
/// Two sweeps: a forward pass writes the product of the prefix strictly
/// before each index, then a backward pass multiplies in the product of
/// the suffix strictly after it. Division-free, so zeros propagate
/// correctly: one zero zeroes every slot but its own, two zeros zero
/// everything.
///
/// # Examples
///
/// ```
/// use practicar::array::product_except_self;
///
/// assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
/// assert_eq!(product_except_self(&[0, 1, 2, 3]), vec![6, 0, 0, 0]);
/// ```
#[must_use]
pub fn product_except_self(nums: &[i64]) -> Vec<i64> {
    let mut out = vec![1; nums.len()];

    let mut prefix = 1;
    for (i, &num) in nums.iter().enumerate() {
        out[i] = prefix;
        prefix *= num;
    }

    let mut suffix = 1;
    for (i, &num) in nums.iter().enumerate().rev() {
        out[i] *= suffix;
        suffix *= num;
    }

    out
}
