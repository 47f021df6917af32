//! Practicar: classic algorithm exercises in pure Rust.
//!
//! Practicar collects the canonical warm-up problems — hash-map lookups,
//! frequency counting, flood fill, cyclic-graph cloning, topological
//! feasibility — as a small library of pure functions with exhaustive
//! tests. Every function is total over its documented input domain:
//! negative results are ordinary return values (`false`, `None`, `0`),
//! never errors.
//!
//! # Quick Start
//!
//! ```
//! use practicar::prelude::*;
//!
//! assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
//! assert!(is_anagram("anagram", "nagaram"));
//! assert!(can_finish(2, &[(1, 0)]));
//!
//! let grid = Grid::from_rows(&[
//!     "11000",
//!     "11000",
//!     "00100",
//!     "00011",
//! ]).expect("rows have equal length");
//! assert_eq!(num_islands(&grid), 3);
//! ```
//!
//! # Modules
//!
//! - [`array`]: single-pass scans over integer slices (two-sum, duplicates,
//!   stock profit, products without division)
//! - [`text`]: character-frequency problems (anagram check and grouping)
//! - [`grid`]: rectangular char grids and 4-directional flood fill
//! - [`graph`]: deep-copying cyclic graphs and course-schedule feasibility
//! - [`error`]: the crate error type (only constructors are fallible)

pub mod array;
pub mod error;
pub mod graph;
pub mod grid;
pub mod prelude;
pub mod text;

pub use error::{PracticarError, Result};
pub use grid::Grid;
