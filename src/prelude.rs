//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use practicar::prelude::*;
//! ```

pub use crate::array::{contains_duplicate, max_profit, product_except_self, two_sum};
pub use crate::error::{PracticarError, Result};
pub use crate::graph::{
    can_finish, clone_graph, from_adjacency_list, to_adjacency_list, topological_order, GraphNode,
    NodeRef,
};
pub use crate::grid::{num_islands, Grid};
pub use crate::text::{group_anagrams, is_anagram};
