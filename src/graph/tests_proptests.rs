//! Property tests for graph exercises over randomly generated graphs.

use super::*;
use proptest::prelude::*;

/// Builds symmetric 1-indexed neighbor lists from an undirected edge set
/// over `n` nodes, so every node is represented (possibly isolated).
fn undirected_adjacency(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); n];
    for &(a, b) in edges {
        let (a, b) = (a % n, b % n);
        adjacency[a].push(b + 1);
        if a != b {
            adjacency[b].push(a + 1);
        }
    }
    adjacency
}

/// Connects node 0 to every other node so the whole fixture is reachable.
fn connect(mut adjacency: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    for i in 1..adjacency.len() {
        adjacency[0].push(i + 1);
        adjacency[i].push(1);
    }
    adjacency
}

proptest! {
    /// The clone of any connected graph is structurally identical to it.
    #[test]
    fn prop_clone_preserves_structure(
        n in 1_usize..12,
        edges in prop::collection::vec((0_usize..12, 0_usize..12), 0..30)
    ) {
        let adjacency = connect(undirected_adjacency(n, &edges));
        let original = from_adjacency_list(&adjacency);
        let cloned = clone_graph(original.as_ref());

        prop_assert_eq!(
            to_adjacency_list(cloned.as_ref()),
            to_adjacency_list(original.as_ref())
        );
    }

    /// Clone and original never share a node allocation, and the clone has
    /// exactly as many nodes as the original.
    #[test]
    fn prop_clone_is_disjoint(
        n in 1_usize..12,
        edges in prop::collection::vec((0_usize..12, 0_usize..12), 0..30)
    ) {
        let adjacency = connect(undirected_adjacency(n, &edges));
        let original = from_adjacency_list(&adjacency);
        let cloned = clone_graph(original.as_ref());

        let original_ids = identities(original.as_ref());
        let cloned_ids = identities(cloned.as_ref());
        prop_assert!(original_ids.is_disjoint(&cloned_ids));
        prop_assert_eq!(original_ids.len(), cloned_ids.len());
    }

    /// Forward-only edges form a DAG, so scheduling always succeeds and the
    /// produced order respects every pair.
    #[test]
    fn prop_forward_edges_always_feasible(
        n in 1_usize..20,
        raw in prop::collection::vec((0_usize..20, 0_usize..20), 0..40)
    ) {
        // orient each pair from the smaller course to the larger
        let pairs: Vec<(usize, usize)> = raw
            .iter()
            .map(|&(a, b)| (a % n, b % n))
            .filter(|&(a, b)| a != b)
            .map(|(a, b)| (a.max(b), a.min(b)))
            .collect();

        let order = topological_order(n, &pairs);
        prop_assert!(order.is_some());
        prop_assert!(can_finish(n, &pairs));

        let order = order.expect("checked above");
        prop_assert_eq!(order.len(), n);
        let position: HashMap<usize, usize> =
            order.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        for &(course, prereq) in &pairs {
            prop_assert!(position[&prereq] < position[&course]);
        }
    }

    /// Planting a directed cycle on top of any pair set makes scheduling
    /// infeasible.
    #[test]
    fn prop_planted_cycle_infeasible(
        n in 2_usize..20,
        raw in prop::collection::vec((0_usize..20, 0_usize..20), 0..40),
        cycle_len in 2_usize..6
    ) {
        let mut pairs: Vec<(usize, usize)> = raw
            .iter()
            .map(|&(a, b)| (a % n, b % n))
            .collect();
        let len = cycle_len.min(n);
        for i in 0..len {
            pairs.push(((i + 1) % len, i));
        }
        prop_assert!(!can_finish(n, &pairs));
    }

    /// A self-loop anywhere is always infeasible.
    #[test]
    fn prop_self_loop_infeasible(n in 1_usize..20, course in 0_usize..20) {
        let course = course % n;
        prop_assert!(!can_finish(n, &[(course, course)]));
    }
}

/// Identity set of the reachable graph, for disjointness checks.
fn identities(node: Option<&NodeRef>) -> HashSet<*const RefCell<GraphNode>> {
    let mut seen = HashSet::new();
    let Some(start) = node else {
        return seen;
    };
    let mut stack = vec![Rc::clone(start)];
    seen.insert(Rc::as_ptr(start));
    while let Some(current) = stack.pop() {
        for neighbor in &current.borrow().neighbors {
            if seen.insert(Rc::as_ptr(neighbor)) {
                stack.push(Rc::clone(neighbor));
            }
        }
    }
    seen
}
