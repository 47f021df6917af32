//! Graph exercises: deep-copying cyclic graphs and course scheduling.
//!
//! Two independent problems share this module because both are about
//! directed traversal with explicit visited tracking:
//!
//! - [`clone_graph`]: deep copy of an arbitrary (possibly cyclic) graph of
//!   shared, identity-bearing nodes
//! - [`can_finish`] / [`topological_order`]: cycle detection over a course
//!   dependency graph via Kahn's algorithm
//!
//! # Examples
//!
//! ```
//! use practicar::graph::can_finish;
//!
//! assert!(can_finish(2, &[(1, 0)]));
//! assert!(!can_finish(2, &[(1, 0), (0, 1)]));
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::rc::Rc;

/// Shared handle to a [`GraphNode`].
///
/// Nodes own their neighbors through shared references, so cycles (including
/// self-loops) are representable; identity is the `Rc` allocation, not the
/// value, which may repeat across nodes.
pub type NodeRef = Rc<RefCell<GraphNode>>;

/// A node in an undirected graph: an integer value plus neighbor handles.
#[derive(Debug)]
pub struct GraphNode {
    /// Node value (not necessarily unique).
    pub val: i32,
    /// Neighbor handles, in insertion order.
    pub neighbors: Vec<NodeRef>,
}

impl GraphNode {
    /// Creates an isolated node and returns a shared handle to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use practicar::graph::GraphNode;
    ///
    /// let node = GraphNode::new(7);
    /// assert_eq!(node.borrow().val, 7);
    /// assert!(node.borrow().neighbors.is_empty());
    /// ```
    #[must_use]
    pub fn new(val: i32) -> NodeRef {
        Rc::new(RefCell::new(Self {
            val,
            neighbors: Vec::new(),
        }))
    }
}

/// Identity key for a node: the address of its shared allocation.
fn identity(node: &NodeRef) -> *const RefCell<GraphNode> {
    Rc::as_ptr(node)
}

/// Deep-copies the graph reachable from `node`.
///
/// The returned graph has the same values and the same neighbor topology,
/// built entirely from freshly allocated nodes — no clone aliases any
/// original. Traversal is an iterative BFS keyed by node identity (never by
/// value, which may repeat), and each original is cloned exactly once, so
/// cyclic input terminates. `None` in, `None` out.
///
/// # Examples
///
/// ```
/// use practicar::graph::{clone_graph, GraphNode};
/// use std::rc::Rc;
///
/// let a = GraphNode::new(1);
/// let b = GraphNode::new(2);
/// a.borrow_mut().neighbors.push(Rc::clone(&b));
/// b.borrow_mut().neighbors.push(Rc::clone(&a));
///
/// let cloned = clone_graph(Some(&a)).expect("non-empty input clones to non-empty output");
/// assert_eq!(cloned.borrow().val, 1);
/// assert!(!Rc::ptr_eq(&cloned, &a));
/// assert!(clone_graph(None).is_none());
/// ```
#[must_use]
pub fn clone_graph(node: Option<&NodeRef>) -> Option<NodeRef> {
    let start = node?;

    // original identity -> its already-created clone
    let mut clones: HashMap<*const RefCell<GraphNode>, NodeRef> = HashMap::new();
    let start_clone = GraphNode::new(start.borrow().val);
    clones.insert(identity(start), Rc::clone(&start_clone));

    let mut queue: VecDeque<NodeRef> = VecDeque::new();
    queue.push_back(Rc::clone(start));

    while let Some(original) = queue.pop_front() {
        let clone = Rc::clone(&clones[&identity(&original)]);
        for neighbor in &original.borrow().neighbors {
            let neighbor_clone = match clones.get(&identity(neighbor)) {
                Some(existing) => Rc::clone(existing),
                None => {
                    // clone before descending so cycles short-circuit here
                    let created = GraphNode::new(neighbor.borrow().val);
                    clones.insert(identity(neighbor), Rc::clone(&created));
                    queue.push_back(Rc::clone(neighbor));
                    created
                }
            };
            clone.borrow_mut().neighbors.push(neighbor_clone);
        }
    }

    Some(start_clone)
}

/// Builds a graph from 1-indexed neighbor lists and returns its first node.
///
/// `adjacency[i]` lists the neighbors of node `i + 1` by their 1-based
/// position; node values are `1..=adjacency.len()`. An empty list means no
/// graph. This is the conventional compact encoding for small fixtures.
///
/// # Examples
///
/// ```
/// use practicar::graph::from_adjacency_list;
///
/// // 1--2, 1--4, 2--3, 3--4
/// let head = from_adjacency_list(&[vec![2, 4], vec![1, 3], vec![2, 4], vec![1, 3]])
///     .expect("non-empty adjacency yields a node");
/// assert_eq!(head.borrow().val, 1);
/// assert_eq!(head.borrow().neighbors.len(), 2);
/// ```
#[must_use]
pub fn from_adjacency_list(adjacency: &[Vec<usize>]) -> Option<NodeRef> {
    let nodes: Vec<NodeRef> = (1..=adjacency.len())
        .map(|val| GraphNode::new(val as i32))
        .collect();
    for (node, neighbors) in nodes.iter().zip(adjacency) {
        node.borrow_mut().neighbors = neighbors
            .iter()
            .map(|&position| Rc::clone(&nodes[position - 1]))
            .collect();
    }
    nodes.into_iter().next()
}

/// Collects the reachable graph as a value-keyed adjacency map.
///
/// Traverses by node identity (cycle-safe) and reports, for each reachable
/// node, its value mapped to the sorted values of its neighbors — a
/// canonical form for structural comparison of two graphs. Meaningful when
/// reachable node values are distinct, as in the fixture encoding of
/// [`from_adjacency_list`].
#[must_use]
pub fn to_adjacency_list(node: Option<&NodeRef>) -> BTreeMap<i32, Vec<i32>> {
    let mut adjacency = BTreeMap::new();
    let Some(start) = node else {
        return adjacency;
    };

    let mut seen: HashSet<*const RefCell<GraphNode>> = HashSet::new();
    seen.insert(identity(start));
    let mut stack = vec![Rc::clone(start)];

    while let Some(current) = stack.pop() {
        let current = current.borrow();
        let mut neighbor_vals: Vec<i32> = current
            .neighbors
            .iter()
            .map(|neighbor| neighbor.borrow().val)
            .collect();
        neighbor_vals.sort_unstable();
        adjacency.insert(current.val, neighbor_vals);

        for neighbor in &current.neighbors {
            if seen.insert(identity(neighbor)) {
                stack.push(Rc::clone(neighbor));
            }
        }
    }

    adjacency
}

/// Computes an order in which all courses can be taken, if one exists.
///
/// Courses are numbered `0..num_courses`; each pair `(course, prereq)`
/// requires `prereq` before `course`. Returns `Some(order)` covering every
/// course iff the dependency graph is acyclic, else `None`. Iterative
/// in-degree peeling (Kahn's algorithm), so recursion depth is never a
/// concern. Pairs naming out-of-range courses are ignored.
///
/// # Examples
///
/// ```
/// use practicar::graph::topological_order;
///
/// let order = topological_order(3, &[(1, 0), (2, 1)]).expect("chain is acyclic");
/// assert_eq!(order, vec![0, 1, 2]);
/// assert_eq!(topological_order(2, &[(1, 0), (0, 1)]), None);
/// ```
#[must_use]
pub fn topological_order(num_courses: usize, prerequisites: &[(usize, usize)]) -> Option<Vec<usize>> {
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); num_courses];
    let mut in_degree = vec![0_usize; num_courses];
    for &(course, prereq) in prerequisites {
        if course >= num_courses || prereq >= num_courses {
            continue;
        }
        dependents[prereq].push(course);
        in_degree[course] += 1;
    }

    let mut ready: VecDeque<usize> = (0..num_courses).filter(|&c| in_degree[c] == 0).collect();
    let mut order = Vec::with_capacity(num_courses);

    while let Some(course) = ready.pop_front() {
        order.push(course);
        for &dependent in &dependents[course] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                ready.push_back(dependent);
            }
        }
    }

    // any course left with positive in-degree sits on a cycle
    (order.len() == num_courses).then_some(order)
}

/// Returns true iff every course can be completed.
///
/// Equivalent to the dependency graph being acyclic; a course listed as its
/// own prerequisite is always a cycle. Zero courses and zero prerequisites
/// are trivially feasible.
///
/// # Examples
///
/// ```
/// use practicar::graph::can_finish;
///
/// assert!(can_finish(3, &[]));
/// assert!(!can_finish(1, &[(0, 0)]));
/// ```
#[must_use]
pub fn can_finish(num_courses: usize, prerequisites: &[(usize, usize)]) -> bool {
    topological_order(num_courses, prerequisites).is_some()
}


#[cfg(test)]
mod tests_proptests;
