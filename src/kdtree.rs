//! Spatial index over the city set: a 2-d kd-tree with a branch-and-bound
//! nearest-unvisited-neighbor query.
//!
//! Visited state lives in a [`VisitSet`] keyed by city id, not in the tree,
//! so one immutable tree serves any number of independent tour-construction
//! runs without a rebuild.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::city::City;
use crate::distance::DistanceIndex;

#[derive(Clone, Copy, Debug)]
struct Node {
    city: City,
    /// Splitting axis at this depth: 0 = x, 1 = y.
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Balanced kd-tree over the city set. Nodes live in an arena addressed by
/// index; `left`/`right` are arena indices, not owned boxes.
#[derive(Clone, Debug)]
pub struct SpatialTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl SpatialTree {
    /// Recursive median-split build.
    ///
    /// At depth `d` the subset is sorted on axis `d % 2` with a stable
    /// comparator on that coordinate only, so ties keep the incoming subset
    /// order and the build is deterministic. The floor-median point becomes
    /// the node; the lower half recurses left, the upper half right.
    pub fn build(cities: &[City]) -> Self {
        let mut nodes = Vec::with_capacity(cities.len());
        let mut points = cities.to_vec();
        let root = build_subtree(&mut nodes, &mut points, 0);
        Self { nodes, root }
    }

    /// The root city, used as the starting point of greedy construction.
    pub fn root_city(&self) -> Option<&City> {
        self.root.map(|idx| &self.nodes[idx].city)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the unvisited city closest to `target`, or `None` when every
    /// city is visited. `target` must belong to the indexed city set.
    ///
    /// Best-first branch-and-bound: a min-priority queue holds
    /// `(bound, node)` pairs where the bound is 0 for the subtree on the
    /// target's side of the splitting plane (must be explored) and the
    /// node's actual squared distance for the far side. An entry whose bound
    /// exceeds the best distance found so far is pruned; the diagonal
    /// sentinel in the distance index keeps the target from matching itself.
    pub fn nearest_unvisited(
        &self,
        target: &City,
        visited: &VisitSet,
        index: &DistanceIndex,
    ) -> Option<(City, f64)> {
        let root = self.root?;
        let mut best: Option<usize> = None;
        let mut best_dist = f64::INFINITY;

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry { bound: 0.0, node: root });

        while let Some(QueueEntry { bound, node }) = queue.pop() {
            if bound > best_dist {
                continue;
            }
            let entry = &self.nodes[node];
            let dist = index.dist_sqd(entry.city.id, target.id);

            if !visited.is_visited(entry.city.id) && dist < best_dist {
                best_dist = dist;
                best = Some(node);
            }

            let (near, far) = if target.coord(entry.axis) <= entry.city.coord(entry.axis) {
                (entry.left, entry.right)
            } else {
                (entry.right, entry.left)
            };
            if let Some(child) = near {
                queue.push(QueueEntry { bound: 0.0, node: child });
            }
            if let Some(child) = far {
                queue.push(QueueEntry { bound: dist, node: child });
            }
        }

        best.map(|idx| (self.nodes[idx].city, best_dist))
    }
}

fn build_subtree(nodes: &mut Vec<Node>, points: &mut [City], depth: usize) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let axis = depth % 2;
    // sort_by_key is stable: equal coordinates keep their subset order.
    points.sort_by_key(|city| city.coord(axis));
    let mid = points.len() / 2;

    let idx = nodes.len();
    nodes.push(Node {
        city: points[mid],
        axis,
        left: None,
        right: None,
    });

    let (lower, rest) = points.split_at_mut(mid);
    let upper = &mut rest[1..];
    let left = build_subtree(nodes, lower, depth + 1);
    let right = build_subtree(nodes, upper, depth + 1);
    nodes[idx].left = left;
    nodes[idx].right = right;
    Some(idx)
}

/// Queue entry ordered so the smallest bound pops first. Node index breaks
/// ties, keeping traversal order deterministic.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    bound: f64,
    node: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound && self.node == other.node
    }
}
impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, smaller bounds must pop first.
        other
            .bound
            .total_cmp(&self.bound)
            .then(other.node.cmp(&self.node))
    }
}

/// Visited flags for one tour-construction run, keyed by city id.
/// Fresh per run; the tree never carries visitation state.
#[derive(Clone, Debug)]
pub struct VisitSet {
    bits: Vec<bool>,
    remaining: usize,
}

impl VisitSet {
    pub fn new(n: usize) -> Self {
        Self {
            bits: vec![false; n],
            remaining: n,
        }
    }

    pub fn mark(&mut self, id: usize) {
        if !self.bits[id] {
            self.bits[id] = true;
            self.remaining -= 1;
        }
    }

    pub fn is_visited(&self, id: usize) -> bool {
        self.bits[id]
    }

    /// Number of cities not yet visited.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
