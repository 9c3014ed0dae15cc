//! Initial tour construction: greedy nearest-unvisited-neighbor walks
//! driven by kd-tree queries.

use crate::distance::DistanceIndex;
use crate::error::{Error, Result};
use crate::kdtree::{SpatialTree, VisitSet};
use crate::tour::Tour;

/// Builds an initial Hamiltonian tour over every city in `tree`.
///
/// Starts at the tree's root city and repeatedly extends to the nearest
/// unvisited city; the closing edge back to the start is added at the end.
/// The tree and `index` must cover the same city set.
///
/// Returns `Error::InternalState` if a query comes back empty while
/// unvisited cities remain — that signals a tree/index mismatch and is
/// never ignored.
pub fn nearest_neighbor_tour(tree: &SpatialTree, index: &DistanceIndex) -> Result<Tour> {
    let Some(&start) = tree.root_city() else {
        return Ok(Tour::default());
    };

    let mut visited = VisitSet::new(index.len());
    visited.mark(start.id);
    let mut route = vec![start.id];
    let mut total = 0i64;
    let mut target = start;

    while route.len() < index.len() {
        let Some((city, dist_sqd)) = tree.nearest_unvisited(&target, &visited, index) else {
            return Err(Error::internal_state(format!(
                "nearest-neighbor query found no city with {} unvisited",
                visited.remaining()
            )));
        };
        visited.mark(city.id);
        route.push(city.id);
        total += dist_sqd.sqrt().round() as i64;
        target = city;
    }

    if route.len() > 1 {
        total += index.edge_cost(target.id, start.id);
    }

    log::info!("greedy: n={} length={total}", route.len());
    Ok(Tour::new(route, total))
}
