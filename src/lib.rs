//! Approximate planar Euclidean TSP solving.
//! Builds a kd-tree and an all-pairs squared-distance matrix over the
//! cities, constructs an initial tour by greedy nearest-unvisited-neighbor
//! queries, then refines it with first-improvement 2-opt local search.

mod city;
mod distance;
mod error;
mod greedy;
mod io;
mod kdtree;
pub mod logging;
mod solver;
mod tour;
mod two_opt;

pub use city::City;
pub use distance::DistanceIndex;
pub use error::{Error, Result};
pub use greedy::nearest_neighbor_tour;
pub use io::input::{parse_cities, read_cities};
pub use io::options::SolverOptions;
pub use io::output::write_tour;
pub use kdtree::{SpatialTree, VisitSet};
pub use solver::solve_tsp;
pub use tour::Tour;
pub use two_opt::refine;
