use crate::city::City;
use crate::distance::DistanceIndex;
use crate::error::Result;
use crate::greedy;
use crate::kdtree::SpatialTree;
use crate::tour::Tour;
use crate::two_opt;

/// Full pipeline: distance matrix + kd-tree, greedy construction, 2-opt
/// refinement. Ids in `cities` must be dense `0..n` in slice order.
pub fn solve_tsp(cities: &[City]) -> Result<Tour> {
    let index = DistanceIndex::build(cities);
    let tree = SpatialTree::build(cities);

    let initial = greedy::nearest_neighbor_tour(&tree, &index)?;
    let refined = two_opt::refine(initial, &index);
    Ok(refined)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::solve_tsp;
    use crate::city::City;
    use crate::tour::Tour;
    use crate::DistanceIndex;

    #[test]
    fn degenerate_inputs_solve_trivially() {
        assert_eq!(solve_tsp(&[]).unwrap(), Tour::default());

        let single = solve_tsp(&[City::new(0, 9, 9)]).unwrap();
        assert_eq!(single.route, vec![0]);
        assert_eq!(single.length, 0);
    }

    #[test]
    fn refined_tour_is_a_permutation_with_consistent_length() {
        let mut rng = StdRng::seed_from_u64(99);
        let cities: Vec<City> = (0..80)
            .map(|id| City::new(id, rng.random_range(0..2000), rng.random_range(0..2000)))
            .collect();

        let tour = solve_tsp(&cities).unwrap();
        let mut sorted = tour.route.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..cities.len()).collect::<Vec<_>>());

        let index = DistanceIndex::build(&cities);
        assert_eq!(tour.length, Tour::length_of(&tour.route, &index));
    }

    #[test]
    fn same_input_always_yields_the_same_tour() {
        let cities: Vec<City> = [(0, 0), (5, 5), (5, 0), (0, 5), (2, 8), (9, 1)]
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| City::new(id, x, y))
            .collect();

        let a = solve_tsp(&cities).unwrap();
        let b = solve_tsp(&cities).unwrap();
        assert_eq!(a, b);
    }
}
