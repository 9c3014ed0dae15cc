use crate::city::City;

/// All-pairs squared Euclidean distances, indexed by city id.
///
/// The id-diagonal holds `f64::INFINITY` so a city never matches itself
/// during nearest-neighbor search. Two distinct cities sharing coordinates
/// still get distance 0. Built once, read-only afterward. O(n²) space.
#[derive(Clone, Debug)]
pub struct DistanceIndex {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceIndex {
    pub fn build(cities: &[City]) -> Self {
        let n = cities.len();
        let mut cells = vec![0.0; n * n];
        for (i, a) in cities.iter().enumerate() {
            cells[a.id * n + a.id] = f64::INFINITY;
            for b in &cities[i + 1..] {
                let dist = a.dist_sqd(b);
                cells[a.id * n + b.id] = dist;
                cells[b.id * n + a.id] = dist;
            }
        }
        Self { n, cells }
    }

    /// Squared distance between two city ids (infinite on the diagonal).
    pub fn dist_sqd(&self, a: usize, b: usize) -> f64 {
        self.cells[a * self.n + b]
    }

    /// Rounded Euclidean edge length between two distinct city ids.
    /// All tour-length arithmetic uses this integer cost.
    pub fn edge_cost(&self, a: usize, b: usize) -> i64 {
        self.dist_sqd(a, b).sqrt().round() as i64
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceIndex;
    use crate::city::City;

    fn index(coords: &[(i64, i64)]) -> DistanceIndex {
        let cities: Vec<City> = coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| City::new(id, x, y))
            .collect();
        DistanceIndex::build(&cities)
    }

    #[test]
    fn empty_input_builds_an_empty_index() {
        let idx = index(&[]);
        assert!(idx.is_empty());
        assert_eq!(idx.len(), 0);
    }

    #[test]
    fn diagonal_is_infinite() {
        let idx = index(&[(0, 0), (3, 4)]);
        assert_eq!(idx.dist_sqd(0, 0), f64::INFINITY);
        assert_eq!(idx.dist_sqd(1, 1), f64::INFINITY);
    }

    #[test]
    fn distances_are_symmetric() {
        let idx = index(&[(0, 0), (3, 4), (-2, 5)]);
        assert_eq!(idx.dist_sqd(0, 1), 25.0);
        assert_eq!(idx.dist_sqd(1, 0), 25.0);
        assert_eq!(idx.dist_sqd(0, 2), idx.dist_sqd(2, 0));
    }

    #[test]
    fn duplicate_coordinates_have_zero_distance() {
        let idx = index(&[(5, 5), (5, 5)]);
        assert_eq!(idx.dist_sqd(0, 1), 0.0);
        assert_eq!(idx.dist_sqd(1, 0), 0.0);
    }

    #[test]
    fn edge_cost_rounds_to_nearest_integer() {
        let idx = index(&[(0, 0), (3, 4), (1, 1)]);
        // 3-4-5 triangle: exact.
        assert_eq!(idx.edge_cost(0, 1), 5);
        // sqrt(2) = 1.414... rounds down.
        assert_eq!(idx.edge_cost(0, 2), 1);
    }
}
