use crate::distance::DistanceIndex;

/// An ordered visit sequence over all city ids, implicitly closed (the last
/// city connects back to the first), plus its rounded total length.
/// A valid route is a permutation of all input ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tour {
    pub route: Vec<usize>,
    pub length: i64,
}

impl Tour {
    pub fn new(route: Vec<usize>, length: i64) -> Self {
        Self { route, length }
    }

    /// Total rounded length of a closed route: the sum of rounded edge costs
    /// over consecutive pairs plus the closing edge. Fewer than two cities
    /// have length 0.
    pub fn length_of(route: &[usize], index: &DistanceIndex) -> i64 {
        if route.len() < 2 {
            return 0;
        }
        let mut total = 0;
        for pair in route.windows(2) {
            total += index.edge_cost(pair[0], pair[1]);
        }
        total + index.edge_cost(route[route.len() - 1], route[0])
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}
