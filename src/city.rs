use std::fmt;

/// A labeled input point with integer planar coordinates.
/// Ids are dense `0..n` in input order and double as indices into the
/// distance matrix and the visit bitset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct City {
    pub id: usize,
    pub x: i64,
    pub y: i64,
}

impl City {
    pub fn new(id: usize, x: i64, y: i64) -> Self {
        Self { id, x, y }
    }

    /// Squared Euclidean distance to `rhs`.
    pub fn dist_sqd(&self, rhs: &Self) -> f64 {
        let dx = (self.x - rhs.x) as f64;
        let dy = (self.y - rhs.y) as f64;
        dx * dx + dy * dy
    }

    /// Coordinate along a splitting axis: 0 = x, 1 = y.
    pub(crate) fn coord(&self, axis: usize) -> i64 {
        if axis == 0 { self.x } else { self.y }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::City;

    #[test]
    fn dist_sqd_is_symmetric() {
        let a = City::new(0, 1, 2);
        let b = City::new(1, 4, 6);
        assert_eq!(a.dist_sqd(&b), 25.0);
        assert_eq!(b.dist_sqd(&a), 25.0);
    }

    #[test]
    fn dist_sqd_is_zero_for_equal_coordinates() {
        let a = City::new(0, 7, -3);
        let b = City::new(1, 7, -3);
        assert_eq!(a.dist_sqd(&b), 0.0);
    }

    #[test]
    fn coord_selects_axis() {
        let c = City::new(0, 5, -9);
        assert_eq!(c.coord(0), 5);
        assert_eq!(c.coord(1), -9);
    }
}
