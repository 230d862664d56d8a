use geo_types::{CoordNum, Point};
use num_traits::real::Real;

/// Trait to convert geometry into an SVG object (or specifically, SVG components)
pub mod svg;

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

impl<T> PointDistance<T> for Point<T>
where
    T: CoordNum,
    T: Real,
{
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}

#[cfg(test)]
mod test {
    use super::PointDistance;
    use geo_types::Point;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0f64, 0.0f64);
        let b = Point::new(3.0f64, 4.0f64);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.length() - 5.0).abs() < 1e-12);
    }
}
