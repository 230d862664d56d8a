use geo_types::{LineString, MultiLineString, Point};
use std::f64::consts::{FRAC_PI_2, PI};

/// # Turtle Module
///
/// Logo-style turtle features. This one grew an [`TurtleTrait::arc`]
/// primitive so it can draw the looping circle motifs; the arc follows
/// Python-turtle conventions, where a positive radius bends the path
/// counterclockwise around a center 90 degrees to the left of the heading.
#[derive(Clone)]
pub struct Turtle {
    lines: Vec<Vec<Point<f64>>>,
    position: Point<f64>,
    heading: f64,
    pen: bool,
}

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    PI * (deg / 180.0)
}

/// TurtleTrait provides turtle related functions for the Turtle struct.
///
/// All angles are radians; use [`degrees`] at the call site if you think
/// in compass terms.
///
/// # Example
///
/// ```
/// use geo_types::MultiLineString;
/// use radial_motif_rs::turtle::{Turtle, TurtleTrait, degrees};
/// let mline_string: MultiLineString<f64> = Turtle::new()
///     .pen_down()
///     .arc(140.0, degrees(90.0))
///     .left(degrees(180.0))
///     .arc(80.0, degrees(90.0))
///     .to_multiline();
/// ```
pub trait TurtleTrait {
    fn new() -> Turtle;
    fn fwd(self, distance: f64) -> Self;
    fn left(self, angle: f64) -> Self;
    fn right(self, angle: f64) -> Self;
    fn arc(self, radius: f64, extent: f64) -> Self;
    fn pen_up(self) -> Self;
    fn pen_down(self) -> Self;
    fn position(&self) -> Point<f64>;
    fn heading(&self) -> f64;
    fn to_multiline(&self) -> MultiLineString<f64>;
    fn take_multiline(&mut self) -> MultiLineString<f64>;
}

impl Turtle {
    fn trace(&mut self, pos: Point<f64>) {
        if self.pen {
            if let Some(line) = self.lines.last_mut() {
                line.push(pos);
            }
        }
        self.position = pos;
    }

    /// Chord count for a full circle of the given radius; enough sides
    /// that nobody can tell the difference.
    fn circle_sides(radius: f64) -> usize {
        1000.min(32.max(radius.abs() as usize * 4))
    }
}

impl TurtleTrait for Turtle {
    fn new() -> Self {
        Turtle {
            lines: vec![],
            position: Point::new(0.0f64, 0.0f64),
            heading: 0.0,
            pen: false,
        }
    }

    fn fwd(mut self, distance: f64) -> Self {
        let pos = self.position
            + Point::new(
                distance * self.heading.cos(),
                distance * self.heading.sin(),
            );
        self.trace(pos);
        self
    }

    fn left(mut self, angle: f64) -> Self {
        self.heading = self.heading + angle;
        self
    }

    fn right(mut self, angle: f64) -> Self {
        self.heading = self.heading - angle;
        self
    }

    /// Follow a circular arc of the given (signed) radius for `extent`
    /// radians. A negative radius bends the path clockwise instead. The
    /// heading ends up advanced by the swept angle, same as walking it.
    fn arc(mut self, radius: f64, extent: f64) -> Self {
        let side = if radius < 0.0 { -1.0 } else { 1.0 };
        let r = radius.abs();
        let toward_center = self.heading + side * FRAC_PI_2;
        let center = self.position + Point::new(r * toward_center.cos(), r * toward_center.sin());
        let start = f64::atan2(
            self.position.y() - center.y(),
            self.position.x() - center.x(),
        );
        let sweep = side * extent;
        let segments = ((Self::circle_sides(r) as f64) * (extent.abs() / (2.0 * PI)))
            .ceil()
            .max(1.0) as usize;
        for i in 1..=segments {
            let angle = start + sweep * (i as f64) / (segments as f64);
            let pos = Point::new(center.x() + r * angle.cos(), center.y() + r * angle.sin());
            self.trace(pos);
        }
        self.heading += sweep;
        self
    }

    fn pen_up(mut self) -> Self {
        self.pen = false;
        self
    }

    fn pen_down(mut self) -> Self {
        if self.pen {
            self
        } else {
            self.pen = true;
            self.lines.push(vec![self.position.clone()]);
            self
        }
    }

    fn position(&self) -> Point<f64> {
        self.position
    }

    fn heading(&self) -> f64 {
        self.heading
    }

    fn to_multiline(&self) -> MultiLineString<f64> {
        self.lines
            .iter()
            .filter(|line| line.len() > 1)
            .map(|line| LineString::from(line.clone()))
            .collect()
    }

    /// Drain everything drawn so far and restart the active line at the
    /// current pose. Lets a caller slice one continuous walk into bands,
    /// e.g. one band per stroke color.
    fn take_multiline(&mut self) -> MultiLineString<f64> {
        let lines = std::mem::take(&mut self.lines);
        if self.pen {
            self.lines.push(vec![self.position.clone()]);
        }
        lines
            .iter()
            .filter(|line| line.len() > 1)
            .map(|line| LineString::from(line.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{degrees, Turtle, TurtleTrait};
    use crate::geo_types::PointDistance;
    use geo_types::Point;

    #[test]
    fn test_pendown() {
        let t = Turtle::new().pen_down();
        assert_eq!(t.pen, true);
        let t = Turtle::new();
        assert_eq!(t.pen, false);
    }

    #[test]
    fn test_simple_box() {
        let t = Turtle::new()
            .pen_down()
            .fwd(100.0)
            .right(degrees(90.0))
            .fwd(100.0)
            .right(degrees(90.0))
            .fwd(100.0);
        assert!(t.lines[0][0].distance(&Point::new(0.0f64, 0.0f64)) < 0.0001f64);
        assert!(t.lines[0][1].distance(&Point::new(100.0f64, 0.0f64)) < 0.0001f64);
        assert!(t.lines[0][2].distance(&Point::new(100.0f64, -100.0f64)) < 0.0001f64);
        assert!(t.lines[0][3].distance(&Point::new(0.0f64, -100.0f64)) < 0.0001f64);
    }

    #[test]
    fn test_quarter_arc_lands_on_circle() {
        // From the origin heading east, a left-bending quarter arc of
        // radius 140 ends at (140, 140) heading north.
        let t = Turtle::new().pen_down().arc(140.0, degrees(90.0));
        assert!(t.position().distance(&Point::new(140.0, 140.0)) < 0.01);
        assert!((t.heading() - degrees(90.0)).abs() < 1e-9);
    }

    #[test]
    fn test_negative_radius_bends_clockwise() {
        let t = Turtle::new().pen_down().arc(-140.0, degrees(90.0));
        assert!(t.position().distance(&Point::new(140.0, -140.0)) < 0.01);
        assert!((t.heading() + degrees(90.0)).abs() < 1e-9);
    }

    #[test]
    fn test_full_circle_closes() {
        let t = Turtle::new().pen_down().arc(80.0, degrees(360.0));
        assert!(t.position().distance(&Point::new(0.0, 0.0)) < 0.01);
    }

    #[test]
    fn test_pen_up_traces_nothing() {
        let t = Turtle::new().pen_up().arc(140.0, degrees(90.0)).fwd(10.0);
        assert_eq!(t.to_multiline().0.len(), 0);
    }

    #[test]
    fn test_take_multiline_restarts_at_pose() {
        let mut t = Turtle::new().pen_down().fwd(50.0);
        let first = t.take_multiline();
        assert_eq!(first.0.len(), 1);
        let t = t.fwd(50.0);
        let second = t.to_multiline();
        assert_eq!(second.0.len(), 1);
        // Second band starts where the first ended.
        assert!(
            Point::from(second.0[0].0[0]).distance(&Point::new(50.0, 0.0)) < 0.0001
        );
    }
}
