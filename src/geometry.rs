//! Points and triangles on the wheel's plane.

use euclid::default::{Box2D, Point2D, Vector2D};

use crate::color::Component;

/// A point on the wheel's plane, in surface pixels with the origin at the
/// top-left corner.
pub type PlanePoint = Point2D<Component>;

/// A triangle on the wheel's plane. Always exactly three vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [PlanePoint; 3]);

impl Triangle {
    /// Create a triangle from its vertices. Order decides the fill winding
    /// only; containment does not depend on it.
    pub fn new(a: PlanePoint, b: PlanePoint, c: PlanePoint) -> Self {
        Self([a, b, c])
    }

    /// The three vertices, in the order they were given.
    pub fn vertices(&self) -> &[PlanePoint; 3] {
        &self.0
    }

    /// The mean of the three vertices.
    pub fn centroid(&self) -> PlanePoint {
        let [a, b, c] = self.0;
        Point2D::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// The smallest axis aligned box holding all three vertices.
    pub fn bounds(&self) -> Box2D<Component> {
        Box2D::from_points(self.0)
    }

    /// Scale every vertex away from the plane's origin by `factor`.
    pub fn scale(&self, factor: Component) -> Self {
        Self(self.0.map(|p| (p.to_vector() * factor).to_point()))
    }

    /// Returns true if `point` is inside the triangle or on its boundary.
    pub fn contains(&self, point: PlanePoint) -> bool {
        is_inside(point, self)
    }
}

impl From<[PlanePoint; 3]> for Triangle {
    fn from(value: [PlanePoint; 3]) -> Self {
        Self(value)
    }
}

/// Which side of the edge `a -> b` the point `p` is on. Zero when the three
/// points are collinear.
fn edge_side(a: PlanePoint, b: PlanePoint, p: PlanePoint) -> Component {
    let edge: Vector2D<Component> = b - a;
    edge.cross(p - a)
}

/// Returns true if `point` lies inside `triangle` or on its boundary.
///
/// The point is inside when it is on the same side of all three edges,
/// which makes the test independent of the triangle's winding.
pub fn is_inside(point: PlanePoint, triangle: &Triangle) -> bool {
    let [a, b, c] = triangle.0;

    let d0 = edge_side(a, b, point);
    let d1 = edge_side(b, c, point);
    let d2 = edge_side(c, a, point);

    let has_negative = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_positive = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;

    !(has_negative && has_positive)
}
