use nalgebra::Vector2;

/// Pre: `a` and `b` are 2D column vectors.
/// Post: returns the signed area of the parallelogram spanned by (a,b).
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed area of the triangle fan `o→a`, `o→b` (twice the triangle area).
///
/// Positive when `o → a → b` turns counter-clockwise, negative when it turns
/// clockwise, zero when the three points are collinear. No tolerance is
/// applied: near-collinear triples are classified by the raw sign.
#[inline]
pub fn orientation(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    parallelogram_area(a - o, b - o)
}

/// Turn direction of `o → a → b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

#[inline]
pub fn turn(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> Turn {
    let s = orientation(o, a, b);
    if s > 0.0 {
        Turn::Left
    } else if s < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}
