use super::point::Point;

/// Strict segment crossing test. Segments sharing an endpoint id never
/// cross; touching at a shared star is how the game is played. Proper
/// crossings only: collinear overlap along the same line is not detected,
/// an accepted limitation inherited from the orientation test.
pub fn segments_cross(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> bool {
    if p1.id == p3.id || p1.id == p4.id || p2.id == p3.id || p2.id == p4.id {
        return false;
    }
    ccw(p1, p3, p4) != ccw(p2, p3, p4) && ccw(p1, p2, p3) != ccw(p1, p2, p4)
}

/// Does the star `p` lie on the segment `a`-`b`, within tolerance?
/// The segment's own endpoints are exempt: we forbid passing THROUGH a
/// star, not touching one.
pub fn point_near_segment(p: &Point, a: &Point, b: &Point, tolerance: f64) -> bool {
    if p.id == a.id || p.id == b.id {
        return false;
    }
    // generous collinearity screen before the exact distance check
    let cross = (p.y - a.y) * (b.x - a.x) - (p.x - a.x) * (b.y - a.y);
    if cross.abs() > tolerance * 1000.0 {
        return false;
    }
    let dot = (p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y);
    if dot < 0.0 {
        return false; // projects before a
    }
    let length2 = (b.x - a.x) * (b.x - a.x) + (b.y - a.y) * (b.y - a.y);
    if dot > length2 {
        return false; // projects past b
    }
    distance_to_segment(p, a, b) < tolerance
}

/// distance from `p` to the closest point of the segment `v`-`w`
pub fn distance_to_segment(p: &Point, v: &Point, w: &Point) -> f64 {
    let length2 = (v.x - w.x) * (v.x - w.x) + (v.y - w.y) * (v.y - w.y);
    if length2 == 0.0 {
        return (p.x - v.x).hypot(p.y - v.y);
    }
    let t = ((p.x - v.x) * (w.x - v.x) + (p.y - v.y) * (w.y - v.y)) / length2;
    let t = t.clamp(0.0, 1.0);
    (p.x - (v.x + t * (w.x - v.x))).hypot(p.y - (v.y + t * (w.y - v.y)))
}

/// counterclockwise orientation of the triple (a, b, c)
fn ccw(a: &Point, b: &Point, c: &Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}
