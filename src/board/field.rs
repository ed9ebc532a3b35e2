use super::point::Point;
use crate::MIN_DISTANCE;
use crate::SCATTER_ATTEMPTS;
use rand::Rng;

/// Scatter `count` stars across the board by rejection sampling: draw a
/// candidate inside the padded rectangle, accept iff it keeps
/// `MIN_DISTANCE` from every star already placed. The attempt budget is
/// `count * SCATTER_ATTEMPTS`; a crowded board returns fewer stars than
/// requested rather than failing, and a board too small to hold the
/// padding at all returns none. Ids are assigned by acceptance order.
pub fn scatter(
    count: usize,
    width: f64,
    height: f64,
    padding: f64,
    rng: &mut impl Rng,
) -> Vec<Point> {
    if width <= 2.0 * padding || height <= 2.0 * padding {
        log::warn!("no room for stars on a {width}x{height} board inside padding {padding}");
        return Vec::new();
    }
    let mut points: Vec<Point> = Vec::with_capacity(count);
    let mut attempts = 0;
    while points.len() < count && attempts < count * SCATTER_ATTEMPTS {
        let x = rng.random_range(padding..width - padding);
        let y = rng.random_range(padding..height - padding);
        let candidate = Point::new(points.len(), x, y);
        if points
            .iter()
            .all(|p| p.distance(&candidate) >= MIN_DISTANCE)
        {
            points.push(candidate);
        }
        attempts += 1;
    }
    if points.len() < count {
        log::warn!(
            "board too crowded: placed {} of {} stars",
            points.len(),
            count
        );
    }
    points
}
