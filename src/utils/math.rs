//! # Grid Mathematics
//!
//! Clamping, distance metrics and containment tests used throughout game
//! logic.

use crate::{Position, Range, Rect, RlError, RlResult};

/// Clamps `val` into `min..=max`.
///
/// Returns `None` when the bounds are inverted.
///
/// # Examples
///
/// ```
/// use rlutil::constrain_in_range;
///
/// assert_eq!(constrain_in_range(0, 15, 10), Some(10));
/// assert_eq!(constrain_in_range(0, -3, 10), Some(0));
/// assert_eq!(constrain_in_range(10, 5, 0), None);
/// ```
pub fn constrain_in_range(min: i32, val: i32, max: i32) -> Option<i32> {
    if max < min {
        return None;
    }
    Some(val.clamp(min, max))
}

/// Float version of [`constrain_in_range`].
pub fn constrain_in_range_f64(min: f64, val: f64, max: f64) -> Option<f64> {
    if max < min {
        return None;
    }
    Some(val.max(min).min(max))
}

/// Clamps `val` in place. Inverted bounds leave it untouched.
pub fn set_constrained_in_range(min: i32, val: &mut i32, max: i32) {
    if let Some(clamped) = constrain_in_range(min, *val, max) {
        *val = clamped;
    }
}

/// Float version of [`set_constrained_in_range`].
pub fn set_constrained_in_range_f64(min: f64, val: &mut f64, max: f64) {
    if let Some(clamped) = constrain_in_range_f64(min, *val, max) {
        *val = clamped;
    }
}

/// Whether `pos` lies inside `area`, edges included.
pub fn is_pos_inside(pos: Position, area: &Rect) -> bool {
    area.contains(pos)
}

/// Whether `inner` lies within `outer`.
///
/// With `count_equal_as_inside` shared edges are allowed; without it `inner`
/// must sit strictly inside `outer`'s border.
///
/// # Examples
///
/// ```
/// use rlutil::{is_area_inside, Rect};
///
/// let map = Rect::from_xy(0, 0, 79, 23);
/// assert!(is_area_inside(&map, &map, true));
/// assert!(!is_area_inside(&map, &map, false));
/// assert!(is_area_inside(&Rect::from_xy(1, 1, 78, 22), &map, false));
/// ```
pub fn is_area_inside(inner: &Rect, outer: &Rect, count_equal_as_inside: bool) -> bool {
    if count_equal_as_inside {
        inner.p0.x >= outer.p0.x
            && inner.p1.x <= outer.p1.x
            && inner.p0.y >= outer.p0.y
            && inner.p1.y <= outer.p1.y
    } else {
        inner.p0.x > outer.p0.x
            && inner.p1.x < outer.p1.x
            && inner.p0.y > outer.p0.y
            && inner.p1.y < outer.p1.y
    }
}

/// Chebyshev distance between two coordinate pairs.
pub fn king_dist(x0: i32, y0: i32, x1: i32, y1: i32) -> i32 {
    (x1 - x0).abs().max((y1 - y0).abs())
}

/// Chebyshev distance between two positions.
pub fn king_dist_pos(p0: Position, p1: Position) -> i32 {
    p0.king_distance(p1)
}

/// Manhattan distance between two positions.
pub fn taxi_dist(p0: Position, p1: Position) -> i32 {
    p0.taxi_distance(p1)
}

/// The entry of `positions` closest to `p` by king distance.
///
/// Ties go to the earliest entry. Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use rlutil::{closest_pos, Position};
///
/// let targets = [Position::new(9, 9), Position::new(2, 3), Position::new(3, 2)];
/// assert_eq!(closest_pos(Position::new(0, 0), &targets), Some(Position::new(2, 3)));
/// assert_eq!(closest_pos(Position::new(0, 0), &[]), None);
/// ```
pub fn closest_pos(p: Position, positions: &[Position]) -> Option<Position> {
    let mut closest: Option<(i32, Position)> = None;

    for &candidate in positions {
        let dist = p.king_distance(candidate);
        match closest {
            Some((best, _)) if dist >= best => {}
            _ => closest = Some((dist, candidate)),
        }
    }

    closest.map(|(_, pos)| pos)
}

/// Whether two cells touch, diagonals included.
///
/// A cell counts as adjacent to itself only with `count_same_cell_as_adj`.
pub fn is_pos_adj(pos1: Position, pos2: Position, count_same_cell_as_adj: bool) -> bool {
    pos1.is_adjacent(pos2, count_same_cell_as_adj)
}

/// Whether `value` lies within `range`, both ends included.
pub fn is_val_in_range(value: i32, range: Range) -> bool {
    range.contains(value)
}

/// Collects the positions of every cell in `grid` equal to `value`.
///
/// `grid` is stored column-major, `index = x * height + y`, and results come
/// back in that order.
///
/// # Examples
///
/// ```
/// use rlutil::{positions_matching, Position};
///
/// // 2 columns, 3 rows
/// let blocked = [false, true, false, true, false, false];
/// let cells = positions_matching(&blocked, true, 2, 3).unwrap();
/// assert_eq!(cells, vec![Position::new(0, 1), Position::new(1, 0)]);
/// ```
pub fn positions_matching(
    grid: &[bool],
    value: bool,
    width: usize,
    height: usize,
) -> RlResult<Vec<Position>> {
    let expected = width.checked_mul(height).ok_or_else(|| {
        RlError::InvalidArgument(format!("grid of {}x{} is too large", width, height))
    })?;

    if grid.len() != expected {
        return Err(RlError::InvalidArgument(format!(
            "grid has {} cells, expected {}x{} = {}",
            grid.len(),
            width,
            height,
            expected
        )));
    }

    let mut out = Vec::new();
    for x in 0..width {
        for y in 0..height {
            if grid[x * height + y] == value {
                out.push(Position::new(x as i32, y as i32));
            }
        }
    }

    Ok(out)
}
