//! # Geometry Module
//!
//! Grid coordinates and the simple shapes built from them.
//!
//! Coordinates follow screen conventions: `x` grows to the right and `y` grows
//! downward, so "up" and "north" are `y - 1`.

pub mod direction;

pub use direction::*;

use crate::Rnd;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 2D coordinate (or offset) on the grid.
///
/// # Examples
///
/// ```
/// use rlutil::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let adjacent = pos.adjacent_positions();
/// assert_eq!(adjacent.len(), 8); // All 8 surrounding positions
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Chebyshev distance: the number of king moves between two cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlutil::Position;
    ///
    /// let pos1 = Position::new(0, 0);
    /// let pos2 = Position::new(3, 4);
    /// assert_eq!(pos1.king_distance(pos2), 4);
    /// ```
    pub fn king_distance(self, other: Position) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }

    /// Manhattan distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlutil::Position;
    ///
    /// let pos1 = Position::new(0, 0);
    /// let pos2 = Position::new(3, 4);
    /// assert_eq!(pos1.taxi_distance(pos2), 7);
    /// ```
    pub fn taxi_distance(self, other: Position) -> i32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// Whether `other` lies in the 3×3 neighbourhood around this position.
    ///
    /// The position itself only counts when `count_same_cell` is set.
    pub fn is_adjacent(self, other: Position, count_same_cell: bool) -> bool {
        if self == other {
            return count_same_cell;
        }
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// Returns all 8 adjacent positions (including diagonals).
    pub fn adjacent_positions(self) -> Vec<Position> {
        DIRS.iter().map(|dir| self + dir.offset()).collect()
    }

    /// Returns only the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> Vec<Position> {
        CARDINAL_DIRS.iter().map(|dir| self + dir.offset()).collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Position {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Neg for Position {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::ops::Mul<i32> for Position {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// An axis-aligned rectangle with inclusive corners.
///
/// `p0` is the top-left cell and `p1` the bottom-right cell; both belong to
/// the rectangle.
///
/// # Examples
///
/// ```
/// use rlutil::{Position, Rect};
///
/// let room = Rect::from_xy(2, 2, 6, 4);
/// assert_eq!(room.width(), 5);
/// assert_eq!(room.height(), 3);
/// assert!(room.contains(Position::new(6, 4)));
/// assert!(!room.contains(Position::new(7, 4)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub p0: Position,
    pub p1: Position,
}

impl Rect {
    /// Creates a rectangle from its top-left and bottom-right cells.
    pub const fn new(p0: Position, p1: Position) -> Self {
        Self { p0, p1 }
    }

    /// Creates a rectangle from raw corner coordinates.
    pub const fn from_xy(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Position::new(x0, y0), Position::new(x1, y1))
    }

    /// Number of columns covered.
    pub fn width(&self) -> i32 {
        self.p1.x - self.p0.x + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> i32 {
        self.p1.y - self.p0.y + 1
    }

    /// Center cell, rounded toward the top-left.
    pub fn center(&self) -> Position {
        Position::new((self.p0.x + self.p1.x) / 2, (self.p0.y + self.p1.y) / 2)
    }

    /// Whether `pos` lies inside the rectangle, edges included.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.p0.x && pos.x <= self.p1.x && pos.y >= self.p0.y && pos.y <= self.p1.y
    }
}

/// An inclusive integer interval, e.g. a damage span or a spawn count.
///
/// # Examples
///
/// ```
/// use rlutil::{Range, Rnd};
///
/// let range = Range::new(6, 2);
/// assert_eq!((range.min, range.max), (2, 6));
///
/// let mut rnd = Rnd::new(7);
/// let v = range.roll(&mut rnd);
/// assert!(range.contains(v));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub min: i32,
    pub max: i32,
}

impl Range {
    /// Creates a range; the bounds may be given in either order.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Whether `value` lies within the bounds, both ends included.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of integers covered.
    pub fn len(&self) -> i32 {
        self.max - self.min + 1
    }

    /// True when the bounds are inverted, which `new` never produces.
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Picks a uniformly distributed value from the range.
    pub fn roll(&self, rnd: &mut Rnd) -> i32 {
        rnd.range(self.min, self.max)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
        assert_eq!(Position::origin(), Position::default());
    }

    #[test]
    fn test_position_distances() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(3, -4);
        assert_eq!(pos1.king_distance(pos2), 4);
        assert_eq!(pos1.taxi_distance(pos2), 7);
        assert_eq!(pos2.taxi_distance(pos1), 7);
    }

    #[test]
    fn test_position_adjacent() {
        let pos = Position::new(5, 5);
        let adjacent = pos.adjacent_positions();
        assert_eq!(adjacent.len(), 8);
        assert!(adjacent.contains(&Position::new(4, 4)));
        assert!(adjacent.contains(&Position::new(6, 6)));
        assert!(!adjacent.contains(&pos));
    }

    #[test]
    fn test_position_cardinal_adjacent() {
        let pos = Position::new(5, 5);
        let adjacent = pos.cardinal_adjacent_positions();
        assert_eq!(adjacent.len(), 4);
        assert!(adjacent.contains(&Position::new(5, 4))); // North
        assert!(adjacent.contains(&Position::new(4, 5))); // West
        assert!(!adjacent.contains(&Position::new(4, 4))); // No diagonal
    }

    #[test]
    fn test_position_is_adjacent() {
        let pos = Position::new(3, 3);
        assert!(pos.is_adjacent(Position::new(4, 2), false));
        assert!(!pos.is_adjacent(Position::new(5, 3), false));
        assert!(!pos.is_adjacent(pos, false));
        assert!(pos.is_adjacent(pos, true));
    }

    #[test]
    fn test_is_adjacent_at_coordinate_extremes() {
        let far_right = Position::new(i32::MAX, 0);
        assert!(!far_right.is_adjacent(Position::new(-1, 0), false));
        assert!(!Position::new(i32::MIN, 0).is_adjacent(Position::new(i32::MAX, 0), true));
        assert!(far_right.is_adjacent(Position::new(i32::MAX - 1, 1), false));
    }

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(3, 2);
        assert_eq!(pos1 + pos2, Position::new(8, 12));
        assert_eq!(pos1 - pos2, Position::new(2, 8));
        assert_eq!(-pos2, Position::new(-3, -2));
        assert_eq!(pos2 * 3, Position::new(9, 6));

        let mut walker = Position::origin();
        walker += Position::new(1, -1);
        assert_eq!(walker, Position::new(1, -1));
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::from_xy(1, 1, 4, 2);
        assert_eq!(rect.width(), 4);
        assert_eq!(rect.height(), 2);
        assert_eq!(rect.center(), Position::new(2, 1));
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::from_xy(0, 0, 9, 9);
        assert!(rect.contains(Position::new(0, 0)));
        assert!(rect.contains(Position::new(9, 9)));
        assert!(!rect.contains(Position::new(-1, 5)));
        assert!(!rect.contains(Position::new(5, 10)));
    }

    #[test]
    fn test_range_normalizes_and_contains() {
        let range = Range::new(10, -2);
        assert_eq!(range.min, -2);
        assert_eq!(range.max, 10);
        assert_eq!(range.len(), 13);
        assert!(!range.is_empty());
        assert!(range.contains(-2));
        assert!(range.contains(10));
        assert!(!range.contains(11));
        assert_eq!(range.to_string(), "-2-10");
    }

    #[test]
    fn test_range_roll_stays_in_bounds() {
        let mut rnd = Rnd::new(99);
        let range = Range::new(3, 5);
        for _ in 0..200 {
            assert!(range.contains(range.roll(&mut rnd)));
        }
    }
}
