//! # Compass Directions
//!
//! The 3×3 neighbourhood around a cell: eight compass directions plus the
//! center, their unit offsets, and their names.

use crate::config::COMPASS_SECTOR;
use crate::{Position, Rnd};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of the 3×3 neighbourhood, relative to its middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dir {
    DownLeft,
    Down,
    DownRight,
    Left,
    Center,
    Right,
    UpLeft,
    Up,
    UpRight,
}

/// The eight neighbours in row-major order, center excluded.
pub const DIRS: [Dir; 8] = [
    Dir::UpLeft,
    Dir::Up,
    Dir::UpRight,
    Dir::Left,
    Dir::Right,
    Dir::DownLeft,
    Dir::Down,
    Dir::DownRight,
];

/// The full neighbourhood in row-major order, center included.
pub const DIRS_WITH_CENTER: [Dir; 9] = [
    Dir::UpLeft,
    Dir::Up,
    Dir::UpRight,
    Dir::Left,
    Dir::Center,
    Dir::Right,
    Dir::DownLeft,
    Dir::Down,
    Dir::DownRight,
];

/// Orthogonal neighbours only.
pub const CARDINAL_DIRS: [Dir; 4] = [Dir::Up, Dir::Left, Dir::Right, Dir::Down];

/// Compass names indexed `[y + 1][x + 1]`.
const COMPASS_NAMES: [[&str; 3]; 3] = [["NW", "N", "NE"], ["W", "", "E"], ["SW", "S", "SE"]];

impl Dir {
    /// Converts a unit offset to a direction.
    ///
    /// Returns `None` unless both components lie in `-1..=1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlutil::{Dir, Position};
    ///
    /// assert_eq!(Dir::from_offset(Position::new(1, -1)), Some(Dir::UpRight));
    /// assert_eq!(Dir::from_offset(Position::new(0, 0)), Some(Dir::Center));
    /// assert_eq!(Dir::from_offset(Position::new(2, 0)), None);
    /// ```
    pub fn from_offset(offset: Position) -> Option<Dir> {
        match (offset.x, offset.y) {
            (-1, -1) => Some(Dir::UpLeft),
            (0, -1) => Some(Dir::Up),
            (1, -1) => Some(Dir::UpRight),
            (-1, 0) => Some(Dir::Left),
            (0, 0) => Some(Dir::Center),
            (1, 0) => Some(Dir::Right),
            (-1, 1) => Some(Dir::DownLeft),
            (0, 1) => Some(Dir::Down),
            (1, 1) => Some(Dir::DownRight),
            _ => None,
        }
    }

    /// Converts a direction to its unit offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlutil::{Dir, Position};
    ///
    /// assert_eq!(Dir::Up.offset(), Position::new(0, -1));
    /// ```
    pub fn offset(self) -> Position {
        match self {
            Dir::DownLeft => Position::new(-1, 1),
            Dir::Down => Position::new(0, 1),
            Dir::DownRight => Position::new(1, 1),
            Dir::Left => Position::new(-1, 0),
            Dir::Center => Position::new(0, 0),
            Dir::Right => Position::new(1, 0),
            Dir::UpLeft => Position::new(-1, -1),
            Dir::Up => Position::new(0, -1),
            Dir::UpRight => Position::new(1, -1),
        }
    }

    /// Short compass name ("N", "SE", ...). The center has an empty name.
    pub fn compass_name(self) -> &'static str {
        let o = self.offset();
        COMPASS_NAMES[(o.y + 1) as usize][(o.x + 1) as usize]
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Dir {
        let o = self.offset();
        // Negating a unit offset always yields another unit offset
        Dir::from_offset(-o).unwrap_or(Dir::Center)
    }

    /// Whether this is one of the four orthogonal directions.
    pub fn is_cardinal(self) -> bool {
        CARDINAL_DIRS.contains(&self)
    }

    /// Picks a uniformly random direction.
    pub fn random(rnd: &mut Rnd, center_allowed: bool) -> Dir {
        let dirs: &[Dir] = if center_allowed {
            &DIRS_WITH_CENTER
        } else {
            &DIRS
        };
        let idx = rnd.range(0, dirs.len() as i32 - 1) as usize;
        dirs[idx]
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.compass_name())
    }
}

/// Compass name of a unit offset, or `None` outside the 3×3 neighbourhood.
pub fn compass_name_for_offset(offset: Position) -> Option<&'static str> {
    Dir::from_offset(offset).map(Dir::compass_name)
}

/// Eight-sector compass name of the bearing from `from` to `to`.
///
/// The E, N, S and W sectors own their boundary angles; the diagonal sectors
/// are open. Identical points read as "E".
///
/// # Examples
///
/// ```
/// use rlutil::{compass_name_between, Position};
///
/// let origin = Position::new(10, 10);
/// assert_eq!(compass_name_between(origin, Position::new(10, 0)), "N");
/// assert_eq!(compass_name_between(origin, Position::new(15, 16)), "SE");
/// assert_eq!(compass_name_between(origin, Position::new(0, 11)), "W");
/// ```
pub fn compass_name_between(from: Position, to: Position) -> &'static str {
    let offset = to - from;
    let angle = f64::from(-offset.y).atan2(f64::from(offset.x));

    let half = COMPASS_SECTOR / 2.0;
    let edge = |k: f64| half + COMPASS_SECTOR * k;

    if angle < -edge(2.0) && angle > -edge(3.0) {
        "SW"
    } else if angle <= -edge(1.0) && angle >= -edge(2.0) {
        "S"
    } else if angle < -edge(0.0) && angle > -edge(1.0) {
        "SE"
    } else if angle >= -edge(0.0) && angle <= edge(0.0) {
        "E"
    } else if angle > edge(0.0) && angle < edge(1.0) {
        "NE"
    } else if angle >= edge(1.0) && angle <= edge(2.0) {
        "N"
    } else if angle > edge(2.0) && angle < edge(3.0) {
        "NW"
    } else {
        "W"
    }
}

/// A uniformly chosen neighbour of `origin`, or `origin` itself when
/// `center_allowed` is set and the center comes up.
pub fn random_adjacent(origin: Position, center_allowed: bool, rnd: &mut Rnd) -> Position {
    origin + Dir::random(rnd, center_allowed).offset()
}
