//! Integration tests for grid geometry: directions, distances and containment.

use proptest::prelude::*;
use rlutil::{
    closest_pos, compass_name_between, compass_name_for_offset, constrain_in_range, is_area_inside,
    is_pos_adj, is_pos_inside, king_dist, king_dist_pos, positions_matching, taxi_dist, Dir,
    Position, Rect, RlResult, DIRS, DIRS_WITH_CENTER,
};

/// Walking one step in every direction and back returns to the start.
#[test]
fn test_step_and_return() {
    let start = Position::new(40, 12);
    for dir in DIRS_WITH_CENTER {
        let there = start + dir.offset();
        let back = there + dir.opposite().offset();
        assert_eq!(back, start, "direction {:?}", dir);
    }
}

/// Each neighbour is one king step and at most two taxi steps away.
#[test]
fn test_neighbours_are_one_king_step() {
    let centre = Position::new(-3, 8);
    for neighbour in centre.adjacent_positions() {
        assert_eq!(king_dist_pos(centre, neighbour), 1);
        assert!(taxi_dist(centre, neighbour) <= 2);
        assert!(is_pos_adj(centre, neighbour, false));
    }
}

/// Bearings to far-away targets match the unit-step names along the axes and diagonals.
#[test]
fn test_far_bearings_follow_unit_names() {
    let origin = Position::new(100, 100);
    for dir in DIRS {
        let target = origin + dir.offset() * 25;
        assert_eq!(
            compass_name_between(origin, target),
            compass_name_for_offset(dir.offset()).unwrap()
        );
    }
}

/// Pick the free cell nearest to the player from a column-major occupancy grid.
#[test]
fn test_nearest_free_cell_from_grid() -> RlResult<()> {
    let width = 4;
    let height = 3;
    // Everything blocked except (3, 0) and (1, 2)
    let mut blocked = vec![true; width * height];
    blocked[3 * height] = false;
    blocked[height + 2] = false;

    let free = positions_matching(&blocked, false, width, height)?;
    assert_eq!(free, vec![Position::new(1, 2), Position::new(3, 0)]);

    let player = Position::new(3, 1);
    assert_eq!(closest_pos(player, &free), Some(Position::new(3, 0)));
    Ok(())
}

#[test]
fn test_room_placement_inside_map() {
    let map = Rect::from_xy(0, 0, 79, 23);
    let room = Rect::from_xy(10, 5, 20, 12);
    assert!(is_area_inside(&room, &map, false));
    assert!(is_pos_inside(room.center(), &room));
    assert!(is_pos_inside(room.center(), &map));
}

proptest! {
    #[test]
    fn prop_king_never_exceeds_taxi(x0 in -1000i32..1000, y0 in -1000i32..1000,
                                    x1 in -1000i32..1000, y1 in -1000i32..1000) {
        let p0 = Position::new(x0, y0);
        let p1 = Position::new(x1, y1);
        let king = king_dist(x0, y0, x1, y1);
        prop_assert_eq!(king, king_dist_pos(p0, p1));
        prop_assert!(king <= taxi_dist(p0, p1));
        prop_assert!(taxi_dist(p0, p1) <= 2 * king);
        prop_assert_eq!(king, king_dist_pos(p1, p0));
    }

    #[test]
    fn prop_clamp_lands_in_bounds(min in -500i32..500, span in 0i32..500, val in any::<i32>()) {
        let max = min + span;
        let clamped = constrain_in_range(min, val, max).unwrap();
        prop_assert!(clamped >= min && clamped <= max);
        if val >= min && val <= max {
            prop_assert_eq!(clamped, val);
        }
    }

    #[test]
    fn prop_inverted_bounds_rejected(min in -500i32..500, gap in 1i32..500, val in any::<i32>()) {
        prop_assert_eq!(constrain_in_range(min, val, min - gap), None);
    }

    #[test]
    fn prop_adjacency_matches_king_distance(dx in -3i32..=3, dy in -3i32..=3) {
        let p = Position::new(7, 7);
        let q = Position::new(7 + dx, 7 + dy);
        let expected = king_dist_pos(p, q) == 1;
        prop_assert_eq!(is_pos_adj(p, q, false), expected);
        prop_assert_eq!(Dir::from_offset(q - p).is_some(), dx.abs() <= 1 && dy.abs() <= 1);
    }
}
