//! Path reconstruction from recorded direction tags.

use sweepgrid_core::{CellKind, DistanceGrid, Point};

/// Follow the direction tags from `from` down to the destination.
///
/// Every step must land on a neighbour whose value is exactly one less, so
/// a consistent chain from a cell holding `d` has `d + 1` points, both
/// endpoints included. Returns `None` when the grid carries no directions,
/// when `from` is blocked, empty or out of bounds, or when the chain is
/// broken.
pub fn trace_path(grid: &DistanceGrid, from: Point) -> Option<Vec<Point>> {
    if !grid.has_directions() || !grid.interior().contains(from) {
        return None;
    }
    let mut value = grid.at(from)?;
    if !matches!(grid.kind(value), CellKind::Destination | CellKind::Reached) {
        return None;
    }

    let mut path = Vec::with_capacity(value.max(0) as usize + 1);
    let mut p = from;
    path.push(p);
    while value > 0 {
        let next = p + grid.direction_at(p)?.offset();
        let next_value = grid.at(next)?;
        if next_value != value - 1 {
            return None;
        }
        p = next;
        value = next_value;
        path.push(p);
    }
    if value != 0 {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Adjacency, Relaxer, SolveConfig};
    use sweepgrid_core::Direction;

    #[test]
    fn path_walks_back_to_destination() {
        let mut g = DistanceGrid::open(3, 4, Point::new(1, 1)).unwrap();
        Relaxer::new(SolveConfig::default().with_adjacency(Adjacency::Four)).solve(&mut g);
        let path = trace_path(&g, Point::new(4, 3)).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.first(), Some(&Point::new(4, 3)));
        assert_eq!(path.last(), Some(&Point::new(1, 1)));
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert!(Direction::from_offset(d).is_some_and(Direction::is_cardinal));
        }
    }

    #[test]
    fn destination_traces_to_itself() {
        let mut g = DistanceGrid::open(2, 2, Point::new(2, 1)).unwrap();
        Relaxer::new(SolveConfig::default()).solve(&mut g);
        assert_eq!(trace_path(&g, Point::new(2, 1)), Some(vec![Point::new(2, 1)]));
    }

    #[test]
    fn no_path_without_directions() {
        let mut g = DistanceGrid::open(2, 2, Point::new(1, 1)).unwrap();
        Relaxer::new(SolveConfig::default().with_directions(false)).solve(&mut g);
        assert_eq!(trace_path(&g, Point::new(2, 2)), None);
    }

    #[test]
    fn no_path_from_blocked_or_unreached() {
        // 1x3 with a wall in the middle: area 3, empty 4, blocked 5.
        let mut g = DistanceGrid::from_rows(
            1,
            3,
            vec![vec![5, 5, 5, 5, 5], vec![5, 0, 5, 4, 5], vec![5, 5, 5, 5, 5]],
        )
        .unwrap();
        Relaxer::new(SolveConfig::default()).solve(&mut g);
        assert_eq!(trace_path(&g, Point::new(2, 1)), None);
        assert_eq!(trace_path(&g, Point::new(3, 1)), None);
        assert_eq!(trace_path(&g, Point::new(0, 0)), None);
    }

    #[test]
    fn broken_chain_is_rejected() {
        let mut g = DistanceGrid::open(1, 3, Point::new(1, 1)).unwrap();
        Relaxer::new(SolveConfig::default()).solve(&mut g);
        g.set_direction(Point::new(3, 1), Some(Direction::E));
        assert_eq!(trace_path(&g, Point::new(3, 1)), None);
        g.set_direction(Point::new(3, 1), None);
        assert_eq!(trace_path(&g, Point::new(3, 1)), None);
    }
}
