//! Compass tags naming which neighbour produced a cell's distance.

use std::fmt;

use crate::geom::Point;

/// One of the eight compass directions around a cell.
///
/// A cell with no recorded direction is represented as
/// `Option::<Direction>::None` rather than a ninth variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions, clockwise starting from north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Offset to the neighbour in this direction (`y` grows south).
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::N => Point::new(0, -1),
            Direction::NE => Point::new(1, -1),
            Direction::E => Point::new(1, 0),
            Direction::SE => Point::new(1, 1),
            Direction::S => Point::new(0, 1),
            Direction::SW => Point::new(-1, 1),
            Direction::W => Point::new(-1, 0),
            Direction::NW => Point::new(-1, -1),
        }
    }

    /// Inverse of [`offset`](Self::offset). `None` for `(0, 0)` and for
    /// anything further than one step away.
    pub fn from_offset(d: Point) -> Option<Direction> {
        Self::ALL.into_iter().find(|dir| dir.offset() == d)
    }

    /// Whether the direction is one of N, E, S, W.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Direction::N | Direction::E | Direction::S | Direction::W)
    }

    /// Short compass label ("N", "NE", ...).
    pub const fn label(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_round_trip_through_lookup() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_offset(dir.offset()), Some(dir));
        }
        assert_eq!(Direction::from_offset(Point::ZERO), None);
        assert_eq!(Direction::from_offset(Point::new(2, 0)), None);
    }

    #[test]
    fn offsets_are_unit_steps() {
        for dir in Direction::ALL {
            let d = dir.offset();
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
            assert_ne!(d, Point::ZERO);
            assert_eq!(dir.is_cardinal(), d.x == 0 || d.y == 0);
        }
    }

    #[test]
    fn north_is_up() {
        assert_eq!(Direction::N.offset(), Point::new(0, -1));
        assert_eq!(Direction::SE.offset(), Point::new(1, 1));
    }

    #[test]
    fn labels() {
        assert_eq!(Direction::NW.to_string(), "NW");
        assert_eq!(Direction::S.label(), "S");
    }
}
