use sweepgrid_core::{Direction, DistanceGrid, Point};


/// Fewest 4-way moves between two cells of an open grid (L1 distance).
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a - b;
    d.x.abs() + d.y.abs()
}

/// Fewest 8-way moves between two cells of an open grid (L∞ distance).
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let d = a - b;
    d.x.abs().max(d.y.abs())
}

/// Neighbour scan order for 8-way moves: row-major over the 3×3 block.
const EIGHT: [Direction; 8] = [
    Direction::NW,
    Direction::N,
    Direction::NE,
    Direction::W,
    Direction::E,
    Direction::SW,
    Direction::S,
    Direction::SE,
];

/// Neighbour scan order for 4-way moves.
const FOUR: [Direction; 4] = [Direction::N, Direction::W, Direction::E, Direction::S];

/// Which neighbours take part in relaxation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Adjacency {
    /// King moves: the 3×3 block minus the centre.
    #[default]
    Eight,
    /// Rook moves: up, left, right, down.
    Four,
}

/// Result of relaxing one cell against its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxed {
    /// The smaller of the cell's own value and the best `neighbour + 1`.
    pub value: i32,
    /// The neighbour that produced `value`, if one beat the cell's own value.
    pub direction: Option<Direction>,
}

impl Adjacency {
    /// Neighbour directions in scan order.
    #[inline]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Adjacency::Eight => &EIGHT,
            Adjacency::Four => &FOUR,
        }
    }

    /// Distance between two cells on an obstacle-free grid under this model.
    #[inline]
    pub fn metric(self, a: Point, b: Point) -> i32 {
        match self {
            Adjacency::Eight => chebyshev(a, b),
            Adjacency::Four => manhattan(a, b),
        }
    }

    /// Relax the cell at `p` against the current values of its neighbours.
    ///
    /// The running minimum starts at the cell's own value. A neighbour only
    /// replaces it, and records its direction, when `neighbour + 1` is
    /// strictly smaller, so on ties the first neighbour in scan order wins.
    ///
    /// `p` must be an interior cell; its neighbours then always exist thanks
    /// to the border.
    pub fn relax(self, grid: &DistanceGrid, p: Point) -> Relaxed {
        let mut best = Relaxed {
            value: grid.at(p).unwrap_or(i32::MAX),
            direction: None,
        };
        for &dir in self.directions() {
            let Some(v) = grid.at(p + dir.offset()) else {
                continue;
            };
            let candidate = v.saturating_add(1);
            if candidate < best.value {
                best = Relaxed {
                    value: candidate,
                    direction: Some(dir),
                };
            }
        }
        best
    }
}
