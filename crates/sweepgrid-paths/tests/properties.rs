use std::collections::VecDeque;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use sweepgrid_core::{CellKind, DistanceGrid, Point};
use sweepgrid_paths::{Adjacency, RecomputePolicy, Relaxer, SolveConfig, trace_path};

/// Interior walls from `walls` (row-major), destination at the `dest`-th
/// interior cell.
fn build(rows: usize, cols: usize, walls: &[bool], dest: usize) -> DistanceGrid {
    let mut g = DistanceGrid::open(rows, cols, Point::new(1, 1)).unwrap();
    let empty = g.empty_value();
    let blocked = g.blocked_value();
    let interior: Vec<Point> = g.interior().iter().collect();
    for (i, &p) in interior.iter().enumerate() {
        g.set(p, if walls[i] { blocked } else { empty });
    }
    g.set(interior[dest], 0);
    g
}

/// Breadth-first reference distances; unreachable cells keep their input.
fn reference(grid: &DistanceGrid, adjacency: Adjacency) -> DistanceGrid {
    let mut out = grid.clone();
    let Some(dest) = grid.destination() else {
        return out;
    };
    let mut seen = vec![dest];
    let mut queue = VecDeque::from([(dest, 0)]);
    while let Some((p, d)) = queue.pop_front() {
        out.set(p, d);
        for dir in adjacency.directions() {
            let n = p + dir.offset();
            let open = grid
                .at(n)
                .is_some_and(|v| !grid.is_blocked(v));
            if open && !seen.contains(&n) {
                seen.push(n);
                queue.push_back((n, d + 1));
            }
        }
    }
    out
}

fn arb_grid() -> impl Strategy<Value = (usize, usize, Vec<bool>, usize)> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            proptest::collection::vec(proptest::bool::weighted(0.3), rows * cols),
            0..rows * cols,
        )
    })
}

fn arb_adjacency() -> impl Strategy<Value = Adjacency> {
    prop_oneof![Just(Adjacency::Eight), Just(Adjacency::Four)]
}

fn arb_policy() -> impl Strategy<Value = RecomputePolicy> {
    prop_oneof![Just(RecomputePolicy::Always), Just(RecomputePolicy::Unsettled)]
}

proptest! {
    #[test]
    fn sweeps_never_raise_values(
        (rows, cols, walls, dest) in arb_grid(),
        adjacency in arb_adjacency(),
        policy in arb_policy(),
    ) {
        let mut g = build(rows, cols, &walls, dest);
        let dest_point = g.destination().unwrap();
        let config = SolveConfig::default().with_adjacency(adjacency).with_policy(policy);
        let mut relaxer = Relaxer::new(config);
        let limit = rows * cols + 2;
        while !relaxer.is_converged() {
            let before = g.clone();
            relaxer.step(&mut g);
            prop_assert!(relaxer.sweeps() <= limit);
            for p in g.bounds() {
                let (old, new) = (before.at(p).unwrap(), g.at(p).unwrap());
                prop_assert!(new <= old);
                if g.is_blocked(old) || !g.interior().contains(p) {
                    prop_assert_eq!(old, new);
                }
            }
            prop_assert_eq!(g.at(dest_point), Some(0));
        }
    }

    #[test]
    fn always_matches_breadth_first_search(
        (rows, cols, walls, dest) in arb_grid(),
        adjacency in arb_adjacency(),
    ) {
        let mut g = build(rows, cols, &walls, dest);
        let expected = reference(&g, adjacency);
        Relaxer::new(SolveConfig::default().with_adjacency(adjacency)).solve(&mut g);
        prop_assert_eq!(g.to_rows(), expected.to_rows());
    }

    #[test]
    fn unsettled_never_undercuts_always(
        (rows, cols, walls, dest) in arb_grid(),
        adjacency in arb_adjacency(),
    ) {
        let mut exact = build(rows, cols, &walls, dest);
        let mut fast = exact.clone();
        let config = SolveConfig::default().with_adjacency(adjacency);
        Relaxer::new(config).solve(&mut exact);
        Relaxer::new(config.with_policy(RecomputePolicy::Unsettled)).solve(&mut fast);
        for p in exact.interior() {
            let (e, f) = (exact.at(p).unwrap(), fast.at(p).unwrap());
            prop_assert!(f >= e);
            // Reachability is the same under both policies.
            prop_assert_eq!(exact.kind(e), fast.kind(f));
        }
    }

    #[test]
    fn direction_chains_reach_destination(
        (rows, cols, walls, dest) in arb_grid(),
        adjacency in arb_adjacency(),
        policy in arb_policy(),
    ) {
        let mut g = build(rows, cols, &walls, dest);
        let config = SolveConfig::default().with_adjacency(adjacency).with_policy(policy);
        Relaxer::new(config).solve(&mut g);
        for p in g.interior() {
            let v = g.at(p).unwrap();
            match g.kind(v) {
                CellKind::Reached | CellKind::Destination => {
                    let path = trace_path(&g, p);
                    prop_assert!(path.is_some(), "broken chain at {}", p);
                    let path = path.unwrap();
                    prop_assert_eq!(path.len(), v as usize + 1);
                    prop_assert_eq!(g.at(*path.last().unwrap()), Some(0));
                    for pair in path.windows(2) {
                        let step = pair[1] - pair[0];
                        prop_assert!(adjacency.directions().iter().any(|d| d.offset() == step));
                    }
                }
                CellKind::Empty | CellKind::Blocked => {
                    prop_assert_eq!(g.direction_at(p), None);
                }
            }
        }
    }

    #[test]
    fn open_grids_match_metric_within_bound(
        rows in 1usize..10,
        cols in 1usize..10,
        dx in 0usize..10,
        dy in 0usize..10,
        adjacency in arb_adjacency(),
        policy in arb_policy(),
    ) {
        let dest = Point::new((dx % cols) as i32 + 1, (dy % rows) as i32 + 1);
        let mut g = DistanceGrid::open(rows, cols, dest).unwrap();
        let config = SolveConfig::default().with_adjacency(adjacency).with_policy(policy);
        let report = Relaxer::new(config).solve(&mut g);
        for p in g.interior() {
            prop_assert_eq!(g.at(p), Some(adjacency.metric(p, dest)));
        }
        prop_assert!(report.sweeps <= rows + cols);
    }

    #[test]
    fn solving_is_deterministic(
        (rows, cols, walls, dest) in arb_grid(),
        adjacency in arb_adjacency(),
        policy in arb_policy(),
    ) {
        let mut a = build(rows, cols, &walls, dest);
        let mut b = a.clone();
        let config = SolveConfig::default().with_adjacency(adjacency).with_policy(policy);
        let ra = Relaxer::new(config).solve(&mut a);
        let rb = Relaxer::new(config).solve(&mut b);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(ra.sweeps, rb.sweeps);
        prop_assert_eq!(ra.changes, rb.changes);
    }
}

#[test]
fn seeded_caves_match_breadth_first_search() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let rows = rng.random_range(5..30usize);
        let cols = rng.random_range(5..30usize);
        let walls: Vec<bool> = (0..rows * cols)
            .map(|_| rng.random_range(0..100u32) < 35)
            .collect();
        let dest = rng.random_range(0..rows * cols);
        for adjacency in [Adjacency::Eight, Adjacency::Four] {
            let mut g = build(rows, cols, &walls, dest);
            let expected = reference(&g, adjacency);
            Relaxer::new(SolveConfig::default().with_adjacency(adjacency)).solve(&mut g);
            assert_eq!(g.to_rows(), expected.to_rows());
        }
    }
}
