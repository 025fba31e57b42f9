//! Young's lattice: the partial order on diagrams by containment.
//!
//! One diagram precedes another when its cells are a subset of the other's.
//! The covering relation of this order is exactly single-cell addition, as
//! produced by [`YoungDiagram::reachable_by_addition`].

use indexmap::IndexSet;
use log::debug;

use crate::diagram::YoungDiagram;

/// Returns `true` if every cell of `lower` is also a cell of `upper`.
///
/// # Examples
///
/// ```
/// use young_core::{YoungDiagram, lattice};
///
/// let small = YoungDiagram::new(vec![2, 1]).unwrap();
/// let large = YoungDiagram::new(vec![3, 1, 1]).unwrap();
/// assert!(lattice::is_contained_in(&small, &large));
/// assert!(!lattice::is_contained_in(&large, &small));
/// ```
pub fn is_contained_in(lower: &YoungDiagram, upper: &YoungDiagram) -> bool {
    lower.rows() <= upper.rows()
        && lower
            .partition()
            .iter()
            .zip(upper.partition())
            .all(|(low, up)| low <= up)
}

/// Returns `true` if `upper` is obtained from `lower` by adding one cell.
pub fn covers(lower: &YoungDiagram, upper: &YoungDiagram) -> bool {
    upper.size() == lower.size() + 1 && is_contained_in(lower, upper)
}

/// Returns every diagram with `n` cells, largest partition first in
/// lexicographic order (`[n]` first, `[1, 1, ..., 1]` last).
///
/// The rank is built by climbing from the empty diagram one addition at a
/// time.
pub fn rank(n: usize) -> Vec<YoungDiagram> {
    let mut level = IndexSet::from([YoungDiagram::empty()]);

    for size in 1..=n {
        level = level
            .iter()
            .flat_map(YoungDiagram::reachable_by_addition)
            .collect();
        debug!(size, diagrams = level.len(); "Built lattice rank");
    }

    let mut diagrams: Vec<YoungDiagram> = level.into_iter().collect();
    diagrams.sort_by(|a, b| b.partition().cmp(a.partition()));
    diagrams
}
