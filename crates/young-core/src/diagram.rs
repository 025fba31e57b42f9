//! Young diagrams built from integer partitions.
//!
//! A [`YoungDiagram`] owns its partition together with the grid of
//! [`Cell`]s materialized from it. Diagrams are never mutated after
//! construction: every transform returns a new, validated diagram.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    cell::Cell,
    error::{DiagramError, Result},
};

/// A Young diagram: left-justified rows of cells whose lengths form a
/// non-increasing sequence of positive integers.
///
/// Equality and hashing only consider the partition, since the cell grid
/// is fully determined by it.
///
/// # Examples
///
/// ```
/// use young_core::{Cell, YoungDiagram};
///
/// let diagram = YoungDiagram::new(vec![2, 2]).unwrap();
/// assert_eq!(diagram.removable_cells(), vec![Cell::new(1, 1)]);
///
/// let grown = diagram.add(Cell::new(2, 0)).unwrap();
/// assert_eq!(grown.partition(), &[3, 2]);
/// assert_eq!(grown.remove(Cell::new(2, 0)).unwrap(), diagram);
/// ```
#[derive(Debug, Clone, Default)]
pub struct YoungDiagram {
    partition: Vec<usize>,
    cells: Vec<Vec<Cell>>,
}

impl YoungDiagram {
    /// Creates a diagram from a partition.
    ///
    /// # Arguments
    ///
    /// * `partition` - Row lengths, from the top row down.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidPartition`] if a row is longer than the
    /// row above it, and [`DiagramError::ZeroPart`] if a row has length zero.
    pub fn new(partition: Vec<usize>) -> Result<Self> {
        validate(&partition)?;
        trace!(partition:?; "Creating diagram");
        Ok(Self::from_valid(partition))
    }

    /// Creates the diagram with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a diagram from a partition already known to be valid.
    fn from_valid(partition: Vec<usize>) -> Self {
        debug_assert!(validate(&partition).is_ok(), "{partition:?} is not a partition");

        let cells = partition
            .iter()
            .enumerate()
            .map(|(y, &length)| (0..length).map(|x| Cell::new(x, y)).collect())
            .collect();

        Self { partition, cells }
    }

    /// Get the row lengths of this diagram
    pub fn partition(&self) -> &[usize] {
        &self.partition
    }

    /// Get the cell grid, one vector per row
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Returns the total number of cells.
    pub fn size(&self) -> usize {
        self.partition.iter().sum()
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.partition.len()
    }

    /// Returns the length of the longest (first) row, or 0 for the empty diagram.
    pub fn width(&self) -> usize {
        self.partition.first().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }

    /// Returns `true` if `cell` lies inside this diagram.
    pub fn contains(&self, cell: Cell) -> bool {
        self.partition
            .get(cell.y())
            .is_some_and(|&length| cell.x() < length)
    }

    /// Returns the cell at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::OutOfRange`] if row `y` does not exist or is
    /// shorter than `x + 1`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .ok_or(DiagramError::OutOfRange { x, y })
    }

    /// Returns the content `x - y` of the cell at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::OutOfRange`] if the cell is not in the diagram.
    pub fn content(&self, x: usize, y: usize) -> Result<isize> {
        self.get(x, y).map(|cell| cell.content())
    }

    /// Returns every cell that can be added while keeping a valid diagram.
    ///
    /// Cells are ordered by row, top to bottom. The cell starting a new row
    /// below the diagram is always last.
    pub fn addable_cells(&self) -> Vec<Cell> {
        let mut addable: Vec<Cell> = self
            .partition
            .iter()
            .enumerate()
            .filter(|&(y, &length)| y == 0 || self.partition[y - 1] > length)
            .map(|(y, &length)| Cell::new(length, y))
            .collect();
        addable.push(Cell::new(0, self.rows()));
        addable
    }

    /// Returns every cell that can be removed while keeping a valid diagram.
    ///
    /// Cells are ordered by row, top to bottom.
    pub fn removable_cells(&self) -> Vec<Cell> {
        self.partition
            .iter()
            .enumerate()
            .filter(|&(y, &length)| {
                self.partition
                    .get(y + 1)
                    .is_none_or(|&below| below < length)
            })
            .map(|(y, &length)| Cell::new(length - 1, y))
            .collect()
    }

    /// Returns the diagrams covering this one in Young's lattice, one per
    /// addable cell and in the same order.
    pub fn reachable_by_addition(&self) -> Vec<YoungDiagram> {
        self.addable_cells()
            .into_iter()
            .map(|cell| self.grow(cell))
            .collect()
    }

    /// Returns the diagrams covered by this one in Young's lattice, one per
    /// removable cell and in the same order.
    pub fn reachable_by_removal(&self) -> Vec<YoungDiagram> {
        self.removable_cells()
            .into_iter()
            .map(|cell| self.shrink(cell))
            .collect()
    }

    /// Returns the diagram obtained by adding `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NotAddable`] if `cell` is not one of
    /// [`addable_cells`](Self::addable_cells).
    pub fn add(&self, cell: Cell) -> Result<YoungDiagram> {
        if !self.addable_cells().contains(&cell) {
            return Err(DiagramError::NotAddable(cell));
        }
        debug!(cell:%, partition:? = self.partition; "Adding cell");
        Ok(self.grow(cell))
    }

    /// Returns the diagram obtained by removing `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NotRemovable`] if `cell` is not one of
    /// [`removable_cells`](Self::removable_cells).
    pub fn remove(&self, cell: Cell) -> Result<YoungDiagram> {
        if !self.removable_cells().contains(&cell) {
            return Err(DiagramError::NotRemovable(cell));
        }
        debug!(cell:%, partition:? = self.partition; "Removing cell");
        Ok(self.shrink(cell))
    }

    /// Caller guarantees `cell` is addable.
    fn grow(&self, cell: Cell) -> YoungDiagram {
        let mut partition = self.partition.clone();
        match partition.get_mut(cell.y()) {
            Some(length) => *length += 1,
            None => partition.push(1),
        }
        Self::from_valid(partition)
    }

    /// Caller guarantees `cell` is removable.
    fn shrink(&self, cell: Cell) -> YoungDiagram {
        let mut partition = self.partition.clone();
        if let Some(length) = partition.get_mut(cell.y()) {
            *length -= 1;
        }
        // Only the bottom row can shrink to nothing.
        if partition.last() == Some(&0) {
            partition.pop();
        }
        Self::from_valid(partition)
    }

    /// Returns the hook length of the cell at column `x` and row `y`: the
    /// cells to its right, the cells below it, and the cell itself.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::OutOfRange`] if the cell is not in the diagram.
    pub fn hook_length(&self, x: usize, y: usize) -> Result<usize> {
        let length = self
            .partition
            .get(y)
            .copied()
            .filter(|&length| x < length)
            .ok_or(DiagramError::OutOfRange { x, y })?;

        let arm = length - x - 1;
        // Rows only shrink going down, so the column ends at the first short row.
        let leg = self.partition[y + 1..]
            .iter()
            .take_while(|&&below| below > x)
            .count();

        Ok(arm + leg + 1)
    }

    /// Returns the hook length of every cell, shaped like [`cells`](Self::cells).
    pub fn hook_lengths(&self) -> Vec<Vec<usize>> {
        let columns = self.conjugate_partition();
        self.partition
            .iter()
            .enumerate()
            .map(|(y, &length)| {
                (0..length)
                    .map(|x| (length - x - 1) + (columns[x] - y - 1) + 1)
                    .collect()
            })
            .collect()
    }

    /// Counts the standard Young tableaux of this shape using the hook-length
    /// formula `n! / Π hook(c)`.
    ///
    /// The empty diagram has exactly one (empty) tableau.
    pub fn number_of_standard_tableaux(&self) -> BigUint {
        let factorial: BigUint = (1..=self.size()).map(BigUint::from).product();
        let hooks: BigUint = self
            .hook_lengths()
            .into_iter()
            .flatten()
            .map(BigUint::from)
            .product();

        debug_assert!((&factorial % &hooks).is_zero());
        let count = factorial / hooks;
        trace!(partition:? = self.partition, count:%; "Counted standard tableaux");
        count
    }

    /// Returns the conjugate diagram, reflected across the main diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::EmptyDiagram`] for the empty diagram.
    pub fn transpose(&self) -> Result<YoungDiagram> {
        if self.is_empty() {
            return Err(DiagramError::EmptyDiagram {
                operation: "transpose",
            });
        }
        Ok(Self::from_valid(self.conjugate_partition()))
    }

    /// Column lengths, left to right.
    fn conjugate_partition(&self) -> Vec<usize> {
        (1..=self.width())
            .map(|j| {
                self.partition
                    .iter()
                    .take_while(|&&length| length >= j)
                    .count()
            })
            .collect()
    }
}

/// Checks the non-increasing and positivity rules.
fn validate(partition: &[usize]) -> Result<()> {
    for (row, pair) in partition.windows(2).enumerate() {
        if pair[1] > pair[0] {
            return Err(DiagramError::InvalidPartition {
                row: row + 1,
                length: pair[1],
                above: pair[0],
            });
        }
    }

    if let Some(row) = partition.iter().position(|&length| length == 0) {
        return Err(DiagramError::ZeroPart { row });
    }

    Ok(())
}

impl PartialEq for YoungDiagram {
    fn eq(&self, other: &Self) -> bool {
        self.partition == other.partition
    }
}

impl Eq for YoungDiagram {}

impl Hash for YoungDiagram {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.partition.hash(state);
    }
}

impl fmt::Display for YoungDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, length) in self.partition.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{length}")?;
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<usize>> for YoungDiagram {
    type Error = DiagramError;

    fn try_from(partition: Vec<usize>) -> Result<Self> {
        Self::new(partition)
    }
}

impl TryFrom<&[usize]> for YoungDiagram {
    type Error = DiagramError;

    fn try_from(partition: &[usize]) -> Result<Self> {
        Self::new(partition.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagram(partition: &[usize]) -> YoungDiagram {
        YoungDiagram::try_from(partition).expect("valid partition")
    }

    fn cells(coords: &[(usize, usize)]) -> Vec<Cell> {
        coords.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_new_materializes_rows() {
        let yd = diagram(&[4, 3, 1]);

        assert_eq!(yd.partition(), &[4, 3, 1]);
        assert_eq!(yd.cells().len(), 3);
        assert_eq!(yd.cells()[0].len(), 4);
        assert_eq!(yd.cells()[1].len(), 3);
        assert_eq!(yd.cells()[2].len(), 1);
        assert_eq!(yd.cells()[1][2], Cell::new(2, 1));
    }

    #[test]
    fn test_new_rejects_increasing_rows() {
        let err = YoungDiagram::new(vec![1, 2]).unwrap_err();

        assert_eq!(
            err,
            DiagramError::InvalidPartition {
                row: 1,
                length: 2,
                above: 1
            }
        );
        assert!(err.to_string().starts_with("Invalid partition"));
    }

    #[test]
    fn test_new_rejects_zero_rows() {
        let err = YoungDiagram::new(vec![3, 0]).unwrap_err();
        assert_eq!(err, DiagramError::ZeroPart { row: 1 });
    }

    #[test]
    fn test_empty_diagram() {
        let yd = YoungDiagram::new(Vec::new()).unwrap();

        assert_eq!(yd, YoungDiagram::empty());
        assert!(yd.is_empty());
        assert_eq!(yd.size(), 0);
        assert_eq!(yd.width(), 0);
        assert_eq!(yd.iter().count(), 0);
    }

    #[test]
    fn test_size_rows_width() {
        let yd = diagram(&[5, 5, 2, 1]);

        assert_eq!(yd.size(), 13);
        assert_eq!(yd.rows(), 4);
        assert_eq!(yd.width(), 5);
    }

    #[test]
    fn test_get_and_content() {
        let yd = diagram(&[3, 1]);

        assert_eq!(yd.get(2, 0), Ok(Cell::new(2, 0)));
        assert_eq!(yd.content(2, 0), Ok(2));
        assert_eq!(yd.content(0, 1), Ok(-1));
        assert_eq!(yd.get(1, 1), Err(DiagramError::OutOfRange { x: 1, y: 1 }));
        assert_eq!(yd.get(0, 2), Err(DiagramError::OutOfRange { x: 0, y: 2 }));
    }

    #[test]
    fn test_contains() {
        let yd = diagram(&[2, 1]);

        assert!(yd.contains(Cell::new(1, 0)));
        assert!(yd.contains(Cell::new(0, 1)));
        assert!(!yd.contains(Cell::new(1, 1)));
        assert!(!yd.contains(Cell::new(0, 2)));
    }

    #[test]
    fn test_iter_is_row_major() {
        let yd = diagram(&[2, 1]);
        let all: Vec<Cell> = yd.iter().collect();

        assert_eq!(all, cells(&[(0, 0), (1, 0), (0, 1)]));
    }

    #[test]
    fn test_addable_cells() {
        assert_eq!(
            diagram(&[3, 2]).addable_cells(),
            cells(&[(3, 0), (2, 1), (0, 2)])
        );
        assert_eq!(diagram(&[2, 2]).addable_cells(), cells(&[(2, 0), (0, 2)]));
        assert_eq!(YoungDiagram::empty().addable_cells(), cells(&[(0, 0)]));
    }

    #[test]
    fn test_removable_cells() {
        assert_eq!(diagram(&[2, 2]).removable_cells(), cells(&[(1, 1)]));
        assert_eq!(
            diagram(&[3, 1, 1]).removable_cells(),
            cells(&[(2, 0), (0, 2)])
        );
        assert!(YoungDiagram::empty().removable_cells().is_empty());
    }

    #[test]
    fn test_reachable_by_addition() {
        let reachable = diagram(&[2, 1]).reachable_by_addition();

        assert_eq!(
            reachable,
            vec![diagram(&[3, 1]), diagram(&[2, 2]), diagram(&[2, 1, 1])]
        );
    }

    #[test]
    fn test_reachable_by_removal() {
        let reachable = diagram(&[3, 1]).reachable_by_removal();
        assert_eq!(reachable, vec![diagram(&[2, 1]), diagram(&[3])]);

        assert_eq!(
            diagram(&[1]).reachable_by_removal(),
            vec![YoungDiagram::empty()]
        );
    }

    #[test]
    fn test_add_and_remove() {
        let yd = diagram(&[3, 2]);

        let added = yd.add(Cell::new(0, 2)).unwrap();
        assert_eq!(added, diagram(&[3, 2, 1]));
        assert_eq!(added.remove(Cell::new(0, 2)).unwrap(), yd);
    }

    #[test]
    fn test_add_rejects_non_addable() {
        let yd = diagram(&[2, 2]);

        assert_eq!(
            yd.add(Cell::new(2, 1)),
            Err(DiagramError::NotAddable(Cell::new(2, 1)))
        );
        assert_eq!(
            yd.add(Cell::new(0, 0)),
            Err(DiagramError::NotAddable(Cell::new(0, 0)))
        );
    }

    #[test]
    fn test_remove_rejects_non_removable() {
        let yd = diagram(&[2, 2]);

        assert_eq!(
            yd.remove(Cell::new(1, 0)),
            Err(DiagramError::NotRemovable(Cell::new(1, 0)))
        );
        assert_eq!(
            YoungDiagram::empty().remove(Cell::new(0, 0)),
            Err(DiagramError::NotRemovable(Cell::new(0, 0)))
        );
    }

    #[test]
    fn test_hook_length() {
        let yd = diagram(&[4, 3, 1]);

        assert_eq!(yd.hook_length(0, 0), Ok(6));
        assert_eq!(yd.hook_length(1, 0), Ok(4));
        assert_eq!(yd.hook_length(3, 0), Ok(1));
        assert_eq!(yd.hook_length(0, 1), Ok(4));
        assert_eq!(yd.hook_length(0, 2), Ok(1));
        assert_eq!(
            yd.hook_length(3, 1),
            Err(DiagramError::OutOfRange { x: 3, y: 1 })
        );
    }

    #[test]
    fn test_hook_lengths_grid() {
        let yd = diagram(&[3, 2]);
        assert_eq!(yd.hook_lengths(), vec![vec![4, 3, 1], vec![2, 1]]);
    }

    #[test]
    fn test_number_of_standard_tableaux() {
        assert_eq!(YoungDiagram::empty().number_of_standard_tableaux(), BigUint::from(1u32));
        assert_eq!(diagram(&[1]).number_of_standard_tableaux(), BigUint::from(1u32));
        assert_eq!(diagram(&[2, 1]).number_of_standard_tableaux(), BigUint::from(2u32));
        assert_eq!(diagram(&[3, 2]).number_of_standard_tableaux(), BigUint::from(5u32));
        assert_eq!(diagram(&[2, 2, 2]).number_of_standard_tableaux(), BigUint::from(5u32));
        assert_eq!(diagram(&[4, 3, 1]).number_of_standard_tableaux(), BigUint::from(70u32));
    }

    #[test]
    fn test_number_of_standard_tableaux_large() {
        // Staircase (5,4,3,2,1) of size 15.
        let yd = diagram(&[5, 4, 3, 2, 1]);
        assert_eq!(yd.number_of_standard_tableaux(), BigUint::from(292_864u32));

        // 25! overflows u64 but the count itself is small.
        let square = diagram(&[5, 5, 5, 5, 5]);
        assert_eq!(
            square.number_of_standard_tableaux(),
            BigUint::from(701_149_020u64)
        );
    }

    #[test]
    fn test_transpose() {
        assert_eq!(diagram(&[1]).transpose().unwrap(), diagram(&[1]));
        assert_eq!(
            diagram(&[5, 5, 2, 1]).transpose().unwrap(),
            diagram(&[4, 3, 2, 2, 2])
        );
        assert_eq!(diagram(&[3]).transpose().unwrap(), diagram(&[1, 1, 1]));
    }

    #[test]
    fn test_transpose_empty_fails() {
        assert_eq!(
            YoungDiagram::empty().transpose(),
            Err(DiagramError::EmptyDiagram {
                operation: "transpose"
            })
        );
    }

    #[test]
    fn test_equality_ignores_construction_path() {
        let built = YoungDiagram::empty()
            .add(Cell::new(0, 0))
            .and_then(|yd| yd.add(Cell::new(0, 1)))
            .and_then(|yd| yd.add(Cell::new(1, 0)))
            .unwrap();

        assert_eq!(built, diagram(&[2, 1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(diagram(&[5, 5, 2, 1]).to_string(), "[5, 5, 2, 1]");
        assert_eq!(YoungDiagram::empty().to_string(), "[]");
    }
}
