use std::ops::{Index, IndexMut};

use crate::{board::Board, vehicle::Vehicle};

/// Which cells of a board are covered by some vehicle.
///
/// Built fresh from a [`Board`] whenever moves are generated; never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(board: &Board) -> Grid {
        let size = board.size();
        let mut grid = Grid {
            size,
            cells: vec![false; size * size],
        };
        for v in board.vehicles() {
            grid.fill(v, true);
        }

        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Marks the cells of `vehicle` as free.
    pub fn clear(&mut self, vehicle: &Vehicle) {
        self.fill(vehicle, false);
    }

    /// A copy of this grid with `vehicle` lifted off the board.
    pub fn without(&self, vehicle: &Vehicle) -> Grid {
        let mut grid = self.clone();
        grid.clear(vehicle);
        grid
    }

    fn fill(&mut self, vehicle: &Vehicle, value: bool) {
        for cell in vehicle.cells() {
            self[cell] = value;
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = bool;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index.0 * self.size + index.1]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.cells[index.0 * self.size + index.1]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn marks_covered_cells() {
        let board = Board::new(
            "g",
            6,
            [Vehicle::goal(2, 0, 2), Vehicle::vertical(3, 1, 3)],
        )
        .unwrap();
        let grid = Grid::new(&board);

        let covered = (0..6)
            .flat_map(|r| (0..6).map(move |c| (r, c)))
            .filter(|&cell| grid[cell])
            .count();
        assert_eq!(covered, 5);
        assert!(grid[(2, 0)] && grid[(2, 1)]);
        assert!(grid[(1, 3)] && grid[(2, 3)] && grid[(3, 3)]);
        assert!(!grid[(0, 3)] && !grid[(4, 3)]);
    }

    #[test]
    fn lifting_a_vehicle_frees_only_its_cells() {
        let blocker = Vehicle::vertical(3, 1, 3);
        let board = Board::new("g", 6, [Vehicle::goal(2, 0, 2), blocker]).unwrap();
        let grid = Grid::new(&board);
        let lifted = grid.without(&blocker);

        assert!(grid[(2, 3)]);
        assert!(!lifted[(2, 3)]);
        assert!(lifted[(2, 0)]);
    }
}
