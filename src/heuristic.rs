//! Estimates of the number of moves still needed to free the goal vehicle.
//!
//! Both estimates are zero exactly on solved boards.

use crate::{board::Board, grid::Grid, vehicle::Vehicle};

/// Selects one of the built-in estimates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heuristic {
    Blocking,
    Advanced,
}

impl Heuristic {
    pub fn evaluate(self, board: &Board) -> u32 {
        match self {
            Heuristic::Blocking => blocking(board),
            Heuristic::Advanced => advanced(board),
        }
    }
}

/// Whether `vehicle` sits between the goal vehicle and the exit.
fn is_blocking(goal: &Vehicle, vehicle: &Vehicle) -> bool {
    let row = goal.fixed();
    if vehicle.is_vertical() {
        vehicle.fixed() > goal.end() && vehicle.spans(row)
    } else {
        vehicle.fixed() == row && vehicle.position() > goal.position()
    }
}

fn blockers(board: &Board) -> impl Iterator<Item = &Vehicle> {
    let goal = board.goal_vehicle();
    board.vehicles().iter().filter(move |v| is_blocking(goal, v))
}

/// Number of vehicles directly between the goal vehicle and the exit.
pub fn blocking(board: &Board) -> u32 {
    if board.is_solved() {
        return 0;
    }

    blockers(board).count() as u32
}

/// Whether a vertical blocker can clear the goal row neither upwards nor
/// downwards without some other vehicle moving first.
fn is_stuck(grid: &Grid, row: usize, vehicle: &Vehicle) -> bool {
    let grid = grid.without(vehicle);
    let column = vehicle.fixed();
    let length = vehicle.length();
    let taken = |r: usize| grid[(r, column)];

    // clearing downwards needs rows row+1 ..= row+length
    let below = length > grid.size() - row - 1 || (row + 1..=row + length).any(taken);
    // clearing upwards needs rows row-length .. row
    let above = length > row || (row - length..row).any(taken);

    below && above
}

/// The blocking count plus one when any vertical blocker is itself stuck.
///
/// The extra unit is added at most once per board.
pub fn advanced(board: &Board) -> u32 {
    if board.is_solved() {
        return 0;
    }

    let grid = Grid::new(board);
    let row = board.goal_vehicle().fixed();
    let mut count = 0;
    let mut deep_blocked = false;

    for vehicle in blockers(board) {
        count += 1;
        if vehicle.is_vertical() && !deep_blocked && is_stuck(&grid, row, vehicle) {
            count += 1;
            deep_blocked = true;
        }
    }

    count
}

#[cfg(test)]
mod test {
    use pathfinding::directed::bfs::bfs;

    use super::*;
    use crate::moves::successor_boards;

    fn board(vehicles: &[Vehicle]) -> Board {
        Board::new("h", 6, vehicles.iter().copied()).unwrap()
    }

    fn optimal(board: &Board) -> Option<usize> {
        bfs(board, |b| successor_boards(b), Board::is_solved).map(|path| path.len() - 1)
    }

    #[test]
    fn zero_on_goal() {
        let b = board(&[Vehicle::goal(2, 4, 2), Vehicle::vertical(0, 0, 3)]);
        assert!(b.is_solved());
        assert_eq!(blocking(&b), 0);
        assert_eq!(advanced(&b), 0);
    }

    #[test]
    fn counts_blockers_ahead_only() {
        let b = board(&[
            Vehicle::goal(2, 1, 2),
            Vehicle::vertical(0, 0, 3),  // behind the goal vehicle
            Vehicle::vertical(3, 2, 2),  // ahead, covers row 2
            Vehicle::vertical(4, 3, 3),  // ahead, below row 2
            Vehicle::vertical(5, 0, 3),  // ahead, covers row 2
            Vehicle::horizontal(0, 3, 2),
        ]);
        assert_eq!(blocking(&b), 2);
        assert_eq!(advanced(&b), 2);
    }

    #[test]
    fn horizontal_blocker_on_goal_row() {
        let b = board(&[Vehicle::goal(2, 0, 2), Vehicle::horizontal(2, 4, 2)]);
        assert_eq!(blocking(&b), 1);
        assert_eq!(advanced(&b), 1);
    }

    #[test]
    fn stuck_blocker_costs_one_more() {
        // the length-3 blocker in column 4 cannot rise above row 2 and the
        // lorry under it stops it from dropping
        let b = board(&[
            Vehicle::goal(2, 0, 2),
            Vehicle::vertical(4, 0, 3),
            Vehicle::horizontal(4, 3, 3),
        ]);
        assert_eq!(blocking(&b), 1);
        assert_eq!(advanced(&b), 2);
    }

    #[test]
    fn deep_blocked_bonus_is_counted_once() {
        let b = board(&[
            Vehicle::goal(2, 0, 2),
            Vehicle::vertical(3, 0, 3),
            Vehicle::vertical(4, 0, 3),
            Vehicle::horizontal(4, 2, 3),
        ]);
        assert_eq!(blocking(&b), 2);
        assert_eq!(advanced(&b), 3);
    }

    #[test]
    fn free_blocker_costs_nothing_extra() {
        let b = board(&[Vehicle::goal(2, 0, 2), Vehicle::vertical(4, 1, 2)]);
        assert_eq!(advanced(&b), blocking(&b));
    }

    #[test]
    fn never_overestimate_small_boards() {
        let cases = [
            vec![Vehicle::goal(2, 0, 2)],
            vec![Vehicle::goal(2, 0, 2), Vehicle::vertical(4, 0, 3)],
            vec![Vehicle::goal(2, 0, 2), Vehicle::vertical(4, 1, 2)],
            vec![
                Vehicle::goal(2, 0, 2),
                Vehicle::vertical(4, 0, 3),
                Vehicle::horizontal(4, 3, 3),
            ],
            vec![
                Vehicle::goal(2, 1, 2),
                Vehicle::vertical(3, 2, 3),
                Vehicle::horizontal(5, 0, 3),
            ],
            vec![
                Vehicle::goal(2, 0, 2),
                Vehicle::vertical(2, 1, 2),
                Vehicle::vertical(5, 2, 3),
            ],
        ];

        for vehicles in &cases {
            let b = board(vehicles);
            let cost = optimal(&b).expect("solvable") as u32;
            let (low, high) = (blocking(&b), advanced(&b));
            assert!(low <= high, "{}", b);
            assert!(high <= cost, "{}: {} > {}", b, high, cost);
        }
    }

    #[test]
    fn selector_dispatches() {
        let b = board(&[
            Vehicle::goal(2, 0, 2),
            Vehicle::vertical(4, 0, 3),
            Vehicle::horizontal(4, 3, 3),
        ]);
        assert_eq!(Heuristic::Blocking.evaluate(&b), 1);
        assert_eq!(Heuristic::Advanced.evaluate(&b), 2);
    }
}
