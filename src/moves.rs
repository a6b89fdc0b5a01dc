use smallvec::SmallVec;

use crate::{board::Board, grid::Grid, state::State, vehicle::Vehicle};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    /// Towards coordinate 0 (left or up).
    Back,
    /// Towards `size - 1` (right or down).
    Forward,
}

const DIRECTIONS: &[Direction] = &[Direction::Back, Direction::Forward];

/// Coordinates along the vehicle's axis, walking away from it in `direction`.
#[auto_enums::auto_enum(Iterator)]
fn outward(vehicle: &Vehicle, size: usize, direction: Direction) -> impl Iterator<Item = usize> {
    match direction {
        Direction::Back => (0..vehicle.position()).rev(),
        Direction::Forward => vehicle.end() + 1..size,
    }
}

/// Every free stopping position of `vehicle` in `direction`, nearest first.
///
/// `grid` must not contain `vehicle` itself.
fn stops<'a>(
    grid: &'a Grid,
    vehicle: &'a Vehicle,
    direction: Direction,
) -> impl Iterator<Item = usize> + 'a {
    outward(vehicle, grid.size(), direction)
        .take_while(move |&c| !grid[vehicle.cell_at(c)])
        .map(move |c| match direction {
            Direction::Back => c,
            Direction::Forward => c + 1 - vehicle.length(),
        })
}

/// All boards one slide away from `board`.
///
/// A slide moves a single vehicle any number of free cells in one direction;
/// each intermediate stop is a separate result.
pub fn successor_boards(board: &Board) -> SmallVec<[Board; 16]> {
    let grid = Grid::new(board);
    let mut out = SmallVec::new();

    for (index, vehicle) in board.vehicles().iter().enumerate() {
        let lifted = grid.without(vehicle);
        for &direction in DIRECTIONS {
            for position in stops(&lifted, vehicle, direction) {
                out.push(board.with_moved(index, position));
            }
        }
    }

    out
}

/// All states one slide away from `state`, which sits at `index` in the
/// search arena.
pub fn successors<H>(state: &State, index: usize, heuristic: &H) -> Vec<State>
where
    H: Fn(&Board) -> u32 + ?Sized,
{
    successor_boards(state.board())
        .into_iter()
        .map(|board| state.child(index, board, heuristic))
        .collect()
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;
    use crate::state::Identity;

    const JAM: &str = "
Jam
<>...^
^..^.|
|**|.v
v..v..
^...<>
v.<->.
";

    fn jam() -> Board {
        JAM.parse().unwrap()
    }

    /// The vehicles at which two boards differ.
    fn changed(a: &Board, b: &Board) -> Vec<usize> {
        a.vehicles()
            .iter()
            .zip_eq(b.vehicles())
            .positions(|(x, y)| x != y)
            .collect()
    }

    #[test]
    fn lone_vehicle_reaches_every_position() {
        let board = Board::new("g", 6, [Vehicle::goal(2, 1, 2)]).unwrap();
        let positions: Vec<usize> = successor_boards(&board)
            .iter()
            .map(|b| b.goal_vehicle().position())
            .sorted()
            .collect();
        assert_eq!(positions, vec![0, 2, 3, 4]);
    }

    #[test]
    fn stops_at_first_obstruction() {
        let board = Board::new(
            "g",
            6,
            [Vehicle::goal(2, 0, 2), Vehicle::vertical(4, 0, 3)],
        )
        .unwrap();
        let goal_moves: Vec<usize> = successor_boards(&board)
            .iter()
            .filter(|b| changed(&board, b) == vec![0])
            .map(|b| b.goal_vehicle().position())
            .sorted()
            .collect();
        assert_eq!(goal_moves, vec![1, 2]);

        let blocker_moves: Vec<usize> = successor_boards(&board)
            .iter()
            .filter(|b| changed(&board, b) == vec![1])
            .map(|b| b.vehicles()[1].position())
            .sorted()
            .collect();
        assert_eq!(blocker_moves, vec![1, 2, 3]);
    }

    #[test]
    fn jam_successors() {
        let board = jam();
        // AA right x3, O down, Q up and down, CC left x3, RRR left and right
        assert_eq!(successor_boards(&board).len(), 3 + 1 + 2 + 3 + 2);
    }

    #[test]
    fn every_successor_is_one_legal_slide() {
        let board = jam();
        for next in successor_boards(&board) {
            let moved = changed(&board, &next);
            assert_eq!(moved.len(), 1);

            // rebuilding validates bounds and overlap
            assert!(Board::new(next.name(), next.size(), next.vehicles().iter().copied()).is_ok());
        }
    }

    #[test]
    fn one_cell_moves_are_never_skipped() {
        let board = jam();
        let grid = Grid::new(&board);
        let found: HashSet<Identity> = successor_boards(&board).iter().map(Identity::of).collect();

        for (index, v) in board.vehicles().iter().enumerate() {
            let lifted = grid.without(v);
            if v.position() > 0 && !lifted[v.cell_at(v.position() - 1)] {
                let one_back = board.with_moved(index, v.position() - 1);
                assert!(found.contains(&Identity::of(&one_back)));
            }
            if v.end() + 1 < board.size() && !lifted[v.cell_at(v.end() + 1)] {
                let one_forward = board.with_moved(index, v.position() + 1);
                assert!(found.contains(&Identity::of(&one_forward)));
            }
        }
    }

    #[test]
    fn successors_have_distinct_identities() {
        let board = jam();
        let boards = successor_boards(&board);
        let identities: HashSet<Identity> = boards.iter().map(Identity::of).collect();
        assert_eq!(identities.len(), boards.len());
        assert!(!identities.contains(&Identity::of(&board)));
    }

    #[test]
    fn successor_states_link_to_parent() {
        let root = State::root(jam(), &|_: &Board| 0u32);
        for child in successors(&root, 0, &|_: &Board| 0u32) {
            assert_eq!(child.depth(), 1);
            assert_eq!(child.parent(), Some(0));
        }
    }
}
