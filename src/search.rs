use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashSet},
    iter,
};

use itertools::Itertools;
use log::{debug, trace};
use pathfinding::directed::bfs::bfs;

use crate::{
    board::Board,
    moves::{successor_boards, successors},
    state::{Identity, State},
};

/// Counters collected while a driver runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded (including the goal).
    pub expanded: usize,
    /// States produced by the successor generator.
    pub generated: usize,
}

/// Path from the initial state to the goal and its cost in moves.
///
/// An exhausted search yields an empty path and a cost of `-1`.
pub type Solution = (Vec<State>, i32);

fn no_solution() -> Solution {
    (Vec::new(), -1)
}

/// Expanded states, addressed by the `parent` index stored in their
/// children.
#[derive(Default)]
struct Arena {
    nodes: Vec<State>,
    explored: HashSet<Identity>,
}

impl Arena {
    /// Records `state` as expanded, or returns `None` when its layout
    /// already was.
    fn expand(&mut self, state: State) -> Option<usize> {
        if !self.explored.insert(state.identity().clone()) {
            return None;
        }

        self.nodes.push(state);
        Some(self.nodes.len() - 1)
    }

    fn solution(&self, index: usize) -> Solution {
        let path = reconstruct_path(&self.nodes, index);
        let cost = self.nodes[index].depth() as i32;
        (path, cost)
    }
}

/// Follows parent links from `nodes[index]` back to the root and returns the
/// states in root-to-goal order.
pub fn reconstruct_path(nodes: &[State], index: usize) -> Vec<State> {
    let mut path: Vec<State> = iter::successors(Some(index), |&i| nodes[i].parent())
        .map(|i| nodes[i].clone())
        .collect();
    path.reverse();
    path
}

/// A frontier entry; the heap's greatest element is the next to expand.
struct Queued {
    state: State,
    sequence: usize,
}

impl Ord for Queued {
    /// Lowest f-score first, then smallest identity, then the most recently
    /// queued.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .state
            .f_score()
            .cmp(&self.state.f_score())
            .then_with(|| other.state.identity().cmp(self.state.identity()))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

/// Best-first (A*) search guided by `heuristic`.
pub fn best_first_search<H>(board: &Board, heuristic: H) -> Solution
where
    H: Fn(&Board) -> u32,
{
    best_first_search_with_stats(board, heuristic).1
}

pub fn best_first_search_with_stats<H>(board: &Board, heuristic: H) -> (SearchStats, Solution)
where
    H: Fn(&Board) -> u32,
{
    debug!("best-first search on {}", board.name());

    let mut stats = SearchStats::default();
    let mut arena = Arena::default();
    let mut sequence = 0;
    let mut frontier = BinaryHeap::new();
    frontier.push(Queued {
        state: State::root(board.clone(), &heuristic),
        sequence,
    });

    while let Some(Queued { state, .. }) = frontier.pop() {
        let Some(index) = arena.expand(state) else {
            continue;
        };
        stats.expanded += 1;

        let state = &arena.nodes[index];
        trace!(
            "expanding {} (f = {}, depth = {})",
            state.identity(),
            state.f_score(),
            state.depth()
        );
        if state.is_goal() {
            let solution = arena.solution(index);
            debug!(
                "best-first search on {} found a {} move solution ({:?})",
                board.name(),
                solution.1,
                stats
            );
            return (stats, solution);
        }

        let children = successors(state, index, &heuristic);
        stats.generated += children.len();
        for child in children {
            sequence += 1;
            frontier.push(Queued {
                state: child,
                sequence,
            });
        }
    }

    debug!("best-first search on {} exhausted ({:?})", board.name(), stats);
    (stats, no_solution())
}

/// Depth-first search, visiting children in ascending identity order.
pub fn depth_first_search(board: &Board) -> Solution {
    depth_first_search_with_stats(board).1
}

pub fn depth_first_search_with_stats(board: &Board) -> (SearchStats, Solution) {
    debug!("depth-first search on {}", board.name());

    let no_heuristic = |_: &Board| 0u32;
    let mut stats = SearchStats::default();
    let mut arena = Arena::default();
    let mut frontier = vec![State::root(board.clone(), &no_heuristic)];

    while let Some(state) = frontier.pop() {
        let Some(index) = arena.expand(state) else {
            continue;
        };
        stats.expanded += 1;

        let state = &arena.nodes[index];
        trace!("expanding {} (depth = {})", state.identity(), state.depth());
        if state.is_goal() {
            let solution = arena.solution(index);
            debug!(
                "depth-first search on {} found a {} move solution ({:?})",
                board.name(),
                solution.1,
                stats
            );
            return (stats, solution);
        }

        let children = successors(state, index, &no_heuristic);
        stats.generated += children.len();
        frontier.extend(
            children
                .into_iter()
                .sorted_by(|a, b| b.identity().cmp(a.identity())),
        );
    }

    debug!("depth-first search on {} exhausted ({:?})", board.name(), stats);
    (stats, no_solution())
}

/// A shortest solution found by exhaustive breadth-first search, as the
/// boards along it and the number of moves.
pub fn shortest_path(board: &Board) -> Option<(Vec<Board>, usize)> {
    let path = bfs(board, |b| successor_boards(b), Board::is_solved)?;
    let cost = path.len() - 1;
    Some((path, cost))
}
