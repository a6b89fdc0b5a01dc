use std::fmt::Display;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{
    board::Board,
    vehicle::{Orientation, Vehicle},
};

/// Canonical key of a vehicle layout.
///
/// One `(orientation, fixed, position)` entry per vehicle, in board order.
/// Compared lexicographically, it is both the explored-set key and the
/// tie-break between frontier entries of equal score.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity(SmallVec<[(Orientation, usize, usize); 16]>);

impl Identity {
    pub fn of(board: &Board) -> Identity {
        Identity(
            board
                .vehicles()
                .iter()
                .map(|v: &Vehicle| (v.orientation(), v.fixed(), v.position()))
                .collect(),
        )
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .0
            .iter()
            .map(|(o, fixed, position)| {
                let o = match o {
                    Orientation::Horizontal => 'h',
                    Orientation::Vertical => 'v',
                };
                format!("{}{}{}", o, fixed, position)
            })
            .join("");
        f.write_str(&text)
    }
}

/// A search node: a board plus the bookkeeping a search driver needs.
///
/// `parent` is the index of the expanded node this state was generated from,
/// in the arena of the search that produced it.
#[derive(Clone, Debug)]
pub struct State {
    board: Board,
    f_score: u32,
    depth: u32,
    parent: Option<usize>,
    identity: Identity,
}

impl State {
    pub fn root<H>(board: Board, heuristic: &H) -> State
    where
        H: Fn(&Board) -> u32 + ?Sized,
    {
        State::build(board, 0, None, heuristic)
    }

    /// A state one move below `self`, which sits at `index` in the arena.
    pub fn child<H>(&self, index: usize, board: Board, heuristic: &H) -> State
    where
        H: Fn(&Board) -> u32 + ?Sized,
    {
        State::build(board, self.depth + 1, Some(index), heuristic)
    }

    fn build<H>(board: Board, depth: u32, parent: Option<usize>, heuristic: &H) -> State
    where
        H: Fn(&Board) -> u32 + ?Sized,
    {
        let f_score = depth + heuristic(&board);
        let identity = Identity::of(&board);
        State {
            board,
            f_score,
            depth,
            parent,
            identity,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn f_score(&self) -> u32 {
        self.f_score
    }

    /// Moves taken from the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn is_goal(&self) -> bool {
        self.board.is_solved()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for State {}
