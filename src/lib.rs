//! A solver for the "Rush Hour" sliding-block puzzle.
//!
//! Vehicles sit on a square grid and slide only along their own axis. The
//! goal vehicle has to reach the exit on the right edge of its row. Boards are
//! searched either best-first with one of the [`heuristic`] estimates or
//! depth-first.

pub mod board;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod moves;
pub mod search;
pub mod state;
pub mod vehicle;

pub use board::{parse_boards, Board};
pub use error::{BoardError, ParseError, ParseErrorKind};
pub use heuristic::{advanced, blocking, Heuristic};
pub use search::{
    best_first_search, best_first_search_with_stats, depth_first_search,
    depth_first_search_with_stats, shortest_path, SearchStats, Solution,
};
pub use state::{Identity, State};
pub use vehicle::{Orientation, Vehicle};
