use std::{
    fmt::{Display, Write},
    rc::Rc,
    str::FromStr,
};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{
    error::{BoardError, ParseError, ParseErrorKind},
    vehicle::{Orientation, Vehicle},
};

pub type Vehicles = SmallVec<[Vehicle; 16]>;

const EMPTY: char = '.';
const GOAL: char = '*';
const LEFT: char = '<';
const ACROSS: char = '-';
const RIGHT: char = '>';
const TOP: char = '^';
const DOWN: char = '|';
const BOTTOM: char = 'v';

/// An immutable snapshot of a square puzzle grid.
///
/// A `Board` always holds exactly one horizontal goal vehicle; moves build a
/// new board instead of changing this one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    name: Rc<str>,
    size: usize,
    vehicles: Vehicles,
    goal: usize,
}

impl Board {
    /// Builds a board, checking that every vehicle fits on the grid, that no
    /// two vehicles overlap and that there is exactly one goal vehicle.
    pub fn new(
        name: &str,
        size: usize,
        vehicles: impl IntoIterator<Item = Vehicle>,
    ) -> Result<Board, BoardError> {
        let vehicles: Vehicles = vehicles.into_iter().collect();

        let mut goals = vehicles.iter().positions(Vehicle::is_goal);
        let goal = goals.next().ok_or(BoardError::MissingGoal)?;
        if goals.next().is_some() {
            return Err(BoardError::MultipleGoals);
        }

        let mut taken = vec![false; size * size];
        for (index, v) in vehicles.iter().enumerate() {
            if v.fixed() >= size || v.end() >= size {
                return Err(BoardError::OutOfBounds { index });
            }
            for (row, column) in v.cells() {
                let cell = &mut taken[row * size + column];
                if *cell {
                    return Err(BoardError::Overlap {
                        cell: (row, column),
                    });
                }
                *cell = true;
            }
        }

        Ok(Board {
            name: name.into(),
            size,
            vehicles,
            goal,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn goal_vehicle(&self) -> &Vehicle {
        &self.vehicles[self.goal]
    }

    /// The position the goal vehicle must reach: its trailing edge on the
    /// last column.
    pub fn exit(&self) -> usize {
        self.size - self.goal_vehicle().length()
    }

    pub fn is_solved(&self) -> bool {
        self.goal_vehicle().position() == self.exit()
    }

    /// A copy of this board with vehicle `index` slid to `position`.
    ///
    /// The caller guarantees the destination is free.
    pub fn with_moved(&self, index: usize, position: usize) -> Board {
        let mut vehicles = self.vehicles.clone();
        vehicles[index] = vehicles[index].moved_to(position);
        Board {
            name: Rc::clone(&self.name),
            size: self.size,
            vehicles,
            goal: self.goal,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut grid = vec![EMPTY; self.size * self.size];
        for v in &self.vehicles {
            let (first, middle, last) = match (v.is_goal(), v.orientation()) {
                (true, _) => (GOAL, GOAL, GOAL),
                (false, Orientation::Horizontal) => (LEFT, ACROSS, RIGHT),
                (false, Orientation::Vertical) => (TOP, DOWN, BOTTOM),
            };
            for (i, (row, column)) in v.cells().enumerate() {
                grid[row * self.size + column] = if i == 0 {
                    first
                } else if i + 1 == v.length() {
                    last
                } else {
                    middle
                };
            }
        }

        f.write_str(&self.name)?;
        for line in grid.chunks(self.size) {
            f.write_char('\n')?;
            for c in line {
                f.write_char(*c)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses a single puzzle block: a name line followed by the grid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();
        parse_block(&lines)
    }
}

/// Reads every puzzle in `input`. Puzzles are separated by blank lines.
pub fn parse_boards(input: &str) -> Result<Vec<Board>, ParseError> {
    let blocks = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .group_by(|(_, l)| l.is_empty());

    let boards = blocks
        .into_iter()
        .filter(|(blank, _)| !blank)
        .map(|(_, block)| parse_block(&block.collect::<Vec<_>>()))
        .collect();
    boards
}

fn parse_block(lines: &[(usize, &str)]) -> Result<Board, ParseError> {
    let (&(name_line, name), rows) = lines
        .split_first()
        .ok_or_else(|| ParseError::new(1, ParseErrorKind::EmptyGrid))?;
    if rows.is_empty() {
        return Err(ParseError::new(name_line, ParseErrorKind::EmptyGrid));
    }

    let size = rows.len();
    let mut grid: Vec<Vec<char>> = Vec::with_capacity(size);
    for &(line, row) in rows {
        let cells: Vec<char> = row.chars().collect();
        if cells.len() != size {
            return Err(ParseError::new(
                line,
                ParseErrorKind::RaggedRow {
                    expected: size,
                    found: cells.len(),
                },
            ));
        }
        grid.push(cells);
    }

    let mut seen = vec![vec![false; size]; size];
    let mut vehicles = Vehicles::new();
    for r in 0..size {
        let line = rows[r].0;
        for c in 0..size {
            if seen[r][c] {
                continue;
            }
            let vehicle = match grid[r][c] {
                EMPTY => continue,
                GOAL => {
                    let length = grid[r][c..].iter().take_while(|&&x| x == GOAL).count();
                    Vehicle::goal(r, c, length)
                }
                LEFT => {
                    let length = run_length(grid[r][c + 1..].iter().copied(), ACROSS, RIGHT)
                        .ok_or_else(|| ParseError::new(line, ParseErrorKind::BrokenVehicle))?;
                    Vehicle::horizontal(r, c, length)
                }
                TOP => {
                    let length = run_length(grid[r + 1..].iter().map(|row| row[c]), DOWN, BOTTOM)
                        .ok_or_else(|| ParseError::new(line, ParseErrorKind::BrokenVehicle))?;
                    Vehicle::vertical(c, r, length)
                }
                ACROSS | RIGHT | DOWN | BOTTOM => {
                    return Err(ParseError::new(line, ParseErrorKind::BrokenVehicle))
                }
                other => return Err(ParseError::new(line, ParseErrorKind::UnknownSymbol(other))),
            };

            for (row, column) in vehicle.cells() {
                seen[row][column] = true;
            }
            vehicles.push(vehicle);
        }
    }

    Board::new(name, size, vehicles)
        .map_err(|e| ParseError::new(name_line, ParseErrorKind::Board(e)))
}

/// Length of a vehicle whose first symbol has been read and whose remaining
/// symbols are `middle*` followed by `last`.
fn run_length(rest: impl Iterator<Item = char>, middle: char, last: char) -> Option<usize> {
    let mut length = 1;
    for c in rest {
        length += 1;
        match c {
            c if c == middle => continue,
            c if c == last => return Some(length),
            _ => return None,
        }
    }

    None
}
