/// The axis a vehicle slides along.
///
/// `Horizontal` sorts before `Vertical`, which fixes the order of
/// [`Identity`](crate::Identity) entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single sliding piece.
///
/// `fixed` is the row (horizontal) or column (vertical) the vehicle never
/// leaves; `position` is the first occupied cell along its axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vehicle {
    orientation: Orientation,
    fixed: usize,
    position: usize,
    length: usize,
    goal: bool,
}

impl Vehicle {
    pub fn new(orientation: Orientation, fixed: usize, position: usize, length: usize) -> Vehicle {
        assert!(length >= 1, "a vehicle covers at least one cell");
        Vehicle {
            orientation,
            fixed,
            position,
            length,
            goal: false,
        }
    }

    pub fn horizontal(row: usize, column: usize, length: usize) -> Vehicle {
        Vehicle::new(Orientation::Horizontal, row, column, length)
    }

    pub fn vertical(column: usize, row: usize, length: usize) -> Vehicle {
        Vehicle::new(Orientation::Vertical, column, row, length)
    }

    /// A horizontal goal vehicle on `row`, leftmost cell in `column`.
    pub fn goal(row: usize, column: usize, length: usize) -> Vehicle {
        Vehicle {
            goal: true,
            ..Vehicle::horizontal(row, column, length)
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn fixed(&self) -> usize {
        self.fixed
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_goal(&self) -> bool {
        self.goal
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// Last occupied coordinate along the movement axis.
    pub fn end(&self) -> usize {
        self.position + self.length - 1
    }

    /// Whether the vehicle covers `coord` along its movement axis.
    pub fn spans(&self, coord: usize) -> bool {
        (self.position..=self.end()).contains(&coord)
    }

    /// The `(row, column)` cell at `coord` along this vehicle's axis.
    pub fn cell_at(&self, coord: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.fixed, coord),
            Orientation::Vertical => (coord, self.fixed),
        }
    }

    /// Occupied `(row, column)` cells, from the lower end upwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.position..=self.end()).map(move |c| self.cell_at(c))
    }

    /// The same vehicle slid so its first cell is at `position`.
    pub fn moved_to(&self, position: usize) -> Vehicle {
        Vehicle { position, ..*self }
    }
}
