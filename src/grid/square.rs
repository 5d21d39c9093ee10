//! A single grid cell and its incremental threat counters.

use std::fmt;

/// Queen colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colour {
    Light,
    Dark,
}

impl Colour {
    /// The other colour.
    pub fn opposite(self) -> Colour {
        match self {
            Colour::Light => Colour::Dark,
            Colour::Dark => Colour::Light,
        }
    }

    /// Character used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Colour::Light => 'w',
            Colour::Dark => 'b',
        }
    }

    fn slot(self) -> usize {
        match self {
            Colour::Light => 0,
            Colour::Dark => 1,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::Light => f.write_str("light"),
            Colour::Dark => f.write_str("dark"),
        }
    }
}

/// Rendering character for an empty cell.
pub const EMPTY_SYMBOL: char = '+';

/// One cell of the board.
///
/// `threats` counts, per colour, how many placed queens have this square in
/// their attack set. The counters are only ever adjusted by the owning
/// [`AttackGrid`](super::AttackGrid) when a queen is placed or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    row: usize,
    col: usize,
    occupant: Option<Colour>,
    threats: [u32; 2],
}

impl Square {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            occupant: None,
            threats: [0; 2],
        }
    }

    /// Zero-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Colour of the queen here, if any.
    pub fn occupant(&self) -> Option<Colour> {
        self.occupant
    }

    /// Whether a queen stands here.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Number of placed `colour` queens attacking this square.
    pub fn threat(&self, colour: Colour) -> u32 {
        self.threats[colour.slot()]
    }

    /// Conflicts of the queen standing here: how many opposite-colour
    /// queens attack it.
    ///
    /// # Panics
    ///
    /// Panics if the square is empty.
    pub fn cost(&self) -> u32 {
        let colour = self.occupant.unwrap_or_else(|| {
            panic!("cost() queried on empty square ({}, {})", self.row, self.col)
        });
        self.threat(colour.opposite())
    }

    /// Conflicts a `colour` queen would have if it moved here.
    ///
    /// # Panics
    ///
    /// Panics if the square is occupied.
    pub fn cost_for(&self, colour: Colour) -> u32 {
        assert!(
            self.occupant.is_none(),
            "cost_for() queried on occupied square ({}, {})",
            self.row,
            self.col
        );
        self.threat(colour.opposite())
    }

    /// Rendering character.
    pub fn symbol(&self) -> char {
        self.occupant.map_or(EMPTY_SYMBOL, Colour::symbol)
    }

    pub(crate) fn occupy(&mut self, colour: Colour) {
        assert!(
            self.occupant.is_none(),
            "cannot place a {colour} queen on occupied square ({}, {})",
            self.row,
            self.col
        );
        self.occupant = Some(colour);
    }

    pub(crate) fn vacate(&mut self) -> Colour {
        self.occupant.take().unwrap_or_else(|| {
            panic!(
                "cannot remove a queen from empty square ({}, {})",
                self.row, self.col
            )
        })
    }

    pub(crate) fn add_threat(&mut self, colour: Colour) {
        self.threats[colour.slot()] += 1;
    }

    pub(crate) fn drop_threat(&mut self, colour: Colour) {
        let slot = &mut self.threats[colour.slot()];
        *slot = slot.checked_sub(1).unwrap_or_else(|| {
            panic!(
                "{colour} threat counter underflow at ({}, {})",
                self.row, self.col
            )
        });
    }
}
