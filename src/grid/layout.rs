//! Immutable board snapshots and text rendering.

use std::fmt;

use super::square::{Colour, EMPTY_SYMBOL};

/// The occupancy of every cell at some point of a search, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    size: usize,
    cells: Vec<Option<Colour>>,
}

impl Layout {
    pub(crate) fn new(size: usize, cells: Vec<Option<Colour>>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Board width.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupant of `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<Colour> {
        self.cells[row * self.size + col]
    }

    /// Occupants in row-major order.
    pub fn cells(&self) -> &[Option<Colour>] {
        &self.cells
    }

    /// Number of queens of `colour`.
    pub fn count(&self, colour: Colour) -> usize {
        self.cells.iter().filter(|&&c| c == Some(colour)).count()
    }

    /// Number of light/dark pairs.
    pub fn pairs(&self) -> usize {
        self.count(Colour::Light).min(self.count(Colour::Dark))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.size, self.cells.iter().copied())
    }
}

/// Writes a dashed header, one line per row and a dashed footer.
pub(crate) fn render(
    f: &mut fmt::Formatter<'_>,
    size: usize,
    cells: impl Iterator<Item = Option<Colour>>,
) -> fmt::Result {
    let rule = "-".repeat(size);
    writeln!(f, "{rule}")?;
    let mut line = String::with_capacity(size);
    for (i, cell) in cells.enumerate() {
        line.push(cell.map_or(EMPTY_SYMBOL, Colour::symbol));
        if (i + 1) % size == 0 {
            writeln!(f, "{line}")?;
            line.clear();
        }
    }
    write!(f, "{rule}")
}
