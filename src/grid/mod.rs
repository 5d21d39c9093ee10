//! Incremental conflict-tracking board model.
//!
//! Every [`Square`] keeps, per colour, the number of placed queens that
//! attack it. Placing or removing a queen touches only its attack set
//! (`O(n)` squares), which lets [`AttackGrid`] price and apply a single
//! queen move without rescanning the board.
//!
//! Squares live in one arena indexed by `row * n + col`; attack sets are
//! index lists held by an [`AttackTable`].

mod attack;
mod board;
mod layout;
mod partition;
mod square;

pub use attack::AttackTable;
pub use board::AttackGrid;
pub use layout::Layout;
pub use partition::SquareSet;
pub use square::{Colour, Square, EMPTY_SYMBOL};
