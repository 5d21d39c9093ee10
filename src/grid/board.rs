//! The conflict-tracking board.

use std::fmt;

use rand::Rng;

use super::attack::AttackTable;
use super::layout::{self, Layout};
use super::partition::SquareSet;
use super::square::{Colour, Square};

/// An `n x n` board of [`Square`]s with a maintained conflict aggregate.
///
/// Invariants, holding between any two public calls:
///
/// - `occupied` and `empty` partition `0..n*n`.
/// - `conflicts` equals the sum of [`Square::cost`] over occupied squares.
///
/// Only [`place_pair`](Self::place_pair) and [`move_queen`](Self::move_queen)
/// change occupancy, so both invariants are kept locally by those two calls.
#[derive(Debug, Clone)]
pub struct AttackGrid {
    n: usize,
    squares: Vec<Square>,
    attacks: AttackTable,
    occupied: SquareSet,
    empty: SquareSet,
    conflicts: u64,
}

impl AttackGrid {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "board size must be positive");
        let cells = n * n;
        let squares = (0..cells).map(|i| Square::new(i / n, i % n)).collect();

        Self {
            n,
            squares,
            attacks: AttackTable::new(n),
            occupied: SquareSet::empty(cells),
            empty: SquareSet::full(cells),
            conflicts: 0,
        }
    }

    /// Board width.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Arena index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.n && col < self.n);
        row * self.n + col
    }

    /// The square at arena index `index`.
    pub fn square(&self, index: usize) -> &Square {
        &self.squares[index]
    }

    /// All squares, row-major.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Squares attacked from `index`.
    pub fn attack_set(&self, index: usize) -> &[usize] {
        self.attacks.of(index)
    }

    /// Indices of squares holding a queen, in no particular order.
    pub fn occupied(&self) -> &[usize] {
        self.occupied.as_slice()
    }

    /// Indices of empty squares, in no particular order.
    pub fn empty(&self) -> &[usize] {
        self.empty.as_slice()
    }

    /// Queens on the board, both colours.
    pub fn queen_count(&self) -> usize {
        self.occupied.len()
    }

    /// Pairs on the board. Queens are only ever added in pairs.
    pub fn pair_count(&self) -> usize {
        self.occupied.len() / 2
    }

    /// Sum over all queens of the opposite-colour queens attacking them.
    ///
    /// Each attacking pair contributes 2.
    pub fn conflict_count(&self) -> u64 {
        self.conflicts
    }

    /// Number of mutually attacking opposite-colour pairs.
    pub fn attacking_pairs(&self) -> u64 {
        self.conflicts / 2
    }

    /// A uniformly random occupied square.
    pub fn random_occupied<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        self.occupied.sample(rng)
    }

    /// A uniformly random empty square.
    pub fn random_empty<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        self.empty.sample(rng)
    }

    /// Places a light queen and then a dark queen on distinct uniformly
    /// random empty squares. Returns their indices.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two squares are empty.
    pub fn place_pair<R: Rng>(&mut self, rng: &mut R) -> (usize, usize) {
        assert!(
            self.empty.len() >= 2,
            "place_pair needs two empty squares, {} left",
            self.empty.len()
        );
        let light = self.place_random(Colour::Light, rng);
        let dark = self.place_random(Colour::Dark, rng);
        (light, dark)
    }

    /// Seeds `pairs` random pairs.
    ///
    /// # Panics
    ///
    /// Panics if the board runs out of empty squares.
    pub fn place_pairs<R: Rng>(&mut self, pairs: usize, rng: &mut R) {
        for _ in 0..pairs {
            self.place_pair(rng);
        }
    }

    /// Relocates the queen on `from` to `to`. Does nothing if they coincide.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty or `to` is occupied.
    pub fn move_queen(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let colour = self.squares[from].occupant().unwrap_or_else(|| {
            panic!("move_queen: source square {from} is empty")
        });
        // Each conflict is seen from both queens, hence the factor of two.
        let leaving = 2 * u64::from(self.squares[from].cost());
        let arriving = 2 * u64::from(self.squares[to].cost_for(colour));
        self.conflicts = self.conflicts - leaving + arriving;

        self.remove(from);
        self.place(to, colour);
        self.occupied.remove(from);
        self.empty.insert(from);
        self.empty.remove(to);
        self.occupied.insert(to);
    }

    /// Recomputes the conflict aggregate by scanning every line from each
    /// queen, ignoring the incremental counters.
    pub fn recount_conflicts(&self) -> u64 {
        const DIRECTIONS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        let n = self.n as isize;
        let mut total = 0;
        for &at in self.occupied.as_slice() {
            let sq = &self.squares[at];
            let Some(colour) = sq.occupant() else {
                continue;
            };
            for (dr, dc) in DIRECTIONS {
                let (mut r, mut c) = (sq.row() as isize + dr, sq.col() as isize + dc);
                while (0..n).contains(&r) && (0..n).contains(&c) {
                    if self.squares[(r * n + c) as usize].occupant() == Some(colour.opposite()) {
                        total += 1;
                    }
                    r += dr;
                    c += dc;
                }
            }
        }
        total
    }

    /// Snapshot of the current occupancy.
    pub fn layout(&self) -> Layout {
        Layout::new(self.n, self.squares.iter().map(Square::occupant).collect())
    }

    fn place_random<R: Rng>(&mut self, colour: Colour, rng: &mut R) -> usize {
        let Some(at) = self.empty.sample(rng) else {
            panic!("no empty square left for a {colour} queen");
        };
        self.place(at, colour);
        self.conflicts += 2 * u64::from(self.squares[at].cost());
        self.empty.remove(at);
        self.occupied.insert(at);
        at
    }

    fn place(&mut self, at: usize, colour: Colour) {
        self.squares[at].occupy(colour);
        for &target in self.attacks.of(at) {
            self.squares[target].add_threat(colour);
        }
    }

    fn remove(&mut self, at: usize) -> Colour {
        let colour = self.squares[at].vacate();
        for &target in self.attacks.of(at) {
            self.squares[target].drop_threat(colour);
        }
        colour
    }
}

impl fmt::Display for AttackGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        layout::render(f, self.n, self.squares.iter().map(Square::occupant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn threat_snapshot(grid: &AttackGrid) -> Vec<(u32, u32)> {
        grid.squares()
            .iter()
            .map(|s| (s.threat(Colour::Light), s.threat(Colour::Dark)))
            .collect()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = AttackGrid::new(5);
        assert_eq!(grid.empty().len(), 25);
        assert!(grid.occupied().is_empty());
        assert_eq!(grid.conflict_count(), 0);
        assert_eq!(grid.square(grid.index(3, 4)).row(), 3);
        assert_eq!(grid.square(grid.index(3, 4)).col(), 4);
    }

    #[test]
    fn test_place_then_remove_restores_counters() {
        let mut grid = AttackGrid::new(6);
        let mut rng = create_rng(3);
        grid.place_pairs(3, &mut rng);

        let before = threat_snapshot(&grid);
        let at = grid.empty()[0];
        grid.place(at, Colour::Dark);
        assert_ne!(threat_snapshot(&grid), before);
        assert_eq!(grid.remove(at), Colour::Dark);
        assert_eq!(threat_snapshot(&grid), before);
    }

    #[test]
    fn test_place_marks_whole_attack_set() {
        let mut grid = AttackGrid::new(4);
        grid.place(0, Colour::Light);
        for (i, sq) in grid.squares().iter().enumerate() {
            let expected = u32::from(grid.attack_set(0).contains(&i));
            assert_eq!(sq.threat(Colour::Light), expected, "square {i}");
            assert_eq!(sq.threat(Colour::Dark), 0);
        }
    }

    #[test]
    fn test_place_pair_counts_conflicts_like_brute_force() {
        for seed in 0..50 {
            let mut grid = AttackGrid::new(4);
            let mut rng = create_rng(seed);
            let (light, dark) = grid.place_pair(&mut rng);

            assert_ne!(light, dark);
            assert_eq!(grid.square(light).occupant(), Some(Colour::Light));
            assert_eq!(grid.square(dark).occupant(), Some(Colour::Dark));

            let attacking = u64::from(grid.attack_set(light).contains(&dark));
            assert_eq!(grid.conflict_count(), 2 * attacking);
            assert_eq!(grid.conflict_count(), grid.recount_conflicts());
        }
    }

    #[test]
    fn test_move_and_move_back_round_trips() {
        let mut grid = AttackGrid::new(7);
        let mut rng = create_rng(11);
        grid.place_pairs(6, &mut rng);

        let conflicts = grid.conflict_count();
        let mut occupied = grid.occupied().to_vec();
        occupied.sort_unstable();

        let from = grid.occupied()[2];
        let to = grid.empty()[5];
        grid.move_queen(from, to);
        assert_eq!(grid.conflict_count(), grid.recount_conflicts());
        grid.move_queen(to, from);

        let mut after = grid.occupied().to_vec();
        after.sort_unstable();
        assert_eq!(after, occupied);
        assert_eq!(grid.conflict_count(), conflicts);
    }

    #[test]
    fn test_move_to_self_is_noop() {
        let mut grid = AttackGrid::new(4);
        let mut rng = create_rng(5);
        let (light, _) = grid.place_pair(&mut rng);
        let conflicts = grid.conflict_count();
        grid.move_queen(light, light);
        assert_eq!(grid.conflict_count(), conflicts);
        assert_eq!(grid.square(light).occupant(), Some(Colour::Light));
    }

    /// Moves a freshly placed pair onto `a` (light) and `b` (dark).
    fn arrange_pair(grid: &mut AttackGrid, light: usize, dark: usize, a: usize, b: usize) {
        let mut dark = dark;
        if dark == a {
            let spare = grid
                .empty()
                .iter()
                .copied()
                .find(|&s| s != b)
                .unwrap();
            grid.move_queen(dark, spare);
            dark = spare;
        }
        grid.move_queen(light, a);
        grid.move_queen(dark, b);
    }

    #[test]
    fn test_known_positions() {
        for seed in 0..20 {
            let mut grid = AttackGrid::new(4);
            let mut rng = create_rng(seed);
            let (light, dark) = grid.place_pair(&mut rng);

            // same row
            let (a, b) = (grid.index(0, 0), grid.index(0, 3));
            arrange_pair(&mut grid, light, dark, a, b);
            assert_eq!(grid.square(a).occupant(), Some(Colour::Light));
            assert_eq!(grid.square(b).occupant(), Some(Colour::Dark));
            assert_eq!(grid.conflict_count(), 2);
            assert_eq!(grid.attacking_pairs(), 1);

            // knight's move apart
            let c = grid.index(2, 1);
            grid.move_queen(b, c);
            assert_eq!(grid.conflict_count(), 0);
            assert_eq!(grid.recount_conflicts(), 0);
        }
    }

    #[test]
    fn test_display_renders_board() {
        let mut grid = AttackGrid::new(3);
        let mut rng = create_rng(2);
        grid.place_pair(&mut rng);
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "---");
        assert_eq!(text.matches('w').count(), 1);
        assert_eq!(text.matches('b').count(), 1);
        assert_eq!(grid.layout().to_string(), text);
    }

    #[test]
    #[should_panic(expected = "two empty squares")]
    fn test_place_pair_on_full_board_panics() {
        let mut grid = AttackGrid::new(2);
        let mut rng = create_rng(0);
        grid.place_pairs(3, &mut rng);
    }

    #[test]
    #[should_panic(expected = "source square")]
    fn test_move_from_empty_panics() {
        let mut grid = AttackGrid::new(3);
        grid.move_queen(0, 1);
    }
}
