//! Attack adjacency between squares.
//!
//! Squares are addressed by `row * n + col`. The table stores every attack
//! set back to back in one vector (`targets`) with `offsets[i]..offsets[i + 1]`
//! delimiting square `i`'s slice, so a lookup is a single slice borrow.

/// Immutable queen-move adjacency for an `n x n` board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackTable {
    n: usize,
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl AttackTable {
    /// Builds the table for an `n x n` board.
    pub fn new(n: usize) -> Self {
        let cells = n * n;
        let mut offsets = Vec::with_capacity(cells + 1);
        let mut targets = Vec::with_capacity(cells * 4 * n.saturating_sub(1));

        offsets.push(0);
        for row in 0..n {
            for col in 0..n {
                collect_attacks(n, row, col, &mut targets);
                offsets.push(targets.len());
            }
        }

        Self {
            n,
            offsets,
            targets,
        }
    }

    /// Board width.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Squares a queen on `index` attacks (excluding `index` itself).
    pub fn of(&self, index: usize) -> &[usize] {
        &self.targets[self.offsets[index]..self.offsets[index + 1]]
    }

    /// Whether `a` and `b` lie on a common row, column or diagonal.
    pub fn attacks(&self, a: usize, b: usize) -> bool {
        self.of(a).contains(&b)
    }
}

fn collect_attacks(n: usize, row: usize, col: usize, out: &mut Vec<usize>) {
    let (r, c) = (row as isize, col as isize);
    let n_i = n as isize;

    for i in 0..n {
        if i != row {
            out.push(i * n + col);
        }
        if i != col {
            out.push(row * n + i);
        }
    }

    for d in 1..n_i {
        for (dr, dc) in [(-d, -d), (-d, d), (d, -d), (d, d)] {
            let (tr, tc) = (r + dr, c + dc);
            if (0..n_i).contains(&tr) && (0..n_i).contains(&tc) {
                out.push((tr * n_i + tc) as usize);
            }
        }
    }
}
