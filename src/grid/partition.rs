//! Index set with O(1) insert, remove and uniform sampling.

use rand::Rng;

/// A subset of `0..capacity` stored densely.
///
/// `members` holds the elements in arbitrary order and `slots[x]` is the
/// position of `x` inside `members`. Removal swaps the last member into the
/// hole, so every operation is constant time and sampling reduces to
/// drawing a uniform position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareSet {
    members: Vec<usize>,
    slots: Vec<Option<usize>>,
}

impl SquareSet {
    /// An empty set over `0..capacity`.
    pub fn empty(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            slots: vec![None; capacity],
        }
    }

    /// The set `{0, 1, .., capacity - 1}`.
    pub fn full(capacity: usize) -> Self {
        Self {
            members: (0..capacity).collect(),
            slots: (0..capacity).map(Some).collect(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `x` is a member.
    pub fn contains(&self, x: usize) -> bool {
        self.slots.get(x).is_some_and(Option::is_some)
    }

    /// Members in storage order.
    pub fn as_slice(&self) -> &[usize] {
        &self.members
    }

    /// Iterates members in storage order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    /// Inserts `x`. Returns `false` if it was already present.
    pub fn insert(&mut self, x: usize) -> bool {
        if self.slots[x].is_some() {
            return false;
        }
        self.slots[x] = Some(self.members.len());
        self.members.push(x);
        true
    }

    /// Removes `x`. Returns `false` if it was not present.
    pub fn remove(&mut self, x: usize) -> bool {
        let Some(pos) = self.slots[x].take() else {
            return false;
        };
        self.members.swap_remove(pos);
        if let Some(&moved) = self.members.get(pos) {
            self.slots[moved] = Some(pos);
        }
        true
    }

    /// A uniformly random member, or `None` if the set is empty.
    ///
    /// `random_range` on integers is unbiased (it rejects draws from the
    /// truncated band instead of reducing modulo `len`).
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.members.is_empty() {
            return None;
        }
        Some(self.members[rng.random_range(0..self.members.len())])
    }
}
