//! Enumeration of precedence-respecting stop orderings.
//!
//! # Stop slots
//!
//! For `n` orders the generator works on `2n` slots: slot `i` is the pickup
//! of order `i`, slot `n + i` its dropoff.  A dropoff slot is admissible only
//! once its pickup slot has been placed.
//!
//! # Enumeration order
//!
//! Orderings are grouped by the length `k` of their leading run of pickups,
//! from `k = n` (collect everything, then deliver) down to `k = 1`.  Within a
//! group the search is a depth-first walk over slots in ascending order, so
//! orderings come out lexicographically by slot.  For two orders this yields
//! exactly:
//!
//! ```text
//! P1 P2 D1 D2
//! P1 P2 D2 D1
//! P2 P1 D1 D2
//! P2 P1 D2 D1
//! P1 D1 P2 D2
//! P2 D2 P1 D1
//! ```
//!
//! Every valid ordering has a leading pickup run between 1 and `n`, so each
//! one is produced exactly once; `(2n)! / 2^n` in total.

use std::iter::FusedIterator;

use dp_core::StopKind;

// ── Stop ──────────────────────────────────────────────────────────────────────

/// One visit: the pickup or dropoff of the order at position `order` in the
/// caller's order slice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Stop {
    pub order: usize,
    pub kind:  StopKind,
}

impl Stop {
    #[inline]
    pub fn pickup(order: usize) -> Self {
        Self { order, kind: StopKind::Pickup }
    }

    #[inline]
    pub fn dropoff(order: usize) -> Self {
        Self { order, kind: StopKind::Dropoff }
    }

    #[inline]
    fn from_slot(slot: usize, order_count: usize) -> Self {
        if slot < order_count {
            Stop::pickup(slot)
        } else {
            Stop::dropoff(slot - order_count)
        }
    }
}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            StopKind::Pickup  => write!(f, "P{}", self.order + 1),
            StopKind::Dropoff => write!(f, "D{}", self.order + 1),
        }
    }
}

/// Number of valid orderings for `n` orders, `(2n)! / 2^n`, or `None` on
/// `u128` overflow.
///
/// Computed as `∏_{i=1..n} i·(2i−1)`.
pub fn ordering_count(n: usize) -> Option<u128> {
    let mut acc: u128 = 1;
    for i in 1..=n as u128 {
        acc = acc.checked_mul(i)?.checked_mul(2 * i - 1)?;
    }
    Some(acc)
}

// ── SequenceGenerator ─────────────────────────────────────────────────────────

/// Source of every valid ordering for a fixed number of orders.
///
/// The generator is a pure function of `order_count`: each call to
/// [`iter`](Self::iter) starts a fresh, independent enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SequenceGenerator {
    order_count: usize,
}

impl SequenceGenerator {
    pub fn new(order_count: usize) -> Self {
        Self { order_count }
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    /// Expected number of orderings; see [`ordering_count`].
    pub fn ordering_count(&self) -> Option<u128> {
        ordering_count(self.order_count)
    }

    pub fn iter(&self) -> Orderings {
        Orderings::new(self.order_count)
    }
}

impl IntoIterator for &SequenceGenerator {
    type Item     = Vec<Stop>;
    type IntoIter = Orderings;

    fn into_iter(self) -> Orderings {
        self.iter()
    }
}

// ── Orderings ─────────────────────────────────────────────────────────────────

/// Lazy iterator over orderings, produced by [`SequenceGenerator::iter`].
///
/// Memory is `O(n)` regardless of how many orderings remain.
pub struct Orderings {
    n:        usize,
    /// Required length of the leading pickup run for the current group.
    run:      usize,
    /// Slots placed so far, in visiting order.
    path:     Vec<usize>,
    /// `cursor[d]` = first slot not yet tried at depth `d`.
    cursor:   Vec<usize>,
    placed:   Vec<bool>,
    finished: bool,
}

impl Orderings {
    fn new(n: usize) -> Self {
        Self {
            n,
            run:      n,
            path:     Vec::with_capacity(2 * n),
            cursor:   vec![0; 2 * n + 1],
            placed:   vec![false; 2 * n],
            finished: false,
        }
    }

    #[inline]
    fn slot_count(&self) -> usize {
        2 * self.n
    }

    fn admissible(&self, slot: usize, depth: usize) -> bool {
        if self.placed[slot] {
            return false;
        }
        let is_pickup = slot < self.n;
        if depth < self.run {
            is_pickup
        } else if depth == self.run {
            // First dropoff of the group; its pickup is necessarily placed
            // but check anyway so the rule reads the same everywhere.
            !is_pickup && self.placed[slot - self.n]
        } else {
            is_pickup || self.placed[slot - self.n]
        }
    }

    fn retreat(&mut self) {
        if let Some(slot) = self.path.pop() {
            self.placed[slot] = false;
        }
    }

    /// Continue the depth-first walk until a full ordering is placed.
    /// Returns `false` once the current group is exhausted.
    fn descend(&mut self) -> bool {
        let total = self.slot_count();
        loop {
            let depth = self.path.len();
            if depth == total {
                return true;
            }
            let next = (self.cursor[depth]..total).find(|&s| self.admissible(s, depth));
            match next {
                Some(slot) => {
                    self.cursor[depth] = slot + 1;
                    self.placed[slot] = true;
                    self.path.push(slot);
                    self.cursor[depth + 1] = 0;
                }
                None => {
                    if depth == 0 {
                        return false;
                    }
                    self.retreat();
                }
            }
        }
    }

    fn start_group(&mut self) {
        self.path.clear();
        self.placed.iter_mut().for_each(|p| *p = false);
        self.cursor[0] = 0;
    }
}

impl Iterator for Orderings {
    type Item = Vec<Stop>;

    fn next(&mut self) -> Option<Vec<Stop>> {
        if self.finished {
            return None;
        }
        if self.n == 0 {
            self.finished = true;
            return Some(Vec::new());
        }

        // Step off the ordering handed out by the previous call.
        if self.path.len() == self.slot_count() {
            self.retreat();
        }

        loop {
            if self.descend() {
                let n = self.n;
                return Some(self.path.iter().map(|&s| Stop::from_slot(s, n)).collect());
            }
            self.run -= 1;
            if self.run == 0 {
                self.finished = true;
                return None;
            }
            self.start_group();
        }
    }
}

impl FusedIterator for Orderings {}
