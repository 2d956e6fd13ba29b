//! Exhaustive game tree construction and outcome census

use std::collections::HashMap;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::lines::has_winner;

/// Census of terminal outcomes over all legal continuations from a position.
///
/// A terminal board holds exactly one unit in one counter; an internal
/// board holds the element-wise sum over its children, counted once per
/// move order that reaches it. The census tallies every legal game, not
/// best play by either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub first_wins: u32,
    pub second_wins: u32,
    pub ties: u32,
}

impl Stats {
    const FIRST_WIN: Stats = Stats {
        first_wins: 1,
        second_wins: 0,
        ties: 0,
    };

    const SECOND_WIN: Stats = Stats {
        first_wins: 0,
        second_wins: 1,
        ties: 0,
    };

    const TIE: Stats = Stats {
        first_wins: 0,
        second_wins: 0,
        ties: 1,
    };

    /// Total number of complete games counted
    pub fn total(self) -> u32 {
        self.first_wins + self.second_wins + self.ties
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, other: Stats) -> Stats {
        Stats {
            first_wins: self.first_wins + other.first_wins,
            second_wins: self.second_wins + other.second_wins,
            ties: self.ties + other.ties,
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Stats) {
        *self = *self + other;
    }
}

/// The complete game tree reachable under legal alternating play, with a
/// per-board outcome census.
///
/// Built once by [`GameTree::build`] and immutable afterwards; any number
/// of readers may share a reference without locking.
///
/// The walk carries no visited-set, so a board reachable by several move
/// orders is walked once per order and its child list accumulates one run
/// of children per visit. The persisted byte format and the root census
/// both depend on this multiplicity.
///
/// # Examples
///
/// ```
/// use tictoc::{Board, GameTree};
///
/// let tree = GameTree::build();
/// assert_eq!(tree.children_of(Board::EMPTY).len(), 9);
///
/// let root = tree.stats_of(Board::EMPTY).unwrap();
/// assert_eq!(root.total(), 255_168);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameTree {
    pub(crate) tree: HashMap<Board, Vec<Board>>,
    pub(crate) stats: HashMap<Board, Stats>,
}

impl GameTree {
    /// Enumerate every legal continuation from the empty board.
    ///
    /// Single-threaded, deterministic, no I/O; recursion depth is bounded
    /// by the 9 cells.
    pub fn build() -> Self {
        let mut tree = GameTree::default();
        let root = tree.walk(Board::EMPTY, 0);
        // The recursion records stats only for children, never for the
        // board it was handed, so the root entry goes in here.
        tree.stats.insert(Board::EMPTY, root);
        tree
    }

    fn walk(&mut self, current: Board, ply: u32) -> Stats {
        if ply > 4 && has_winner(current) {
            // The line was completed by the mover of ply - 1: even ply
            // means an odd-indexed move finished it, which belongs to the
            // second mover. No line can complete before ply 5.
            return if ply % 2 == 0 {
                Stats::SECOND_WIN
            } else {
                Stats::FIRST_WIN
            };
        }
        if ply == 9 {
            return Stats::TIE;
        }

        let piece = ply % 2 + 1;
        let mut total = Stats::default();
        for index in 0..9 {
            if current.cell(index) != 0 {
                continue;
            }

            let next = current.with_cell(index, piece);
            self.tree.entry(current).or_default().push(next);

            let child = self.walk(next, ply + 1);
            self.stats.insert(next, child);
            total += child;
        }

        total
    }

    /// Ordered legal continuations of `board`, empty if the board is
    /// terminal or unknown.
    pub fn children_of(&self, board: Board) -> &[Board] {
        self.tree.get(&board).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The outcome census for `board`, or `None` if the board never
    /// appears in the enumeration.
    ///
    /// `None` is distinct from a recorded all-zero triple; callers must
    /// not treat an absent board as terminal.
    pub fn stats_of(&self, board: Board) -> Option<Stats> {
        self.stats.get(&board).copied()
    }

    /// Iterate over every board with a recorded census
    pub fn stats_keys(&self) -> impl Iterator<Item = Board> + '_ {
        self.stats.keys().copied()
    }

    /// Number of boards with at least one recorded child
    pub fn tree_len(&self) -> usize {
        self.tree.len()
    }

    /// Number of boards with a recorded census
    pub fn stats_len(&self) -> usize {
        self.stats.len()
    }
}
