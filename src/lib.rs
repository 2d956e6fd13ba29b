//! Exhaustive tic-tac-toe game tree enumeration
//!
//! This crate provides:
//! - A packed 2-bits-per-cell board representation
//! - Exhaustive enumeration of every legal continuation from the empty
//!   board, with a per-position census of terminal outcomes
//! - A fixed big-endian binary format for persisting the enumerated
//!   structure
//! - A textual board codec over a caller-supplied 3-symbol alphabet
//!
//! The census tallies every legal game, not best play: it answers "how
//! many continuations end in a first-mover win, a second-mover win, or a
//! tie", never "what is the best move".
//!
//! # Examples
//!
//! ```
//! use tictoc::{board_from_text, Board, GameTree};
//!
//! let tree = GameTree::build();
//!
//! let board = board_from_text("100000000", ['0', '1', '2']).unwrap();
//! let stats = tree.stats_of(board).unwrap();
//! assert_eq!(stats.first_wins + stats.second_wins + stats.ties, stats.total());
//! assert_eq!(tree.children_of(board).len(), 8);
//! ```

pub mod board;
pub mod encoding;
pub mod error;
pub mod game_tree;
pub mod lines;
pub mod persist;

pub use board::Board;
pub use encoding::{board_from_text, board_to_text, Alphabet};
pub use error::{Error, Result};
pub use game_tree::{GameTree, Stats};
pub use lines::{has_winner, WINNING_LINES};
pub use persist::MAGIC;
