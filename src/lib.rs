//! Find every dictionary word that can be traced on a Boggle-style letter board.
//!
//! A word is traced by a walk through 8-adjacent cells which never revisits a
//! cell. The search starts from every cell and prunes any walk whose letters are
//! not the beginning of some dictionary word.

pub mod dictionary;
pub mod grid;
pub mod log;
pub mod path;
pub mod results;
pub mod solver;

pub use dictionary::{Dictionary, Lexicon, WordSet};
pub use grid::{neighbors, Board, Coord, Grid};
pub use path::Path;
pub use results::{group_by_length, Grouped};
pub use solver::{find_path, solve, solve_exhaustive, FoundWords, Solver, MIN_WORD_LEN};
