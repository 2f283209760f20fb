use std::{
    collections::BTreeSet,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    dictionary::Lexicon,
    grid::{Board, Coord},
    path::Path,
};

/// Words shorter than this are never reported, whatever the board size.
pub const MIN_WORD_LEN: usize = 4;

/// Distinct upper-case words found on a board.
pub type FoundWords = BTreeSet<String>;

/// Find every dictionary word of at least [`MIN_WORD_LEN`] letters that can be
/// traced on `board` as a walk of at most `max_len` cells.
pub fn solve<L>(board: &Board, lexicon: &L, max_len: usize) -> FoundWords
where
    L: Lexicon + ?Sized,
{
    // without a cancellation flag the scan always runs to completion
    Solver::new(board, lexicon)
        .max_len(max_len)
        .run()
        .unwrap_or_default()
}

/// A configured search over one board.
///
/// ```
/// use boggle_solver::{Board, Dictionary, Solver};
///
/// let board: Board = "CA/TS".parse().unwrap();
/// let dictionary: Dictionary = ["cat", "cats", "act"].into_iter().collect();
/// let words = Solver::new(&board, &dictionary).run().unwrap();
/// assert_eq!(words.into_iter().collect::<Vec<_>>(), ["CATS"]);
/// ```
pub struct Solver<'a, L: ?Sized> {
    board: &'a Board,
    lexicon: &'a L,
    max_len: usize,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, L> Solver<'a, L>
where
    L: Lexicon + ?Sized,
{
    /// A search bounded only by the no-repeat rule: `max_len` defaults to the cell count.
    pub fn new(board: &'a Board, lexicon: &'a L) -> Self {
        Self {
            board,
            lexicon,
            max_len: board.len(),
            cancel: None,
        }
    }

    /// Cap the number of cells in a path.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Abandon the search once `flag` is raised.
    ///
    /// The flag is checked before each starting cell, never inside a traversal.
    pub fn cancel_on(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn check_cancelled(&self) -> Result<(), Error> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    fn warn_if_unready(&self) {
        if !self.lexicon.is_ready() {
            log::warn!("searching with an empty dictionary; no words can be found");
        }
    }

    /// Search from every starting cell in turn.
    pub fn run(&self) -> Result<FoundWords, Error> {
        self.warn_if_unready();
        let mut found = FoundWords::new();
        let mut path = Path::new(self.board);
        for start in self.board.coords() {
            self.check_cancelled()?;
            let before = found.len();
            self.search_from(&mut path, start, &mut found);
            log::debug!("{start}: {} new words", found.len() - before);
        }
        log::info!(
            "found {} words on a {}x{} board",
            found.len(),
            self.board.rows(),
            self.board.cols()
        );
        Ok(found)
    }

    /// Search every starting cell as its own rayon task, merging the per-task sets.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> Result<FoundWords, Error>
    where
        L: Sync,
    {
        use rayon::prelude::*;

        self.warn_if_unready();
        let starts: Vec<Coord> = self.board.coords().collect();
        let found = starts
            .into_par_iter()
            .map(|start| -> Result<FoundWords, Error> {
                self.check_cancelled()?;
                let mut found = FoundWords::new();
                self.search_from(&mut Path::new(self.board), start, &mut found);
                log::debug!("{start}: {} words", found.len());
                Ok(found)
            })
            .try_reduce(FoundWords::new, |mut left, mut right| {
                if left.len() < right.len() {
                    std::mem::swap(&mut left, &mut right);
                }
                left.extend(right);
                Ok(left)
            })?;
        log::info!(
            "found {} words on a {}x{} board",
            found.len(),
            self.board.rows(),
            self.board.cols()
        );
        Ok(found)
    }

    fn search_from(&self, path: &mut Path<'_>, start: Coord, found: &mut FoundWords) {
        debug_assert!(path.is_empty(), "each traversal starts from a fresh path");
        if self.max_len == 0 || path.select(start).is_err() {
            return;
        }
        self.visit(path, found);
        path.deselect();
    }

    fn visit(&self, path: &mut Path<'_>, found: &mut FoundWords) {
        let word = path.word();
        if !self.lexicon.is_viable(word) {
            return;
        }
        if path.len() >= MIN_WORD_LEN && self.lexicon.is_word(word) {
            found.insert(word.to_ascii_uppercase());
        }
        if path.len() >= self.max_len {
            return;
        }

        let Some(last) = path.last() else {
            return;
        };
        for next in self.board.neighbors(last) {
            if path.select(next).is_ok() {
                self.visit(path, found);
                path.deselect();
            }
        }
    }
}

/// Enumerate every non-repeating walk of at most `max_len` cells and keep the
/// ones that spell a word, without any pruning.
///
/// Exponential in `max_len`; useful only as a reference for [`solve`] on tiny boards.
pub fn solve_exhaustive<L>(board: &Board, lexicon: &L, max_len: usize) -> FoundWords
where
    L: Lexicon + ?Sized,
{
    fn walk<L: Lexicon + ?Sized>(
        board: &Board,
        lexicon: &L,
        max_len: usize,
        path: &mut Path<'_>,
        found: &mut FoundWords,
    ) {
        if path.len() >= MIN_WORD_LEN && lexicon.is_word(path.word()) {
            found.insert(path.word().to_ascii_uppercase());
        }
        if path.len() >= max_len {
            return;
        }
        let Some(last) = path.last() else {
            return;
        };
        for next in board.neighbors(last) {
            if path.select(next).is_ok() {
                walk(board, lexicon, max_len, path, found);
                path.deselect();
            }
        }
    }

    let mut found = FoundWords::new();
    if max_len == 0 {
        return found;
    }
    let mut path = Path::new(board);
    for start in board.coords() {
        if path.select(start).is_ok() {
            walk(board, lexicon, max_len, &mut path, &mut found);
            path.deselect();
        }
    }
    found
}

/// Find one walk on `board` spelling `word` (case-insensitive), if any exists.
pub fn find_path(board: &Board, word: &str) -> Option<Vec<Coord>> {
    fn trace(board: &Board, target: &[u8], path: &mut Path<'_>) -> bool {
        if path.len() == target.len() {
            return true;
        }
        let Some(last) = path.last() else {
            return false;
        };
        let wanted = target[path.len()];
        for next in board.neighbors(last) {
            if board[next] == wanted && path.select(next).is_ok() {
                if trace(board, target, path) {
                    return true;
                }
                path.deselect();
            }
        }
        false
    }

    let target = word.to_ascii_lowercase().into_bytes();
    if target.is_empty() || target.len() > board.len() {
        return None;
    }

    let mut path = Path::new(board);
    for start in board.coords() {
        if board[start] == target[0] && path.select(start).is_ok() {
            if trace(board, &target, &mut path) {
                return Some(path.coords().to_vec());
            }
            path.deselect();
        }
    }
    None
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("the search was cancelled")]
    Cancelled,
}
