use crate::grid::{Board, Coord, Grid};

/// A walk over a board in progress.
///
/// Consecutive cells are always 8-adjacent and no cell appears twice. The
/// letters of the walk are kept as a lower-case string alongside the
/// coordinates so that dictionary lookups never need to rebuild it.
#[derive(Debug, Clone)]
pub struct Path<'a> {
    board: &'a Board,
    chosen: Grid<bool>,
    selections: Vec<Coord>,
    word: String,
}

impl<'a> Path<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            chosen: Grid::new(board.rows(), board.cols()),
            selections: Vec::with_capacity(board.len()),
            word: String::with_capacity(board.len()),
        }
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), Error> {
        if self.board.contains(coord) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                coord,
                rows: self.board.rows(),
                cols: self.board.cols(),
            })
        }
    }

    /// Extend the path to the given cell if it is legal to do so.
    pub fn select(&mut self, coord: Coord) -> Result<(), Error> {
        self.check_bounds(coord)?;
        if self.chosen[coord] {
            return Err(Error::AlreadySelected { coord });
        }
        if let Some(from) = self.last() {
            if !from.is_adjacent(coord) {
                return Err(Error::NotAdjacent { from, to: coord });
            }
        }
        // nothing past this point can fail
        self.chosen[coord] = true;
        self.selections.push(coord);
        self.word.push(self.board[coord] as char);

        Ok(())
    }

    /// Deselect the most recent cell selected.
    ///
    /// If the path is empty, silently do nothing.
    pub fn deselect(&mut self) {
        if let Some(coord) = self.selections.pop() {
            debug_assert!(self.chosen[coord], "cell must already have been selected");
            self.chosen[coord] = false;
            self.word.pop();
        }
    }

    pub fn is_selected(&self, coord: Coord) -> bool {
        self.chosen.get(coord).copied().unwrap_or_default()
    }

    pub fn last(&self) -> Option<Coord> {
        self.selections.last().copied()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// The lower-case letters along the path.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn coords(&self) -> &[Coord] {
        &self.selections
    }

    /// Cells which [`select`][Self::select] would accept next.
    ///
    /// Empty when the path itself is empty: a walk may start anywhere.
    pub fn extensions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.last()
            .into_iter()
            .flat_map(|last| self.board.neighbors(last))
            .filter(|&coord| !self.chosen[coord])
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("the cell `{coord}` is out of bounds for a {rows}x{cols} board")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    #[error("the cell `{coord}` has already been selected")]
    AlreadySelected { coord: Coord },
    #[error("the cell `{to}` is not adjacent to `{from}`")]
    NotAdjacent { from: Coord, to: Coord },
}
