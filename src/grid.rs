use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

/// A cell position on a grid.
///
/// `(0, 0)` is the top left corner; `row` grows downwards and `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` when `other` is exactly one king step away (Chebyshev distance 1).
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight compass offsets, in reading order.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterate over the in-bounds neighbors of `(row, col)` on a `rows × cols` grid.
///
/// Neighbors are produced in a fixed reading order: the row above left to right,
/// then the same row, then the row below.
pub fn neighbors(row: usize, col: usize, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
    OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some(Coord::new(r, c))
    })
}

/// A representation of a 2d grid whose dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Default + Clone,
{
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    pub fn idx(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols).then_some(coord.row * self.cols + coord.col)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.idx(coord).is_some()
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.idx(coord).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        self.idx(coord).map(|idx| &mut self.cells[idx])
    }

    /// Every coordinate of the grid, in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// In-bounds neighbors of `coord`.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        neighbors(coord.row, coord.col, self.rows, self.cols)
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        self.get(coord).unwrap()
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        self.get_mut(coord).unwrap()
    }
}

/// A letter board. Each cell holds one lower-case ASCII letter.
pub type Board = Grid<u8>;

impl Grid<u8> {
    /// Boards narrower or shorter than this are rejected.
    pub const MIN_SIDE: usize = 2;

    /// Build a board from rows of cells, where each cell must be exactly one letter.
    ///
    /// Surrounding whitespace in a cell is ignored. Letters are case-insensitive.
    pub fn from_cells<Rows, Row, Cell>(rows: Rows) -> Result<Self, Error>
    where
        Rows: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = Cell>,
        Cell: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, items) in rows.into_iter().enumerate() {
            let mut found = 0;
            for (col, cell) in items.into_iter().enumerate() {
                cells.push(parse_cell(row, col, cell.as_ref())?);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::RaggedRow {
                        row,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or_default();
        if height < Self::MIN_SIDE || width < Self::MIN_SIDE {
            return Err(Error::TooSmall {
                rows: height,
                cols: width,
            });
        }

        Ok(Grid {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Build a board from row strings, one letter per cell. Whitespace is ignored.
    pub fn from_rows<Rows, Row>(rows: Rows) -> Result<Self, Error>
    where
        Rows: IntoIterator<Item = Row>,
        Row: AsRef<str>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(String::from)
                    .collect()
            })
            .collect();
        Self::from_cells(rows)
    }

    /// The upper-case letter at `coord`, if it is on the board.
    pub fn letter(&self, coord: Coord) -> Option<char> {
        self.get(coord).map(|&b| b.to_ascii_uppercase() as char)
    }
}

fn parse_cell(row: usize, col: usize, content: &str) -> Result<u8, Error> {
    let mut chars = content.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase() as u8),
        _ => Err(Error::InvalidCell {
            row,
            col,
            content: content.to_owned(),
        }),
    }
}

impl FromStr for Grid<u8> {
    type Err = Error;

    /// Parse rows separated by `/` or newlines, e.g. `"CA/TS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(
            s.split(|c: char| c == '/' || c == '\n')
                .filter(|row| !row.trim().is_empty()),
        )
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &b in line {
                write!(f, "{}", b.to_ascii_uppercase() as char)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("a board must be at least 2x2; got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
    #[error("row {row} has {found} cells but the first row has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell `({row}, {col})` must hold exactly one letter; got {content:?}")]
    InvalidCell {
        row: usize,
        col: usize,
        content: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::corner(0, 0, 3)]
    #[case::edge(0, 1, 5)]
    #[case::center(1, 1, 8)]
    #[case::far_corner(2, 2, 3)]
    fn neighbor_counts_on_3x3(#[case] row: usize, #[case] col: usize, #[case] expected: usize) {
        assert_eq!(neighbors(row, col, 3, 3).count(), expected);
    }

    #[test]
    fn neighbors_stay_in_bounds_and_are_adjacent() {
        let (rows, cols) = (4, 5);
        for row in 0..rows {
            for col in 0..cols {
                let here = Coord::new(row, col);
                for n in neighbors(row, col, rows, cols) {
                    assert!(n.row < rows && n.col < cols);
                    assert!(here.is_adjacent(n), "{here} -> {n}");
                }
            }
        }
    }

    #[test]
    fn neighbors_are_deterministic() {
        let first: Vec<_> = neighbors(1, 1, 3, 3).collect();
        let second: Vec<_> = neighbors(1, 1, 3, 3).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], Coord::new(0, 0));
        assert_eq!(first[7], Coord::new(2, 2));
    }

    #[rstest]
    #[case(Coord::new(0, 0), Coord::new(1, 1), true)]
    #[case(Coord::new(0, 0), Coord::new(0, 0), false)]
    #[case(Coord::new(0, 0), Coord::new(0, 2), false)]
    #[case(Coord::new(3, 3), Coord::new(2, 4), true)]
    fn adjacency(#[case] a: Coord, #[case] b: Coord, #[case] expected: bool) {
        assert_eq!(a.is_adjacent(b), expected);
        assert_eq!(b.is_adjacent(a), expected);
    }

    #[test]
    fn index_is_row_major() {
        let mut grid = Grid::<u32>::new(2, 3);
        grid[Coord::new(1, 2)] = 7;
        assert_eq!(grid.idx(Coord::new(1, 2)), Some(5));
        assert_eq!(grid.get(Coord::new(2, 0)), None);
        assert_eq!(grid[Coord::new(1, 2)], 7);
        assert_eq!(grid.coords().count(), 6);
    }

    #[test]
    fn parses_cells_case_insensitively() {
        let board = Board::from_cells([["C", "a"], [" t ", "S"]]).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        assert_eq!(board[Coord::new(0, 1)], b'a');
        assert_eq!(board.letter(Coord::new(1, 0)), Some('T'));
        assert_eq!(board.to_string(), "CA\nTS");
    }

    #[rstest]
    #[case::slash("CA/TS")]
    #[case::newline("CA\nTS\n")]
    #[case::spaced("c a / t s")]
    fn parses_from_str(#[case] input: &str) {
        let board: Board = input.parse().unwrap();
        assert_eq!(board.to_string(), "CA\nTS");
    }

    #[rstest]
    #[case::single_row("CAT", Error::TooSmall { rows: 1, cols: 3 })]
    #[case::single_column("C/A/T", Error::TooSmall { rows: 3, cols: 1 })]
    #[case::empty("", Error::TooSmall { rows: 0, cols: 0 })]
    #[case::ragged("CAT/DO", Error::RaggedRow { row: 1, expected: 3, found: 2 })]
    #[case::digit("CA/T1", Error::InvalidCell { row: 1, col: 1, content: "1".into() })]
    fn rejects_invalid_boards(#[case] input: &str, #[case] expected: Error) {
        assert_eq!(input.parse::<Board>().unwrap_err(), expected);
    }

    #[rstest]
    #[case::empty_cell("")]
    #[case::two_letters("QU")]
    #[case::accented("É")]
    fn rejects_invalid_cells(#[case] cell: &str) {
        let err = Board::from_cells([["A", cell], ["B", "C"]]).unwrap_err();
        assert!(matches!(err, Error::InvalidCell { row: 0, col: 1, .. }));
    }
}
