use std::cell::RefCell;

use boggle_solver::{group_by_length, solve, Board, Dictionary, Lexicon, Solver};
use rstest::rstest;

fn dictionary(words: &[&str]) -> Dictionary {
    words.iter().collect()
}

/// Records every string the search asks about.
struct Recording<'a> {
    inner: &'a Dictionary,
    queries: RefCell<Vec<String>>,
}

impl<'a> Recording<'a> {
    fn new(inner: &'a Dictionary) -> Self {
        Self {
            inner,
            queries: RefCell::default(),
        }
    }
}

impl Lexicon for Recording<'_> {
    fn is_word(&self, s: &str) -> bool {
        self.queries.borrow_mut().push(s.to_owned());
        self.inner.is_word(s)
    }

    fn is_prefix(&self, s: &str) -> bool {
        self.queries.borrow_mut().push(s.to_owned());
        self.inner.is_prefix(s)
    }

    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }
}

#[test]
fn short_words_are_excluded() {
    let board = Board::from_cells([["C", "A"], ["T", "S"]]).unwrap();
    let dict = dictionary(&["cat", "cats", "act"]);
    let found = solve(&board, &dict, 4);
    assert_eq!(found.into_iter().collect::<Vec<_>>(), ["CATS"]);
}

#[rstest]
#[case::no_matching_letters("XQ/ZJ", &["cats", "dogs"])]
#[case::only_short_words("CA/TS", &["cat", "act", "sat"])]
#[case::needs_a_reused_cell("AB/CD", &["abab", "dcdc"])]
fn boards_without_words(#[case] board: &str, #[case] words: &[&str]) {
    let board: Board = board.parse().unwrap();
    let found = solve(&board, &dictionary(words), board.len());
    assert!(found.is_empty());
    assert!(group_by_length(&found).is_empty());
}

#[test]
fn words_found_from_several_starts_appear_once() {
    // "TOOT" starts from either T, in both directions
    let board: Board = "TO/OT".parse().unwrap();
    let found = solve(&board, &dictionary(&["toot", "otto"]), 4);
    assert_eq!(found.into_iter().collect::<Vec<_>>(), ["OTTO", "TOOT"]);
}

#[test]
fn dead_letters_are_pruned_after_one_character() {
    let board: Board = "QAT/SEN/RID".parse().unwrap();
    let dict = dictionary(&["tens", "rise", "sane", "dine", "nest"]);
    let recording = Recording::new(&dict);
    let found = Solver::new(&board, &recording).run().unwrap();

    assert!(found.contains("DINE"));
    assert!(found.contains("RISE"));
    let q_queries: Vec<_> = recording
        .queries
        .borrow()
        .iter()
        .filter(|q| q.starts_with('q'))
        .cloned()
        .collect();
    assert!(!q_queries.is_empty());
    assert!(q_queries.iter().all(|q| q == "q"), "{q_queries:?}");
}

#[test]
fn larger_board() {
    let board: Board = "SERS/PATG/LINE/SERS".parse().unwrap();
    let dict = dictionary(&[
        "pate", "pates", "tine", "tines", "line", "lines", "sera", "rate", "gnat", "zebra",
    ]);
    let found = solve(&board, &dict, board.len());
    for word in ["PATE", "LINE", "LINES", "TINE", "TINES", "RATE"] {
        assert!(found.contains(word), "{word} missing from {found:?}");
    }
    assert!(!found.contains("ZEBRA"));

    let grouped = group_by_length(&found);
    assert!(grouped.keys().all(|&len| len >= 4));
}
