//! Word lookup for the solver.
//!
//! The search needs exactly two questions answered about a partial path string:
//! is it a complete word, and could it still grow into one. [`Lexicon`] names
//! those questions; [`Dictionary`] answers both in time proportional to the
//! query length by walking a prefix tree, while [`WordSet`] answers them from a
//! pair of hash sets and is only sensible for small vocabularies.
//!
//! All stored words are lower-case ASCII. Queries are case-insensitive, and any
//! query containing a character outside `a-z`/`A-Z` answers `false`.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// The two queries a search needs to prune and to record words.
pub trait Lexicon {
    /// `true` iff `s` is an exact entry.
    fn is_word(&self, s: &str) -> bool;

    /// `true` iff `s` is non-empty and some strictly longer entry starts with it.
    fn is_prefix(&self, s: &str) -> bool;

    /// `false` while no entry has been added.
    fn is_ready(&self) -> bool;

    /// `true` when a path spelling `s` is still worth visiting.
    fn is_viable(&self, s: &str) -> bool {
        self.is_prefix(s) || self.is_word(s)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn is_word(&self, s: &str) -> bool {
        (**self).is_word(s)
    }

    fn is_prefix(&self, s: &str) -> bool {
        (**self).is_prefix(s)
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn is_viable(&self, s: &str) -> bool {
        (**self).is_viable(s)
    }
}

const ALPHABET: usize = 26;

/// Index of the root node; it can never be anyone's child, so `0` doubles as "no child".
const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: [u32; ALPHABET],
    terminal: bool,
}

impl Node {
    fn child(&self, letter: usize) -> Option<usize> {
        match self.children[letter] {
            0 => None,
            idx => Some(idx as usize),
        }
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(|&c| c != 0)
    }
}

fn letter_index(c: u8) -> Option<usize> {
    c.is_ascii_alphabetic()
        .then(|| (c.to_ascii_lowercase() - b'a') as usize)
}

/// A prefix tree over a fixed vocabulary.
///
/// Nodes live in a single arena vector; children are stored as arena indices.
#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Insert a word, returning `true` if it was newly added.
    ///
    /// Words which are empty or contain anything but ASCII letters are refused.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(letters) = word
            .bytes()
            .map(letter_index)
            .collect::<Option<Vec<_>>>()
        else {
            return false;
        };
        if letters.is_empty() {
            return false;
        }

        let mut node = ROOT;
        for letter in letters {
            node = match self.nodes[node].child(letter) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children[letter] = next as u32;
                    next
                }
            };
        }

        let terminal = &mut self.nodes[node].terminal;
        let added = !*terminal;
        *terminal = true;
        self.words += usize::from(added);
        added
    }

    /// Parse a word list held in memory: one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored. Entries which are not
    /// purely alphabetic (hyphenated or accented words, for example) are skipped.
    pub fn from_word_list(contents: &str) -> Self {
        let mut dictionary = Self::new();
        let mut skipped = 0_usize;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !line.bytes().all(|b| b.is_ascii_alphabetic()) {
                skipped += 1;
                continue;
            }
            dictionary.insert(line);
        }
        if skipped > 0 {
            log::warn!("skipped {skipped} word list entries containing non-letters");
        }
        dictionary
    }

    /// Read and parse a word list from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let dictionary = Self::from_word_list(&contents);
        log::info!(
            "loaded {} words ({} trie nodes) from {}",
            dictionary.len(),
            dictionary.nodes.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Follow `s` from the root, or `None` if it leaves the tree.
    fn walk(&self, s: &str) -> Option<&Node> {
        let mut node = &self.nodes[ROOT];
        for b in s.bytes() {
            let next = node.child(letter_index(b)?)?;
            node = &self.nodes[next];
        }
        Some(node)
    }
}

impl Lexicon for Dictionary {
    fn is_word(&self, s: &str) -> bool {
        !s.is_empty() && self.walk(s).map_or(false, |node| node.terminal)
    }

    fn is_prefix(&self, s: &str) -> bool {
        !s.is_empty() && self.walk(s).map_or(false, Node::has_children)
    }

    fn is_ready(&self) -> bool {
        !self.is_empty()
    }

    // Every node on the tree is either terminal or has children, so reaching one suffices.
    fn is_viable(&self, s: &str) -> bool {
        !s.is_empty() && self.walk(s).is_some()
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

/// A flat word set plus the set of every proper prefix of every word.
///
/// Memory grows with the square of word length and every query allocates, so
/// prefer [`Dictionary`] for anything beyond a small vocabulary.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Insert a word, returning `true` if it was newly added.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return false;
        }
        let word = word.to_ascii_lowercase();
        for end in 1..word.len() {
            self.prefixes.insert(word[..end].to_owned());
        }
        self.words.insert(word)
    }
}

impl Lexicon for WordSet {
    fn is_word(&self, s: &str) -> bool {
        self.words.contains(&s.to_ascii_lowercase())
    }

    fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(&s.to_ascii_lowercase())
    }

    fn is_ready(&self) -> bool {
        !self.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read word list {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
