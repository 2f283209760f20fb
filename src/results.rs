use std::{collections::BTreeMap, fmt};

/// Partition words by length.
///
/// Buckets come out in ascending length order and each bucket is sorted
/// alphabetically, so the output depends only on the set of input words.
pub fn group_by_length<Words, Word>(words: Words) -> BTreeMap<usize, Vec<String>>
where
    Words: IntoIterator<Item = Word>,
    Word: AsRef<str>,
{
    let mut grouped: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in words {
        let word = word.as_ref();
        grouped
            .entry(word.chars().count())
            .or_default()
            .push(word.to_owned());
    }
    for bucket in grouped.values_mut() {
        bucket.sort_unstable();
        bucket.dedup();
    }
    grouped
}

/// Found words grouped by length, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouped {
    groups: BTreeMap<usize, Vec<String>>,
    total: usize,
}

impl Grouped {
    pub fn new<Words, Word>(words: Words) -> Self
    where
        Words: IntoIterator<Item = Word>,
        Word: AsRef<str>,
    {
        let groups = group_by_length(words);
        let total = groups.values().map(Vec::len).sum();
        Self { groups, total }
    }

    pub fn groups(&self) -> &BTreeMap<usize, Vec<String>> {
        &self.groups
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl fmt::Display for Grouped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No valid words found.");
        }
        write!(f, "Found {} valid words!", self.total)?;
        for (len, words) in &self.groups {
            write!(
                f,
                "\n\n{len}-letter words ({} found)\n{}",
                words.len(),
                words.join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn buckets_are_sorted_and_ordered() {
        let grouped = group_by_length(["TONE", "CATS", "STONE", "ACTS", "NOTES", "TONES"]);
        let keys: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(keys, [4, 5]);
        assert_eq!(grouped[&4], ["ACTS", "CATS", "TONE"]);
        assert_eq!(grouped[&5], ["NOTES", "STONE", "TONES"]);
    }

    #[test]
    fn empty_input_gives_empty_mapping() {
        assert!(group_by_length(Vec::<String>::new()).is_empty());
        assert!(Grouped::new(Vec::<String>::new()).is_empty());
    }

    #[rstest]
    #[case::nothing(&[], "No valid words found.")]
    #[case::one(&["CATS"], "Found 1 valid words!\n\n4-letter words (1 found)\nCATS")]
    #[case::two_lengths(
        &["STAB", "BEAST", "BATS"],
        "Found 3 valid words!\n\n4-letter words (2 found)\nBATS, STAB\n\n5-letter words (1 found)\nBEAST"
    )]
    fn display(#[case] words: &[&str], #[case] expected: &str) {
        assert_eq!(Grouped::new(words).to_string(), expected);
    }
}
