use super::dictionary_word::DictionaryWord;
use super::error::{AutocompleteError, Result};
use super::range_search::find_all;
use super::top_k::select_top_k;
use log::debug;
use std::cmp::Ordering;

/// Number of completions returned when the caller does not ask otherwise.
pub const DEFAULT_MAX_COUNT: usize = 10;

/// Something that can complete a word prefix from a fixed dictionary.
pub trait AutocompleteSearch {
    /// Words starting with `prefix`, most frequent first, alphabetically
    /// among equal frequencies, at most `max_count` of them.
    fn find_words_starts_with(&self, prefix: &str, max_count: usize) -> Result<Vec<&DictionaryWord>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn validate_query(prefix: &str, max_count: usize) -> Result<()> {
    if prefix.is_empty() {
        return Err(AutocompleteError::InvalidArgument {
            name: "prefix",
            reason: "must not be empty",
        });
    }
    if max_count < 1 {
        return Err(AutocompleteError::OutOfRange {
            name: "max_count",
            value: max_count as i64,
            reason: "must be at least 1",
        });
    }
    Ok(())
}

/// Higher frequency ranks first; equal frequencies rank the ordinally
/// smaller text first.
pub fn by_rank(a: &DictionaryWord, b: &DictionaryWord) -> Ordering {
    a.frequency()
        .cmp(&b.frequency())
        .then_with(|| DictionaryWord::by_text(a, b).reverse())
}

/// `Equal` for every word starting with `prefix`, ordinal order otherwise.
/// Words sharing a prefix are contiguous in a text-sorted dictionary, so
/// this is a valid ordering for range search.
fn by_prefix(word: &DictionaryWord, prefix: &str) -> Ordering {
    if word.text().as_bytes().starts_with(prefix.as_bytes()) {
        Ordering::Equal
    } else {
        word.text().as_bytes().cmp(prefix.as_bytes())
    }
}

/// Dictionary sorted by text, answering prefix queries with two binary
/// searches and a bounded top-K pass over the matching span.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteIndex {
    words: Vec<DictionaryWord>,
}

impl AutocompleteIndex {
    pub fn build<I>(words: I) -> AutocompleteIndex
    where
        I: IntoIterator<Item = DictionaryWord>,
    {
        let mut words: Vec<DictionaryWord> = words.into_iter().collect();
        words.sort_by(DictionaryWord::by_text);
        debug!("built autocomplete index over {} words", words.len());
        AutocompleteIndex { words }
    }

    pub fn find_prefix_matches(&self, prefix: &str, max_count: usize) -> Result<Vec<&DictionaryWord>> {
        validate_query(prefix, max_count)?;
        let span = find_all(&self.words, prefix, by_prefix);
        let top = select_top_k(span, max_count, by_rank);
        debug!(
            "prefix {:?}: {} candidates, {} returned",
            prefix,
            span.len(),
            top.len()
        );
        Ok(top)
    }

    /// Words in ordinal text order.
    pub fn words(&self) -> &[DictionaryWord] {
        &self.words
    }
}

impl FromIterator<DictionaryWord> for AutocompleteIndex {
    fn from_iter<I: IntoIterator<Item = DictionaryWord>>(iter: I) -> Self {
        AutocompleteIndex::build(iter)
    }
}

impl AutocompleteSearch for AutocompleteIndex {
    fn find_words_starts_with(&self, prefix: &str, max_count: usize) -> Result<Vec<&DictionaryWord>> {
        self.find_prefix_matches(prefix, max_count)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
