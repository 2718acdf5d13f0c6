use super::autocomplete_index::{validate_query, AutocompleteSearch};
use super::dictionary_word::DictionaryWord;
use super::error::Result;
use log::debug;

/// Reference searcher: scans the whole dictionary on every query and sorts
/// the matches. Slow, but obviously correct.
#[derive(Debug, Clone, Default)]
pub struct LinearAutocompleteSearcher {
    words: Vec<DictionaryWord>,
}

impl LinearAutocompleteSearcher {
    pub fn new<I>(words: I) -> LinearAutocompleteSearcher
    where
        I: IntoIterator<Item = DictionaryWord>,
    {
        LinearAutocompleteSearcher {
            words: words.into_iter().collect(),
        }
    }
}

impl AutocompleteSearch for LinearAutocompleteSearcher {
    fn find_words_starts_with(&self, prefix: &str, max_count: usize) -> Result<Vec<&DictionaryWord>> {
        validate_query(prefix, max_count)?;
        let mut matches: Vec<&DictionaryWord> = self
            .words
            .iter()
            .filter(|w| w.text().as_bytes().starts_with(prefix.as_bytes()))
            .collect();
        debug!("prefix {:?}: {} candidates (linear scan)", prefix, matches.len());
        matches.sort_by(|a, b| {
            b.frequency()
                .cmp(&a.frequency())
                .then_with(|| DictionaryWord::by_text(a, b))
        });
        matches.truncate(max_count);
        Ok(matches)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
