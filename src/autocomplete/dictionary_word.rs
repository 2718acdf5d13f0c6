use super::error::{AutocompleteError, Result};
use std::cmp::Ordering;
use std::fmt;

/// One dictionary record: a non-empty word and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryWord {
    text: String,
    frequency: u32,
}

impl DictionaryWord {
    pub fn new(text: impl Into<String>, frequency: i32) -> Result<DictionaryWord> {
        let text = text.into();
        if text.is_empty() {
            return Err(AutocompleteError::InvalidArgument {
                name: "text",
                reason: "must not be empty",
            });
        }
        if frequency < 1 {
            return Err(AutocompleteError::OutOfRange {
                name: "frequency",
                value: frequency as i64,
                reason: "must be at least 1",
            });
        }
        Ok(DictionaryWord {
            text,
            frequency: frequency as u32,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Ordinal (byte-wise) ordering by text, used to sort a dictionary.
    pub fn by_text(a: &DictionaryWord, b: &DictionaryWord) -> Ordering {
        a.text.as_bytes().cmp(b.text.as_bytes())
    }
}

impl fmt::Display for DictionaryWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Text: '{}'; Frequency: {})", self.text, self.frequency)
    }
}
