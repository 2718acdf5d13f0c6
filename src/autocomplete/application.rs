use super::autocomplete_index::{AutocompleteIndex, AutocompleteSearch, DEFAULT_MAX_COUNT};
use super::dictionary_word::DictionaryWord;
use super::error::{AutocompleteError, Result};
use super::input_reader::RecordReader;
use super::linear_searcher::LinearAutocompleteSearcher;
use super::output_writer::write_completions;
use log::{info, warn};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    /// Sorted index with range search and top-K selection.
    Sorted,
    /// Full scan and sort per query.
    Linear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub max_count: usize,
    pub engine: SearchEngine,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            max_count: DEFAULT_MAX_COUNT,
            engine: SearchEngine::Sorted,
        }
    }
}

/// Reads a dictionary and a list of prefixes and writes one block of
/// completions per prefix.
pub struct AutocompleteApplication {
    config: AppConfig,
}

impl AutocompleteApplication {
    pub fn new(config: AppConfig) -> Result<AutocompleteApplication> {
        if config.max_count < 1 {
            return Err(AutocompleteError::OutOfRange {
                name: "max_count",
                value: config.max_count as i64,
                reason: "must be at least 1",
            });
        }
        Ok(AutocompleteApplication { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build_searcher(&self, words: Vec<DictionaryWord>) -> Box<dyn AutocompleteSearch> {
        match self.config.engine {
            SearchEngine::Sorted => Box::new(AutocompleteIndex::build(words)),
            SearchEngine::Linear => Box::new(LinearAutocompleteSearcher::new(words)),
        }
    }

    /// Dictionary block followed by query block, both on `input`.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<()> {
        let mut reader = RecordReader::new(input);
        let searcher = self.build_searcher(reader.read_dictionary_words()?);
        info!("loaded {} dictionary words", searcher.len());
        let prefixes = reader.read_prefixes()?;
        self.answer_all(searcher.as_ref(), &prefixes, output)
    }

    /// Dictionary block on `dictionary`, query block on `queries`.
    pub fn run_split<D, Q, W>(&self, dictionary: D, queries: Q, output: &mut W) -> Result<()>
    where
        D: BufRead,
        Q: BufRead,
        W: Write,
    {
        let searcher = self.build_searcher(RecordReader::new(dictionary).read_dictionary_words()?);
        info!("loaded {} dictionary words", searcher.len());
        let prefixes = RecordReader::new(queries).read_prefixes()?;
        self.answer_all(searcher.as_ref(), &prefixes, output)
    }

    pub fn answer_all<W: Write>(
        &self,
        searcher: &dyn AutocompleteSearch,
        prefixes: &[String],
        output: &mut W,
    ) -> Result<()> {
        info!("answering {} queries", prefixes.len());
        for prefix in prefixes {
            self.answer(searcher, prefix, output)?;
        }
        output.flush()?;
        Ok(())
    }

    /// Writes the completions of a single prefix. An empty prefix has no
    /// completions and produces an empty block.
    pub fn answer<W: Write>(&self, searcher: &dyn AutocompleteSearch, prefix: &str, output: &mut W) -> Result<()> {
        if prefix.is_empty() {
            warn!("empty prefix, writing an empty block");
            write_completions(output, &[])?;
            return Ok(());
        }
        let words = searcher.find_words_starts_with(prefix, self.config.max_count)?;
        write_completions(output, &words)?;
        Ok(())
    }
}
