pub mod application;
pub mod autocomplete_index;
pub mod dictionary_word;
pub mod error;
pub mod input_reader;
pub mod linear_searcher;
pub mod output_writer;
pub mod range_search;
pub mod top_k;

pub use autocomplete_index::{AutocompleteIndex, AutocompleteSearch, DEFAULT_MAX_COUNT};
pub use dictionary_word::DictionaryWord;
pub use error::{AutocompleteError, Result};
pub use linear_searcher::LinearAutocompleteSearcher;
