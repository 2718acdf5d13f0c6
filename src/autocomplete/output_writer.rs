use super::dictionary_word::DictionaryWord;
use std::io::{self, Write};

/// Writes one block of completions: each word on its own line, followed by
/// an empty line that terminates the block.
pub fn write_completions<W: Write>(writer: &mut W, words: &[&DictionaryWord]) -> io::Result<()> {
    for word in words {
        writeln!(writer, "{}", word.text())?;
    }
    if words.is_empty() {
        writeln!(writer)?;
    }
    writeln!(writer)
}
