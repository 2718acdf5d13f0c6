//! Line-oriented input: a count line followed by that many records.
//!
//! Dictionary block:
//! ```text
//! 3
//! kanojo 20
//! kare 10
//! korosu 7
//! ```
//! Query block:
//! ```text
//! 2
//! ka
//! ko
//! ```
use super::dictionary_word::DictionaryWord;
use super::error::{AutocompleteError, Result};
use std::io::BufRead;

/// Reads dictionary and query blocks from one stream, one after the other,
/// keeping track of the line number for error messages.
pub struct RecordReader<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> RecordReader<R> {
        RecordReader { reader, line: 0 }
    }

    /// 1-based number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    fn parse_error(&self, message: String) -> AutocompleteError {
        AutocompleteError::Parse {
            line: self.line,
            message,
        }
    }

    fn read_count(&mut self) -> Result<usize> {
        let line = match self.next_line()? {
            Some(line) => line,
            None => {
                self.line += 1;
                return Err(self.parse_error("missing record count".to_string()));
            }
        };
        let count: i64 = line
            .trim()
            .parse()
            .map_err(|_| self.parse_error(format!("record count is not a number: {:?}", line)))?;
        if count < 0 {
            return Err(self.parse_error(format!("record count is negative: {}", count)));
        }
        Ok(count as usize)
    }

    fn read_block<T, F>(&mut self, mut parse: F) -> Result<Vec<T>>
    where
        F: FnMut(&Self, String) -> Result<T>,
    {
        let count = self.read_count()?;
        // count is untrusted, cap the preallocation
        let mut records = Vec::with_capacity(count.min(1024));
        for read in 0..count {
            let line = match self.next_line()? {
                Some(line) => line,
                None => {
                    return Err(self.parse_error(format!(
                        "expected {} records, found {}",
                        count, read
                    )))
                }
            };
            records.push(parse(&*self, line)?);
        }
        Ok(records)
    }

    /// Reads a block of `text frequency` records.
    pub fn read_dictionary_words(&mut self) -> Result<Vec<DictionaryWord>> {
        self.read_block(|reader, line| {
            let mut fields = line.split_whitespace();
            let (text, frequency) = match (fields.next(), fields.next(), fields.next()) {
                (Some(text), Some(frequency), None) => (text, frequency),
                _ => {
                    return Err(reader.parse_error(format!(
                        "expected `text frequency`, found {:?}",
                        line
                    )))
                }
            };
            let frequency: i32 = frequency
                .parse()
                .map_err(|_| reader.parse_error(format!("frequency is not a number: {:?}", frequency)))?;
            DictionaryWord::new(text, frequency).map_err(|err| reader.parse_error(err.to_string()))
        })
    }

    /// Reads a block of prefix lines. Lines are returned verbatim apart from
    /// the line terminator; empty lines are kept.
    pub fn read_prefixes(&mut self) -> Result<Vec<String>> {
        self.read_block(|_, line| Ok(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> RecordReader<Cursor<&[u8]>> {
        RecordReader::new(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn reads_dictionary_words() {
        let words = reader("3\nkanojo 20\nkare 10\r\nkorosu 7\n")
            .read_dictionary_words()
            .unwrap();
        assert_eq!(
            words,
            vec![
                DictionaryWord::new("kanojo", 20).unwrap(),
                DictionaryWord::new("kare", 10).unwrap(),
                DictionaryWord::new("korosu", 7).unwrap(),
            ]
        );
    }

    #[test]
    fn reads_only_the_announced_number_of_prefixes() {
        let mut input = reader("3\nelement1\nelement2\nelement3\nelement4\n");
        let prefixes = input.read_prefixes().unwrap();
        assert_eq!(prefixes, vec!["element1", "element2", "element3"]);
        assert_eq!(input.line(), 4);
    }

    #[test]
    fn last_line_without_terminator_is_read() {
        let prefixes = reader("2\nka\nko").read_prefixes().unwrap();
        assert_eq!(prefixes, vec!["ka", "ko"]);
    }

    #[test]
    fn dictionary_and_queries_share_one_stream() {
        let mut input = reader("2\nkare 10\nkanojo 20\n1\nka\n");
        assert_eq!(input.read_dictionary_words().unwrap().len(), 2);
        assert_eq!(input.read_prefixes().unwrap(), vec!["ka"]);
    }

    #[test]
    fn zero_count_reads_nothing() {
        assert!(reader("0\n").read_dictionary_words().unwrap().is_empty());
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = reader("some string").read_prefixes().unwrap_err();
        assert!(matches!(err, AutocompleteError::Parse { line: 1, .. }));
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = reader("-1").read_dictionary_words().unwrap_err();
        assert!(matches!(err, AutocompleteError::Parse { line: 1, .. }));
    }

    #[test]
    fn missing_count_is_rejected() {
        let err = reader("").read_prefixes().unwrap_err();
        assert!(matches!(err, AutocompleteError::Parse { line: 1, .. }));
    }

    #[test]
    fn truncated_block_is_rejected() {
        let err = reader("3\nkare 10\n").read_dictionary_words().unwrap_err();
        assert_eq!(err.to_string(), "line 2: expected 3 records, found 1");
    }

    #[test]
    fn malformed_records_report_their_line() {
        for input in ["2\nkare 10\nkanojo\n", "2\nkare 10\nkanojo x\n", "2\nkare 10\nkanojo 1 2\n"] {
            let err = reader(input).read_dictionary_words().unwrap_err();
            assert!(matches!(err, AutocompleteError::Parse { line: 3, .. }), "{}", input);
        }
    }

    #[test]
    fn invalid_frequency_is_reported_as_parse_error() {
        let err = reader("1\nkare 0\n").read_dictionary_words().unwrap_err();
        match err {
            AutocompleteError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("frequency"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
