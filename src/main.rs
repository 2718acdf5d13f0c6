extern crate smartcomplete;
use getopts::Options;
use log::error;
use std::env;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Write;
use std::process;

use smartcomplete::autocomplete::application::*;
use smartcomplete::autocomplete::input_reader::RecordReader;
use smartcomplete::autocomplete::{AutocompleteError, Result, DEFAULT_MAX_COUNT};

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [options] < input", program);
    print!("{}", opts.usage(&brief));
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();
    let mut opts = Options::new();
    opts.optopt(
        "n",
        "max-count",
        &format!("Return at most <count> words per query. (default: {})", DEFAULT_MAX_COUNT),
        "<count>",
    );
    opts.optopt(
        "d",
        "dict",
        "Read the dictionary from <dict> instead of stdin; queries are still read from stdin.",
        "<dict>",
    );
    opts.optopt("w", "word", "Complete a <word> and soon exit.", "<word>");
    opts.optflag("l", "linear", "Scan the whole dictionary for every query.");
    opts.optflag("h", "help", "Show this message.");
    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}", f);
            process::exit(1);
        }
    };
    if matches.opt_present("h") {
        print_usage(&program, opts);
        return;
    }
    if let Err(err) = run(&matches) {
        error!("{}", err);
        eprintln!("{}: {}", program, err);
        process::exit(1);
    }
}

fn run(matches: &getopts::Matches) -> Result<()> {
    let max_count = match matches.opt_str("n") {
        Some(s) => s.parse::<usize>().map_err(|_| AutocompleteError::InvalidArgument {
            name: "max-count",
            reason: "must be a positive integer",
        })?,
        None => DEFAULT_MAX_COUNT,
    };
    let engine = if matches.opt_present("l") {
        SearchEngine::Linear
    } else {
        SearchEngine::Sorted
    };
    let app = AutocompleteApplication::new(AppConfig { max_count, engine })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let dict = matches.opt_str("d");
    let word = matches.opt_str("w");

    match (dict, word) {
        (Some(path), None) => {
            let file = BufReader::new(File::open(path)?);
            app.run_split(file, stdin.lock(), &mut out)
        }
        (None, None) => app.run(stdin.lock(), &mut out),
        (dict, Some(word)) => {
            let words = match dict {
                Some(path) => RecordReader::new(BufReader::new(File::open(path)?)).read_dictionary_words()?,
                None => RecordReader::new(stdin.lock()).read_dictionary_words()?,
            };
            let searcher = app.build_searcher(words);
            app.answer(searcher.as_ref(), &word, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}
