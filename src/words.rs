//! Turning raw user or file input into the words placed in a puzzle.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{Error, Result};

/// The line that ends interactive word entry.
pub const STOP_WORD: &str = "q";

/// Removes every character that isn't an ASCII letter and lower-cases the rest.
///
/// ```
/// assert_eq!(word_search_generator::words::sanitize("Ice-Cream 2!"), "icecream");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Sanitizes every raw word, keeping input order. Words left empty by sanitization are dropped,
/// since a zero-length word has nothing to place.
pub fn sanitize_all<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|raw| {
            let word = sanitize(raw.as_ref());

            if word.is_empty() {
                log::debug!("dropping {:?}: no letters left after sanitizing", raw.as_ref());
                None
            } else {
                Some(word)
            }
        })
        .collect()
}

/// Reads a word list file with one raw word per line. The lines are returned unsanitized.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;

    let words = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(path, e))?;

    log::debug!("read {} line(s) from {}", words.len(), path.display());

    Ok(words)
}

/// Reads raw words one per line until a line that is exactly [`STOP_WORD`] or the end of input.
pub fn gather_words<R: BufRead + ?Sized>(input: &mut R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();

        if input.read_line(&mut line)? == 0 {
            break;
        }

        let word = line.trim_end_matches(['\r', '\n']);
        if word == STOP_WORD {
            break;
        }

        words.push(word.to_owned());
    }

    Ok(words)
}
