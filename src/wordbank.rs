use crate::word::{WORD_LENGTH, Word};
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordlist.txt");

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("No words of length {length} in the word list")]
    NoValidWords { length: usize },
    #[error("Failed to read word list from '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Keeps the candidates that are five ASCII letters, uppercased.
///
/// The raw text is checked before uppercasing, since Unicode case mapping
/// can change both length and alphabet. Only line terminators are stripped.
pub fn valid_words<I, S>(candidates: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let raw = candidate.as_ref().trim_end_matches(['\r', '\n']);
            let usable = raw.chars().count() == WORD_LENGTH
                && raw.chars().all(|c| c.is_ascii_alphabetic());
            if usable { Word::parse(raw).ok() } else { None }
        })
        .collect()
}

#[must_use]
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().map(str::to_string).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordSourceError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| WordSourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_wordbank_from_str(&data))
}

/// Picks the secret word uniformly at random from the valid candidates.
pub fn select_secret_word<S, R>(candidates: &[S], rng: &mut R) -> Result<Word, WordSourceError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let words = valid_words(candidates);
    info_log!(
        "select_secret_word() - {} of {} candidates usable",
        words.len(),
        candidates.len()
    );
    let secret = words
        .choose(rng)
        .cloned()
        .ok_or(WordSourceError::NoValidWords {
            length: WORD_LENGTH,
        })?;
    debug_log!("select_secret_word() - secret is {}", secret);
    Ok(secret)
}
