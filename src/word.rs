use std::fmt;
use thiserror::Error;

pub const WORD_LENGTH: usize = 5;

/// Why a line of player input was not accepted as a guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("You've already guessed {0}.")]
    AlreadyGuessed(String),
    #[error("Your guess must be {expected} letters.")]
    WrongLength { expected: usize, found: usize },
    #[error("Invalid letter: '{0}'.\nPlease use English letters.")]
    InvalidLetter(char),
}

/// Exactly five uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Normalizes `input` to uppercase and checks length, then alphabet.
    pub fn parse(input: &str) -> Result<Self, InvalidGuess> {
        let upper = input.to_uppercase();
        let found = upper.chars().count();
        if found != WORD_LENGTH {
            return Err(InvalidGuess::WrongLength {
                expected: WORD_LENGTH,
                found,
            });
        }
        if let Some(bad) = upper.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(InvalidGuess::InvalidLetter(bad));
        }
        Ok(Self(upper))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letters as ASCII bytes, `b'A'..=b'Z'`.
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of an uppercase ASCII letter in the alphabet.
#[must_use]
pub fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}
