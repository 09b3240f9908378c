use crate::word::{WORD_LENGTH, Word, letter_index};

/// Per-letter result of comparing a guess with the secret.
///
/// Ordered from least to most informative, so `max` picks the best status a
/// letter has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

pub type Feedback = [LetterStatus; WORD_LENGTH];

/// Scores `guess` against `secret`.
///
/// Exact matches are claimed first, then misplaced letters draw from what is
/// left of the secret's letter counts. A letter never earns more `Correct` and
/// `Present` marks than it has occurrences in the secret.
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> Feedback {
    let guess = guess.letters();
    let secret = secret.letters();
    let mut feedback = [LetterStatus::Absent; WORD_LENGTH];

    let mut remaining = [0u8; 26];
    for &letter in secret {
        remaining[letter_index(letter)] += 1;
    }

    // First pass: exact matches
    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            feedback[i] = LetterStatus::Correct;
            remaining[letter_index(guess[i])] -= 1;
        }
    }

    // Second pass: misplaced letters, limited by the remaining counts
    for i in 0..WORD_LENGTH {
        if feedback[i] == LetterStatus::Correct {
            continue;
        }
        let slot = &mut remaining[letter_index(guess[i])];
        if *slot > 0 {
            feedback[i] = LetterStatus::Present;
            *slot -= 1;
        }
    }

    feedback
}

/// Best status seen for each letter A-Z over the guesses of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    best: [Option<LetterStatus>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the summary for a sequence of scored guesses.
    pub fn from_guesses<'a, I>(guesses: I, secret: &Word) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut keyboard = Self::new();
        for guess in guesses {
            keyboard.record(guess, &evaluate(guess, secret));
        }
        keyboard
    }

    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback) {
            let slot = &mut self.best[letter_index(letter)];
            *slot = (*slot).max(Some(status));
        }
    }

    /// `None` for a letter that has not been guessed yet.
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        self.best[letter_index(letter)]
    }

    /// Letters A-Z paired with their best status.
    pub fn letters(&self) -> impl Iterator<Item = (char, Option<LetterStatus>)> + '_ {
        (b'A'..=b'Z').map(|letter| (char::from(letter), self.status(letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn test_evaluate_exact_guess() {
        assert_eq!(evaluate(&word("SNAKE"), &word("SNAKE")), [Correct; 5]);
    }

    #[test]
    fn test_evaluate_no_common_letters() {
        assert_eq!(evaluate(&word("BLIMP"), &word("SNAKE")), [Absent; 5]);
    }

    #[test]
    fn test_evaluate_repeated_letter_against_single_occurrence() {
        // SNAKE has one E, taken by the exact match in the last position
        assert_eq!(
            evaluate(&word("EEEEE"), &word("SNAKE")),
            [Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn test_evaluate_knees_against_snake() {
        // N is exact; K, the first E and S are misplaced; the second E
        // finds no E left to claim
        assert_eq!(
            evaluate(&word("KNEES"), &word("SNAKE")),
            [Present, Correct, Present, Absent, Present]
        );
    }

    #[test]
    fn test_evaluate_exact_match_claims_before_misplaced() {
        // The E at position 4 is exact, so the earlier E gets nothing
        assert_eq!(
            evaluate(&word("EERIE"), &word("SNAKE")),
            [Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn test_evaluate_two_occurrences_in_secret() {
        // SPEED has two E's, so only the first two of three misplaced E's score
        assert_eq!(
            evaluate(&word("EERIE"), &word("SPEED")),
            [Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn test_correct_iff_same_letter_at_position() {
        let words = ["SNAKE", "KNEES", "EERIE", "SPEED", "ABBEY", "LLAMA", "ALLAY"];
        for secret in words {
            for guess in words {
                let (secret, guess) = (word(secret), word(guess));
                let feedback = evaluate(&guess, &secret);
                for i in 0..WORD_LENGTH {
                    assert_eq!(
                        feedback[i] == Correct,
                        guess.letters()[i] == secret.letters()[i],
                        "{guess} vs {secret} at {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_marks_never_exceed_secret_letter_count() {
        let words = ["SNAKE", "KNEES", "EERIE", "SPEED", "ABBEY", "LLAMA", "ALLAY"];
        for secret in words {
            for guess in words {
                let (secret, guess) = (word(secret), word(guess));
                let feedback = evaluate(&guess, &secret);
                for letter in b'A'..=b'Z' {
                    let in_secret = secret.letters().iter().filter(|&&c| c == letter).count();
                    let marked = guess
                        .letters()
                        .iter()
                        .zip(&feedback)
                        .filter(|&(&c, &s)| c == letter && s != Absent)
                        .count();
                    assert!(marked <= in_secret, "{guess} vs {secret}: {}", letter as char);
                }
            }
        }
    }

    #[test]
    fn test_keyboard_keeps_best_status() {
        let secret = word("SNAKE");
        let mut keyboard = KeyboardState::new();
        assert_eq!(keyboard.status(b'S'), None);

        // S is misplaced in KNEES, then exact in SNARL
        let knees = word("KNEES");
        keyboard.record(&knees, &evaluate(&knees, &secret));
        assert_eq!(keyboard.status(b'S'), Some(Present));

        let snarl = word("SNARL");
        keyboard.record(&snarl, &evaluate(&snarl, &secret));
        assert_eq!(keyboard.status(b'S'), Some(Correct));
        assert_eq!(keyboard.status(b'L'), Some(Absent));

        // A later misplaced S does not downgrade it
        let bless = word("BLESS");
        keyboard.record(&bless, &evaluate(&bless, &secret));
        assert_eq!(keyboard.status(b'S'), Some(Correct));
        assert_eq!(keyboard.status(b'Z'), None);
    }

    #[test]
    fn test_keyboard_repeated_letter_keeps_best_within_guess() {
        // EEEEE marks four E's absent and one correct; the summary shows correct
        let keyboard = KeyboardState::from_guesses([&word("EEEEE")], &word("SNAKE"));
        assert_eq!(keyboard.status(b'E'), Some(Correct));
    }

    #[test]
    fn test_keyboard_letters_cover_alphabet() {
        let keyboard = KeyboardState::new();
        let letters: String = keyboard.letters().map(|(c, _)| c).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
