// Library interface for wyrdle
// This allows integration tests to access internal modules

pub mod cli;
pub mod display;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use feedback::{KeyboardState, LetterStatus, evaluate};
pub use game_state::{Game, GameInterface, GameState, MAX_ATTEMPTS, UserAction, game_loop};
pub use word::{InvalidGuess, WORD_LENGTH, Word};
pub use wordbank::{
    EMBEDDED_WORDBANK, WordSourceError, load_wordbank_from_file, load_wordbank_from_str,
    select_secret_word,
};
