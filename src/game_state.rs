use crate::info_log;
use crate::word::Word;
use std::io;

pub const MAX_ATTEMPTS: usize = 6;

/// Guesses recorded so far, viewed as `MAX_ATTEMPTS` slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    guesses: Vec<Word>,
}

impl GuessHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.guesses.len() >= MAX_ATTEMPTS
    }

    /// Every slot in order; `None` marks one not used yet.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Word>> {
        (0..MAX_ATTEMPTS).map(|i| self.guesses.get(i))
    }

    fn record(&mut self, guess: Word) {
        debug_assert!(!self.is_full());
        self.guesses.push(guess);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for guess number `round + 1`.
    InProgress { round: usize },
    Won { attempts: usize },
    Lost,
    /// Input was interrupted before the game finished.
    Abandoned,
}

impl GameState {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }

    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(Word),
    Interrupt,
}

/// The terminal side of a game: drawing rounds, reading guesses, the end screen.
pub trait GameInterface {
    fn show_round(&mut self, round: usize, game: &Game) -> io::Result<()>;
    /// Blocks until a valid guess not in `previous`, or an interrupt.
    fn read_guess(&mut self, previous: &[Word]) -> io::Result<UserAction>;
    fn show_game_over(&mut self, game: &Game) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    history: GuessHistory,
    state: GameState,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            history: GuessHistory::new(),
            state: GameState::InProgress { round: 0 },
        }
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Records `guess` and advances the state. Ignored once the game is over.
    pub fn submit(&mut self, guess: Word) -> GameState {
        let GameState::InProgress { round } = self.state else {
            return self.state;
        };
        let won = guess == self.secret;
        self.history.record(guess);
        self.state = if won {
            GameState::Won {
                attempts: round + 1,
            }
        } else if round + 1 >= MAX_ATTEMPTS {
            GameState::Lost
        } else {
            GameState::InProgress { round: round + 1 }
        };
        self.state
    }

    /// Ends an unfinished game without a win.
    pub fn abandon(&mut self) -> GameState {
        if !self.state.is_over() {
            self.state = GameState::Abandoned;
        }
        self.state
    }
}

/// Plays `game` to the end and shows the end screen.
pub fn game_loop<I: GameInterface + ?Sized>(
    game: &mut Game,
    interface: &mut I,
) -> io::Result<GameState> {
    while let GameState::InProgress { round } = game.state() {
        interface.show_round(round, game)?;
        let state = match interface.read_guess(game.history().guesses())? {
            UserAction::Guess(guess) => game.submit(guess),
            UserAction::Interrupt => {
                info_log!("game_loop() - input interrupted in round {}", round + 1);
                game.abandon()
            }
        };
        info_log!("game_loop() - round {} -> {:?}", round + 1, state);
    }
    interface.show_game_over(game)?;
    Ok(game.state())
}
