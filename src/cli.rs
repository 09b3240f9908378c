use crate::display::{self, DEFAULT_WIDTH, DisplayContext, Theme};
use crate::game_state::{Game, GameInterface, MAX_ATTEMPTS, UserAction};
use crate::word::{InvalidGuess, Word};
use crate::{debug_log, info_log};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Guess the hidden five-letter word in six tries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Display width used to center the board
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u16,

    /// Seed for a reproducible secret word
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print without colors or text styles
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    #[must_use]
    pub fn display_context(&self) -> DisplayContext {
        DisplayContext {
            width: self.width,
            theme: if self.no_color {
                Theme::plain()
            } else {
                Theme::default()
            },
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Checks a line of input against the earlier guesses.
///
/// The first failing rule wins: repeat, then length, then alphabet.
/// Whitespace counts toward the length.
pub fn validate_guess(input: &str, previous: &[Word]) -> Result<Word, InvalidGuess> {
    let guess = input.to_uppercase();
    if previous.iter().any(|word| word.as_str() == guess) {
        return Err(InvalidGuess::AlreadyGuessed(guess));
    }
    Word::parse(&guess)
}

/// Where lines of player input come from.
pub trait LineSource {
    /// `None` when the player interrupted or input ended.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Lines from any buffered reader; end of input counts as an interrupt.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Reads key events from the terminal in raw mode, echoing as it goes.
///
/// Ctrl-C, Ctrl-D and Esc interrupt the read.
#[derive(Debug, Default)]
pub struct KeyboardSource;

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            debug_log!("Failed to leave raw mode: {}", e);
        }
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c' | 'd') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl LineSource for KeyboardSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let _raw = RawModeGuard::enable()?;
        let mut stdout = io::stdout();
        let mut line = String::new();
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_interrupt(&key) {
                info_log!("KeyboardSource - interrupted by {:?}", key.code);
                execute!(stdout, Print("\r\n"))?;
                return Ok(None);
            }
            match key.code {
                KeyCode::Enter => {
                    execute!(stdout, Print("\r\n"))?;
                    return Ok(Some(line));
                }
                KeyCode::Backspace => {
                    if line.pop().is_some() {
                        execute!(stdout, Print("\u{8} \u{8}"))?;
                    }
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    line.push(c);
                    execute!(stdout, Print(c))?;
                }
                _ => {
                    debug_log!("KeyboardSource - ignoring key {:?}", key.code);
                }
            }
        }
    }
}

/// Prompts until a valid guess arrives; rejected input is explained and
/// prompted for again.
pub fn read_guess<S, W>(
    source: &mut S,
    out: &mut W,
    ctx: &DisplayContext,
    previous: &[Word],
) -> io::Result<UserAction>
where
    S: LineSource + ?Sized,
    W: Write,
{
    loop {
        display::show_prompt(out)?;
        let Some(input) = source.next_line()? else {
            return Ok(UserAction::Interrupt);
        };
        match validate_guess(&input, previous) {
            Ok(guess) => return Ok(UserAction::Guess(guess)),
            Err(reason) => {
                debug_log!("read_guess() - rejected '{}': {:?}", input, reason);
                display::show_warning(out, ctx, &reason.to_string())?;
            }
        }
    }
}

/// Terminal implementation of [`GameInterface`].
pub struct CliInterface<S, W> {
    source: S,
    out: W,
    ctx: DisplayContext,
}

impl<S: LineSource, W: Write> CliInterface<S, W> {
    pub fn new(source: S, out: W, ctx: DisplayContext) -> Self {
        Self { source, out, ctx }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<S: LineSource, W: Write> GameInterface for CliInterface<S, W> {
    fn show_round(&mut self, round: usize, game: &Game) -> io::Result<()> {
        let headline = format!("Guess {}/{MAX_ATTEMPTS}", round + 1);
        display::refresh_page(&mut self.out, &self.ctx, &headline)?;
        display::show_guesses(&mut self.out, &self.ctx, game.history(), game.secret())
    }

    fn read_guess(&mut self, previous: &[Word]) -> io::Result<UserAction> {
        read_guess(&mut self.source, &mut self.out, &self.ctx, previous)
    }

    fn show_game_over(&mut self, game: &Game) -> io::Result<()> {
        display::game_over(
            &mut self.out,
            &self.ctx,
            game.history(),
            game.secret(),
            game.state().is_won(),
        )
    }
}
