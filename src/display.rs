//! Terminal rendering for the board, the keyboard summary and the end screen.
//!
//! Every function takes an explicit [`DisplayContext`] and writer, so the same
//! code paints to stdout or to a buffer in tests.

use crate::feedback::{KeyboardState, LetterStatus, evaluate};
use crate::game_state::GuessHistory;
use crate::word::{WORD_LENGTH, Word};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, ContentStyle, Print, PrintStyledContent},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

pub const DEFAULT_WIDTH: u16 = 40;
pub const PLACEHOLDER: char = '_';
pub const PROMPT: &str = "Guess word: ";

const RULE_CHAR: char = '─';
const ABSENT_GRAY: Color = Color::Rgb {
    r: 0x66,
    g: 0x66,
    b: 0x66,
};

const BOLD: &[Attribute] = &[Attribute::Bold];

/// A letter and the style it is painted with.
pub type Cell = (char, ContentStyle);

fn style(fg: Option<Color>, bg: Option<Color>, attributes: &[Attribute]) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = fg;
    style.background_color = bg;
    for &attribute in attributes {
        style.attributes.set(attribute);
    }
    style
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub correct: ContentStyle,
    pub present: ContentStyle,
    pub absent: ContentStyle,
    pub placeholder: ContentStyle,
    pub untouched: ContentStyle,
    pub warning: ContentStyle,
    pub header: ContentStyle,
    pub win: ContentStyle,
    pub loss: ContentStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            correct: style(Some(Color::White), Some(Color::Green), BOLD),
            present: style(Some(Color::White), Some(Color::Yellow), BOLD),
            absent: style(Some(Color::White), Some(ABSENT_GRAY), &[]),
            placeholder: style(None, None, &[Attribute::Dim]),
            untouched: ContentStyle::new(),
            warning: style(Some(Color::Red), Some(Color::Yellow), &[]),
            header: style(Some(Color::Blue), None, BOLD),
            win: style(Some(Color::White), Some(Color::Green), BOLD),
            loss: style(Some(Color::White), Some(Color::Red), BOLD),
        }
    }
}

impl Theme {
    /// No colors or attributes; output is the bare text.
    #[must_use]
    pub fn plain() -> Self {
        let none = ContentStyle::new();
        Self {
            correct: none,
            present: none,
            absent: none,
            placeholder: none,
            untouched: none,
            warning: none,
            header: none,
            win: none,
            loss: none,
        }
    }

    #[must_use]
    pub fn status(&self, status: Option<LetterStatus>) -> ContentStyle {
        match status {
            Some(LetterStatus::Correct) => self.correct,
            Some(LetterStatus::Present) => self.present,
            Some(LetterStatus::Absent) => self.absent,
            None => self.untouched,
        }
    }
}

/// Output settings threaded through every render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContext {
    pub width: u16,
    pub theme: Theme,
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            theme: Theme::default(),
        }
    }
}

impl DisplayContext {
    fn padding(&self, len: usize) -> usize {
        usize::from(self.width).saturating_sub(len) / 2
    }
}

/// `headline` centered in a horizontal rule `width` columns wide.
#[must_use]
pub fn rule(headline: &str, width: u16) -> String {
    let title = format!(" {headline} ");
    let fill = usize::from(width).saturating_sub(title.chars().count());
    let left = fill / 2;
    let right = fill - left;
    let mut line = String::with_capacity(usize::from(width) * RULE_CHAR.len_utf8());
    line.extend(std::iter::repeat_n(RULE_CHAR, left));
    line.push_str(&title);
    line.extend(std::iter::repeat_n(RULE_CHAR, right));
    line
}

/// Cells for one history slot; an empty slot is a row of placeholders.
#[must_use]
pub fn guess_cells(slot: Option<&Word>, secret: &Word, theme: &Theme) -> Vec<Cell> {
    match slot {
        Some(guess) => guess
            .letters()
            .iter()
            .zip(evaluate(guess, secret))
            .map(|(&letter, status)| (char::from(letter), theme.status(Some(status))))
            .collect(),
        None => vec![(PLACEHOLDER, theme.placeholder); WORD_LENGTH],
    }
}

#[must_use]
pub fn keyboard_cells(keyboard: &KeyboardState, theme: &Theme) -> Vec<Cell> {
    keyboard
        .letters()
        .map(|(letter, status)| (letter, theme.status(status)))
        .collect()
}

fn print_centered<W: Write>(
    out: &mut W,
    ctx: &DisplayContext,
    cells: &[Cell],
    separator: &str,
) -> io::Result<()> {
    let len = cells.len() + separator.chars().count() * cells.len().saturating_sub(1);
    queue!(out, Print(" ".repeat(ctx.padding(len))))?;
    for (i, &(letter, style)) in cells.iter().enumerate() {
        if i > 0 {
            queue!(out, Print(separator))?;
        }
        queue!(out, PrintStyledContent(style.apply(letter)))?;
    }
    queue!(out, Print("\n"))
}

/// Clears the screen and draws the header rule.
pub fn refresh_page<W: Write>(out: &mut W, ctx: &DisplayContext, headline: &str) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        PrintStyledContent(ctx.theme.header.apply(rule(headline, ctx.width))),
        Print("\n\n")
    )
}

/// Draws every history slot, then the keyboard summary.
pub fn show_guesses<W: Write>(
    out: &mut W,
    ctx: &DisplayContext,
    history: &GuessHistory,
    secret: &Word,
) -> io::Result<()> {
    for slot in history.slots() {
        print_centered(out, ctx, &guess_cells(slot, secret, &ctx.theme), "")?;
    }
    let keyboard = KeyboardState::from_guesses(history.guesses(), secret);
    queue!(out, Print("\n"))?;
    print_centered(out, ctx, &keyboard_cells(&keyboard, &ctx.theme), " ")
}

pub fn show_warning<W: Write>(out: &mut W, ctx: &DisplayContext, message: &str) -> io::Result<()> {
    for line in message.lines() {
        queue!(
            out,
            PrintStyledContent(ctx.theme.warning.apply(line)),
            Print("\n")
        )?;
    }
    out.flush()
}

pub fn show_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Print("\n"), Print(PROMPT))?;
    out.flush()
}

/// Redraws the page with the result banner and the final board.
pub fn game_over<W: Write>(
    out: &mut W,
    ctx: &DisplayContext,
    history: &GuessHistory,
    secret: &Word,
    won: bool,
) -> io::Result<()> {
    if won {
        refresh_page(out, ctx, "You Won")?;
        let banner = format!("Correct, the word is {secret}");
        queue!(out, PrintStyledContent(ctx.theme.win.apply(banner)))?;
    } else {
        refresh_page(out, ctx, "Game Over")?;
        let banner = format!("Sorry, the word is {secret}");
        queue!(out, PrintStyledContent(ctx.theme.loss.apply(banner)))?;
    }
    queue!(out, Print("\n\n"))?;
    show_guesses(out, ctx, history, secret)?;
    out.flush()
}
