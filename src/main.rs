use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use wyrdle::cli::{CliInterface, Cli, KeyboardSource, ReaderSource, parse_cli};
use wyrdle::display::{self, DisplayContext};
use wyrdle::{
    EMBEDDED_WORDBANK, Game, GameState, game_loop, info_log, load_wordbank_from_file,
    load_wordbank_from_str, select_secret_word,
};

fn main() -> ExitCode {
    wyrdle::logging::init();
    let cli = parse_cli();
    let ctx = cli.display_context();

    match run(&cli, &ctx) {
        Ok(state) => {
            info_log!("Game finished: {:?}", state);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_fatal(&mut io::stdout(), &ctx, &format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Shows a fatal error in the warning style, falling back to stderr when
/// `out` cannot be written. Returns whether the styled write succeeded.
fn report_fatal<W: Write>(out: &mut W, ctx: &DisplayContext, message: &str) -> bool {
    match display::show_warning(out, ctx, message) {
        Ok(()) => true,
        Err(write_err) => {
            eprintln!("{message}");
            eprintln!("(could not write to stdout: {write_err})");
            false
        }
    }
}

fn run(cli: &Cli, ctx: &DisplayContext) -> anyhow::Result<GameState> {
    let candidates = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    info_log!("Loaded {} lines from the word list", candidates.len());

    let secret = match cli.seed {
        Some(seed) => select_secret_word(&candidates, &mut StdRng::seed_from_u64(seed))?,
        None => select_secret_word(&candidates, &mut rand::rng())?,
    };
    let mut game = Game::new(secret);

    let stdin = io::stdin();
    let state = if stdin.is_terminal() {
        let mut interface = CliInterface::new(KeyboardSource, io::stdout(), ctx.clone());
        game_loop(&mut game, &mut interface)?
    } else {
        let source = ReaderSource::new(stdin.lock());
        let mut interface = CliInterface::new(source, io::stdout(), ctx.clone());
        game_loop(&mut game, &mut interface)?
    };
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrdle::display::Theme;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn plain() -> DisplayContext {
        DisplayContext {
            width: 40,
            theme: Theme::plain(),
        }
    }

    #[test]
    fn test_report_fatal_writes_warning() {
        let mut out = Vec::new();
        assert!(report_fatal(&mut out, &plain(), "No words of length 5 in the word list"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No words of length 5 in the word list\n"
        );
    }

    #[test]
    fn test_report_fatal_falls_back_when_output_fails() {
        assert!(!report_fatal(&mut BrokenPipe, &plain(), "No words of length 5 in the word list"));
    }
}
