use super::feedback::{render_summary, score_line};
use crate::game::{
    seed_from_env, GameError, GameSession, GuessOutcome, StatisticsStore, StoreError,
};
use crate::model::{Secret, SECRET_LEN};
use log::debug;
use std::io::{BufRead, Write};

/// Top-level menu loop. Generic over reader/writer so tests can script a
/// whole sitting; `main` passes locked stdin/stdout.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &StatisticsStore,
) -> Result<(), GameError> {
    let rule = "-".repeat(70);
    writeln!(output, "Hi there!\n{}", rule)?;
    writeln!(output, "Welcome to Bulls and Cows game!")?;
    writeln!(output, "{}\n", rule)?;

    loop {
        writeln!(output, "Menu: 1. Play game | 2. View statistics | 3. Exit")?;
        write!(output, "Choose (1-3): ")?;
        output.flush()?;

        let choice = match read_line(input)? {
            Some(line) => line,
            None => break,
        };

        match choice.trim() {
            "1" => play_round(input, output, store, Secret::new(seed_from_env()))?,
            "2" => show_statistics(output, store)?,
            "3" => {
                writeln!(output, "Thanks for playing! Goodbye!")?;
                break;
            }
            other => {
                debug!(target: "menu", "invalid choice {:?}", other);
                writeln!(output, "Invalid choice\n")?;
            }
        }
    }
    Ok(())
}

/// One round against the given secret. Returns once the round is won or
/// the input stream ends; an unfinished round persists nothing.
pub fn play_round<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &StatisticsStore,
    secret: Secret,
) -> Result<(), GameError> {
    let mut session = GameSession::new(store, secret);

    loop {
        write!(output, "Please enter a {} digit number: ", SECRET_LEN)?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(()),
        };

        match session.guess(line.trim()) {
            Ok(GuessOutcome::Continue(score)) => {
                writeln!(output, "{}", score_line(&score))?;
            }
            Ok(GuessOutcome::Won(record)) => {
                writeln!(
                    output,
                    "\nCorrect! You win\nGuesses: {} | Time: {}s",
                    record.guesses, record.time
                )?;
                writeln!(output, "Result saved!\n")?;
                return Ok(());
            }
            Err(GameError::Validation(e)) => {
                writeln!(output, "Wrong input - {}", e)?;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn show_statistics<W: Write>(
    output: &mut W,
    store: &StatisticsStore,
) -> Result<(), GameError> {
    match store.summarize() {
        Ok(Some(summary)) => write!(output, "{}", render_summary(&summary))?,
        Ok(None) => writeln!(
            output,
            "\nNo statistics available yet. Play some games first!\n"
        )?,
        Err(StoreError::Corrupted) => {
            writeln!(output, "Error: Statistics file is corrupted.\n")?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
