//! Interactive confirmation before the synthesized command is run.

use std::io::{BufRead, Write};

use drun_common::constants::{CONFIRM_ANSWERS, CONFIRM_PROMPT};
use drun_core::command::RunCommand;
use drun_runtime::engine::Confirm;

use crate::output::{Palette, RESET, YELLOW};

/// Returns whether an answer approves execution (`y` or `yes`, any case).
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    CONFIRM_ANSWERS.contains(&answer.as_str())
}

/// Reads one line from a reader; any read failure counts as a decline.
pub fn read_answer(reader: &mut impl BufRead) -> bool {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&line),
    }
}

/// Writes the prompt, then reads the answer.
///
/// A prompt that cannot be written still waits for the answer.
pub fn ask(out: &mut impl Write, input: &mut impl BufRead, palette: Palette) -> bool {
    let _ = write!(out, "{}{CONFIRM_PROMPT}{}", palette.paint(YELLOW), palette.paint(RESET));
    let _ = out.flush();
    read_answer(input)
}

/// Asks the operator on stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, command: &RunCommand) -> bool {
        let approved = ask(
            &mut std::io::stdout().lock(),
            &mut std::io::stdin().lock(),
            Palette::detect(),
        );
        tracing::debug!(approved, args = command.tokens().len(), "confirmation");
        approved
    }
}
