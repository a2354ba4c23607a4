//! Line-mode front end
//!
//! Same quiz without a full-screen terminal: each input line is an answer
//! unless it starts with `:`.

use std::io::{BufRead, Write};

use crate::quiz::{QuizController, SubmitOutcome};
use crate::store::ProgressStore;
use crate::Result;

const HELP: &str = "Commands: :give (show answer)  :back (previous)  :reset  :quit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer(String),
    Surrender,
    Back,
    Reset,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":give" | ":g" => Command::Surrender,
            ":back" | ":b" => Command::Back,
            ":reset" => Command::Reset,
            ":help" | ":h" => Command::Help,
            ":quit" | ":q" => Command::Quit,
            _ => Command::Answer(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
        }
    }
}

/// Run the quiz over `input`/`output` until `:quit` or end of input
pub fn run_plain<S, R, W>(quiz: &mut QuizController<S>, input: &mut R, output: &mut W) -> Result<()>
where
    S: ProgressStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", HELP)?;

    loop {
        show_question(quiz, output)?;

        let Some(line) = read_line(input)? else {
            break;
        };

        match Command::parse(&line) {
            Command::Answer(answer) => {
                if quiz.is_complete() {
                    writeln!(output, "The quiz is complete. Use :reset to start over.")?;
                    continue;
                }
                match quiz.submit_answer(answer) {
                    SubmitOutcome::Correct => writeln!(output, "Correct!")?,
                    SubmitOutcome::AcceptedAfterReveal => writeln!(output, "Moving on.")?,
                    SubmitOutcome::WrongAnswer | SubmitOutcome::Ignored => {}
                }
            }
            Command::Surrender => {
                quiz.surrender();
            }
            Command::Back => {
                quiz.go_back();
            }
            Command::Reset => {
                write!(output, "Restart all questions from the beginning? [y/N] ")?;
                output.flush()?;
                let reply = read_line(input)?.unwrap_or_default();
                if quiz.reset(|| matches!(reply.trim(), "y" | "Y" | "yes")) {
                    writeln!(output, "Progress reset.")?;
                }
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    writeln!(output, "Score: {}", quiz.score().summary())?;
    Ok(())
}

fn show_question<S: ProgressStore, W: Write>(quiz: &QuizController<S>, output: &mut W) -> Result<()> {
    if let Some(message) = quiz.error_message() {
        writeln!(output, "{}", message)?;
    }
    if let Some(answer) = quiz.revealed_answer() {
        writeln!(output, "Answer: {}", answer)?;
    }

    match quiz.current_question() {
        Some(question) => {
            let score = quiz.score();
            write!(
                output,
                "[{}/{}  correct {}  surrendered {}] {} > ",
                quiz.index() + 1,
                quiz.len(),
                score.correct,
                score.surrendered,
                question.prompt
            )?;
        }
        None => {
            write!(
                output,
                "Quiz complete! Final score: {}. > ",
                quiz.score().summary()
            )?;
        }
    }
    output.flush()?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
