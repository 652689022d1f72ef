use std::io::{BufRead, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::application::{Answer, AnswerQuestionUseCase};
use crate::domain::DomainError;

const PROMPT: &str = "\nEnter your question: ";

/// `true` for the words that end the session, ignoring case and surrounding
/// whitespace.
pub fn is_exit_command(line: &str) -> bool {
    let word = line.trim();
    word.eq_ignore_ascii_case("exit") || word.eq_ignore_ascii_case("quit")
}

/// Render one turn the way the terminal shows it.
pub fn format_answer(answer: &Answer) -> String {
    format!(
        "\n[Processed]: {}\n[Tokens]: {:?}\n\n[LLM Answer]:\n{}\n",
        answer.normalized().normalized_text(),
        answer.normalized().tokens(),
        answer.response()
    )
}

/// Interactive read-answer-print loop. One question is fully answered before
/// the next line is read.
pub struct Repl {
    use_case: AnswerQuestionUseCase,
    show_progress: bool,
}

impl Repl {
    pub fn new(use_case: AnswerQuestionUseCase) -> Self {
        Self {
            use_case,
            show_progress: false,
        }
    }

    /// Show a spinner on stderr while a request is in flight.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn print_welcome<W: Write>(&self, output: &mut W) -> Result<(), DomainError> {
        let config = self.use_case.client().config();
        writeln!(output, "--- NLP Question-Answering System (CLI) ---")?;
        writeln!(output, "Model: {} via {}", config.model(), config.endpoint())?;
        writeln!(output, "Type 'exit' or 'quit' to stop.")?;
        if !config.has_credential() {
            writeln!(output)?;
            writeln!(output, "Warning: GITHUB_TOKEN not found in environment variables!")?;
            writeln!(
                output,
                "Add it to your .env file, export it, or pass --token."
            )?;
        }
        Ok(())
    }

    /// Run until an exit command or end of input. Returns the number of
    /// questions answered.
    pub async fn run<R, W>(&self, mut input: R, output: &mut W) -> Result<usize, DomainError>
    where
        R: BufRead,
        W: Write,
    {
        self.print_welcome(output)?;

        let mut turns = 0;
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                info!("End of input after {turns} questions");
                break;
            }

            if is_exit_command(&line) {
                writeln!(output, "Exiting...")?;
                break;
            }

            let question = line.trim_end_matches(['\r', '\n']);
            if question.trim().is_empty() {
                debug!("Skipping blank input");
                continue;
            }

            let answer = self.ask(question).await;
            write!(output, "{}", format_answer(&answer))?;
            output.flush()?;
            turns += 1;
        }

        Ok(turns)
    }

    async fn ask(&self, question: &str) -> Answer {
        if !self.show_progress {
            return self.use_case.execute(question).await;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Querying GitHub Models API...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let answer = self.use_case.execute(question).await;
        spinner.finish_and_clear();
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_words_are_case_insensitive() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("QUIT\n"));
        assert!(is_exit_command("  Exit  "));
        assert!(!is_exit_command("exit now"));
        assert!(!is_exit_command(""));
    }
}
