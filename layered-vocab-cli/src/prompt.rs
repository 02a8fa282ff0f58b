//! Terminal prompts, generic over their input and output so they can run
//! against in-memory buffers.

use std::io::{BufRead, Write};

use layered_vocab::{Evaluation, EvaluationDisplay, Language, VocabularyDelta};

use crate::errors::{CliError, CliResult};

/// Number of times the language menu is shown before giving up.
pub const LANGUAGE_ATTEMPTS: usize = 10;

/// Lines read between reminders of how to finish an entry.
pub const REMINDER_INTERVAL: usize = 10;

const LANGUAGE_MENU: &str = "select a language\nenglish: 1\nspanish: 2\n>>> ";
const CHECKIN: &str = "enter \"done\" whenever you're done.\n";
const LINE_PROMPT: &str = ">>> ";
const DONE: &str = "done";

/// Read one line without its line ending, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Show the language menu until a valid selection is made.
pub fn select_language<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<Language> {
    for attempt in 1..=LANGUAGE_ATTEMPTS {
        write!(output, "{}", LANGUAGE_MENU)?;
        output.flush()?;

        let answer = read_line(input)?.ok_or(CliError::InputClosed)?;
        match answer.parse::<Language>() {
            Ok(language) => return Ok(language),
            Err(err) => tracing::debug!(attempt, %err, "rejected language selection"),
        }
    }
    Err(CliError::RetriesExceeded {
        attempts: LANGUAGE_ATTEMPTS,
    })
}

/// Collect lines until `done` or end of input, joined with single spaces.
pub fn read_entry<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<String> {
    writeln!(output, "tell an interesting story. {}", CHECKIN)?;

    let mut lines = Vec::new();
    for iteration in 0.. {
        write!(output, "{}", LINE_PROMPT)?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) if line != DONE => line,
            _ => break,
        };
        lines.push(line);

        if iteration > 0 && iteration % REMINDER_INTERVAL == 0 {
            writeln!(output, "remember, {}", CHECKIN)?;
        }
    }
    Ok(lines.join(" "))
}

/// Report the words of one entry, either as a count or one per line.
pub fn write_results<W: Write>(
    output: &mut W,
    delta: &VocabularyDelta,
    full: bool,
    dry_run: bool,
) -> CliResult<()> {
    writeln!(output, "Here are your results: ")?;
    if full {
        for token in delta.iter() {
            writeln!(output, "{}", token)?;
        }
        writeln!(output)?;
    } else if dry_run {
        writeln!(
            output,
            "The index would have been updated with {} distinct word(s).",
            delta.len()
        )?;
    } else {
        writeln!(
            output,
            "The index has been updated with {} distinct word(s).",
            delta.len()
        )?;
    }
    Ok(())
}

/// Show every token of the entry with what happened to it, and the pattern
/// matches below.
pub fn write_explanation<W: Write>(output: &mut W, evaluation: &Evaluation) -> CliResult<()> {
    let display = EvaluationDisplay::new(evaluation)
        .with_decisions()
        .with_matches();
    writeln!(output, "{}", display)?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn written(output: Vec<u8>) -> String {
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn selects_language_after_bad_answers() {
        let mut input = Cursor::new("french\n0\n2\n");
        let mut output = Vec::new();
        let language = select_language(&mut input, &mut output).unwrap();
        assert_eq!(language, Language::Spanish);
        assert_eq!(written(output), LANGUAGE_MENU.repeat(3));
    }

    #[test]
    fn language_prompt_is_bounded() {
        let mut input = Cursor::new("x\n".repeat(LANGUAGE_ATTEMPTS + 5));
        let mut output = Vec::new();
        let err = select_language(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, CliError::RetriesExceeded { attempts: 10 }));
        assert_eq!(written(output), LANGUAGE_MENU.repeat(LANGUAGE_ATTEMPTS));
    }

    #[test]
    fn language_prompt_needs_input() {
        let mut output = Vec::<u8>::new();
        let err = select_language(&mut Cursor::new(""), &mut output).unwrap_err();
        assert!(matches!(err, CliError::InputClosed));
    }

    #[test]
    fn entry_lines_are_joined_until_done() {
        let mut input = Cursor::new("I walked the dog.\r\nThen I slept.\ndone\nignored\n");
        let mut output = Vec::new();
        let entry = read_entry(&mut input, &mut output).unwrap();
        assert_eq!(entry, "I walked the dog. Then I slept.");
        assert_eq!(
            written(output),
            "tell an interesting story. enter \"done\" whenever you're done.\n\n>>> >>> >>> "
        );
    }

    #[test]
    fn entry_ends_with_input() {
        let mut input = Cursor::new("no terminator");
        let entry = read_entry(&mut input, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(entry, "no terminator");
    }

    #[test]
    fn reminds_every_ten_lines() {
        let mut input = Cursor::new(format!("{}done\n", "word\n".repeat(21)));
        let mut output = Vec::new();
        read_entry(&mut input, &mut output).unwrap();
        assert_eq!(written(output).matches("remember, ").count(), 2);
    }

    #[test]
    fn results_count_or_list() {
        let delta: VocabularyDelta = ["call", "I", "at", "number"].into_iter().collect();

        let mut output = Vec::new();
        write_results(&mut output, &delta, false, false).unwrap();
        assert_eq!(
            written(output),
            "Here are your results: \nThe index has been updated with 4 distinct word(s).\n"
        );

        let mut output = Vec::new();
        write_results(&mut output, &delta, true, false).unwrap();
        assert_eq!(written(output), "Here are your results: \ncall\nI\nat\nnumber\n\n");

        let mut output = Vec::new();
        write_results(&mut output, &delta, false, true).unwrap();
        assert_eq!(
            written(output),
            "Here are your results: \nThe index would have been updated with 4 distinct word(s).\n"
        );
    }
}
