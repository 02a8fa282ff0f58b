use std::io::{BufRead, Write};

use layered_vocab::{ExceptionSet, VocabularyDelta};
use layered_vocab_engine::builtin_normalizer;
use layered_vocab_store::VocabularyStore;

use crate::args::Args;
use crate::errors::CliResult;
use crate::prompt::{read_entry, select_language, write_explanation, write_results};

/// Run one interactive session: pick a language, read an entry, index its
/// words and report them.
pub fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, output: &mut W) -> CliResult<VocabularyDelta> {
    let language = match args.language {
        Some(language) => language,
        None => select_language(input, output)?,
    };
    let normalizer = builtin_normalizer(language)?;

    let entry = read_entry(input, output)?;
    let exceptions: ExceptionSet = args.exceptions.iter().cloned().collect();
    let evaluation = normalizer.evaluate(&entry, &exceptions)?;
    if args.explain {
        write_explanation(output, &evaluation)?;
    }
    let delta = evaluation.delta;

    if !args.dry_run {
        let mut index = VocabularyStore::new(&args.data_dir).open(language)?;
        let appended = index.append(&delta)?;
        tracing::debug!(words = delta.len(), new = appended.len(), "indexed entry");
    }

    write_results(output, &delta, args.full, args.dry_run)?;
    Ok(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use layered_vocab::Language;
    use std::io::Cursor;
    use std::path::Path;

    fn args(data_dir: &Path, extra: &[&str]) -> Args {
        let mut argv = vec!["layered-vocab", "--data-dir", data_dir.to_str().unwrap()];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn session(args: &Args, input: &str) -> (VocabularyDelta, String) {
        let mut output = Vec::new();
        let delta = run(args, &mut Cursor::new(input), &mut output).unwrap();
        (delta, String::from_utf8(output).unwrap())
    }

    #[test]
    fn indexes_an_entry() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), &[]);
        let (delta, output) = session(&args, "1\ncall me at number\n123-456-7890\ndone\n");

        assert_eq!(delta.tokens(), ["call", "I", "at", "number"]);
        assert!(output.starts_with("select a language\n"));
        assert!(output.ends_with(
            "Here are your results: \nThe index has been updated with 4 distinct word(s).\n"
        ));

        let store = VocabularyStore::new(dir.path());
        assert_eq!(store.load(Language::English).unwrap(), ["call", "I", "at", "number"]);
    }

    #[test]
    fn later_entries_only_add_new_words() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), &["--language", "english"]);
        session(&args, "he him me we\ndone\n");
        let (delta, _) = session(&args, "she they us them I\ndone\n");

        assert_eq!(delta.tokens(), ["she", "they", "we", "I"]);
        let store = VocabularyStore::new(dir.path());
        assert_eq!(
            store.load(Language::English).unwrap(),
            ["he", "I", "we", "she", "they"]
        );
    }

    #[test]
    fn exceptions_and_full_listing() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(
            dir.path(),
            &["-l", "1", "--except", "Micah", "Norwood", "--full"],
        );
        let (_, output) = session(&args, "this is a proper noun: Micah Norwood\ndone\n");
        assert!(output.ends_with(
            "Here are your results: \nthis\nbe\nproper\nnoun\nMicah\nNorwood\n\n"
        ));
    }

    #[test]
    fn explain_shows_decisions_and_matches() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), &["--language", "1", "--explain", "--dry-run"]);
        let (delta, output) = session(&args, "call me at number 123-456-7890\ndone\n");

        assert_eq!(delta.tokens(), ["call", "I", "at", "number"]);
        assert!(output.contains("call  me  at  number  123-456-7890\n"));
        assert!(output.contains("╰╯accepted I\n"));
        assert!(output.contains("╰──────────╯rejected pattern\n"));
        assert!(output.contains("╰──────────╯US_CONVENTIONAL\n"));
        assert!(output.ends_with("would have been updated with 4 distinct word(s).\n"));
    }

    #[test]
    fn dry_run_leaves_the_index_alone() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), &["--language", "2", "--dry-run"]);
        let (delta, output) = session(&args, "vivo en Madrid\ndone\n");

        assert_eq!(delta.tokens(), ["vivir", "en", "Madrid"]);
        assert!(output.ends_with("would have been updated with 3 distinct word(s).\n"));
        assert!(!VocabularyStore::new(dir.path())
            .path_for(Language::Spanish)
            .exists());
    }
}
