use std::path::PathBuf;

use clap::Parser;
use layered_vocab::Language;

#[derive(Debug, Parser)]
#[command(name = "layered-vocab")]
#[command(version = "0.1.0")]
#[command(about = "Write a journal entry and grow your vocabulary index")]
#[command(long_about = None)]
pub struct Args {
    /// Language of the entry: 1 or english, 2 or spanish (prompts if not provided)
    #[arg(long, short)]
    pub language: Option<Language>,

    /// Directory holding the per-language token indexes
    #[arg(long, default_value = "artifacts/token-indexing")]
    pub data_dir: PathBuf,

    /// Words to keep even when they fall inside a rejected pattern
    #[arg(long = "except", value_name = "WORD", num_args = 1..)]
    pub exceptions: Vec<String>,

    /// List the words of the entry instead of counting them
    #[arg(long)]
    pub full: bool,

    /// Do not write to the index
    #[arg(long)]
    pub dry_run: bool,

    /// Show how each word of the entry was kept or rejected
    #[arg(long)]
    pub explain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["layered-vocab"]).unwrap();
        assert_eq!(args.language, None);
        assert_eq!(args.data_dir, PathBuf::from("artifacts/token-indexing"));
        assert!(args.exceptions.is_empty());
        assert!(!args.full);
        assert!(!args.dry_run);
        assert!(!args.explain);
    }

    #[test]
    fn language_by_number_or_name() {
        let args = Args::try_parse_from(["layered-vocab", "--language", "2"]).unwrap();
        assert_eq!(args.language, Some(Language::Spanish));
        let args = Args::try_parse_from(["layered-vocab", "-l", "english"]).unwrap();
        assert_eq!(args.language, Some(Language::English));
        assert!(Args::try_parse_from(["layered-vocab", "--language", "3"]).is_err());
    }

    #[test]
    fn repeated_exceptions() {
        let args = Args::try_parse_from([
            "layered-vocab",
            "--except",
            "Micah",
            "Norwood",
            "--except",
            "+1",
            "--full",
        ])
        .unwrap();
        assert_eq!(args.exceptions, ["Micah", "Norwood", "+1"]);
        assert!(args.full);
    }
}
