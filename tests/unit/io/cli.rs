//! Tests for command-line parsing and end-to-end runs

#[cfg(test)]
mod tests {
    use crate::common;
    use clap::Parser;
    use fourtiles::FourtileError;
    use fourtiles::io::cli::{Cli, Runner, interrupt_notice};
    use fourtiles::search::SearchSummary;
    use fourtiles::io::configuration::GameRules;
    use std::path::PathBuf;
    use std::sync::atomic::Ordering;

    // Tests parsing with only the required dictionary argument
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "words.txt"]);

        assert_eq!(cli.dictionary, PathBuf::from("words.txt"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.quiet);
    }

    // Tests parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program", "words.txt", "--output", "boards.json", "--seed", "7", "--quiet",
        ]);

        assert_eq!(cli.output, Some(PathBuf::from("boards.json")));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.quiet);
    }

    // Tests short flags
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "words.txt", "-o", "b.json", "-s", "9", "-q"]);

        assert_eq!(cli.output, Some(PathBuf::from("b.json")));
        assert_eq!(cli.seed, Some(9));
        assert!(cli.quiet);
    }

    // Tests the dictionary argument is required
    #[test]
    fn test_cli_requires_dictionary() {
        assert!(Cli::try_parse_from(["program"]).is_err());
    }

    // Tests progress is only drawn when boards go to a file
    #[test]
    fn test_should_show_progress() {
        assert!(!Cli::parse_from(["program", "w.txt"]).should_show_progress());
        assert!(Cli::parse_from(["program", "w.txt", "-o", "b.json"]).should_show_progress());
        assert!(!Cli::parse_from(["program", "w.txt", "-o", "b.json", "-q"]).should_show_progress());
    }

    // Tests a full run writes the single fixture board and closes the stream
    #[test]
    fn test_run_writes_board_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dictionary = dir.path().join("words.txt");
        let output = dir.path().join("boards.json");
        std::fs::write(&dictionary, common::dictionary_text()).expect("write dictionary");

        let cli = Cli::parse_from([
            "program".into(),
            dictionary.into_os_string(),
            "--output".into(),
            output.clone().into_os_string(),
            "--seed".into(),
            "11".into(),
            "--quiet".into(),
        ]);
        let summary = Runner::new(cli).run().expect("run succeeds");

        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.remaining, 0);
        assert!(!summary.interrupted);

        let text = std::fs::read_to_string(&output).expect("read output");
        assert!(text.starts_with("[\n"));
        assert!(text.ends_with(",\n]\n"));
        let repaired = text.replace("},\n]", "}\n]");
        let value: serde_json::Value = serde_json::from_str(&repaired).expect("stream is JSON");
        let mut primary: Vec<String> = common::primary_words();
        primary.sort();
        assert_eq!(value[0]["primaryWords"], serde_json::json!(primary));
    }

    // Tests a raised shutdown flag stops the run before any round
    #[test]
    fn test_run_honors_shutdown_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dictionary = dir.path().join("words.txt");
        let output = dir.path().join("boards.json");
        std::fs::write(&dictionary, common::dictionary_text()).expect("write dictionary");

        let cli = Cli::parse_from([
            "program".into(),
            dictionary.into_os_string(),
            "-o".into(),
            output.clone().into_os_string(),
            "-q".into(),
        ]);
        let runner = Runner::new(cli);
        runner.shutdown_flag().store(true, Ordering::SeqCst);
        let summary = runner.run().expect("run succeeds");

        assert!(summary.interrupted);
        assert_eq!(summary.rounds, 0);
        assert_eq!(summary.remaining, 5);
        assert_eq!(std::fs::read_to_string(&output).expect("read output"), "[\n]\n");
    }

    // Tests the trailing comma advice only appears once a board was written
    #[test]
    fn test_interrupt_notice_mentions_comma_only_after_boards() {
        let empty = SearchSummary {
            interrupted: true,
            ..SearchSummary::default()
        };
        let written = SearchSummary {
            accepted: 3,
            ..empty
        };

        assert!(!interrupt_notice(&empty).contains("comma"));
        assert!(interrupt_notice(&written).contains("after 3 boards"));
        assert!(interrupt_notice(&written).contains("trailing comma"));
    }

    // Tests a missing dictionary is a load error
    #[test]
    fn test_run_missing_dictionary() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.txt");
        let cli = Cli::parse_from(["program".into(), missing.into_os_string()]);

        assert!(matches!(
            Runner::new(cli).run(),
            Err(FourtileError::WordListLoad { .. })
        ));
    }

    // Tests inconsistent rules fail before the dictionary is read
    #[test]
    fn test_run_rejects_invalid_rules() {
        let cli = Cli::parse_from(["program", "does-not-matter.txt"]);
        let rules = GameRules {
            fourtiles_per_game: 0,
            ..GameRules::default()
        };

        assert!(matches!(
            Runner::new(cli).with_rules(rules).run(),
            Err(FourtileError::InvalidParameter { .. })
        ));
    }
}
