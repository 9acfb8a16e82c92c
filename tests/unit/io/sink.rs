//! Tests for the JSON board stream framing and record layout

#[cfg(test)]
mod tests {
    use crate::common;
    use fourtiles::io::sink::{BoardRecord, BoardSink, JsonStreamSink};
    use fourtiles::search::Board;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn fixture_board() -> Board {
        Board::new(
            common::tiles().into_iter().map(str::to_owned).collect(),
            common::primary_words().into_iter().collect(),
            common::other_words().into_iter().collect(),
        )
    }

    // Tests the record keeps every tile and sorts both word lists
    #[test]
    fn test_record_fields() {
        let board = fixture_board();
        let mut rng = StdRng::seed_from_u64(1);
        let record = BoardRecord::new(&board, &mut rng);

        let tiles: BTreeSet<&str> = record.tiles.iter().copied().collect();
        assert_eq!(tiles, common::tiles().into_iter().collect());
        assert!(record.primary_words.is_sorted());
        assert!(record.other_words.is_sorted());
        assert_eq!(record.primary_words.len(), 5);
    }

    // Tests records use camelCase keys
    #[test]
    fn test_record_keys() {
        let board = fixture_board();
        let mut rng = StdRng::seed_from_u64(2);
        let value = serde_json::to_value(BoardRecord::new(&board, &mut rng)).expect("record encodes");

        assert!(value.get("tiles").is_some());
        assert!(value.get("primaryWords").is_some());
        assert!(value.get("otherWords").is_some());
    }

    // Tests an empty stream is just the delimiters
    #[test]
    fn test_open_close_empty() {
        let sink = JsonStreamSink::open(Vec::new(), StdRng::seed_from_u64(3)).expect("open");
        let bytes = sink.close().expect("close");

        assert_eq!(String::from_utf8(bytes).expect("utf8"), "[\n]\n");
    }

    // Tests every record is followed by a separator, including the last
    #[test]
    fn test_submit_leaves_trailing_separator() {
        let board = fixture_board();
        let sink = JsonStreamSink::open(Vec::new(), StdRng::seed_from_u64(4)).expect("open");

        sink.submit(&board).expect("submit");
        sink.submit(&board).expect("submit");
        assert_eq!(sink.accepted(), 2);

        let text = String::from_utf8(sink.close().expect("close")).expect("utf8");
        assert!(text.starts_with("[\n{"));
        assert!(text.ends_with("},\n]\n"));
        assert_eq!(text.lines().count(), 4);

        let repaired = text.replace("},\n]", "}\n]");
        let value: serde_json::Value = serde_json::from_str(&repaired).expect("repaired stream is JSON");
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    // Tests concurrent submissions never interleave within a line
    #[test]
    fn test_concurrent_submissions_stay_whole() {
        let board = fixture_board();
        let sink = JsonStreamSink::open(Vec::new(), StdRng::seed_from_u64(5)).expect("open");

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..10 {
                        sink.submit(&board).expect("submit");
                    }
                });
            }
        });

        let text = String::from_utf8(sink.close().expect("close")).expect("utf8");
        let records: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with('{'))
            .collect();
        assert_eq!(records.len(), 40);
        for line in records {
            let record = line.strip_suffix(',').expect("record ends with separator");
            let value: serde_json::Value = serde_json::from_str(record).expect("record is whole");
            assert_eq!(
                value["primaryWords"].as_array().map(Vec::len),
                Some(5)
            );
        }
    }
}
