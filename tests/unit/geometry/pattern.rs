//! Tests for canonical tile size patterns and the per-length table

#[cfg(test)]
mod tests {
    use fourtiles::FourtileError;
    use fourtiles::geometry::TileGeometry;
    use fourtiles::geometry::pattern::canonical_pattern;
    use fourtiles::io::configuration::GameRules;

    // Tests every admissible length gets in-bounds sizes summing to the length
    #[test]
    fn test_patterns_cover_admissible_range() {
        let rules = GameRules::default();
        let geometry = TileGeometry::new(&rules).expect("default rules are consistent");

        for length in rules.min_word_len()..=rules.max_word_len() {
            let pattern = geometry.pattern_for(length).expect("length is admissible");
            assert_eq!(pattern.len(), rules.tiles_per_word);
            assert_eq!(pattern.iter().sum::<usize>(), length);
            assert!(
                pattern
                    .iter()
                    .all(|size| (rules.min_chars_per_tile..=rules.max_chars_per_tile)
                        .contains(size))
            );
        }
    }

    // Tests the greedy construction fills the first slot before the second
    #[test]
    fn test_greedy_fill_order() {
        assert_eq!(canonical_pattern(8, 4, 2, 4).ok(), Some(vec![2, 2, 2, 2]));
        assert_eq!(canonical_pattern(9, 4, 2, 4).ok(), Some(vec![3, 2, 2, 2]));
        assert_eq!(canonical_pattern(11, 4, 2, 4).ok(), Some(vec![4, 3, 2, 2]));
        assert_eq!(canonical_pattern(16, 4, 2, 4).ok(), Some(vec![4, 4, 4, 4]));
    }

    // Tests lengths no pattern can reach are fatal geometry errors
    #[test]
    fn test_canonical_pattern_unreachable_lengths() {
        assert!(matches!(
            canonical_pattern(7, 4, 2, 4),
            Err(FourtileError::NoTilePattern { length: 7, .. })
        ));
        assert!(matches!(
            canonical_pattern(17, 4, 2, 4),
            Err(FourtileError::NoTilePattern { length: 17, .. })
        ));
    }

    // Tests lookups outside the admissible range are rejected
    #[test]
    fn test_pattern_for_out_of_range() {
        let geometry = TileGeometry::new(&GameRules::default()).expect("default rules are consistent");

        assert!(matches!(
            geometry.pattern_for(7),
            Err(FourtileError::LengthOutOfRange {
                length: 7,
                min: 8,
                max: 16
            })
        ));
        assert!(geometry.pattern_for(17).is_err());
        assert!(geometry.pattern_for(0).is_err());
    }

    // Tests repeated lookups return the same pattern
    #[test]
    fn test_pattern_for_is_stable() {
        let geometry = TileGeometry::new(&GameRules::default()).expect("default rules are consistent");

        let first = geometry.pattern_for(13).map(<[usize]>::to_vec).ok();
        let second = geometry.pattern_for(13).map(<[usize]>::to_vec).ok();
        assert_eq!(first, second);
        assert_eq!(first, Some(vec![4, 4, 3, 2]));
    }

    // Tests admissibility bounds follow the rules
    #[test]
    fn test_admissible_bounds() {
        let geometry = TileGeometry::new(&GameRules::default()).expect("default rules are consistent");

        assert_eq!(geometry.min_length(), 8);
        assert_eq!(geometry.max_length(), 16);
        assert!(!geometry.is_admissible(7));
        assert!(geometry.is_admissible(8));
        assert!(geometry.is_admissible(16));
        assert!(!geometry.is_admissible(17));
    }
}
