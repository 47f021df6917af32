//! Property tests for string exercises.

use super::*;
use proptest::prelude::*;

/// Frequency-map oracle for `is_anagram`.
fn counts(s: &str) -> std::collections::HashMap<char, usize> {
    let mut map = std::collections::HashMap::new();
    for ch in s.chars() {
        *map.entry(ch).or_insert(0) += 1;
    }
    map
}

proptest! {
    /// is_anagram agrees with direct frequency-map equality.
    #[test]
    fn prop_anagram_matches_counts(s in "[a-e]{0,12}", t in "[a-e]{0,12}") {
        prop_assert_eq!(is_anagram(&s, &t), counts(&s) == counts(&t));
    }

    /// is_anagram is symmetric.
    #[test]
    fn prop_anagram_symmetric(s in "[a-e]{0,12}", t in "[a-e]{0,12}") {
        prop_assert_eq!(is_anagram(&s, &t), is_anagram(&t, &s));
    }

    /// Shuffling a string always yields an anagram of it.
    #[test]
    fn prop_shuffle_is_anagram(s in "[a-z]{0,16}", seed in any::<usize>()) {
        let mut chars: Vec<char> = s.chars().collect();
        // Fisher-Yates with an index stream derived from the seed
        let mut state = seed;
        for i in (1..chars.len()).rev() {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            chars.swap(i, state % (i + 1));
        }
        let shuffled: String = chars.into_iter().collect();
        prop_assert!(is_anagram(&s, &shuffled));
    }

    /// Grouping preserves the input as a multiset.
    #[test]
    fn prop_groups_preserve_input(
        words in prop::collection::vec("[a-c]{0,4}", 0..20)
    ) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut flattened: Vec<String> = group_anagrams(&refs).into_iter().flatten().collect();
        let mut input = words.clone();
        flattened.sort();
        input.sort();
        prop_assert_eq!(flattened, input);
    }

    /// Two words share a group iff they are anagrams of each other.
    #[test]
    fn prop_groups_are_anagram_classes(
        words in prop::collection::vec("[a-c]{0,4}", 0..20)
    ) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let groups = group_anagrams(&refs);
        for group in &groups {
            for pair in group.windows(2) {
                prop_assert!(is_anagram(&pair[0], &pair[1]));
            }
        }
        // distinct groups must not be mutually anagrammatic
        for (gi, a) in groups.iter().enumerate() {
            for b in groups.iter().skip(gi + 1) {
                prop_assert!(!is_anagram(&a[0], &b[0]));
            }
        }
    }
}
