//! String exercises: character-frequency comparison and anagram grouping.
//!
//! Both functions operate on Unicode scalar values (`char`), not bytes, so
//! multi-byte input behaves the way a character-by-character reading of the
//! problem expects.
//!
//! # Examples
//!
//! ```
//! use practicar::text::is_anagram;
//!
//! assert!(is_anagram("anagram", "nagaram"));
//! assert!(!is_anagram("rat", "car"));
//! ```

use std::collections::HashMap;

/// Returns true iff `t` is a permutation of the characters of `s`.
///
/// Symmetric in its arguments. A length mismatch (in characters) rules an
/// anagram out before any counting. Implemented as a single balance map:
/// characters of `s` increment, characters of `t` decrement, and the two
/// strings are anagrams iff every balance ends at zero.
///
/// # Examples
///
/// ```
/// use practicar::text::is_anagram;
///
/// assert!(is_anagram("", ""));
/// assert!(!is_anagram("aacc", "ccac"));
/// ```
#[must_use]
pub fn is_anagram(s: &str, t: &str) -> bool {
    if s.chars().count() != t.chars().count() {
        return false;
    }

    let mut balance: HashMap<char, i64> = HashMap::new();
    for ch in s.chars() {
        *balance.entry(ch).or_insert(0) += 1;
    }
    for ch in t.chars() {
        *balance.entry(ch).or_insert(0) -= 1;
    }

    balance.values().all(|&count| count == 0)
}

/// Partitions `words` into maximal groups of mutual anagrams.
///
/// Each word is keyed by its sorted character sequence; words sharing a key
/// land in the same group. Group order and order within a group are
/// unspecified — callers that need a canonical form should sort both levels.
/// The union of the returned groups equals the input as a multiset.
///
/// # Examples
///
/// ```
/// use practicar::text::group_anagrams;
///
/// let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(groups.len(), 3);
/// let total: usize = groups.iter().map(Vec::len).sum();
/// assert_eq!(total, 6);
/// ```
#[must_use]
pub fn group_anagrams(words: &[&str]) -> Vec<Vec<String>> {
    let mut groups: HashMap<Vec<char>, Vec<String>> = HashMap::new();
    for &word in words {
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();
        groups.entry(key).or_default().push(word.to_string());
    }
    groups.into_values().collect()
}


#[cfg(test)]
mod tests_proptests;
