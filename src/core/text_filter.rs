//! Text functions - first stage of the sigil pipeline.
//!
//! A text function turns the raw intent characters into the ordered
//! sequence that the compositor walks. Functions never invent characters
//! and always keep the relative order of what they retain.

use std::fmt;

use enum_dispatch::enum_dispatch;
use indexmap::IndexSet;

/// Transforms an ordered character sequence.
#[enum_dispatch]
pub trait TextFunction {
    fn process(&self, chars: &[char]) -> Vec<char>;
}

/// Passes the sequence through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl TextFunction for Identity {
    fn process(&self, chars: &[char]) -> Vec<char> {
        chars.to_vec()
    }
}

/// Keeps only the first occurrence of every code point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemoveDuplicates;

impl TextFunction for RemoveDuplicates {
    fn process(&self, chars: &[char]) -> Vec<char> {
        // IndexSet ignores re-inserts, so insertion order == first occurrence order
        chars.iter().copied().collect::<IndexSet<char>>().into_iter().collect()
    }
}

/// All available text functions.
#[enum_dispatch(TextFunction)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFilter {
    Identity,
    RemoveDuplicates,
}

impl TextFilter {
    /// One instance of every variant, in UI order.
    pub fn all() -> Vec<TextFilter> {
        vec![RemoveDuplicates.into(), Identity.into()]
    }
}

impl Default for TextFilter {
    fn default() -> Self {
        Identity.into()
    }
}

impl fmt::Display for TextFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFilter::Identity(_) => f.write_str("Identity"),
            TextFilter::RemoveDuplicates(_) => f.write_str("Remove duplicates"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identity_returns_input() {
        for s in ["", "a", "hello world", "AAB", "ünïcødé ✓✓"] {
            assert_eq!(Identity.process(&chars(s)), chars(s));
        }
    }

    #[test]
    fn test_remove_duplicates_keeps_first_occurrence() {
        let out = RemoveDuplicates.process(&chars("abracadabra"));
        assert_eq!(out, chars("abrcd"));
    }

    #[test]
    fn test_remove_duplicates_each_char_once() {
        let input = chars("the quick brown fox jumps over the lazy dog");
        let out = RemoveDuplicates.process(&input);

        assert!(out.len() <= input.len());
        for c in &out {
            assert_eq!(out.iter().filter(|x| *x == c).count(), 1);
            assert!(input.contains(c));
        }
        for c in &input {
            assert!(out.contains(c));
        }
    }

    #[test]
    fn test_remove_duplicates_is_case_sensitive() {
        assert_eq!(RemoveDuplicates.process(&chars("aAaA")), chars("aA"));
    }

    #[test]
    fn test_filter_dispatch() {
        let filter: TextFilter = RemoveDuplicates.into();
        assert_eq!(filter.process(&chars("AAB")), chars("AB"));
        assert_eq!(TextFilter::default().process(&chars("AAB")), chars("AAB"));
        assert_eq!(filter.to_string(), "Remove duplicates");
        assert_eq!(TextFilter::all().len(), 2);
    }
}
