//! Word n-gram frequency profiles.
use std::io::Read;

use hashbrown::HashMap;

use crate::config::Sensitivity;
use crate::shingling::WordWindows;

/// Frequency mapping from an n-gram to the number of times it occurs in one document.
///
/// A key is `N` whitespace-delimited words joined by single spaces.
/// A document with fewer than `N` (but at least one) words produces
/// exactly one shorter key made of all its words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NGramProfile {
    grams: HashMap<String, usize>,
}

impl NGramProfile {
    /// Builds the profile of a token sequence.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Words in source order.
    /// * `sensitivity` - Number of consecutive words per n-gram.
    pub fn extract<T>(tokens: &[T], sensitivity: Sensitivity) -> Self
    where
        T: AsRef<str>,
    {
        let windows = WordWindows::new(tokens, sensitivity.get());
        let mut grams: HashMap<String, usize> = HashMap::with_capacity(windows.size_hint().0);
        let mut key = String::new();
        for window in windows {
            key.clear();
            for (i, token) in window.iter().enumerate() {
                if i != 0 {
                    key.push(' ');
                }
                key.push_str(token.as_ref());
            }
            // Avoids allocating a new key for repeated grams.
            if let Some(count) = grams.get_mut(key.as_str()) {
                *count += 1;
            } else {
                grams.insert(key.clone(), 1);
            }
        }
        Self { grams }
    }

    /// Tokenizes `text` on whitespace and builds its profile.
    pub fn from_text<S>(text: S, sensitivity: Sensitivity) -> Self
    where
        S: AsRef<str>,
    {
        let tokens: Vec<&str> = text.as_ref().split_whitespace().collect();
        Self::extract(&tokens, sensitivity)
    }

    /// Reads a whole UTF-8 source and builds its profile.
    pub fn from_reader<R>(mut rdr: R, sensitivity: Sensitivity) -> std::io::Result<Self>
    where
        R: Read,
    {
        let mut text = String::new();
        rdr.read_to_string(&mut text)?;
        Ok(Self::from_text(text, sensitivity))
    }

    /// Gets the number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    /// Checks if no n-gram was produced.
    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Checks if `gram` occurs in the document.
    pub fn contains(&self, gram: &str) -> bool {
        self.grams.contains_key(gram)
    }

    /// Gets the number of occurrences of `gram`, or 0.
    pub fn count(&self, gram: &str) -> usize {
        self.grams.get(gram).copied().unwrap_or(0)
    }

    /// Gets the total number of n-gram occurrences, i.e., the number of window positions.
    pub fn num_occurrences(&self) -> usize {
        self.grams.values().sum()
    }

    /// Iterates over n-grams and their counts in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.grams.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Iterates over n-grams in arbitrary order.
    pub fn grams(&self) -> impl Iterator<Item = &str> + '_ {
        self.grams.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};

    fn sens(n: usize) -> Sensitivity {
        Sensitivity::new(n).unwrap()
    }

    #[test]
    fn test_word_trigram() {
        let profile = NGramProfile::from_text("the cat sat on the mat", sens(3));
        assert_eq!(profile.len(), 4);
        assert!(profile.contains("the cat sat"));
        assert!(profile.contains("cat sat on"));
        assert!(profile.contains("sat on the"));
        assert!(profile.contains("on the mat"));
        assert!(!profile.contains("the mat"));
    }

    #[test]
    fn test_repeated_grams() {
        let profile = NGramProfile::from_text("a b a b a", sens(2));
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.count("a b"), 2);
        assert_eq!(profile.count("b a"), 2);
        assert_eq!(profile.count("b b"), 0);
        assert_eq!(profile.num_occurrences(), 4);
    }

    #[test]
    fn test_shorter_than_sensitivity() {
        let profile = NGramProfile::from_text("only three words", sens(15));
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.count("only three words"), 1);
    }

    #[test]
    fn test_empty_document() {
        let profile = NGramProfile::from_text("", sens(2));
        assert!(profile.is_empty());
        let profile = NGramProfile::from_text(" \n\t ", sens(1));
        assert!(profile.is_empty());
    }

    #[test]
    fn test_whitespace_only_tokenization() {
        let profile = NGramProfile::from_text("The  cat,\n\tthe\r\ncat,", sens(1));
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.count("The"), 1);
        assert_eq!(profile.count("the"), 1);
        assert_eq!(profile.count("cat,"), 2);
    }

    #[test]
    fn test_lines_are_joined() {
        let profile = NGramProfile::from_text("end of\nline", sens(3));
        assert_eq!(profile.count("end of line"), 1);
    }

    #[test]
    fn test_from_reader() {
        let profile = NGramProfile::from_reader("x y z".as_bytes(), sens(2)).unwrap();
        assert_eq!(profile.len(), 2);
        assert!(profile.contains("x y"));
        assert!(profile.contains("y z"));
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let bytes: &[u8] = &[0x66, 0xff, 0xfe];
        assert!(NGramProfile::from_reader(bytes, sens(1)).is_err());
    }

    #[test]
    fn test_occurrences_match_window_positions() {
        let mut rng = rand_xoshiro::SplitMix64::seed_from_u64(7);
        let vocab = ["a", "b", "c", "d", "e"];
        for _ in 0..200 {
            let len = rng.gen_range(0..40);
            let n = rng.gen_range(1..8);
            let tokens: Vec<&str> = (0..len)
                .map(|_| vocab[rng.gen_range(0..vocab.len())])
                .collect();
            let profile = NGramProfile::extract(&tokens, sens(n));
            let expected = if len == 0 {
                0
            } else if len < n {
                1
            } else {
                len - n + 1
            };
            assert_eq!(profile.num_occurrences(), expected);
            assert!(profile.iter().all(|(_, c)| c >= 1));
            if len >= n {
                assert!(profile.grams().all(|g| g.split(' ').count() == n));
            }
        }
    }
}
