//! Pairwise scoring of n-gram profiles.
use crate::profile::NGramProfile;

/// Counts the distinct n-grams present in both profiles (the *cheater factor*).
///
/// Occurrence counts are ignored and the result is symmetric.
/// Runs in `O(min(|a|, |b|))` by probing the larger profile with the keys of the smaller.
pub fn shared_count(a: &NGramProfile, b: &NGramProfile) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.grams().filter(|g| large.contains(g)).count()
}
