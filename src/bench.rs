//! Benchmark support for the Koa Trie crate.
//!
//! Compiled only with the `benchmarking` feature. Provides deterministic
//! word corpora so the criterion benches measure the trie, not a random
//! number generator.

/// Builds a corpus of `n` distinct words by base-26 encoding the index.
pub fn seed_words(n: usize) -> Vec<String> {
    (0..n)
        .map(|index| {
            let mut word = String::new();
            let mut value = index;
            loop {
                word.push(char::from(b'a' + (value % 26) as u8));
                value /= 26;
                if value == 0 {
                    break;
                }
            }
            word
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_words_distinct() {
        let words = seed_words(1000);
        let mut deduped = words.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), words.len());
    }
}
