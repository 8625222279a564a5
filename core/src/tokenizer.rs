use std::collections::HashMap;

/// Tokenize text into case-folded, whitespace-delimited terms. No stemming,
/// no stopword removal.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Raw term frequencies over the tokens of `text`.
///
/// Both indexing and query processing count through here, so the two sides
/// always see the same tokenization.
pub fn term_counts(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for term in tokenize(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The CAT sat\n on\tthe mat");
        assert_eq!(t, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
    }

    #[test]
    fn counts_repeats() {
        let c = term_counts("cat CAT fish");
        assert_eq!(c["cat"], 2);
        assert_eq!(c["fish"], 1);
    }
}
