use crate::index::{DocId, Index};
use crate::tokenizer::term_counts;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Maximum number of ranked hits returned per query.
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct Hit {
    pub doc_id: DocId,
    pub label: String,
    pub score: f64,
}

/// Smoothed inverse document frequency, log10((N + 1) / (df + 0.5)).
/// Finite for every reachable input, including df = 0 and N = 0.
fn idf(num_docs: u32, df: u32) -> f64 {
    ((f64::from(num_docs) + 1.0) / (f64::from(df) + 0.5)).log10()
}

/// Logistic rescaling applied to final scores. Monotonic, so it reshapes
/// the displayed values without changing the ranking.
fn squash(score: f64) -> f64 {
    2.0 / (1.0 + (-10.0 * score).exp()) - 1.0
}

/// Rank the documents of `index` against `text` by cosine similarity of
/// log-normalized tf-idf vectors.
///
/// Returns at most [`MAX_RESULTS`] hits, best first, ties broken by
/// ascending DocId. An empty query or an empty corpus yields no hits.
pub fn search(index: &Index, text: &str) -> Vec<Hit> {
    let n = index.num_docs();

    // Query-side weights. A term absent from the corpus still contributes
    // to the query norm, it just never matches a posting.
    let mut weights: HashMap<String, (f64, f64)> = HashMap::new();
    let mut query_norm_sq = 0.0f64;
    for (term, qtf) in term_counts(text) {
        let term_idf = idf(n, index.doc_freq(&term));
        let weight = (1.0 + f64::from(qtf).log10()) * term_idf;
        query_norm_sq += weight * weight;
        weights.insert(term, (weight, term_idf));
    }
    let query_norm = query_norm_sq.sqrt();

    // Dot products over the postings of matched terms, reusing the per-term
    // idf computed above for the document side.
    let mut scores: HashMap<DocId, f64> = HashMap::new();
    for (term, &(weight, term_idf)) in &weights {
        for posting in index.postings(term) {
            let doc_weight = (1.0 + f64::from(posting.tf).log10()) * term_idf;
            *scores.entry(posting.doc_id).or_insert(0.0) += weight * doc_weight;
        }
    }

    // Cosine normalization with zero-norm guards, then the display squash.
    let mut ranked: Vec<(DocId, f64)> = scores
        .into_iter()
        .map(|(doc_id, mut score)| {
            let doc_norm = index.norm(doc_id);
            if doc_norm > 0.0 && query_norm > 0.0 {
                score /= doc_norm * query_norm;
            }
            (doc_id, squash(score))
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    ranked
        .into_iter()
        .take(MAX_RESULTS)
        .map(|(doc_id, score)| Hit {
            doc_id,
            label: index.label(doc_id).to_string(),
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squash_is_monotonic() {
        let xs = [-1.0, -0.5, 0.0, 0.05, 0.1, 0.5, 0.9, 1.0];
        for w in xs.windows(2) {
            assert!(squash(w[0]) < squash(w[1]));
        }
    }

    #[test]
    fn idf_is_finite_for_all_reachable_inputs() {
        assert!(idf(0, 0).is_finite());
        assert!(idf(5, 0).is_finite());
        assert!(idf(5, 5).is_finite());
    }
}
