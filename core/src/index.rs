use crate::tokenizer::term_counts;
use std::collections::HashMap;

pub type DocId = u32;

#[derive(Debug, Clone)]
pub struct Posting {
    pub doc_id: DocId,
    /// Raw in-document term frequency.
    pub tf: u32,
}

/// Frozen inverted index over a corpus.
///
/// Built once by [`Index::build`] and read-only afterwards. Query processing
/// never grows the dictionary or touches the norms; lookups on unseen terms
/// return a document frequency of 0 and an empty postings slice.
#[derive(Debug, Default)]
pub struct Index {
    postings: HashMap<String, Vec<Posting>>,
    /// Euclidean norm of each document's log-weighted tf vector, by DocId.
    norms: Vec<f64>,
    labels: Vec<String>,
}

impl Index {
    /// Index `docs` in order, assigning DocIds 0..N-1 in that order.
    ///
    /// Each document is tokenized, its raw term frequencies are aggregated,
    /// one posting per distinct term is appended, and the document norm
    /// sqrt(sum of (1 + log10(tf))^2) is computed from those same counts.
    /// An empty document contributes no postings and a norm of 0.
    pub fn build<I>(docs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut index = Index::default();
        for (label, content) in docs {
            let doc_id = index.labels.len() as DocId;
            let mut norm_sq = 0.0f64;
            for (term, tf) in term_counts(&content) {
                let weight = 1.0 + f64::from(tf).log10();
                norm_sq += weight * weight;
                index
                    .postings
                    .entry(term)
                    .or_default()
                    .push(Posting { doc_id, tf });
            }
            index.norms.push(norm_sq.sqrt());
            index.labels.push(label);
        }
        tracing::debug!(
            num_docs = index.num_docs(),
            num_terms = index.num_terms(),
            "built index"
        );
        index
    }

    pub fn num_docs(&self) -> u32 {
        self.labels.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }

    /// Number of documents containing `term`, 0 if the term is unseen.
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.postings.get(term).map_or(0, |p| p.len() as u32)
    }

    /// Postings for `term` in document-enumeration order; empty if unseen.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map_or(&[], Vec::as_slice)
    }

    pub fn norm(&self, doc_id: DocId) -> f64 {
        self.norms[doc_id as usize]
    }

    pub fn label(&self, doc_id: DocId) -> &str {
        &self.labels[doc_id as usize]
    }
}
