//! Term-frequency / inverse-document-frequency vector space over tag text.
//!
//! Tokens are lowercase runs of two or more alphanumeric or `_` characters.
//! IDF is smoothed (`ln((1 + n) / (1 + df)) + 1`) and every vector is
//! L2-normalised, so the dot product of two vectors is their cosine
//! similarity.

use std::collections::{BTreeMap, HashMap};

/// Sparse, L2-normalised document vector as (term index, weight) pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Dot product against a dense vector
    pub fn dot_dense(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|&(i, w)| w * dense.get(i).copied().unwrap_or(0.0))
            .sum()
    }
}

/// A vocabulary and IDF weights fit on a corpus
#[derive(Debug, Clone, Default)]
pub struct TfIdf {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
}

impl TfIdf {
    /// Fits the vocabulary and IDF weights on a set of documents
    pub fn fit<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
        let mut n_docs = 0usize;

        for document in documents {
            n_docs += 1;
            let mut seen: Vec<String> = tokenize(document).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *vocabulary.entry(term).or_insert(0) += 1;
            }
        }

        let n = n_docs as f64;
        let mut index = HashMap::with_capacity(vocabulary.len());
        let mut idf = Vec::with_capacity(vocabulary.len());

        // BTreeMap order gives a stable, sorted term index
        for (i, (term, df)) in vocabulary.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            index.insert(term, i);
        }

        Self {
            vocabulary: index,
            idf,
        }
    }

    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Projects a document into the fitted space; unknown terms are ignored
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(document) {
            if let Some(&i) = self.vocabulary.get(&token) {
                *counts.entry(i).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(i, tf)| (i, tf * self.idf[i]))
            .collect();

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in entries.iter_mut() {
                *w /= norm;
            }
        } else {
            entries.clear();
        }

        SparseVector { entries }
    }
}
