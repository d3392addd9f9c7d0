//! TF-IDF cosine similarity between a resume and a job description

use crate::processing::text_processor::TextProcessor;
use log::debug;
use std::collections::BTreeMap;

/// L2-normalised TF-IDF weights of one document, keyed by term
pub type TermWeights = BTreeMap<String, f64>;

pub struct Scorer {
    processor: TextProcessor,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            processor: TextProcessor::new(),
        }
    }

    /// Match score in [0, 100], rounded to two decimals.
    ///
    /// Returns 0 when either text has no terms left after stop-word removal.
    pub fn score(&self, resume: &str, job: &str) -> f64 {
        let vectors = match self.vectorize(resume, job) {
            Some(vectors) => vectors,
            None => {
                debug!("Degenerate vector space, score is 0");
                return 0.0;
            }
        };

        let similarity = cosine_similarity(&vectors.0, &vectors.1);
        round_percentage(similarity)
    }

    /// TF-IDF vectors of the two-document corpus, or `None` if either
    /// document has no terms.
    pub fn vectorize(&self, first: &str, second: &str) -> Option<(TermWeights, TermWeights)> {
        let first_counts = term_counts(&self.processor.tokenize(first));
        let second_counts = term_counts(&self.processor.tokenize(second));

        if first_counts.is_empty() || second_counts.is_empty() {
            return None;
        }

        let corpus = [&first_counts, &second_counts];
        let mut idf: BTreeMap<&str, f64> = BTreeMap::new();
        for term in first_counts.keys().chain(second_counts.keys()) {
            idf.entry(term.as_str()).or_insert_with(|| {
                let df = corpus.iter().filter(|doc| doc.contains_key(term)).count();
                smoothed_idf(corpus.len(), df)
            });
        }
        debug!("TF-IDF vocabulary size: {}", idf.len());

        let weigh = |counts: &BTreeMap<String, usize>| -> TermWeights {
            let weights: TermWeights = counts
                .iter()
                .map(|(term, &count)| (term.clone(), count as f64 * idf[term.as_str()]))
                .collect();
            l2_normalize(weights)
        };

        Some((weigh(&first_counts), weigh(&second_counts)))
    }
}

fn term_counts(tokens: &[String]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// `ln((1 + n) / (1 + df)) + 1`
fn smoothed_idf(documents: usize, document_frequency: usize) -> f64 {
    ((1.0 + documents as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

fn l2_normalize(mut weights: TermWeights) -> TermWeights {
    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }
    weights
}

/// Cosine similarity of two normalised vectors
pub fn cosine_similarity(a: &TermWeights, b: &TermWeights) -> f64 {
    // Iterate in term order so that swapping operands sums the same products
    let mut dot = 0.0;
    for (term, weight) in a {
        if let Some(other) = b.get(term) {
            dot += weight * other;
        }
    }
    dot
}

fn round_percentage(similarity: f64) -> f64 {
    let percentage = (similarity * 100.0).clamp(0.0, 100.0);
    (percentage * 100.0).round() / 100.0
}
