//! FAQ retrieval over a pre-fitted tf-idf model.
//!
//! The vectorizer is fitted once over the FAQ questions when the server
//! starts; each query is a single transform + similarity scan.

use crate::faq::FaqEntry;
use crate::tfidf::{TfidfVectorizer, cosine_similarity};

#[cfg(test)]
#[path = "retrieval_test.rs"]
mod retrieval_test;

/// Minimum cosine similarity for a query to count as a match.
const SIMILARITY_THRESHOLD: f64 = 0.1;

/// FAQ retriever holding the corpus and its fitted tf-idf matrix.
pub struct FaqRetriever {
    entries: Vec<FaqEntry>,
    vectorizer: TfidfVectorizer,
    matrix: Vec<Vec<f64>>,
}

impl FaqRetriever {
    /// Fit a retriever over `entries`, vectorizing each entry's question.
    #[must_use]
    pub fn fit(entries: Vec<FaqEntry>) -> Self {
        let questions: Vec<&str> = entries.iter().map(|e| e.question.as_str()).collect();
        let vectorizer = TfidfVectorizer::fit(&questions);
        let matrix = entries
            .iter()
            .map(|e| vectorizer.transform(&e.question))
            .collect();
        Self { entries, vectorizer, matrix }
    }

    /// Best FAQ match for `query`, or None when nothing clears the
    /// similarity threshold. Exact ties resolve to the earliest entry.
    #[must_use]
    pub fn find_best_match(&self, query: &str) -> Option<&FaqEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let query_vector = self.vectorizer.transform(query);
        let mut best: Option<(usize, f64)> = None;
        for (index, row) in self.matrix.iter().enumerate() {
            let score = cosine_similarity(&query_vector, row);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }
        let (best_index, best_score) = best?;
        (best_score > SIMILARITY_THRESHOLD).then(|| &self.entries[best_index])
    }
}
