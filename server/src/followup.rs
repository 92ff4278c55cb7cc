//! Follow-up detection for incoming chat turns.
//!
//! DESIGN
//! ======
//! Two signals, cheapest first:
//! 1. Short inputs containing a contextual pronoun ("Who is it for?") are
//!    follow-ups outright. The pronouns are stop words and would vanish
//!    from any tf-idf vocabulary, so this check runs on the raw words.
//! 2. Otherwise the input is compared against the joined history contents
//!    with tf-idf cosine similarity.

use protocol::HistoryTurn;

use crate::tfidf::{TfidfVectorizer, cosine_similarity};

#[cfg(test)]
#[path = "followup_test.rs"]
mod followup_test;

/// Similarity above which an input counts as a follow-up.
const FOLLOW_UP_THRESHOLD: f64 = 0.2;

/// Word-count bound for the contextual-pronoun shortcut.
const SHORT_INPUT_WORDS: usize = 15;

const CONTEXTUAL_WORDS: &[&str] = &[
    "it", "they", "them", "that", "those", "this", "his", "her", "their",
];

/// Whether `user_input` is a semantic follow-up to `history`.
#[must_use]
pub fn is_follow_up(user_input: &str, history: &[HistoryTurn]) -> bool {
    if history.is_empty() {
        return false;
    }

    let words: Vec<String> = user_input
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    if words.len() <= SHORT_INPUT_WORDS
        && words
            .iter()
            .any(|w| CONTEXTUAL_WORDS.contains(&w.trim_matches(['.', ',', '?', '!'])))
    {
        return true;
    }

    let history_text = history
        .iter()
        .map(|turn| turn.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let vectorizer = TfidfVectorizer::fit(&[history_text.as_str(), user_input]);
    if vectorizer.is_empty() {
        return false;
    }
    let history_vector = vectorizer.transform(&history_text);
    let input_vector = vectorizer.transform(user_input);
    cosine_similarity(&history_vector, &input_vector) > FOLLOW_UP_THRESHOLD
}
