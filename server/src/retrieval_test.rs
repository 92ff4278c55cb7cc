use super::*;

fn corpus() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How do I reset my password?".into(),
            answer: "Use the reset link on the sign-in page.".into(),
            section: "Accounts".into(),
            url: "https://example.com/docs/reset".into(),
        },
        FaqEntry {
            question: "How do I export my billing invoices?".into(),
            answer: "Invoices can be exported from the billing page.".into(),
            section: "Billing".into(),
            url: "https://example.com/docs/invoices".into(),
        },
        FaqEntry {
            question: "What regions does the service deploy to?".into(),
            answer: "Deployments run in three regions.".into(),
            section: "Platform".into(),
            url: String::new(),
        },
    ]
}

#[test]
fn matching_query_returns_sharing_entry() {
    let retriever = FaqRetriever::fit(corpus());
    let hit = retriever.find_best_match("password reset").unwrap();
    assert_eq!(hit.section, "Accounts");
}

#[test]
fn query_terms_route_to_distinct_entries() {
    let retriever = FaqRetriever::fit(corpus());
    assert_eq!(
        retriever.find_best_match("billing invoices").unwrap().section,
        "Billing"
    );
    assert_eq!(
        retriever.find_best_match("deploy regions").unwrap().section,
        "Platform"
    );
}

#[test]
fn unrelated_query_returns_none() {
    let retriever = FaqRetriever::fit(corpus());
    assert!(retriever.find_best_match("quantum entanglement homework").is_none());
}

#[test]
fn empty_corpus_returns_none() {
    let retriever = FaqRetriever::fit(Vec::new());
    assert!(retriever.find_best_match("anything").is_none());
}

#[test]
fn exact_score_tie_prefers_the_first_entry() {
    // "alpha" appears in both questions, so both rows score identically
    // against the query; the earliest entry must win.
    let retriever = FaqRetriever::fit(vec![
        FaqEntry {
            question: "alpha beta".into(),
            answer: "first".into(),
            section: String::new(),
            url: String::new(),
        },
        FaqEntry {
            question: "alpha gamma".into(),
            answer: "second".into(),
            section: String::new(),
            url: String::new(),
        },
    ]);
    let hit = retriever.find_best_match("alpha").unwrap();
    assert_eq!(hit.answer, "first");
}

#[test]
fn stop_word_only_query_returns_none() {
    let retriever = FaqRetriever::fit(corpus());
    assert!(retriever.find_best_match("the and of").is_none());
}
