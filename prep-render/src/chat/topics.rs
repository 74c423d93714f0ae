//! Keyword-based topic detection for chat questions

/// Topic name and the keywords that indicate it. Matching is a case-insensitive substring
/// test, so `dp` also fires inside longer words.
pub const TOPIC_KEYWORDS: [(&str, &[&str]); 6] = [
    ("arrays", &["array", "sorting", "searching"]),
    ("linkedlist", &["linked list", "node", "pointer"]),
    ("trees", &["tree", "binary tree", "bst", "traversal"]),
    ("graphs", &["graph", "dfs", "bfs", "dijkstra"]),
    ("dp", &["dynamic programming", "dp", "knapsack", "fibonacci"]),
    ("strings", &["string", "pattern", "substring"]),
];

/// Topics mentioned in `message`, in table order.
pub fn detect_topics(message: &str) -> Vec<&'static str> {
    let lower = message.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(topic, _)| *topic)
        .collect()
}
