use crate::types::ReplyContext;

/// Context keyword buckets, tested in order. Matching is substring
/// containment on the lower-cased text, so "hi" also fires inside "this".
pub const CONTEXT_KEYWORDS: &[(ReplyContext, &[&str])] = &[
    (
        ReplyContext::Pricing,
        &["price", "pricing", "cost", "expensive", "cheap", "budget", "affordable"],
    ),
    (
        ReplyContext::Support,
        &[
            "help", "support", "problem", "issue", "broken", "not working", "crash", "crashing",
            "bug", "glitch", "reinstall", "freeze", "lag", "slow",
        ],
    ),
    (
        ReplyContext::Product,
        &["product", "feature", "service", "offer", "solution"],
    ),
    (
        ReplyContext::Greeting,
        &["hi", "hello", "hey", "greetings", "good morning", "good afternoon"],
    ),
];

/// First context with a keyword present in `text`, else `General`.
pub fn detect_context(text: &str) -> ReplyContext {
    let lower = text.to_lowercase();
    CONTEXT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(ctx, _)| *ctx)
        .unwrap_or(ReplyContext::General)
}
