/// Intent flags: keywords and the sentence each contributes, in output order.
pub const INTENT_FLAGS: &[(&[&str], &str)] = &[
    (
        &["price", "cost", "charge", "plan", "pricing"],
        "Inquired about pricing.",
    ),
    (&["demo", "schedule", "book", "meeting"], "Requested a demo."),
    (
        &[
            "problem", "issue", "not working", "support", "crash", "crashing", "bug", "glitch",
            "reinstall", "freeze", "lag", "slow", "error", "fail",
        ],
        "Reported a problem.",
    ),
    (
        &[
            "disappointed", "upset", "bad experience", "angry", "frustrated", "unhappy",
            "unsatisfied",
        ],
        "Expressed dissatisfaction.",
    ),
];

/// Summary when no flag fires.
pub const GENERAL_INQUIRY: &str = "General inquiry.";

/// Summary keyword → suggested action, checked in order.
pub const NEXT_ACTIONS: &[(&[&str], &str)] = &[
    (&["pricing"], "Send pricing details"),
    (&["demo"], "Schedule a demo"),
    (&["problem", "issue"], "Assign to support team"),
    (&["dissatisfaction"], "Escalate to customer success team"),
];

/// Action when the summary names nothing actionable.
pub const NO_ACTION: &str = "No action needed";

/// One-line summary of the intents present in a message. Flags are
/// independent and may co-occur.
pub fn summarize(text: &str) -> String {
    let lower = text.to_lowercase();
    let parts: Vec<&str> = INTENT_FLAGS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, sentence)| *sentence)
        .collect();

    if parts.is_empty() {
        GENERAL_INQUIRY.to_owned()
    } else {
        parts.join(" ")
    }
}

/// Next action for a summary produced by [`summarize`] (or any free text).
pub fn suggest_next_action(summary: &str) -> &'static str {
    let lower = summary.to_lowercase();
    NEXT_ACTIONS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, action)| *action)
        .unwrap_or(NO_ACTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_flags() {
        assert_eq!(summarize("How much does it cost?"), "Inquired about pricing.");
        assert_eq!(summarize("Can I book a demo?"), "Requested a demo.");
        assert_eq!(summarize("I get an error on login"), "Reported a problem.");
        assert_eq!(summarize("I'm really unhappy"), "Expressed dissatisfaction.");
    }

    #[test]
    fn flags_join_in_fixed_order() {
        let s = summarize("I'm frustrated: the demo crashed and the price went up");
        assert_eq!(
            s,
            "Inquired about pricing. Requested a demo. Reported a problem. Expressed dissatisfaction."
        );
    }

    #[test]
    fn nothing_flagged() {
        assert_eq!(summarize("Nice weather today"), GENERAL_INQUIRY);
        assert_eq!(summarize(""), GENERAL_INQUIRY);
    }

    #[test]
    fn next_action_follows_first_keyword() {
        assert_eq!(suggest_next_action("Inquired about pricing. Reported a problem."), "Send pricing details");
        assert_eq!(suggest_next_action("Requested a demo."), "Schedule a demo");
        assert_eq!(suggest_next_action("Reported a problem."), "Assign to support team");
        assert_eq!(suggest_next_action("open issue"), "Assign to support team");
        assert_eq!(
            suggest_next_action("Expressed dissatisfaction."),
            "Escalate to customer success team"
        );
        assert_eq!(suggest_next_action(GENERAL_INQUIRY), NO_ACTION);
    }

    #[test]
    fn summary_then_action() {
        let summary = summarize("the app keeps crashing");
        assert_eq!(suggest_next_action(&summary), "Assign to support team");
    }
}
