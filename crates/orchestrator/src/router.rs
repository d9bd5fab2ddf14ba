//! Local, rule-based turn classification.

use crate::actions::{TurnAction, DEFAULT_STUDY_TOPIC};

/// Substrings that make an unprefixed message trigger a web search.
pub const AUTO_SEARCH_KEYWORDS: &[&str] = &[
    "latest",
    "today",
    "yesterday",
    "this week",
    "this month",
    "current",
    "news",
    "score",
    "match",
    "live",
    "price",
    "stock",
    "share price",
    "weather",
    "forecast",
    "update",
    "who is the current",
    "who is the president",
    "who is the prime minister",
];

/// Classify a user message. The first matching rule wins.
///
/// Prefixes are matched case-insensitively on the trimmed message, but
/// payloads are cut from the original text: everything after the first
/// `:`, trimmed.
pub fn route(message: &str) -> TurnAction {
    let lower = message.trim().to_lowercase();

    if lower.starts_with("calc:") {
        return TurnAction::Calculate {
            expr: payload(message).to_string(),
        };
    }

    if lower.starts_with("study:") {
        let topic = match payload(message) {
            "" => DEFAULT_STUDY_TOPIC,
            topic => topic,
        };
        return TurnAction::StudyPlan {
            topic: topic.to_string(),
        };
    }

    if lower.starts_with("web:") || lower.starts_with("search:") {
        let query = match payload(message) {
            "" => message,
            query => query,
        };
        return TurnAction::WebSearch {
            query: query.to_string(),
        };
    }

    if needs_web_search(message) {
        return TurnAction::AutoSearch;
    }

    TurnAction::Plain
}

/// Whether the message contains any auto-search keyword (case-insensitive).
pub fn needs_web_search(message: &str) -> bool {
    let lower = message.to_lowercase();
    AUTO_SEARCH_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Text after the first `:`, trimmed.
fn payload(message: &str) -> &str {
    message
        .split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_prefix() {
        assert_eq!(
            route("calc: 5*2+10"),
            TurnAction::Calculate {
                expr: "5*2+10".to_string()
            }
        );
        // Case-insensitive prefix, original-case payload
        assert_eq!(
            route("  CALC: 2 * 3"),
            TurnAction::Calculate {
                expr: "2 * 3".to_string()
            }
        );
        assert_eq!(
            route("calc:"),
            TurnAction::Calculate {
                expr: String::new()
            }
        );
    }

    #[test]
    fn test_study_prefix() {
        assert_eq!(
            route("study: Quantum Physics"),
            TurnAction::StudyPlan {
                topic: "Quantum Physics".to_string()
            }
        );
        assert_eq!(
            route("Study:   "),
            TurnAction::StudyPlan {
                topic: "General topic".to_string()
            }
        );
    }

    #[test]
    fn test_study_beats_keywords() {
        // "latest" would trigger auto-search, but the prefix wins.
        assert!(matches!(
            route("study: latest JavaScript features"),
            TurnAction::StudyPlan { .. }
        ));
    }

    #[test]
    fn test_web_and_search_prefix() {
        assert_eq!(
            route("web: current prime minister of india"),
            TurnAction::WebSearch {
                query: "current prime minister of india".to_string()
            }
        );
        assert_eq!(
            route("Search: rust 2024 edition"),
            TurnAction::WebSearch {
                query: "rust 2024 edition".to_string()
            }
        );
        // Empty payload falls back to the whole message
        assert_eq!(
            route("web:"),
            TurnAction::WebSearch {
                query: "web:".to_string()
            }
        );
    }

    #[test]
    fn test_payload_keeps_later_colons() {
        assert_eq!(
            route("web: time in UTC: now"),
            TurnAction::WebSearch {
                query: "time in UTC: now".to_string()
            }
        );
    }

    #[test]
    fn test_auto_search_keywords() {
        assert_eq!(route("what's the weather today"), TurnAction::AutoSearch);
        assert_eq!(route("Bitcoin PRICE?"), TurnAction::AutoSearch);
        assert_eq!(route("Who is the President of France"), TurnAction::AutoSearch);
        // Substring match, so "delivery" trips on "live"
        assert_eq!(route("explain delivery semantics"), TurnAction::AutoSearch);
    }

    #[test]
    fn test_plain() {
        assert_eq!(route("explain ownership in rust"), TurnAction::Plain);
        assert_eq!(route("calculate 2+2 for me"), TurnAction::Plain);
        assert_eq!(route("webhooks explained"), TurnAction::Plain);
    }
}
