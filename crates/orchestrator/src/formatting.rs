//! Fixed reply and prompt texts.

/// Marker prepended to transcript entries that record a failed turn.
pub const ERROR_MARKER: &str = "⚠️ ";

/// Reply when the tool loop hits its round cap.
pub const TOOL_ROUNDS_EXHAUSTED: &str =
    "I wasn't able to finish that request after several tool calls. Please try rephrasing it.";

/// Sentence returned for a calculator request.
pub fn calculation_reply(expr: &str, result: &str) -> String {
    format!("The result of {} is **{}**.", expr, result)
}

/// Instruction that replaces the user's question for `study:` requests.
pub fn study_plan_prompt(topic: &str) -> String {
    format!(
        "Create a clear, beginner-friendly **5-day study plan** for the topic: \"{}\". \
         Use markdown headings and bullet points. Include daily goals and resources.",
        topic
    )
}

/// Instruction that replaces the user's question for `web:` requests.
pub fn web_answer_prompt(query: &str) -> String {
    format!(
        "Using the web search results provided, answer this question clearly and concisely:\n\nQuestion: {}",
        query
    )
}

/// System note carrying search results into the prompt.
pub fn search_note(results: &str) -> String {
    format!(
        "Here are some web search results to help answer the user's latest question:\n\n{}",
        results
    )
}

/// Transcript text recorded for a failed turn.
pub fn error_entry(message: &str) -> String {
    format!("{}{}", ERROR_MARKER, message)
}

/// Tool result fed back for a name outside the catalog.
pub fn unknown_tool_result(name: &str) -> String {
    format!("Error: Unknown tool \"{}\".", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_reply() {
        assert_eq!(
            calculation_reply("5*2+10", "20"),
            "The result of 5*2+10 is **20**."
        );
    }

    #[test]
    fn test_study_plan_prompt() {
        assert_eq!(
            study_plan_prompt("Quantum Physics"),
            "Create a clear, beginner-friendly **5-day study plan** for the topic: \"Quantum Physics\". \
             Use markdown headings and bullet points. Include daily goals and resources."
        );
    }

    #[test]
    fn test_web_answer_prompt() {
        assert_eq!(
            web_answer_prompt("rust"),
            "Using the web search results provided, answer this question clearly and concisely:\n\nQuestion: rust"
        );
    }

    #[test]
    fn test_error_entry() {
        assert_eq!(error_entry("boom"), "⚠️ boom");
        assert_eq!(unknown_tool_result("fly"), "Error: Unknown tool \"fly\".");
    }
}
