//! Prompt catalog
//!
//! Maps the caller-selected mode to the fixed system instruction prepended to
//! every upstream conversation. Pure static data; no templating.

use serde::{Deserialize, Serialize};

const CHAT_PROMPT: &str = "You are a helpful AI assistant. Keep answers clear and concise.";

const ANALYZE_PROMPT: &str = "You are an expert text analyst. Analyze the provided text and \
provide insights about sentiment, key topics, summary, and any notable patterns. Format your \
response in a structured way.";

const DETECT_PROMPT: &str = r#"You are an expert AI content detector. Analyze the provided text and determine if it was likely written by an AI or a human.

Provide your analysis in the following format:
1. Start with "AI Score: X" where X is a number from 0-100 representing the probability the text is AI-generated
2. Then "Human Score: Y" where Y is 100 minus the AI score
3. Then provide a detailed analysis explaining your reasoning, including:
   - Patterns typical of AI writing (repetitive structures, formal tone, lack of personal voice)
   - Signs of human writing (personal anecdotes, informal language, unique expressions, typos)
   - Vocabulary and sentence structure analysis
   - Overall assessment

Be thorough but concise in your analysis."#;

const HUMANIZE_PROMPT: &str = r#"You are an expert at rewriting AI-generated text to sound more natural and human-like.

Rewrite the provided text to:
1. Add natural variations in sentence length and structure
2. Include conversational transitions and filler words where appropriate
3. Use more casual, everyday vocabulary instead of formal language
4. Add personal touches like opinions, emotions, or relatable examples
5. Include minor imperfections that humans naturally make (without actual errors)
6. Vary the rhythm and flow of the writing
7. Remove overly polished or predictable patterns

Only output the rewritten text, nothing else. Maintain the original meaning and key points while making it sound authentically human-written."#;

/// Caller-selected relay behavior
///
/// Unknown mode strings deserialize as [`Mode::Chat`] rather than failing,
/// matching the catalog's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mode {
    #[default]
    Chat,
    Analyze,
    Detect,
    Humanize,
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "analyze" => Mode::Analyze,
            "detect" => Mode::Detect,
            "humanize" => Mode::Humanize,
            _ => Mode::Chat,
        }
    }
}

impl Mode {
    /// Select the system instruction for this mode. Total, never fails.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Mode::Chat => CHAT_PROMPT,
            Mode::Analyze => ANALYZE_PROMPT,
            Mode::Detect => DETECT_PROMPT,
            Mode::Humanize => HUMANIZE_PROMPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_mode_selects_its_own_prompt() {
        assert_eq!(Mode::Chat.system_prompt(), CHAT_PROMPT);
        assert_eq!(Mode::Analyze.system_prompt(), ANALYZE_PROMPT);
        assert_eq!(Mode::Detect.system_prompt(), DETECT_PROMPT);
        assert_eq!(Mode::Humanize.system_prompt(), HUMANIZE_PROMPT);
    }

    #[test]
    fn detect_prompt_fixes_the_score_contract() {
        let prompt = Mode::Detect.system_prompt();
        assert!(prompt.contains("AI Score: X"));
        assert!(prompt.contains("Human Score: Y"));
        assert!(prompt.contains("100 minus the AI score"));
    }

    #[test]
    fn humanize_prompt_forbids_commentary() {
        assert!(Mode::Humanize
            .system_prompt()
            .contains("Only output the rewritten text, nothing else."));
    }

    #[test]
    fn unknown_mode_falls_back_to_chat() {
        assert_eq!(Mode::from("summarize".to_string()), Mode::Chat);
        assert_eq!(Mode::from(String::new()), Mode::Chat);
        // Case-sensitive, like the source of truth
        assert_eq!(Mode::from("Analyze".to_string()), Mode::Chat);
    }

    #[test]
    fn known_modes_deserialize_from_json() {
        let mode: Mode = serde_json::from_str("\"detect\"").unwrap();
        assert_eq!(mode, Mode::Detect);
        let mode: Mode = serde_json::from_str("\"nonsense\"").unwrap();
        assert_eq!(mode, Mode::Chat);
    }
}
