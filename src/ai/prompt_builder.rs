//! Fixed prompt text and message construction for the completion call.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

pub const SYSTEM_PROMPT: &str = "You are a snarky assistant that analyzes the contents of a website, \
and provides a short, snarky, humorous summary, ignoring text that might be navigation related. \
Respond in markdown. Do not wrap the markdown in a code block - respond just with the markdown.";

pub const USER_PROMPT_PREFIX: &str = "Here are the contents of a website.\n\
Provide a short summary of this website.\n\
If it includes news or announcements, then summarize these too.\n\n";

/// Build the two-message prompt: system instruction, then prefix + page text.
#[must_use]
pub fn build_prompt(website_content: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(format!("{USER_PROMPT_PREFIX}{website_content}")),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
