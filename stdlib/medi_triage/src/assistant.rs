//! Keyword-matching help assistant. Independent of the scorer.

pub const REPLY_PREDICT: &str =
    "Assistant: Open the Predict page and fill the form to get a risk score.";
pub const REPLY_HELP: &str = "Assistant: Try: 'predict', 'how it works', or 'about'.";
pub const REPLY_HOW: &str =
    "Assistant: This demo uses a small weighted algorithm in JavaScript to estimate risk.";
pub const REPLY_UNKNOWN: &str = "Assistant: Sorry, I didn't understand. Type 'help' for options.";

/// Reply for one message, or `None` when it is blank.
///
/// Keywords are substring matches on the trimmed, lowercased text, tried in
/// the order predict, help, how.
pub fn reply_for(message: &str) -> Option<&'static str> {
    let text = message.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    let reply = if text.contains("predict") {
        REPLY_PREDICT
    } else if text.contains("help") {
        REPLY_HELP
    } else if text.contains("how") {
        REPLY_HOW
    } else {
        REPLY_UNKNOWN
    };
    Some(reply)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assistant {
    transcript: Vec<String>,
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the user's message and the reply. Blank input leaves the transcript untouched.
    pub fn send(&mut self, message: &str) -> Option<&'static str> {
        let reply = reply_for(message)?;
        self.transcript.push(format!("You: {message}"));
        self.transcript.push(reply.to_string());
        Some(reply)
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}
