//! API client for the document-QA backend.

use gloo_net::http::Request;
use web_sys::FormData;

use crate::config;
use crate::types::ChatReply;

/// Shown when the server answered but could not process the question.
pub const SERVER_ERROR_REPLY: &str = "I apologize, but I encountered an error while processing your request. Please try again.";

/// Shown when the request never reached the server.
pub const NETWORK_ERROR_REPLY: &str =
    "I'm having trouble connecting right now. Please check your connection and try again.";

/// Shown when the automatic post-upload summary fails.
pub const SUMMARY_ERROR_REPLY: &str = "I couldn't generate a summary right now. Feel free to ask me specific questions about your document!";

/// Why a chat question produced no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Network failure before a response arrived.
    Transport(String),
    /// Non-2xx response from the server.
    Server { status: u16 },
    /// 2xx response whose body was not the expected JSON.
    Decode(String),
}

impl ChatError {
    /// Fixed user-facing apology for this failure. The caller turns it
    /// into an error-flagged bot message; nothing is retried.
    pub fn apology(&self) -> &'static str {
        match self {
            ChatError::Server { .. } | ChatError::Decode(_) => SERVER_ERROR_REPLY,
            ChatError::Transport(_) => NETWORK_ERROR_REPLY,
        }
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::Transport(message) => write!(f, "network error: {}", message),
            ChatError::Server { status } => write!(f, "request failed with status {}", status),
            ChatError::Decode(message) => write!(f, "failed to parse response: {}", message),
        }
    }
}

/// Send a question to the chat endpoint as form data.
pub async fn ask_question(base_url: &str, question: &str) -> Result<ChatReply, ChatError> {
    let form = FormData::new().map_err(|e| ChatError::Transport(format!("{:?}", e)))?;
    form.append_with_str("question", question)
        .map_err(|e| ChatError::Transport(format!("{:?}", e)))?;

    let response = Request::post(&config::chat_url(base_url))
        .body(form)
        .map_err(|e| ChatError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ChatError::Server {
            status: response.status(),
        });
    }

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| ChatError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_failures_use_the_fixed_apology() {
        assert_eq!(
            ChatError::Server { status: 500 }.apology(),
            SERVER_ERROR_REPLY
        );
        assert_eq!(
            ChatError::Decode("bad json".to_string()).apology(),
            SERVER_ERROR_REPLY
        );
    }

    #[test]
    fn transport_failures_use_the_connection_apology() {
        assert_eq!(
            ChatError::Transport("offline".to_string()).apology(),
            NETWORK_ERROR_REPLY
        );
    }
}
