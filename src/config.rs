//! Build-time configuration and product constants.

/// Backend used when no override is baked in at build time.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the document-QA backend.
///
/// Set `API_BASE_URL` in the build environment to point at a deployed
/// backend; unset builds talk to a local one.
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Document upload endpoint.
pub fn upload_url(base: &str) -> String {
    format!("{}/api/upload", base)
}

/// Chat question endpoint.
pub fn chat_url(base: &str) -> String {
    format!("{}/api/chat", base)
}

/// File types the upload picker accepts (extensions plus MIME types, so
/// both the picker filter and drag-and-drop behave).
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.doc,.docx,.txt,application/pdf,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document,text/plain";

/// Shown in the log as the user's own request when the summary is
/// auto-sent after an in-chat upload.
pub const SUMMARY_REQUEST_LABEL: &str =
    "Please provide a comprehensive summary of the uploaded document.";

/// The question actually sent for the automatic summary. Longer than the
/// displayed label on purpose: the extra steering stays out of the log.
pub const SUMMARY_QUESTION: &str = "Please provide a comprehensive summary of the uploaded document, highlighting the key points and main themes.";

/// Pause between the upload-success note and the automatic summary.
pub const SUMMARY_DELAY_MS: u32 = 1_500;

/// Pause before the upload form notifies its host of success, so the
/// filled progress bar is visible for a moment.
pub const SUCCESS_CALLBACK_DELAY_MS: u32 = 1_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_joined_onto_the_base() {
        assert_eq!(
            upload_url("http://localhost:8000"),
            "http://localhost:8000/api/upload"
        );
        assert_eq!(
            chat_url("https://api.example.com"),
            "https://api.example.com/api/chat"
        );
    }
}
