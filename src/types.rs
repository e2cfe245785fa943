//! Data types shared across pages and API clients.

use serde::Deserialize;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Bot,
    System,
}

/// A single entry in the chat log.
///
/// Messages are append-only: created on send/receive, never mutated
/// afterwards, and dropped together with the page state.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub kind: MessageKind,
    pub content: String,
    pub sources: Vec<SourceRef>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub is_error: bool,
    pub is_welcome: bool,
}

impl Message {
    fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            content: content.into(),
            sources: vec![],
            timestamp: chrono::Utc::now(),
            is_error: false,
            is_welcome: false,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, content)
    }

    pub fn bot(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self {
            sources,
            ..Self::new(MessageKind::Bot, content)
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageKind::System, content)
    }

    /// Greeting pre-seeded into an empty chat log.
    pub fn welcome() -> Self {
        Self {
            is_welcome: true,
            ..Self::new(
                MessageKind::Bot,
                "Hi! I'm DocChat, your intelligent document assistant. Upload documents \
                 and I'll help you find answers, insights, and summaries from your content.",
            )
        }
    }

    /// Bot message standing in for a failed request.
    pub fn error_reply(content: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::new(MessageKind::Bot, content)
        }
    }
}

/// Citation returned alongside a chat answer.
///
/// The backend sends either `{title, author}` pairs or a bare `{filename}`,
/// depending on what metadata the document carried.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceRef {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl SourceRef {
    /// Primary line shown in the sources section.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.filename.as_deref())
            .unwrap_or("Unknown source")
    }

    /// Secondary "by ..." line, when an author is known.
    pub fn byline(&self) -> Option<String> {
        self.author.as_ref().map(|author| format!("by {}", author))
    }
}

/// Chat response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

/// Upload response from the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub chunks_uploaded: u64,
}

/// Outcome of a successful (2xx) upload.
///
/// Parsing is permissive: a success body that is not the expected JSON
/// report is kept as raw text instead of failing the whole transfer.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadReply {
    Report(UploadResponse),
    Raw(String),
}

impl UploadReply {
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<UploadResponse>(body) {
            Ok(report) => UploadReply::Report(report),
            Err(_) => UploadReply::Raw(body.to_string()),
        }
    }

    pub fn chunks_uploaded(&self) -> Option<u64> {
        match self {
            UploadReply::Report(report) => Some(report.chunks_uploaded),
            UploadReply::Raw(_) => None,
        }
    }
}

/// One key/value row of the optional-metadata editor.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaField {
    pub id: String,
    pub key: String,
    pub value: String,
}

impl MetaField {
    pub fn empty() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            key: String::new(),
            value: String::new(),
        }
    }
}

/// Optional metadata attached to an upload.
///
/// Assembled into a JSON object right before the transfer; rows with an
/// empty key or value are dropped, and field order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub extra: Vec<MetaField>,
}

impl DocumentMetadata {
    /// JSON string for the `metadata` form field, or `None` when every
    /// field is empty (the field is then omitted entirely).
    pub fn to_form_value(&self) -> Option<String> {
        let mut object = serde_json::Map::new();
        let title = self.title.trim();
        if !title.is_empty() {
            object.insert("title".into(), title.into());
        }
        let author = self.author.trim();
        if !author.is_empty() {
            object.insert("author".into(), author.into());
        }
        for field in &self.extra {
            let key = field.key.trim();
            let value = field.value.trim();
            if !key.is_empty() && !value.is_empty() {
                object.insert(key.to_string(), value.into());
            }
        }
        if object.is_empty() {
            None
        } else {
            Some(serde_json::Value::Object(object).to_string())
        }
    }
}

/// Lifecycle of one upload transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
    Canceled,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(key: &str, value: &str) -> MetaField {
        MetaField {
            id: uuid::Uuid::new_v4().to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn metadata_skips_empty_rows() {
        let metadata = DocumentMetadata {
            title: "Company Handbook".to_string(),
            author: String::new(),
            extra: vec![
                field("department", "Finance"),
                field("", "orphan value"),
                field("orphan key", ""),
                field("   ", "   "),
            ],
        };
        let json: serde_json::Value =
            serde_json::from_str(&metadata.to_form_value().unwrap()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["title"], "Company Handbook");
        assert_eq!(object["department"], "Finance");
    }

    #[test]
    fn metadata_trims_whitespace() {
        let metadata = DocumentMetadata {
            title: "  Jane's Notes  ".to_string(),
            author: " Jane Doe ".to_string(),
            extra: vec![],
        };
        let json: serde_json::Value =
            serde_json::from_str(&metadata.to_form_value().unwrap()).unwrap();
        assert_eq!(json["title"], "Jane's Notes");
        assert_eq!(json["author"], "Jane Doe");
    }

    #[test]
    fn empty_metadata_is_omitted() {
        let metadata = DocumentMetadata {
            title: String::new(),
            author: "  ".to_string(),
            extra: vec![field("", "")],
        };
        assert_eq!(metadata.to_form_value(), None);
    }

    #[test]
    fn metadata_preserves_field_order() {
        let metadata = DocumentMetadata {
            title: "T".to_string(),
            author: "A".to_string(),
            extra: vec![field("zebra", "1"), field("apple", "2")],
        };
        let json = metadata.to_form_value().unwrap();
        let zebra = json.find("zebra").unwrap();
        let apple = json.find("apple").unwrap();
        assert!(zebra < apple, "extra rows must keep their order");
    }

    #[test]
    fn chat_reply_with_sources() {
        let json = r#"{
            "answer": "The handbook covers remote work policy.",
            "sources": [
                {"title": "Company Handbook", "author": "Jane Doe"},
                {"filename": "handbook.pdf"}
            ]
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.sources.len(), 2);
        assert_eq!(reply.sources[0].label(), "Company Handbook");
        assert_eq!(reply.sources[0].byline().as_deref(), Some("by Jane Doe"));
        assert_eq!(reply.sources[1].label(), "handbook.pdf");
        assert_eq!(reply.sources[1].byline(), None);
    }

    #[test]
    fn chat_reply_without_sources() {
        let reply: ChatReply = serde_json::from_str(r#"{"answer": "X"}"#).unwrap();
        assert_eq!(reply.answer, "X");
        assert!(reply.sources.is_empty());
    }

    #[test]
    fn upload_reply_parses_report() {
        let reply = UploadReply::parse(r#"{"chunks_uploaded": 42}"#);
        assert_eq!(reply.chunks_uploaded(), Some(42));
    }

    #[test]
    fn upload_reply_falls_back_to_raw_text() {
        let reply = UploadReply::parse("OK");
        assert_eq!(reply, UploadReply::Raw("OK".to_string()));
        assert_eq!(reply.chunks_uploaded(), None);
    }

    #[test]
    fn message_constructors_set_flags() {
        let user = Message::user("hello");
        assert_eq!(user.kind, MessageKind::User);
        assert!(!user.is_error && !user.is_welcome);

        let error = Message::error_reply("sorry");
        assert_eq!(error.kind, MessageKind::Bot);
        assert!(error.is_error);

        let welcome = Message::welcome();
        assert_eq!(welcome.kind, MessageKind::Bot);
        assert!(welcome.is_welcome);

        let bot = Message::bot(
            "answer",
            vec![SourceRef {
                title: Some("T".to_string()),
                author: None,
                filename: None,
            }],
        );
        assert_eq!(bot.sources.len(), 1);
    }
}
