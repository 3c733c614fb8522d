//! The Slack attachment produced by the formatter.

use serde_json::{Value, json};

/// Attachment color for a successful build.
pub const COLOR_SUCCESS: &str = "good";

/// Attachment color for a failed build.
pub const COLOR_FAILURE: &str = "danger";

/// Attachment properties rendered with Slack markup.
pub const MARKDOWN_IN: [&str; 4] = ["pretext", "text", "fields", "message"];

/// One `{title, value, short}` entry of an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentField {
    /// Field title
    pub title: String,
    /// Field value
    pub value: String,
    /// Whether Slack may lay the field out side by side with others
    pub short: bool,
}

impl AttachmentField {
    /// Creates a field.
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short,
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "title": self.title,
            "value": self.value,
            "short": self.short,
        })
    }
}

/// A generated attachment, before user properties are merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackAttachment {
    /// Plain-text summary for clients that cannot render attachments
    pub fallback: String,
    /// Main text
    pub text: String,
    /// Text above the attachment; omitted from the JSON when absent
    pub pretext: Option<String>,
    /// `good` or `danger`
    pub color: &'static str,
    /// Built-in fields followed by payload fields
    pub fields: Vec<AttachmentField>,
}

impl SlackAttachment {
    /// Converts the attachment into its JSON form.
    ///
    /// Keys keep a stable order: `fallback`, `text`, `pretext`, `color`,
    /// `mrkdwn_in`, `fields`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("fallback".into(), Value::from(self.fallback.as_str()));
        map.insert("text".into(), Value::from(self.text.as_str()));
        if let Some(pretext) = &self.pretext {
            map.insert("pretext".into(), Value::from(pretext.as_str()));
        }
        map.insert("color".into(), Value::from(self.color));
        map.insert("mrkdwn_in".into(), json!(MARKDOWN_IN));
        map.insert(
            "fields".into(),
            Value::Array(self.fields.iter().map(AttachmentField::to_value).collect()),
        );
        Value::Object(map)
    }
}
