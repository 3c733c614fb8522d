//! Turns a [`NotificationRequest`] into the message to deliver.

use serde_json::{Map, Value};

use crate::context::BuildContext;

use super::attachment::{AttachmentField, COLOR_FAILURE, COLOR_SUCCESS, SlackAttachment};
use super::merge::deep_merge;
use super::request::{DefaultPayload, NotificationRequest};
use super::text::{format_links, normalize_channel, unescape_newlines};

/// A message ready for delivery: the normalized channel and the final
/// attachment with user properties merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedMessage {
    /// Normalized target; `None` lets Slack use the token's default
    pub channel: Option<String>,
    /// Final attachment JSON
    pub attachment: Value,
}

/// Formats the request against the given build context.
///
/// Pure: all build-environment facts come from `context`.
#[must_use]
pub fn format_message(request: &NotificationRequest, context: &BuildContext) -> FormattedMessage {
    let mut attachment = build_attachment(request, context).to_value();
    deep_merge(
        &mut attachment,
        Value::Object(request.attachment_properties.clone()),
    );

    FormattedMessage {
        channel: normalize_channel(request.channel.as_deref()),
        attachment,
    }
}

/// Builds the attachment before attachment properties are merged.
#[must_use]
pub fn build_attachment(request: &NotificationRequest, context: &BuildContext) -> SlackAttachment {
    // Newlines first: link rewriting must see the final text.
    let text = format_links(&unescape_newlines(
        request.message.as_deref().unwrap_or_default(),
    ));
    let pretext = request.pretext.as_deref().map(unescape_newlines);

    let mut fields = builtin_fields(request, context);
    fields.extend(payload_fields(&request.payload));

    SlackAttachment {
        fallback: text.clone(),
        text,
        pretext,
        color: if request.success {
            COLOR_SUCCESS
        } else {
            COLOR_FAILURE
        },
        fields,
    }
}

/// Built-in fields selected by the request, in canonical order.
#[must_use]
pub fn builtin_fields(request: &NotificationRequest, context: &BuildContext) -> Vec<AttachmentField> {
    request
        .default_payloads
        .iter()
        .filter_map(|payload| builtin_field(payload, request, context))
        .collect()
}

fn builtin_field(
    payload: DefaultPayload,
    request: &NotificationRequest,
    context: &BuildContext,
) -> Option<AttachmentField> {
    let field = match payload {
        DefaultPayload::Lane => AttachmentField::new("Lane", fact(context.lane_name.as_deref()), true),
        DefaultPayload::TestResult => {
            let result = if request.success { "Success" } else { "Error" };
            AttachmentField::new("Result", result, true)
        }
        DefaultPayload::GitBranch => {
            AttachmentField::new("Git Branch", fact(context.git_branch.as_deref()), true)
        }
        DefaultPayload::GitAuthor => {
            if request.hide_author_on_success && request.success {
                return None;
            }
            AttachmentField::new("Git Author", fact(context.git_author_email.as_deref()), true)
        }
        DefaultPayload::LastGitCommit => AttachmentField::new(
            "Git Commit",
            fact(context.last_git_commit_message.as_deref()),
            false,
        ),
        DefaultPayload::LastGitCommitHash => AttachmentField::new(
            "Git Commit Hash",
            fact(context.last_git_commit_hash.as_deref()),
            false,
        ),
    };
    Some(field)
}

fn fact(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// One field per payload entry, in insertion order.
#[must_use]
pub fn payload_fields(payload: &Map<String, Value>) -> Vec<AttachmentField> {
    payload
        .iter()
        .map(|(key, value)| AttachmentField::new(key.as_str(), format_links(&value_text(value)), false))
        .collect()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
