//! Message formatting.
//!
//! This module provides:
//! - The per-invocation request ([`NotificationRequest`], [`DefaultPayloads`])
//! - Text transforms ([`unescape_newlines`], [`format_links`], [`normalize_channel`])
//! - The generated attachment ([`SlackAttachment`], [`AttachmentField`])
//! - Deep merge of attachment properties ([`deep_merge`])
//! - The formatter itself ([`format_message`])

mod attachment;
mod formatter;
mod merge;
mod request;
mod text;

#[cfg(test)]
mod merge_tests;

pub use attachment::{AttachmentField, COLOR_FAILURE, COLOR_SUCCESS, MARKDOWN_IN, SlackAttachment};
pub use formatter::{FormattedMessage, build_attachment, builtin_fields, format_message, payload_fields};
pub use merge::{deep_merge, merge_maps};
pub use request::{DefaultPayload, DefaultPayloads, NotificationRequest, UnknownPayload};
pub use text::{format_links, normalize_channel, unescape_newlines};
