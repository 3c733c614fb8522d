//! post-to-slack: build notifications for Slack
//!
//! A library for formatting build results into Slack attachments and
//! posting them through the bot `chat.postMessage` API.

pub mod config;
pub mod context;
pub mod message;
pub mod slack;
