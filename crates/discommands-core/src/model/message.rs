//! Message payloads and reply references.

use std::any::Any;

use serde::{Deserialize, Serialize};

use super::{Id, User};
use crate::event::{Event, EventKind};

/// Message type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// A regular message.
    #[default]
    Default,
    /// A message sent as a reply to another message.
    Reply,
    /// System message announcing a new thread.
    ThreadCreated,
    /// Anything else the framework emits.
    Other,
}

/// A message delivered on [`EventKind::MessageCreate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message ID.
    pub id: Id,
    /// Channel the message was posted in.
    pub channel_id: Id,
    /// Message type.
    #[serde(rename = "type", default)]
    pub kind: MessageType,
    /// Message author.
    pub author: User,
    /// Text content; may be empty for attachment-only messages.
    #[serde(default)]
    pub content: String,
    /// The message this one refers to, for replies.
    #[serde(default)]
    pub reference: Option<MessageReference>,
}

impl Message {
    /// Creates a regular message.
    pub fn new(id: Id, channel_id: Id, author: User, content: impl Into<String>) -> Self {
        Self {
            id,
            channel_id,
            kind: MessageType::Default,
            author,
            content: content.into(),
            reference: None,
        }
    }

    /// Turns this message into a reply carrying `reference`.
    pub fn replying_to(mut self, reference: MessageReference) -> Self {
        self.kind = MessageType::Reply;
        self.reference = Some(reference);
        self
    }

    /// Returns `true` for reply-type messages.
    pub fn is_reply(&self) -> bool {
        self.kind == MessageType::Reply
    }
}

impl Event for Message {
    fn event_name(&self) -> &'static str {
        "message"
    }

    fn kind(&self) -> EventKind {
        EventKind::MessageCreate
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The resolved form of a referenced message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResolvedReference {
    /// The referenced message as fetched by the framework.
    Message(Box<Message>),
    /// The referenced message was deleted before it could be resolved.
    Deleted {
        /// ID of the deleted message.
        id: Id,
        /// Channel of the deleted message.
        channel_id: Id,
    },
}

/// A pointer from a reply to the message it replies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReference {
    /// ID of the referenced message.
    pub message_id: Id,
    /// Channel of the referenced message.
    pub channel_id: Id,
    /// The referenced message, if it is in the framework's local cache.
    #[serde(default)]
    pub cached_message: Option<Box<Message>>,
    /// The referenced message as resolved by the framework, if available.
    #[serde(default)]
    pub resolved: Option<ResolvedReference>,
}

impl MessageReference {
    /// Creates a reference to `message_id` with neither form available.
    pub fn new(message_id: Id, channel_id: Id) -> Self {
        Self {
            message_id,
            channel_id,
            cached_message: None,
            resolved: None,
        }
    }

    /// Sets the locally cached copy of the referenced message.
    pub fn with_cached(mut self, message: Message) -> Self {
        self.cached_message = Some(Box::new(message));
        self
    }

    /// Sets the resolved form of the referenced message.
    pub fn with_resolved(mut self, resolved: ResolvedReference) -> Self {
        self.resolved = Some(resolved);
        self
    }

    /// Returns the message being replied to.
    ///
    /// The cached copy wins over the resolved one; `None` when neither is
    /// available.
    pub fn reply_target(&self) -> Option<ReplyTarget> {
        if let Some(cached) = &self.cached_message {
            return Some(ReplyTarget::Message((**cached).clone()));
        }
        self.resolved.as_ref().map(|resolved| match resolved {
            ResolvedReference::Message(message) => ReplyTarget::Message((**message).clone()),
            ResolvedReference::Deleted { id, channel_id } => ReplyTarget::Deleted {
                id: *id,
                channel_id: *channel_id,
            },
        })
    }
}

/// The message a reply command acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyTarget {
    /// The replied-to message.
    Message(Message),
    /// The replied-to message no longer exists.
    Deleted {
        /// ID of the deleted message.
        id: Id,
        /// Channel of the deleted message.
        channel_id: Id,
    },
}

impl ReplyTarget {
    /// Returns the replied-to message unless it was deleted.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Message(message) => Some(message),
            Self::Deleted { .. } => None,
        }
    }

    /// Returns the ID of the replied-to message.
    pub fn id(&self) -> Id {
        match self {
            Self::Message(message) => message.id,
            Self::Deleted { id, .. } => *id,
        }
    }
}
