//! Thread payloads.

use std::any::Any;

use serde::{Deserialize, Serialize};

use super::{Id, User};
use crate::event::{Event, EventKind};

/// A thread delivered on [`EventKind::ThreadCreate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    /// Thread ID.
    pub id: Id,
    /// Channel the thread was created in.
    pub parent_id: Id,
    /// Thread name.
    pub name: String,
    /// The user who created the thread, when known.
    #[serde(default)]
    pub owner: Option<User>,
}

impl Thread {
    /// Creates a thread without owner information.
    pub fn new(id: Id, parent_id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            parent_id,
            name: name.into(),
            owner: None,
        }
    }
}

impl Event for Thread {
    fn event_name(&self) -> &'static str {
        "thread_create"
    }

    fn kind(&self) -> EventKind {
        EventKind::ThreadCreate
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
