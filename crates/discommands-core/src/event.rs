//! Event system for the host chat framework.
//!
//! The host framework delivers three kinds of events to discommands:
//!
//! - [`EventKind::InteractionCreate`] carrying an [`Interaction`](crate::Interaction)
//! - [`EventKind::MessageCreate`] carrying a [`Message`](crate::Message)
//! - [`EventKind::ThreadCreate`] carrying a [`Thread`](crate::Thread)
//!
//! Events travel through listeners type-erased as [`BoxedEvent`] and are
//! downcast back to their concrete model type by whoever consumes them.
//!
//! ```rust,ignore
//! use discommands_core::{BoxedEvent, Thread};
//!
//! let event = BoxedEvent::new(thread);
//! if let Some(thread) = event.downcast_ref::<Thread>() {
//!     println!("thread created: {}", thread.name);
//! }
//! ```

use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use futures::future::BoxFuture;

// ============================================================================
// Event Kind
// ============================================================================

/// The event streams a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Any interaction (slash command, autocomplete request, component, ...).
    InteractionCreate,
    /// Any message posted in a channel the bot can see.
    MessageCreate,
    /// A newly created thread.
    ThreadCreate,
}

impl EventKind {
    /// All event kinds, in declaration order.
    pub const ALL: [EventKind; 3] = [
        EventKind::InteractionCreate,
        EventKind::MessageCreate,
        EventKind::ThreadCreate,
    ];

    /// Returns the canonical name of this event kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InteractionCreate => "interaction_create",
            Self::MessageCreate => "message_create",
            Self::ThreadCreate => "thread_create",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown event kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event kind '{0}'")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interaction_create" | "interaction" | "on_interaction" => Ok(Self::InteractionCreate),
            "message_create" | "message" | "on_message" => Ok(Self::MessageCreate),
            "thread_create" | "on_thread_create" => Ok(Self::ThreadCreate),
            _ => Err(UnknownEventKind(s.to_string())),
        }
    }
}

// ============================================================================
// Core Event Trait
// ============================================================================

/// The base trait for every object the host framework hands to listeners.
pub trait Event: Any + Send + Sync {
    /// Returns the human-readable name of this event type.
    fn event_name(&self) -> &'static str;

    /// Returns the stream this event is delivered on.
    fn kind(&self) -> EventKind;

    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the concrete Rust type name of this event.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// Boxed Event
// ============================================================================

/// A type-erased container for events that supports runtime downcasting.
///
/// `BoxedEvent` wraps any [`Event`] in an `Arc`, so cloning it for every
/// listener of a stream is cheap.
#[derive(Clone)]
pub struct BoxedEvent {
    inner: Arc<dyn Event>,
}

impl BoxedEvent {
    /// Creates a new `BoxedEvent` from any type implementing `Event`.
    pub fn new<E: Event + 'static>(event: E) -> Self {
        Self {
            inner: Arc::new(event),
        }
    }

    /// Returns the inner `Arc<dyn Event>`.
    pub fn inner(&self) -> &Arc<dyn Event> {
        &self.inner
    }

    /// Attempts to downcast to a concrete event type.
    pub fn downcast_ref<E: Event + 'static>(&self) -> Option<&E> {
        self.inner.as_any().downcast_ref()
    }

    /// Returns `true` if the wrapped event is of type `E`.
    pub fn is<E: Event + 'static>(&self) -> bool {
        self.inner.as_any().is::<E>()
    }
}

impl std::ops::Deref for BoxedEvent {
    type Target = dyn Event;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl fmt::Debug for BoxedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedEvent")
            .field("event_name", &self.event_name())
            .field("kind", &self.kind())
            .finish()
    }
}

// ============================================================================
// Listeners
// ============================================================================

/// A type-erased event listener subscribed through
/// [`Bot::add_listener`](crate::Bot::add_listener).
pub type BoxedListener = Arc<dyn Fn(BoxedEvent) -> BoxFuture<'static, ()> + Send + Sync>;

/// Wraps an async closure into a [`BoxedListener`].
pub fn into_listener<F, Fut>(f: F) -> BoxedListener
where
    F: Fn(BoxedEvent) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(move |event| Box::pin(f(event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Thread, User};

    fn thread(name: &str) -> Thread {
        Thread {
            id: 1,
            parent_id: 2,
            name: name.to_string(),
            owner: Some(User::new(3, "alice")),
        }
    }

    #[test]
    fn test_event_kind_from_str() {
        assert_eq!(
            "on_message".parse::<EventKind>().unwrap(),
            EventKind::MessageCreate
        );
        assert_eq!(
            "Interaction_Create".parse::<EventKind>().unwrap(),
            EventKind::InteractionCreate
        );
        assert!("on_ready".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_boxed_event_downcast() {
        let event = BoxedEvent::new(thread("!build"));
        assert!(event.is::<Thread>());
        assert_eq!(event.kind(), EventKind::ThreadCreate);
        assert_eq!(event.downcast_ref::<Thread>().unwrap().name, "!build");
        assert!(event.downcast_ref::<crate::model::Message>().is_none());
    }

    #[tokio::test]
    async fn test_into_listener_runs_closure() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener = into_listener(move |event: BoxedEvent| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(event.event_name());
            }
        });

        listener(BoxedEvent::new(thread("x"))).await;
        assert_eq!(*seen.lock().unwrap(), vec!["thread_create"]);
    }
}
