//! # discommands core
//!
//! The host-framework model consumed by discommands.
//!
//! discommands sits on top of an external chat-bot framework. This crate
//! describes the small part of that framework the command helper relies on:
//!
//! - **Events**: type-erased framework events ([`Event`], [`BoxedEvent`]) and
//!   the streams they arrive on ([`EventKind`])
//! - **Models**: the payload shapes ([`Interaction`], [`Message`], [`Thread`])
//!   and slash-command descriptions ([`AppCommand`], [`Choice`])
//! - **Bot**: the [`Bot`] trait a framework adapter implements to deliver
//!   events, own the command tree and send responses
//!
//! ```text
//! ┌───────────────┐  BoxedEvent   ┌────────────────┐  payload   ┌──────────┐
//! │ Host framework│──────────────▶│ CommandManager │───────────▶│ callback │
//! │   (impl Bot)  │◀──────────────│  (framework)   │            └──────────┘
//! └───────────────┘ send/register └────────────────┘
//! ```

pub mod bot;
pub mod error;
pub mod event;
pub mod model;

pub use bot::{Bot, BoxedBot};
pub use error::{ApiError, ApiResult};
pub use event::{BoxedEvent, BoxedListener, Event, EventKind, UnknownEventKind, into_listener};
pub use model::{
    AppCommand, AppCommandOption, Choice, Id, Interaction, InteractionType, InvokedCommand,
    Message, MessageReference, MessageType, Namespace, ReplyTarget, ResolvedReference, Thread,
    User,
};
