//! Reply Bot Example
//!
//! Registers one command of each kind on an in-process [`LocalBot`] and
//! replays a short conversation through it.
//!
//! # Commands
//!
//! ```text
//! /autocomplete name:ping      → ping      (autocomplete)
//! /autocomplete name:status    → status    (autocomplete)
//! reply "!pin" to a message    → pin       (reply)
//! new thread named "!build"    → build     (thread)
//! ```
//!
//! # Usage
//!
//! ```bash
//! cargo run --package reply-bot
//! DISCOMMANDS_BOT__COMMAND_PREFIX='?' cargo run --package reply-bot
//! ```

use anyhow::Result;
use discommands::core::{MessageReference, Namespace};
use discommands::prelude::*;
use discommands::runtime::Outgoing;
use tracing::info;

// ============================================================================
// Command Callbacks
// ============================================================================

/// Answers `/autocomplete name:ping`.
async fn ping(interaction: Interaction) {
    info!("Pong for {}", interaction.user.name);
}

/// Answers `/autocomplete name:status`.
async fn status(interaction: Interaction) {
    let parameters = interaction.namespace.get_str("parameters").unwrap_or("-");
    info!("All systems nominal (parameters: {parameters})");
}

/// Pins the message being replied to.
async fn pin(target: ReplyTarget) -> Result<()> {
    match target.message() {
        Some(message) => info!("Pinned \"{}\" by {}", message.content, message.author.name),
        None => anyhow::bail!("message {} was deleted", target.id()),
    }
    Ok(())
}

/// Starts a build for a freshly created thread.
async fn build(thread: Thread) {
    info!("Build started in thread {} (channel {})", thread.id, thread.parent_id);
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigLoader::new().load()?;
    logging::init_from_config(&config.logging);

    let bot = LocalBot::from_config(&config.bot);
    let manager = CommandManager::with_options(bot.clone(), config.commands.to_options());

    manager.autocomplete(ping).register()?;
    manager.autocomplete(status).register()?;
    manager.reply(pin).register()?;
    manager.thread(build).register()?;

    let prefix = bot.command_prefix();
    let alice = User::new(1, "alice");
    let bob = User::new(2, "bob");

    // Typing into the name option
    let typing = Interaction::autocomplete(
        100,
        &config.commands.autocomplete_command,
        Namespace::new().with("name", "sta"),
        "name",
        alice.clone(),
        10,
    );
    bot.emit(typing).await;

    // Known and unknown autocomplete commands
    for (id, name) in [(101, "status"), (102, "deploy")] {
        let invoke = Interaction::application_command(
            id,
            &config.commands.autocomplete_command,
            Namespace::new().with("name", name).with("parameters", "verbose"),
            alice.clone(),
            10,
        );
        bot.emit(invoke).await;
    }

    // A reply command on a cached message
    let original = Message::new(200, 10, bob.clone(), "v1.2 is out");
    let reply = Message::new(201, 10, alice.clone(), format!("{prefix}pin"))
        .replying_to(MessageReference::new(200, 10).with_cached(original));
    bot.emit(reply).await;

    // Thread commands only fire with the prefix
    bot.emit(Thread::new(300, 10, format!("{prefix}build"))).await;
    bot.emit(Thread::new(301, 10, "build")).await;

    for outgoing in bot.take_outbox() {
        match outgoing {
            Outgoing::Ephemeral {
                interaction_id,
                content,
                ..
            } => info!("[ephemeral → {interaction_id}] {content}"),
            Outgoing::Choices {
                interaction_id,
                choices,
            } => {
                let labels: Vec<_> = choices.iter().map(|c| c.name.as_str()).collect();
                info!("[choices → {interaction_id}] {labels:?}");
            }
        }
    }

    Ok(())
}
