//! Ready event handler for bot initialization.
//!
//! The `ready` event fires when the bot successfully connects to Discord's
//! gateway and completes the initial handshake. It is the point where the
//! bot's global slash commands are synced with Discord from the compile-time
//! command registry.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::command::CommandRegistry;

/// Handles the ready event when the bot connects to Discord.
///
/// Logs connection information, sets the bot's activity, and registers the
/// global slash commands. Registration failures are logged but do not take
/// the bot down; the gateway connection stays up.
///
/// # Arguments
/// - `registry` - The bot's command registry
/// - `ctx` - Discord context for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(registry: &CommandRegistry, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Woof!")));

    match Command::set_global_commands(&ctx.http, registry.create_commands()).await {
        Ok(commands) => tracing::info!("Synced {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to sync slash commands: {:?}", e),
    }
}
