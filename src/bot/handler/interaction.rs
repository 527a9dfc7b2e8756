//! Interaction event handler for slash command dispatch.

use serenity::all::{Context, Interaction};

use crate::command::CommandRegistry;

/// Dispatches a command interaction to its registered handler.
///
/// Non-command interactions and unknown command names are ignored (the
/// latter logged, since they indicate stale registrations). Handler errors
/// are logged here rather than propagated - one failed interaction must not
/// affect the gateway connection.
///
/// # Arguments
/// - `registry` - The bot's command registry
/// - `ctx` - Discord context for responding to the interaction
/// - `interaction` - The incoming interaction
pub async fn handle_interaction_create(
    registry: &CommandRegistry,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(handler) = registry.find(command.data.name.as_str()) else {
        tracing::warn!("Received unknown command /{}", command.data.name);
        return;
    };

    tracing::debug!(
        "Dispatching /{} for user {}",
        command.data.name,
        command.user.id
    );

    if let Err(e) = handler.handle(&ctx, &command).await {
        tracing::error!("Command /{} failed: {:?}", command.data.name, e);
    }
}
