use std::sync::Arc;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod ready;

use crate::command::CommandRegistry;

/// Discord bot event handler
pub struct Handler {
    registry: Arc<CommandRegistry>,
}

impl Handler {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.registry, ctx, ready).await;
    }

    /// Called when an interaction is created (slash commands)
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.registry, ctx, interaction).await;
    }
}
