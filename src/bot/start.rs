use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, command::CommandRegistry, config::Config, error::AppError};

/// Builds the Discord client with the bot's event handler and command
/// registry.
///
/// # Arguments
/// - `config` - Application configuration (token and timezone)
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError)` - Invalid timezone or client construction failure
pub async fn init_bot(config: &Config) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in the Discord
    // Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

    let registry = Arc::new(CommandRegistry::new(config)?);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(registry))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner.
///
/// Blocks until the bot shuts down or the gateway connection fails
/// permanently.
///
/// # Arguments
/// - `client` - Client produced by [`init_bot`]
///
/// # Returns
/// - `Ok(())` - Bot shut down cleanly
/// - `Err(AppError)` - Gateway connection failure
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
