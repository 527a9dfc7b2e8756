//! Slash command handlers and their registry.
//!
//! Every command the bot exposes is described by a [`CommandHandler`]: its
//! name, the `CreateCommand` descriptor sent to Discord during registration,
//! and the async handler invoked when an interaction for it arrives. The
//! full command set is assembled once, at startup, in
//! [`CommandRegistry::new`] - the set is static, so there is no runtime
//! discovery of handler modules.

pub mod general;
pub mod randomizer;
pub mod schedule;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::async_trait;

use crate::{config::Config, error::AppError};

/// A single slash command: descriptor plus interaction handler.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name as registered with Discord.
    fn name(&self) -> &'static str;

    /// Builds the registration descriptor for this command.
    fn register(&self) -> CreateCommand;

    /// Handles one interaction invoking this command.
    async fn handle(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError>;
}

/// The bot's full command set, assembled in one place at startup.
pub struct CommandRegistry {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Assembles the command registry.
    ///
    /// # Arguments
    /// - `config` - Application configuration (supplies the timezone for
    ///   the schedule command)
    ///
    /// # Returns
    /// - `Ok(CommandRegistry)` - All handlers constructed
    /// - `Err(AppError::WindowErr(InvalidTimeZone))` - Configured timezone
    ///   does not name a known zone
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            handlers: vec![
                Box::new(general::WoofCommand),
                Box::new(general::HelpCommand),
                Box::new(randomizer::ChosenCommand),
                Box::new(schedule::ScheduleCommand::new(&config.timezone)?),
            ],
        })
    }

    /// Builds the registration descriptors for all commands.
    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.handlers.iter().map(|handler| handler.register()).collect()
    }

    /// Looks up a handler by command name.
    pub fn find(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.handlers
            .iter()
            .find(|handler| handler.name() == name)
            .map(|handler| handler.as_ref())
    }
}

/// Extracts a string option from an interaction by name.
pub(crate) fn option_str<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

/// Sends a plain text message as the interaction response.
pub(crate) async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new().content(content);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}
