//! Basic commands: /woof and /help.

use serenity::all::{CommandInteraction, Context, CreateCommand};
use serenity::async_trait;

use crate::{
    command::{respond, CommandHandler},
    error::AppError,
};

/// Usage instructions shown by /help.
const HELP_TEXT: &str = "\
Here are the available commands:
/woof - Get a happy woof

/schedule - Schedule an event. Start defaults to 08:00, end to 23:59
- <location> - Location of the event
- <name> - Name of the event
- <description> - Event description
- <end date/time> - Format: DD-MM-YYYY or HH:MM DD.MM.YYYY
- <start date/time> - Same format as end

/chosen - Pick a random member (or from a role)
- <role> (optional) - Restrict to a role";

/// Replies with a happy woof.
pub struct WoofCommand;

#[async_trait]
impl CommandHandler for WoofCommand {
    fn name(&self) -> &'static str {
        "woof"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Get a happy woof")
    }

    async fn handle(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        respond(ctx, command, "Woof!").await
    }
}

/// Shows detailed usage instructions for all commands.
pub struct HelpCommand;

#[async_trait]
impl CommandHandler for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Detailed instructions for using commands")
    }

    async fn handle(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        respond(ctx, command, HELP_TEXT).await
    }
}
