//! The /schedule command: creates a guild scheduled event from
//! user-supplied dates.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateScheduledEvent, ScheduledEventType, Timestamp,
};
use serenity::async_trait;

use crate::{
    command::{option_str, respond, CommandHandler},
    error::{internal::InternalError, AppError},
    util::window::{DateWindowResolver, ResolutionError},
};

/// Schedules an external guild event over a resolved date window.
pub struct ScheduleCommand {
    resolver: DateWindowResolver,
}

impl ScheduleCommand {
    /// Creates the command with a resolver for the configured zone.
    ///
    /// # Arguments
    /// - `zone_name` - IANA timezone name from configuration
    ///
    /// # Returns
    /// - `Ok(ScheduleCommand)` - Zone resolved
    /// - `Err(ResolutionError::InvalidTimeZone)` - Unknown zone identifier
    pub fn new(zone_name: &str) -> Result<Self, ResolutionError> {
        Ok(Self {
            resolver: DateWindowResolver::new(zone_name)?,
        })
    }
}

#[async_trait]
impl CommandHandler for ScheduleCommand {
    fn name(&self) -> &'static str {
        "schedule"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Schedule a new event")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "location", "Location")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Name").required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "description", "Description")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "end",
                    "End date/time (optional)",
                )
                .required(false),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "start",
                    "Start date/time (optional)",
                )
                .required(false),
            )
    }

    async fn handle(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        let Some(guild_id) = command.guild_id else {
            return respond(ctx, command, "This command only works in a server.").await;
        };

        // Required options are enforced by Discord; missing ones indicate a
        // malformed interaction.
        let (Some(location), Some(name), Some(description)) = (
            option_str(command, "location"),
            option_str(command, "name"),
            option_str(command, "description"),
        ) else {
            return respond(ctx, command, "Missing required options.").await;
        };

        let start_text = option_str(command, "start");
        let end_text = option_str(command, "end");

        // The clock is read here, once per interaction; the resolver itself
        // never consults it.
        let now = Utc::now().with_timezone(&self.resolver.timezone());

        let window = match self.resolver.resolve_window(start_text, end_text, now) {
            Ok(window) => window,
            Err(err) => return respond(ctx, command, err.to_string()).await,
        };

        let event = CreateScheduledEvent::new(
            ScheduledEventType::External,
            name,
            discord_timestamp(&window.start)?,
        )
        .description(description)
        .end_time(discord_timestamp(&window.end)?)
        .location(location);

        match guild_id.create_scheduled_event(&ctx.http, event).await {
            Ok(event) => {
                tracing::info!(
                    "Scheduled event '{}' in guild {} from {} to {}",
                    event.name,
                    guild_id,
                    window.start,
                    window.end
                );

                respond(
                    ctx,
                    command,
                    format!(
                        "\"{}\" scheduled from {} to {} at {}",
                        event.name,
                        window.start.format("%Y-%m-%dT%H:%M%:z"),
                        window.end.format("%Y-%m-%dT%H:%M%:z"),
                        location
                    ),
                )
                .await
            }
            Err(err) => {
                tracing::error!("Failed to create scheduled event: {:?}", err);

                respond(ctx, command, format!("Error creating event: {}", err)).await
            }
        }
    }
}

/// Converts a resolved instant to a Discord timestamp.
///
/// # Returns
/// - `Ok(Timestamp)` - Conversion succeeded
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - Instant lies
///   outside Discord's representable range
fn discord_timestamp(instant: &DateTime<Tz>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(instant.timestamp()).map_err(|e| {
        AppError::InternalErr(InternalError::InvalidDiscordTimestamp {
            timestamp: instant.timestamp(),
            reason: e.to_string(),
        })
    })
}
