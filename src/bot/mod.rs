//! Discord bot integration.
//!
//! This module provides the bot's connection to Discord: client
//! construction, gateway event handling, and slash command registration.
//! The bot registers its commands globally once the `ready` event fires and
//! dispatches every command interaction through the compile-time
//! [`crate::command::CommandRegistry`].
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, and deletion
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `GUILD_MEMBERS` - Fetch the member list for /chosen (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
