//! Application error types.
//!
//! This module provides the application's error hierarchy. The `AppError`
//! enum is the top-level error type that wraps domain-specific errors from
//! configuration, date window resolution, and the Discord client. Every
//! variant uses `#[from]` for automatic conversion with `?`; the Serenity
//! error is boxed manually to keep the enum small.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::{
    error::{config::ConfigError, internal::InternalError},
    util::window::ResolutionError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Date window resolution error.
    ///
    /// Surfaces at startup when the configured timezone is invalid; during
    /// interactions the command layer reports resolution errors directly to
    /// the user instead of propagating them here.
    #[error(transparent)]
    WindowErr(#[from] ResolutionError),

    /// Internal issue indicating unexpected behavior and possible bugs.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as
/// serenity::Error is very large and would make all AppError variants
/// larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
