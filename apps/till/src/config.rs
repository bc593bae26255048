//! # Session Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILL_*`)
//! 2. Defaults (this file)
//!
//! Logging is configured separately through `RUST_LOG`.

use till_core::DiscountRate;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Discount percentage applied by the `discount` command.
pub const ENV_DISCOUNT_PERCENT: &str = "TILL_DISCOUNT_PERCENT";

/// Print a `> ` prompt before each line when truthy.
pub const ENV_PROMPT: &str = "TILL_PROMPT";

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Discount rate of the session's register.
    /// Default: none
    pub discount: DiscountRate,

    /// Show an input prompt (interactive use).
    /// Default: off, so piped transcripts stay clean
    pub prompt: bool,
}

impl SessionConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(raw) = lookup(ENV_DISCOUNT_PERCENT) {
            let pct: f64 = raw.trim().parse().map_err(|_| {
                AppError::config(format!(
                    "{} must be a number, got '{}'",
                    ENV_DISCOUNT_PERCENT, raw
                ))
            })?;
            config.discount = DiscountRate::from_percentage(pct)
                .map_err(|e| AppError::config(format!("{}: {}", ENV_DISCOUNT_PERCENT, e)))?;
        }

        if let Some(raw) = lookup(ENV_PROMPT) {
            config.prompt = parse_flag(&raw).ok_or_else(|| {
                AppError::config(format!("{} must be a boolean, got '{}'", ENV_PROMPT, raw))
            })?;
        }

        debug!(
            discount = config.discount.percentage(),
            prompt = config.prompt,
            "Session configuration loaded"
        );
        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
