use std::{env, time::Duration};

use serenity::all::{ChannelId, RoleId};
use thiserror::Error;

const DEFAULT_TICK_SECONDS: u64 = 5;
const DEFAULT_NETWORK_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} contains an invalid id: {1:?}")]
    InvalidId(&'static str, String),
    #[error("{0} must be a whole number of seconds greater than zero, got {1:?}")]
    InvalidSeconds(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct GiveawayConfig {
    pub discord_token: String,
    pub debug: bool,
    pub channel: Option<ChannelId>,
    pub eligible_roles: Vec<RoleId>,
    pub admin_roles: Vec<RoleId>,
    pub tick_interval: Duration,
    pub network_timeout: Duration,
}

impl GiveawayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let debug = lookup("DEBUG").unwrap_or(false.to_string()) == "true";

        let channel = match lookup("GIVEAWAY_CHANNEL_ID") {
            Some(value) if !value.trim().is_empty() => {
                Some(ChannelId::new(parse_id("GIVEAWAY_CHANNEL_ID", &value)?))
            }
            _ => None,
        };

        Ok(GiveawayConfig {
            discord_token,
            debug,
            channel,
            eligible_roles: parse_roles("GIVEAWAY_ELIGIBLE_ROLES", lookup("GIVEAWAY_ELIGIBLE_ROLES"))?,
            admin_roles: parse_roles("GIVEAWAY_ADMIN_ROLES", lookup("GIVEAWAY_ADMIN_ROLES"))?,
            tick_interval: parse_seconds(
                "GIVEAWAY_TICK_SECONDS",
                lookup("GIVEAWAY_TICK_SECONDS"),
                DEFAULT_TICK_SECONDS,
            )?,
            network_timeout: parse_seconds(
                "GIVEAWAY_NETWORK_TIMEOUT_SECONDS",
                lookup("GIVEAWAY_NETWORK_TIMEOUT_SECONDS"),
                DEFAULT_NETWORK_TIMEOUT_SECONDS,
            )?,
        })
    }
}

fn parse_id(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidId(key, value.to_string())),
    }
}

fn parse_roles(key: &'static str, value: Option<String>) -> Result<Vec<RoleId>, ConfigError> {
    let Some(value) = value else {
        return Ok(vec![]);
    };

    value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_id(key, part).map(RoleId::new))
        .collect()
}

fn parse_seconds(
    key: &'static str,
    value: Option<String>,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(default));
    };

    match value.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(ConfigError::InvalidSeconds(key, value)),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use serenity::all::{ChannelId, RoleId};

    use super::{ConfigError, GiveawayConfig};

    fn config(pairs: &[(&str, &str)]) -> Result<GiveawayConfig, ConfigError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        GiveawayConfig::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DISCORD_TOKEN", "token")]).unwrap();

        assert!(!config.debug);
        assert_eq!(config.channel, None);
        assert!(config.eligible_roles.is_empty());
        assert!(config.admin_roles.is_empty());
        assert_eq!(config.tick_interval, Duration::from_secs(5));
        assert_eq!(config.network_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_token_is_required() {
        assert_eq!(
            config(&[]).unwrap_err(),
            ConfigError::Missing("DISCORD_TOKEN")
        );
    }

    #[test]
    fn test_full_configuration() {
        let config = config(&[
            ("DISCORD_TOKEN", "token"),
            ("DEBUG", "true"),
            ("GIVEAWAY_CHANNEL_ID", "1041788629250482208"),
            ("GIVEAWAY_ELIGIBLE_ROLES", "11, 12,"),
            ("GIVEAWAY_ADMIN_ROLES", "13"),
            ("GIVEAWAY_TICK_SECONDS", "10"),
            ("GIVEAWAY_NETWORK_TIMEOUT_SECONDS", "3"),
        ])
        .unwrap();

        assert!(config.debug);
        assert_eq!(config.channel, Some(ChannelId::new(1041788629250482208)));
        assert_eq!(config.eligible_roles, vec![RoleId::new(11), RoleId::new(12)]);
        assert_eq!(config.admin_roles, vec![RoleId::new(13)]);
        assert_eq!(config.tick_interval, Duration::from_secs(10));
        assert_eq!(config.network_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert_eq!(
            config(&[("DISCORD_TOKEN", "token"), ("GIVEAWAY_CHANNEL_ID", "general")]).unwrap_err(),
            ConfigError::InvalidId("GIVEAWAY_CHANNEL_ID", "general".to_string())
        );
        assert_eq!(
            config(&[("DISCORD_TOKEN", "token"), ("GIVEAWAY_ELIGIBLE_ROLES", "1,x")]).unwrap_err(),
            ConfigError::InvalidId("GIVEAWAY_ELIGIBLE_ROLES", "x".to_string())
        );
        assert_eq!(
            config(&[("DISCORD_TOKEN", "token"), ("GIVEAWAY_TICK_SECONDS", "0")]).unwrap_err(),
            ConfigError::InvalidSeconds("GIVEAWAY_TICK_SECONDS", "0".to_string())
        );
    }
}
