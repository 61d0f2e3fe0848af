//! Process configuration read from the environment (a `.env` file is loaded first by `main`).
use crate::castlist::layout::LayoutLimits;
use crate::constants::DEFAULT_DATA_FILE;
use crate::error::ConfigError;
use serenity::model::id::GuildId;
use std::path::PathBuf;

pub const ENV_TOKEN: &str = "DISCORD_TOKEN";
pub const ENV_GUILD_ID: &str = "GUILD_ID";
pub const ENV_DATA_FILE: &str = "CASTBOT_DATA_FILE";
pub const ENV_COMPONENT_LIMIT: &str = "CASTLIST_COMPONENT_LIMIT";
pub const ENV_NAV_RESERVE: &str = "CASTLIST_NAV_RESERVE";
pub const ENV_HEADER_COMPONENTS: &str = "CASTLIST_HEADER_COMPONENTS";
pub const ENV_COMPONENTS_PER_MEMBER: &str = "CASTLIST_COMPONENTS_PER_MEMBER";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    /// When set, slash commands are registered on this guild only (instant updates while testing).
    pub guild_id: Option<GuildId>,
    pub data_file: PathBuf,
    pub limits: LayoutLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_TOKEN))?;

        let guild_id = match lookup(ENV_GUILD_ID) {
            Some(raw) => {
                let id = parse_number::<u64>(ENV_GUILD_ID, &raw)?;
                if id == 0 {
                    return Err(invalid(ENV_GUILD_ID, &raw, "guild id cannot be zero"));
                }
                Some(GuildId::new(id))
            }
            None => None,
        };

        let data_file = lookup(ENV_DATA_FILE)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let mut limits = LayoutLimits::default();
        if let Some(raw) = lookup(ENV_COMPONENT_LIMIT) {
            limits.component_limit = parse_number(ENV_COMPONENT_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_NAV_RESERVE) {
            limits.navigation_reserve = parse_number(ENV_NAV_RESERVE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_HEADER_COMPONENTS) {
            limits.header_components = parse_number(ENV_HEADER_COMPONENTS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_COMPONENTS_PER_MEMBER) {
            let per_member: usize = parse_number(ENV_COMPONENTS_PER_MEMBER, &raw)?;
            if per_member == 0 {
                return Err(invalid(
                    ENV_COMPONENTS_PER_MEMBER,
                    &raw,
                    "every member card costs at least one component",
                ));
            }
            limits.components_per_member = per_member;
        }

        Ok(Self {
            token,
            guild_id,
            data_file,
            limits,
        })
    }
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| invalid(key, raw, &e.to_string()))
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
