//! Serde models for the per-guild section of the flat JSON store.
//!
//! Layout of the file (unknown keys are ignored so the admin tooling can keep extra data):
//! ```json
//! {
//!   "<guildId>": {
//!     "players":   { "<userId>": { "age": "21", "emojiCode": "<:alice:123>" } },
//!     "tribes":    { "<roleId>": { "emoji": "🔥", "color": "#e67e22", "castlist": "default",
//!                                  "showPlayerEmojis": true } },
//!     "pronounRoleIDs": ["<roleId>"],
//!     "timezones": { "<roleId>": { "offset": -5 } }
//!   }
//! }
//! ```
use crate::constants::DEFAULT_CASTLIST;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GuildData {
    #[serde(default)]
    pub players: HashMap<String, PlayerRecord>,
    /// Keyed by role id; a BTreeMap keeps iteration order stable.
    #[serde(default)]
    pub tribes: BTreeMap<String, TribeRecord>,
    #[serde(default, rename = "pronounRoleIDs")]
    pub pronoun_role_ids: Vec<String>,
    #[serde(default)]
    pub timezones: HashMap<String, TimezoneRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(default)]
    pub age: Option<Scalar>,
    #[serde(default)]
    pub emoji_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TribeRecord {
    /// Filled from the map key when the record is read.
    #[serde(skip)]
    pub role_id: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub color: Option<Scalar>,
    #[serde(default = "default_castlist")]
    pub castlist: String,
    #[serde(default = "default_true")]
    pub show_player_emojis: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TimezoneRecord {
    pub offset: f64,
}

/// Values the admin flows have written both as strings and as numbers over time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(i64),
    Text(String),
}

impl Scalar {
    /// Interprets the value as an RGB colour: `"#e67e22"`, `"e67e22"`, `"0xe67e22"` or a number.
    pub fn as_color(&self) -> Option<u32> {
        match self {
            Scalar::Number(n) => u32::try_from(*n).ok().filter(|c| *c <= 0xFF_FFFF),
            Scalar::Text(s) => {
                let trimmed = s.trim();
                let hex = trimmed
                    .strip_prefix('#')
                    .or_else(|| trimmed.strip_prefix("0x"))
                    .unwrap_or(trimmed);
                if hex.is_empty() || hex.len() > 6 {
                    return None;
                }
                u32::from_str_radix(hex, 16).ok()
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

fn default_castlist() -> String {
    DEFAULT_CASTLIST.to_string()
}

fn default_true() -> bool {
    true
}
