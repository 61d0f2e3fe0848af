//! Flat JSON file store. The file is re-read on every interaction; the admin tooling owns
//! writes and the last writer wins, so nothing here caches or locks.
use super::models::GuildData;
use crate::error::StoreError;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads one guild's section. A missing file or missing guild yields empty data.
    pub async fn load_guild(&self, guild_id: &str) -> Result<GuildData, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(target="store", path=%self.path.display(), "data file missing; treating as empty");
                return Ok(GuildData::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        self.parse_guild(&raw, guild_id)
    }

    /// Extracts a guild section from raw file bytes. Other guilds' sections are never
    /// deserialized, so a malformed neighbour cannot break this guild.
    pub fn parse_guild(&self, raw: &[u8], guild_id: &str) -> Result<GuildData, StoreError> {
        let parse_err = |source: serde_json::Error| StoreError::Parse {
            path: self.path.clone(),
            source,
        };
        let mut root: Value = serde_json::from_slice(raw).map_err(parse_err)?;
        let Some(section) = root.get_mut(guild_id).map(Value::take) else {
            tracing::debug!(target="store", guild_id=%guild_id, "no data stored for guild");
            return Ok(GuildData::default());
        };
        let mut guild: GuildData = serde_json::from_value(section).map_err(parse_err)?;
        for (role_id, tribe) in guild.tribes.iter_mut() {
            tribe.role_id = role_id.clone();
        }
        Ok(guild)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "111": {
            "players": { "u1": { "age": "24", "emojiCode": "<:a:1>" } },
            "tribes": {
                "r1": { "emoji": "🔥", "castlist": "default", "color": "#ff0000" },
                "r2": { "castlist": "post_merge", "showPlayerEmojis": false }
            },
            "pronounRoleIDs": ["p1"],
            "timezones": { "tz1": { "offset": 5.5 } },
            "somethingElse": { "kept": "by admin tooling" }
        },
        "222": "corrupt section"
    }"##;

    #[test]
    fn parses_guild_section_and_fills_role_ids() {
        let store = JsonStore::new("test.json");
        let guild = store.parse_guild(SAMPLE.as_bytes(), "111").unwrap();
        assert_eq!(guild.tribes.len(), 2);
        assert_eq!(guild.tribes["r1"].role_id, "r1");
        assert_eq!(guild.tribes["r2"].castlist, "post_merge");
        assert!(!guild.tribes["r2"].show_player_emojis);
        assert_eq!(guild.pronoun_role_ids, vec!["p1".to_string()]);
        assert_eq!(guild.timezones["tz1"].offset, 5.5);
    }

    #[test]
    fn unknown_guild_is_empty() {
        let store = JsonStore::new("test.json");
        let guild = store.parse_guild(SAMPLE.as_bytes(), "999").unwrap();
        assert!(guild.tribes.is_empty());
    }

    #[test]
    fn corrupt_section_is_a_parse_error() {
        let store = JsonStore::new("test.json");
        assert!(matches!(
            store.parse_guild(SAMPLE.as_bytes(), "222"),
            Err(StoreError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let store = JsonStore::new("/definitely/not/here/playerData.json");
        let guild = store.load_guild("111").await.unwrap();
        assert!(guild.players.is_empty());
    }
}
