//! Tribe and castlist queries over a loaded guild section.
use super::models::{GuildData, TribeRecord};
use crate::constants::DEFAULT_CASTLIST;

/// Tribe records assigned to `castlist`, in role-id order.
pub fn tribes_in_castlist(guild: &GuildData, castlist: &str) -> Vec<TribeRecord> {
    guild
        .tribes
        .values()
        .filter(|t| t.castlist == castlist)
        .cloned()
        .collect()
}

/// Every castlist name with at least one tribe; `default` first, the rest alphabetical.
pub fn castlist_names(guild: &GuildData) -> Vec<String> {
    let mut names: Vec<String> = guild.tribes.values().map(|t| t.castlist.clone()).collect();
    names.sort_by(|a, b| {
        (a != DEFAULT_CASTLIST)
            .cmp(&(b != DEFAULT_CASTLIST))
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
            .then_with(|| a.cmp(b))
    });
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::TribeRecord;

    fn guild_with(castlists: &[(&str, &str)]) -> GuildData {
        let mut guild = GuildData::default();
        for (role, castlist) in castlists {
            guild.tribes.insert(
                role.to_string(),
                TribeRecord {
                    role_id: role.to_string(),
                    emoji: None,
                    color: None,
                    castlist: castlist.to_string(),
                    show_player_emojis: true,
                },
            );
        }
        guild
    }

    #[test]
    fn filters_by_castlist() {
        let guild = guild_with(&[("r1", "default"), ("r2", "post_merge"), ("r3", "default")]);
        let ids: Vec<_> = tribes_in_castlist(&guild, "default")
            .into_iter()
            .map(|t| t.role_id)
            .collect();
        assert_eq!(ids, vec!["r1", "r3"]);
        assert!(tribes_in_castlist(&guild, "jury").is_empty());
    }

    #[test]
    fn default_castlist_is_listed_first() {
        let guild = guild_with(&[("r1", "Jury"), ("r2", "default"), ("r3", "alumni"), ("r4", "Jury")]);
        assert_eq!(castlist_names(&guild), vec!["default", "alumni", "Jury"]);
    }
}
