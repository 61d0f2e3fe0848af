//! Tribes as rendered: stored tribe records merged with live role and member data.
use crate::database::models::TribeRecord;
use crate::services::directory::GuildDirectory;
use tracing::{debug, warn};

/// A guild member as the castlist sees them. Ids are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub display_name: String,
    pub avatar_url: String,
    pub roles: Vec<String>,
}

impl Member {
    pub fn has_role(&self, role_id: &str) -> bool {
        self.roles.iter().any(|r| r == role_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tribe {
    pub role_id: String,
    /// Resolved from the live role on every load.
    pub name: String,
    pub emoji: Option<String>,
    pub color: Option<u32>,
    pub castlist: String,
    pub show_player_emojis: bool,
    pub members: Vec<Member>,
}

impl Tribe {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }
}

/// Resolves each record against the guild. Records whose role no longer exists are
/// skipped; the result is sorted by tribe name (case-insensitive), then role id.
pub async fn load_tribes(directory: &dyn GuildDirectory, records: &[TribeRecord]) -> Vec<Tribe> {
    let mut tribes = Vec::with_capacity(records.len());
    for record in records {
        let Some(role) = directory.resolve_role(&record.role_id).await else {
            warn!(target="castlist.load", role_id=%record.role_id, castlist=%record.castlist, "tribe role missing; skipping");
            continue;
        };
        let members = directory.members_with_role(&record.role_id).await;
        let color = record
            .color
            .as_ref()
            .and_then(|c| c.as_color())
            .or_else(|| (role.colour != 0).then_some(role.colour));
        debug!(target="castlist.load", role_id=%record.role_id, members=members.len());
        tribes.push(Tribe {
            role_id: record.role_id.clone(),
            name: role.name,
            emoji: record.emoji.clone().filter(|e| !e.trim().is_empty()),
            color,
            castlist: record.castlist.clone(),
            show_player_emojis: record.show_player_emojis,
            members,
        });
    }
    tribes.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.role_id.cmp(&b.role_id))
    });
    tribes
}
