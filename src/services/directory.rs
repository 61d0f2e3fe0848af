//! Guild directory: the role/member data source the castlist loader reads from.
//!
//! The trait is the seam between the pure castlist engine and Discord. The serenity
//! implementation snapshots roles and members once per interaction; tests plug in an
//! in-memory directory.
use crate::castlist::tribe::Member;
use crate::constants::MEMBER_FETCH_PAGE;
use crate::error::Result;
use async_trait::async_trait;
use serenity::model::guild::Member as DiscordMember;
use serenity::model::id::{GuildId, UserId};
use serenity::prelude::Context;
use std::collections::HashMap;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInfo {
    pub name: String,
    /// Raw RGB colour; 0 means the role has no colour.
    pub colour: u32,
}

#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// `None` when the role was deleted after the tribe was configured.
    async fn resolve_role(&self, role_id: &str) -> Option<RoleInfo>;
    async fn members_with_role(&self, role_id: &str) -> Vec<Member>;
}

/// Point-in-time copy of a guild's roles and members fetched over REST.
#[derive(Debug, Default, Clone)]
pub struct SerenityDirectory {
    roles: HashMap<String, RoleInfo>,
    members: Vec<Member>,
}

impl SerenityDirectory {
    #[instrument(level = "debug", skip(ctx, guild_id), fields(guild_id = guild_id.get()))]
    pub async fn fetch(ctx: &Context, guild_id: GuildId) -> Result<Self> {
        let roles = guild_id
            .roles(&ctx.http)
            .await?
            .into_iter()
            .map(|(id, role)| {
                (
                    id.get().to_string(),
                    RoleInfo {
                        name: role.name,
                        colour: role.colour.0,
                    },
                )
            })
            .collect::<HashMap<_, _>>();

        let mut members = Vec::new();
        let mut after: Option<UserId> = None;
        loop {
            let batch = guild_id
                .members(&ctx.http, Some(MEMBER_FETCH_PAGE), after)
                .await?;
            let fetched = batch.len();
            after = batch.last().map(|m| m.user.id);
            members.extend(batch.iter().map(member_from_discord));
            if (fetched as u64) < MEMBER_FETCH_PAGE {
                break;
            }
        }
        debug!(
            target = "castlist.load",
            roles = roles.len(),
            members = members.len(),
            "guild snapshot fetched"
        );
        Ok(Self { roles, members })
    }
}

fn member_from_discord(m: &DiscordMember) -> Member {
    Member {
        id: m.user.id.get().to_string(),
        display_name: m.display_name().to_string(),
        avatar_url: m.face(),
        roles: m.roles.iter().map(|r| r.get().to_string()).collect(),
    }
}

#[async_trait]
impl GuildDirectory for SerenityDirectory {
    async fn resolve_role(&self, role_id: &str) -> Option<RoleInfo> {
        self.roles.get(role_id).cloned()
    }

    async fn members_with_role(&self, role_id: &str) -> Vec<Member> {
        self.members
            .iter()
            .filter(|m| m.has_role(role_id))
            .cloned()
            .collect()
    }
}
