//! Shared fixtures: members, tribes and an in-memory guild directory.
#![allow(dead_code)]
use async_trait::async_trait;
use castbot::castlist::{Member, Tribe};
use castbot::services::directory::{GuildDirectory, RoleInfo};
use std::collections::HashMap;

pub fn member(id: &str, name: &str, roles: &[&str]) -> Member {
    Member {
        id: id.to_string(),
        display_name: name.to_string(),
        avatar_url: format!("https://cdn.example/{id}.png"),
        roles: roles.iter().map(|r| r.to_string()).collect(),
    }
}

/// `n` members named `<prefix>00`, `<prefix>01`, ... all holding `role`.
pub fn members(prefix: &str, role: &str, n: usize) -> Vec<Member> {
    (0..n)
        .map(|i| member(&format!("{prefix}{i}"), &format!("{prefix}{i:02}"), &[role]))
        .collect()
}

pub fn tribe(role_id: &str, name: &str, size: usize) -> Tribe {
    Tribe {
        role_id: role_id.to_string(),
        name: name.to_string(),
        emoji: None,
        color: None,
        castlist: "default".to_string(),
        show_player_emojis: true,
        members: members(role_id, role_id, size),
    }
}

#[derive(Default)]
pub struct FakeDirectory {
    pub roles: HashMap<String, RoleInfo>,
    pub members: Vec<Member>,
}

impl FakeDirectory {
    pub fn with_role(mut self, id: &str, name: &str, colour: u32) -> Self {
        self.roles.insert(
            id.to_string(),
            RoleInfo {
                name: name.to_string(),
                colour,
            },
        );
        self
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members.extend(members);
        self
    }
}

#[async_trait]
impl GuildDirectory for FakeDirectory {
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
