//! Player card text: name, age, pronouns, timezone and current local time.
use super::tribe::{Member, Tribe};
use crate::ui::style::EMOJI_CLOCK;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneInfo {
    pub name: String,
    pub offset_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerProfile {
    pub age: Option<String>,
    pub emoji_code: Option<String>,
}

/// Per-guild lookups a render needs besides the tribes themselves.
#[derive(Debug, Clone)]
pub struct GuildContext {
    /// Pronoun role id -> role name.
    pub pronoun_roles: HashMap<String, String>,
    pub timezones: HashMap<String, TimezoneInfo>,
    /// User id -> stored player data.
    pub players: HashMap<String, PlayerProfile>,
    pub now: DateTime<Utc>,
}

impl GuildContext {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            pronoun_roles: HashMap::new(),
            timezones: HashMap::new(),
            players: HashMap::new(),
            now,
        }
    }

    pub fn pronouns_for(&self, member: &Member) -> Vec<&str> {
        member
            .roles
            .iter()
            .filter_map(|r| self.pronoun_roles.get(r).map(String::as_str))
            .collect()
    }

    pub fn timezone_for(&self, member: &Member) -> Option<&TimezoneInfo> {
        member.roles.iter().find_map(|r| self.timezones.get(r))
    }
}

/// Local wall-clock time for a UTC offset in hours, as `h:MM AM`. `None` when the
/// offset puts the time outside chrono's range.
pub fn format_local_time(now: DateTime<Utc>, offset_hours: f64) -> Option<String> {
    // float-to-int casts saturate, so huge offsets fail in try_minutes
    let minutes = (offset_hours * 60.0).round() as i64;
    let local = now.checked_add_signed(TimeDelta::try_minutes(minutes)?)?;
    Some(local.format("%-I:%M %p").to_string())
}

/// Markdown body of one member card.
pub fn card_text(member: &Member, tribe: &Tribe, guild: &GuildContext) -> String {
    let profile = guild.players.get(&member.id);

    let emoji = profile
        .filter(|_| tribe.show_player_emojis)
        .and_then(|p| p.emoji_code.as_deref())
        .filter(|e| !e.trim().is_empty());
    let mut text = match emoji {
        Some(e) => format!("{e} **{}**", member.display_name),
        None => format!("**{}**", member.display_name),
    };

    let mut details: Vec<String> = Vec::new();
    if let Some(age) = profile.and_then(|p| p.age.as_deref()).filter(|a| !a.is_empty()) {
        details.push(age.to_string());
    }
    let pronouns = guild.pronouns_for(member);
    if !pronouns.is_empty() {
        details.push(pronouns.join(", "));
    }
    let timezone = guild.timezone_for(member);
    if let Some(tz) = timezone {
        details.push(tz.name.clone());
    }
    if !details.is_empty() {
        text.push('\n');
        text.push_str(&details.join(" • "));
    }
    if let Some(time) = timezone.and_then(|tz| format_local_time(guild.now, tz.offset_hours)) {
        text.push_str(&format!("\n{EMOJI_CLOCK} {time}"));
    }
    text
}
