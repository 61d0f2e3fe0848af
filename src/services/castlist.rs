//! Castlist service layer: turns a request (fresh command or decoded button) into a
//! rendered view by running loader, ordering, navigation and render in sequence.
use crate::castlist::card::{GuildContext, PlayerProfile, TimezoneInfo};
use crate::castlist::{
    CastlistView, LayoutLimits, NavAction, NavigationState, OrderStrategy, load_tribes, render,
    reorder,
};
use crate::database::models::GuildData;
use crate::database::{players, tribes};
use crate::error::{CastlistError, Result};
use crate::services::directory::{GuildDirectory, SerenityDirectory};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Where the requested view starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// A new `/castlist` invocation: first tribe, first page.
    Fresh,
    /// A navigation button: the position it was rendered at plus the move to make.
    Resume {
        tribe_index: usize,
        tribe_page: usize,
        action: NavAction,
    },
}

#[derive(Debug, Clone)]
pub struct ViewRequest<'a> {
    pub castlist: &'a str,
    pub requesting_user_id: &'a str,
    pub navigation: Navigation,
    pub now: DateTime<Utc>,
}

#[instrument(level = "debug", skip(directory, guild, limits), fields(castlist = %request.castlist))]
pub async fn build_view(
    directory: &dyn GuildDirectory,
    guild: &GuildData,
    request: &ViewRequest<'_>,
    limits: &LayoutLimits,
) -> Result<CastlistView> {
    let records = tribes::tribes_in_castlist(guild, request.castlist);
    if records.is_empty() {
        return Err(CastlistError::not_found("castlist", request.castlist));
    }
    let loaded = load_tribes(directory, &records).await;
    if loaded.is_empty() {
        return Err(CastlistError::not_found("tribe roles for castlist", request.castlist));
    }
    let ordered = reorder(
        loaded,
        request.requesting_user_id,
        OrderStrategy::UserFirst,
        request.castlist,
    );

    let initial = NavigationState::for_tribes(&ordered, limits);
    let state = match &request.navigation {
        Navigation::Fresh => initial,
        Navigation::Resume {
            tribe_index,
            tribe_page,
            action,
        } => initial.resume(*tribe_index, *tribe_page).apply(action),
    };
    debug!(
        target = "castlist.nav",
        scenario = %state.scenario,
        tribe_index = state.tribe_index,
        tribe_page = state.tribe_page,
        tribes = state.tribe_count(),
        "state resolved"
    );

    let context = guild_context(directory, guild, request.now).await;
    render(&state, &ordered, request.castlist, &context, limits)
}

/// Resolves pronoun and timezone role names and collects player records.
pub async fn guild_context(
    directory: &dyn GuildDirectory,
    guild: &GuildData,
    now: DateTime<Utc>,
) -> GuildContext {
    let mut pronoun_roles = HashMap::new();
    for role_id in players::pronoun_role_ids(guild) {
        if let Some(role) = directory.resolve_role(role_id).await {
            pronoun_roles.insert(role_id.clone(), role.name);
        }
    }

    let mut timezones = HashMap::new();
    for (role_id, offset_hours) in players::timezone_offsets(guild) {
        if let Some(role) = directory.resolve_role(&role_id).await {
            timezones.insert(
                role_id,
                TimezoneInfo {
                    name: role.name,
                    offset_hours,
                },
            );
        }
    }

    let players = guild
        .players
        .iter()
        .map(|(user_id, record)| {
            (
                user_id.clone(),
                PlayerProfile {
                    age: record.age.as_ref().map(ToString::to_string),
                    emoji_code: record.emoji_code.clone(),
                },
            )
        })
        .collect();

    GuildContext {
        pronoun_roles,
        timezones,
        players,
        now,
    }
}

/// Live entry point: snapshots the guild over REST, reads the store, builds the view.
pub async fn view_for_guild(
    ctx: &serenity::prelude::Context,
    app_state: &crate::AppState,
    guild_id: serenity::model::id::GuildId,
    requesting_user: serenity::model::id::UserId,
    castlist: &str,
    navigation: Navigation,
) -> Result<CastlistView> {
    let guild = app_state
        .store
        .load_guild(&guild_id.get().to_string())
        .await?;
    if tribes::tribes_in_castlist(&guild, castlist).is_empty() {
        return Err(CastlistError::not_found("castlist", castlist));
    }
    let directory = SerenityDirectory::fetch(ctx, guild_id).await?;
    let user_id = requesting_user.get().to_string();
    let request = ViewRequest {
        castlist,
        requesting_user_id: &user_id,
        navigation,
        now: Utc::now(),
    };
    build_view(&directory, &guild, &request, &app_state.limits).await
}
