//! Handles all component interactions for the castlist family
//! (`castlist2_nav_*` and `show_castlist2_*`).

use super::ids::{NavButtonId, decode_nav, is_castlist_nav, parse_show_castlist_id};
use super::util::{
    acknowledge_component, defer_view, finish_deferred, respond_ephemeral, user_message,
};
use crate::AppState;
use crate::error::Result;
use crate::services::castlist::{Navigation, view_for_guild};
use crate::ui::components_v2::RenderTarget;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// What a castlist component click asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastlistClick {
    /// Boundary or indicator button: acknowledge and leave the message alone.
    Ignore,
    /// Re-render the clicked message at a new position.
    Navigate(NavButtonId),
    /// Post a fresh castlist view.
    Show(String),
}

/// Classifies a custom_id; `None` when it is not a castlist component.
pub fn classify(custom_id: &str) -> Option<Result<CastlistClick>> {
    if let Some(name) = parse_show_castlist_id(custom_id) {
        return Some(Ok(CastlistClick::Show(name.to_string())));
    }
    if !is_castlist_nav(custom_id) {
        return None;
    }
    Some(decode_nav(custom_id).map(|nav| {
        if nav.action.is_disabled() {
            CastlistClick::Ignore
        } else {
            CastlistClick::Navigate(nav)
        }
    }))
}

pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: Arc<AppState>) {
    let cid = component.data.custom_id.as_str();
    let click = match classify(cid) {
        Some(Ok(click)) => click,
        Some(Err(e)) => {
            warn!(target="castlist.nav", cid=%cid, error=%e, "undecodable castlist button");
            respond_ephemeral(ctx, component.id, &component.token, &user_message(&e, "")).await;
            return;
        }
        None => return,
    };

    let (castlist, navigation, target) = match click {
        CastlistClick::Ignore => {
            debug!(target="castlist.nav", cid=%cid, "disabled button ignored");
            acknowledge_component(ctx, component).await;
            return;
        }
        CastlistClick::Navigate(nav) => (
            nav.castlist,
            Navigation::Resume {
                tribe_index: nav.tribe_index,
                tribe_page: nav.tribe_page,
                action: nav.action,
            },
            RenderTarget::UpdateMessage,
        ),
        CastlistClick::Show(name) => (name, Navigation::Fresh, RenderTarget::NewMessage),
    };

    let Some(guild_id) = component.guild_id else {
        let text = "Castlists only work inside a server.";
        respond_ephemeral(ctx, component.id, &component.token, text).await;
        return;
    };

    if let Err(e) = defer_view(ctx, component.id, &component.token, target).await {
        error!(target="ui.defer", cid=%cid, error=%e, "deferring castlist click failed");
        return;
    }
    let user_id = component.user.id;
    let view = view_for_guild(ctx, &app_state, guild_id, user_id, &castlist, navigation).await;
    if let Ok(view) = &view {
        debug!(
            target = "castlist.nav",
            guild_id = guild_id.get(),
            castlist = %castlist,
            tribe_index = view.tribe_index,
            tribe_page = view.tribe_page,
            components = view.component_count(),
            "rendering castlist page"
        );
    }
    let token = &component.token;
    finish_deferred(ctx, component.application_id, token, target, &castlist, view).await;
}
