//! Shared interaction response helpers. Castlist views go out as raw Components V2
//! payloads; serenity's builders only know classic action rows.
//!
//! Building a view takes several REST calls, more than Discord's 3s reply window in
//! large guilds, so handlers defer first and edit the original response afterwards.
use crate::castlist::CastlistView;
use crate::error::{CastlistError, Result};
use crate::ui::components_v2::{RenderTarget, deferred_response_json, message_json};
use serde_json::json;
use serenity::builder::CreateInteractionResponse;
use serenity::http::{LightMethod, Request, Route};
use serenity::model::application::ComponentInteraction;
use serenity::model::id::{ApplicationId, InteractionId};
use serenity::prelude::Context;

const CALLBACK_CHANNEL_MESSAGE: u8 = 4;
const FLAG_EPHEMERAL: u64 = 1 << 6;

/// Defers an interaction before slow work: "thinking…" for a new message, a silent
/// acknowledgement for an in-place update.
pub async fn defer_view(
    ctx: &Context,
    interaction_id: InteractionId,
    token: &str,
    target: RenderTarget,
) -> Result<()> {
    ctx.http
        .create_interaction_response(
            interaction_id,
            token,
            &deferred_response_json(target),
            Vec::new(),
        )
        .await?;
    Ok(())
}

/// Replaces the original response (or the clicked message) with a castlist view.
/// Sent as a raw PATCH since serenity cannot parse V2 components in the reply.
pub async fn edit_original_view(
    ctx: &Context,
    application_id: ApplicationId,
    token: &str,
    view: &CastlistView,
) -> Result<()> {
    let body =
        serde_json::to_vec(&message_json(&view.components)).map_err(serenity::Error::from)?;
    let request = Request::new(
        Route::WebhookOriginalInteractionResponse {
            application_id,
            token,
        },
        LightMethod::Patch,
    )
    .body(Some(body));
    ctx.http.request(request).await?;
    Ok(())
}

/// Delivers a view built after `defer_view`. Failures to build turn into an ephemeral
/// follow-up; a new-message deferral also drops its placeholder.
pub async fn finish_deferred(
    ctx: &Context,
    application_id: ApplicationId,
    token: &str,
    target: RenderTarget,
    castlist: &str,
    view: Result<CastlistView>,
) {
    match view {
        Ok(view) => {
            if let Err(e) = edit_original_view(ctx, application_id, token, &view).await {
                tracing::error!(target="ui.edit", castlist=%castlist, error=%e, "castlist edit failed");
            }
        }
        Err(e) => {
            tracing::warn!(target="castlist.render", castlist=%castlist, error=%e, "castlist view failed");
            if target == RenderTarget::NewMessage {
                delete_original(ctx, token).await;
            }
            followup_ephemeral(ctx, token, &user_message(&e, castlist)).await;
        }
    }
}

/// Removes a deferred "thinking…" placeholder that will never be filled.
pub async fn delete_original(ctx: &Context, token: &str) {
    if let Err(e) = ctx.http.delete_original_interaction_response(token).await {
        tracing::debug!(target="ui.edit", error=?e, "deleting deferred response failed");
    }
}

/// Ephemeral plain-text reply; logs rather than returns failures.
pub async fn respond_ephemeral(
    ctx: &Context,
    interaction_id: InteractionId,
    token: &str,
    text: &str,
) {
    let body = json!({
        "type": CALLBACK_CHANNEL_MESSAGE,
        "data": { "content": text, "flags": FLAG_EPHEMERAL },
    });
    if let Err(e) = ctx
        .http
        .create_interaction_response(interaction_id, token, &body, Vec::new())
        .await
    {
        tracing::error!(target="ui.respond", error=?e, "ephemeral response failed");
    }
}

/// Ephemeral follow-up for an interaction that was already deferred.
pub async fn followup_ephemeral(ctx: &Context, token: &str, text: &str) {
    let body = json!({ "content": text, "flags": FLAG_EPHEMERAL });
    if let Err(e) = ctx
        .http
        .create_followup_message(token, &body, Vec::new())
        .await
    {
        tracing::error!(target="ui.respond", error=?e, "ephemeral follow-up failed");
    }
}

/// Acknowledge a component click without changing the message.
pub async fn acknowledge_component(ctx: &Context, c: &ComponentInteraction) {
    if let Err(e) = c
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
    {
        tracing::debug!(target="ui.defer", cid=%c.data.custom_id, error=?e, "acknowledge failed (already acknowledged?)");
    }
}

/// What the end user sees when a castlist request fails.
pub fn user_message(err: &CastlistError, castlist: &str) -> String {
    match err {
        CastlistError::NotFound { .. } => format!(
            "No tribes found for castlist **{castlist}**. Ask a production member to re-run tribe setup."
        ),
        CastlistError::InvalidState(_) => {
            "This castlist button is out of date. Run `/castlist` again.".to_string()
        }
        CastlistError::NameTooLong { .. } => format!(
            "The castlist name **{castlist}** is too long for navigation buttons. Ask a production member to shorten it."
        ),
        CastlistError::CapacityExceeded { .. } => {
            "This tribe is too large to display. Ask a production member to split it.".to_string()
        }
        CastlistError::Store(_) | CastlistError::Discord(_) => {
            "Something went wrong while loading the castlist. Please try again.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_points_at_setup() {
        let msg = user_message(&CastlistError::not_found("castlist", "jury"), "jury");
        assert!(msg.contains("**jury**"));
        assert!(msg.contains("tribe setup"));
    }

    #[test]
    fn long_names_are_not_reported_as_stale() {
        let name = "n".repeat(80);
        let err = CastlistError::NameTooLong {
            castlist: name.clone(),
            max: 100,
        };
        let msg = user_message(&err, &name);
        assert!(msg.contains("too long"));
        assert!(!msg.contains("out of date"));
    }

    #[test]
    fn stale_buttons_suggest_rerun() {
        let msg = user_message(&CastlistError::invalid("bad id"), "default");
        assert!(msg.contains("/castlist"));
    }
}
