//! Implements the run logic for the `/castlist` command and its autocomplete.

use crate::AppState;
use crate::constants::DEFAULT_CASTLIST;
use crate::database::tribes::castlist_names;
use crate::interactions::util::{defer_view, finish_deferred, respond_ephemeral};
use crate::services::castlist::{Navigation, view_for_guild};
use crate::ui::components_v2::RenderTarget;
use serenity::builder::{
    CreateAutocompleteResponse, CreateCommand, CreateCommandOption, CreateInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use tracing::{debug, error, info, warn};

pub const COMMAND_NAME: &str = "castlist";
pub const OPTION_CASTLIST: &str = "castlist";
const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Display the castlist for this server.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                OPTION_CASTLIST,
                "Which castlist to show (defaults to the main one).",
            )
            .required(false)
            .set_autocomplete(true),
        )
}

/// The requested castlist name, falling back to `default` when absent or blank.
pub fn requested_castlist(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_CASTLIST)
        .to_string()
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(guild_id) = interaction.guild_id else {
        let text = "Castlists only work inside a server.";
        respond_ephemeral(ctx, interaction.id, &interaction.token, text).await;
        return;
    };
    let raw = interaction
        .data
        .options
        .iter()
        .find(|o| o.name == OPTION_CASTLIST)
        .and_then(|o| o.value.as_str());
    let castlist = requested_castlist(raw);
    info!(
        target = "castlist.command",
        guild_id = guild_id.get(),
        user_id = interaction.user.id.get(),
        castlist = %castlist,
        "castlist requested"
    );

    let target = RenderTarget::NewMessage;
    if let Err(e) = defer_view(ctx, interaction.id, &interaction.token, target).await {
        error!(target="ui.defer", castlist=%castlist, error=%e, "deferring /castlist failed");
        return;
    }
    let user_id = interaction.user.id;
    let navigation = Navigation::Fresh;
    let view = view_for_guild(ctx, &app_state, guild_id, user_id, &castlist, navigation).await;
    let token = &interaction.token;
    finish_deferred(ctx, interaction.application_id, token, target, &castlist, view).await;
}

/// Castlist names matching the typed prefix, case-insensitively.
pub fn matching_castlists(names: &[String], typed: &str) -> Vec<String> {
    let needle = typed.trim().to_lowercase();
    names
        .iter()
        .filter(|n| n.to_lowercase().contains(&needle))
        .take(MAX_AUTOCOMPLETE_CHOICES)
        .cloned()
        .collect()
}

pub async fn autocomplete(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(guild_id) = interaction.guild_id else {
        return;
    };
    let typed = interaction
        .data
        .autocomplete()
        .map(|o| o.value.to_string())
        .unwrap_or_default();
    let names = match app_state.store.load_guild(&guild_id.get().to_string()).await {
        Ok(guild) => castlist_names(&guild),
        Err(e) => {
            warn!(target="castlist.command", error=%e, "autocomplete store read failed");
            Vec::new()
        }
    };
    let response = matching_castlists(&names, &typed)
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |r, name| {
            r.add_string_choice(name.clone(), name)
        });
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await
    {
        debug!(target="castlist.command", error=?e, "autocomplete response failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_option_means_default() {
        assert_eq!(requested_castlist(None), "default");
        assert_eq!(requested_castlist(Some("   ")), "default");
        assert_eq!(requested_castlist(Some(" post_merge ")), "post_merge");
    }

    #[test]
    fn autocomplete_matches_case_insensitively() {
        let names = vec!["default".to_string(), "Post_Merge".to_string(), "jury".to_string()];
        assert_eq!(matching_castlists(&names, "merge"), vec!["Post_Merge"]);
        assert_eq!(matching_castlists(&names, "").len(), 3);
    }
}
