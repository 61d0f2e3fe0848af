use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{error, info};

pub struct Handler {
    /// Register slash commands on this guild only; globally when `None`.
    pub command_guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!("AppState missing from TypeMap");
            return;
        };
        match &interaction {
            Interaction::Command(command) => {
                if command.data.name == commands::castlist::run::COMMAND_NAME {
                    commands::castlist::run::run_slash(&ctx, command).await
                }
            }
            Interaction::Autocomplete(autocomplete) => {
                if autocomplete.data.name == commands::castlist::run::COMMAND_NAME {
                    commands::castlist::run::autocomplete(&ctx, autocomplete).await
                }
            }
            Interaction::Component(component) => {
                if interactions::ids::is_castlist_component(&component.data.custom_id) {
                    interactions::castlist_handler::handle(&ctx, component, app_state).await
                }
            }
            _ => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user=%ready.user.name, guilds=ready.guilds.len(), "connected and ready");
        let commands_to_register = vec![commands::castlist::run::register()];
        let result = match self.command_guild_id {
            Some(guild_id) => guild_id
                .set_commands(&ctx.http, commands_to_register)
                .await
                .map(|c| c.len()),
            None => Command::set_global_commands(&ctx.http, commands_to_register)
                .await
                .map(|c| c.len()),
        };
        match result {
            Ok(n) => info!(
                commands = n,
                guild_scoped = self.command_guild_id.is_some(),
                "registered slash commands"
            ),
            Err(e) => error!(error=?e, "error registering slash commands"),
        }
    }
}
