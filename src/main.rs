use std::sync::Arc;

use castbot::AppState;
use castbot::config::Config;
use castbot::database::store::JsonStore;
use castbot::handler::Handler;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("castbot=info,serenity=warn")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error=%e, "invalid configuration");
            std::process::exit(1);
        }
    };
    info!(
        data_file = %config.data_file.display(),
        component_limit = config.limits.component_limit,
        guild_scoped = config.guild_id.is_some(),
        "configuration loaded"
    );

    let app_state = Arc::new(AppState::new(
        JsonStore::new(config.data_file.clone()),
        config.limits,
    ));

    // Member lists come from REST, which needs the privileged members intent.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(Handler {
            command_guild_id: config.guild_id,
        })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        error!(error=?why, "client error");
    }
}
