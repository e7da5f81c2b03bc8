#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unreadable_literal)]

use std::sync::Arc;

use serenity::{http::Http, prelude::GatewayIntents, Client};
use tracing::{error, info};

use crate::{
    commands::giveaway::manager::GiveawayManager,
    common::{announcer::SerenityAnnouncer, eligibility::Eligibility, picker::RandomPicker},
    models::{config::GiveawayConfig, handler::Handler},
};

mod commands;
mod common;
mod events;
mod models;

#[tokio::main]
async fn main() {
    let config = GiveawayConfig::from_env();

    let debug = config.as_ref().is_ok_and(|config| config.debug);
    let log_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Getting environment variables");
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return;
        }
    };

    info!(
        "Giveaways post to {:?}, tick every {:?}, {} eligible role(s)",
        config.channel,
        config.tick_interval,
        config.eligible_roles.len()
    );

    let http = Arc::new(Http::new(&config.discord_token));
    let giveaways = GiveawayManager::new(
        Arc::new(SerenityAnnouncer { http }),
        Arc::new(RandomPicker),
        Eligibility::new(config.eligible_roles.clone()),
        config.channel,
        config.tick_interval,
        config.network_timeout,
    );

    // Discord client connection
    let handler = Handler {
        giveaways,
        config: Arc::new(config.clone()),
    };
    let intents = GatewayIntents::non_privileged();
    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
    {
        Ok(client) => client,
        Err(err) => {
            error!("Could not create Discord client. Failed with error: {}", err);
            return;
        }
    };

    if let Err(err) = client.start_autosharded().await {
        error!(
            "Attempted to start giveaway Discord client, but failed with error: {}",
            err
        );
    }
}
