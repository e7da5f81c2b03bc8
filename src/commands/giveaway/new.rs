use serenity::{all::CommandInteraction, builder::CreateEmbed};
use tracing::info;

use crate::{
    common::options::Options,
    models::{
        command::{CommandContext, CommandContextReply},
        handler::Handler,
        response::{Response, ResponseError, ResponseResult},
    },
};

pub async fn new(
    handler: &Handler,
    ctx: &CommandContext,
    cmd: &CommandInteraction,
) -> ResponseResult {
    let options = Options {
        options: cmd.data.options(),
    };

    let Some(prize) = options.get_string("prize") else {
        return Err(ResponseError::Execution(
            "Could not get giveaway prize",
            Some("Please notify the developer of this issue".to_string()),
        ));
    };

    let Some(duration) = options.get_string("duration") else {
        return Err(ResponseError::Execution(
            "Could not get giveaway duration",
            Some("Please notify the developer of this issue".to_string()),
        ));
    };

    // Posting the announcement can outlast the interaction's reply window
    ctx.defer(cmd).await?;

    let id = handler
        .giveaways
        .create(cmd.user.id, &ctx.user_permissions, &prize, &duration)
        .await?;
    info!("{} started giveaway {} for {:?}", cmd.user.name, id, prize);

    let description = match handler.config.channel {
        Some(channel) => format!(
            "The **{prize}** giveaway is live: {}",
            id.link(channel, cmd.guild_id)
        ),
        None => format!("The **{prize}** giveaway is live."),
    };

    ctx.reply(
        cmd,
        Response::new()
            .embed(
                CreateEmbed::new()
                    .title("Giveaway started")
                    .description(description)
                    .color(0x00ff00),
            )
            .ephemeral(true),
    )
    .await
}
