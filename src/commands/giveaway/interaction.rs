use serenity::builder::CreateEmbed;
use tracing::{debug, error};

use crate::models::{
    command::{InteractionContext, InteractionContextReply},
    giveaway::EntryOutcome,
    handler::Handler,
    response::{Response, ResponseError},
};

fn entry_embed(outcome: EntryOutcome) -> CreateEmbed {
    match outcome {
        EntryOutcome::Entered => CreateEmbed::new()
            .title("You're in the running!")
            .description("You've entered this giveaway. Good luck!")
            .color(0x00ff00),
        EntryOutcome::AlreadyEntered => CreateEmbed::new()
            .title("You've already entered this giveaway")
            .description("Your entry is counted, there is nothing else to do. Good luck!")
            .color(0x00ff00),
    }
}

pub async fn giveaway_entry_handler(handler: &Handler, ctx: InteractionContext) {
    let interaction = &ctx.interaction;
    let roles = interaction
        .member
        .as_ref()
        .map(|member| member.roles.clone())
        .unwrap_or_default();

    match handler
        .giveaways
        .submit_entry(interaction.message.id, interaction.user.id, &roles)
        .await
    {
        Ok(outcome) => {
            if let Err(err) = ctx
                .reply(Response::new().embed(entry_embed(outcome)).ephemeral(true))
                .await
            {
                error!(
                    "Could not acknowledge giveaway entry. Failed with error: {:?}",
                    err
                );
            }
        }
        Err(err) => {
            debug!(
                "Refused entry of {} to giveaway {}: {}",
                interaction.user.id, interaction.message.id, err
            );
            ctx.error_message(ResponseError::from(err)).await;
        }
    }
}
