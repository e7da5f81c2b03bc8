use std::sync::atomic::Ordering;

use serenity::{
    all::CommandInteraction,
    builder::{
        CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
        EditInteractionResponse,
    },
};
use tracing::{debug, error};

use crate::models::{
    command::{
        CommandContext, CommandContextReply, FailedCommandContext, InteractionContext,
        InteractionContextReply,
    },
    response::{Response, ResponseError, ResponseResult},
};

const ERROR_COLOUR: u32 = 0xff0000;

fn create_message(response: Response) -> CreateInteractionResponseMessage {
    let mut reply = CreateInteractionResponseMessage::new();
    if let Some(content) = response.content {
        reply = reply.content(content);
    }
    if let Some(embeds) = response.embeds {
        reply = reply.embeds(embeds);
    }
    if response.ephemeral {
        reply = reply.ephemeral(true);
    }
    reply
}

fn edit_message(response: Response) -> EditInteractionResponse {
    let mut edit = EditInteractionResponse::new();
    if let Some(content) = response.content {
        edit = edit.content(content);
    }
    if let Some(embeds) = response.embeds {
        edit = edit.embeds(embeds);
    }
    edit
}

/// Errors are only ever shown to the person who caused them.
pub fn error_response(error: ResponseError) -> Response {
    let embed = match error {
        ResponseError::Execution(title, description) => {
            let mut embed = CreateEmbed::new().title(title).color(ERROR_COLOUR);
            if let Some(description) = description {
                embed = embed.description(description);
            }
            embed
        }
        ResponseError::Serenity(err) => CreateEmbed::new()
            .title("Something went wrong talking to Discord")
            .description(err.to_string())
            .color(ERROR_COLOUR),
    };

    Response::new().embed(embed).ephemeral(true)
}

impl CommandContext {
    /// Acknowledges the command privately so slow work can finish past Discord's reply window.
    pub async fn defer(&self, cmd: &CommandInteraction) -> ResponseResult {
        if self.has_responsed.load(Ordering::Relaxed) {
            return Ok(());
        }

        if let Err(err) = cmd
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Defer(
                    CreateInteractionResponseMessage::new().ephemeral(true),
                ),
            )
            .await
        {
            error!("Attempted to defer a response to a command, failed with error: {err}");
            return Err(ResponseError::Serenity(err));
        }
        self.has_responsed.store(true, Ordering::Relaxed);
        Ok(())
    }
}

#[async_trait::async_trait]
impl CommandContextReply for CommandContext {
    async fn reply(&self, cmd: &CommandInteraction, response: Response) -> ResponseResult {
        let start = std::time::Instant::now();
        if self.has_responsed.load(Ordering::Relaxed) {
            if let Err(err) = cmd
                .edit_response(&self.ctx.http, edit_message(response))
                .await
            {
                error!("Attempted to edit a response to a command, failed with error: {err}");
                return Err(ResponseError::Serenity(err));
            }
        } else {
            if let Err(err) = cmd
                .create_response(
                    &self.ctx.http,
                    CreateInteractionResponse::Message(create_message(response)),
                )
                .await
            {
                error!("Attempted to create a response to a command, failed with error: {err}");
                return Err(ResponseError::Serenity(err));
            }
            self.has_responsed.store(true, Ordering::Relaxed);
        }

        debug!("Took {:?} to reply to a command", start.elapsed());
        Ok(())
    }

    async fn error_message(&self, cmd: &CommandInteraction, error: ResponseError) {
        if let Err(err) = self.reply(cmd, error_response(error)).await {
            error!("Could not notify user of a failed command. Failed with error: {err:?}");
        }
    }
}

#[async_trait::async_trait]
impl CommandContextReply for FailedCommandContext {
    async fn reply(&self, cmd: &CommandInteraction, response: Response) -> ResponseResult {
        let start = std::time::Instant::now();
        if let Err(err) = cmd
            .create_response(
                &self.ctx.http,
                CreateInteractionResponse::Message(create_message(response)),
            )
            .await
        {
            error!("Attempted to create a response to a command, failed with error: {err}");
            return Err(ResponseError::Serenity(err));
        }

        debug!("Took {:?} to reply to a command", start.elapsed());
        Ok(())
    }

    async fn error_message(&self, cmd: &CommandInteraction, error: ResponseError) {
        if let Err(err) = self.reply(cmd, error_response(error)).await {
            error!("Could not notify user of a failed command. Failed with error: {err:?}");
        }
    }
}

#[async_trait::async_trait]
impl InteractionContextReply for InteractionContext {
    async fn reply(&self, response: Response) -> ResponseResult {
        let start = std::time::Instant::now();
        if self.has_responsed.load(Ordering::Relaxed) {
            if let Err(err) = self
                .interaction
                .edit_response(&self.ctx.http, edit_message(response))
                .await
            {
                error!("Attempted to edit a interaction response, failed with error: {err}");
                return Err(ResponseError::Serenity(err));
            }
        } else {
            match self
                .interaction
                .create_response(
                    &self.ctx.http,
                    CreateInteractionResponse::Message(create_message(response)),
                )
                .await
            {
                Ok(()) => {
                    self.has_responsed.store(true, Ordering::Relaxed);
                }
                Err(err) => {
                    error!("Attempted to create a response to an interaction, failed with error: {err}");
                    return Err(ResponseError::Serenity(err));
                }
            }
        }

        debug!("Took {:?} to reply to an interaction", start.elapsed());
        Ok(())
    }

    async fn error_message(&self, error: ResponseError) {
        if let Err(err) = self.reply(error_response(error)).await {
            error!("Could not notify user of a failed interaction. Failed with error: {err:?}");
        }
    }
}
