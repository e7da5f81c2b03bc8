use std::sync::atomic::AtomicBool;

use serenity::{
    all::{CommandInteraction, GuildId, UserId},
    prelude::Context as IncomingContext,
};
use tracing::{debug, error};

use crate::{
    commands::get_command_list,
    models::{
        command::{CommandContext, CommandContextReply, FailedCommandContext},
        handler::Handler,
        permissions::Permission,
        response::{Response, ResponseError},
    },
};

async fn get_guild_owner(ctx: &IncomingContext, guild_id: GuildId) -> Option<UserId> {
    if let Some(guild) = guild_id.to_guild_cached(&ctx.cache) {
        return Some(guild.owner_id);
    }

    match guild_id.to_partial_guild(&ctx.http).await {
        Ok(guild) => Some(guild.owner_id),
        Err(err) => {
            error!("Could not obtain guild {}. Failed with error: {:?}", guild_id, err);
            None
        }
    }
}

impl Handler {
    pub async fn on_command(&self, ctx: IncomingContext, command: CommandInteraction) {
        let start = std::time::Instant::now();

        let Some(guild_id) = command.guild_id else {
            let fail_context = FailedCommandContext { ctx };
            if let Err(err) = fail_context
                .reply(
                    &command,
                    Response::new()
                        .content("Giveaways cannot be used outside of servers".to_string())
                        .ephemeral(true),
                )
                .await
            {
                error!("Failed to reply to command: {:?}", err);
            }
            return;
        };

        let Some(owner_id) = get_guild_owner(&ctx, guild_id).await else {
            let fail_context = FailedCommandContext { ctx };
            fail_context
                .error_message(
                    &command,
                    ResponseError::Execution("Could not obtain the server", None),
                )
                .await;
            return;
        };

        debug!("Took {:?} to get guild ID and owner", start.elapsed());

        let (member_permissions, member_roles) = match &command.member {
            Some(member) => (member.permissions, member.roles.clone()),
            None => (None, vec![]),
        };
        let user_permissions = Permission::resolve(
            owner_id == command.user.id,
            member_permissions,
            &member_roles,
            &self.config.admin_roles,
        );

        let command_context = CommandContext {
            ctx,
            has_responsed: AtomicBool::new(false),
            user_permissions,
        };

        debug!("Context generated in {:?}", start.elapsed());

        for existing_command in get_command_list() {
            if existing_command.name() == command.data.name {
                if let Err(err) = existing_command
                    .router(self, &command_context, &command)
                    .await
                {
                    debug!("Command {} failed: {:?}", command.data.name, err);
                    command_context.error_message(&command, err).await;
                }
            }
        }

        debug!("Took {:?} to handle a command", start.elapsed());
    }
}
