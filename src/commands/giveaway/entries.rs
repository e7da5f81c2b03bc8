use serenity::{
    all::{CommandInteraction, MessageId},
    builder::CreateEmbed,
};

use crate::{
    commands::giveaway::manager::ActiveGiveaway,
    common::{duration::format_remaining, options::Options},
    models::{
        command::{CommandContext, CommandContextReply},
        handler::Handler,
        permissions::Permission,
        response::{Response, ResponseError, ResponseResult},
    },
};

const LISTED_ENTRANTS: usize = 50;

fn parse_id(id: &str) -> Option<MessageId> {
    match id.trim().parse::<u64>() {
        Ok(id) if id != 0 => Some(MessageId::new(id)),
        _ => None,
    }
}

fn describe_entrants(count: usize, mentions: Option<Vec<String>>) -> String {
    let mut description = format!("Entries: {count}");
    if let Some(mentions) = mentions.filter(|mentions| !mentions.is_empty()) {
        description.push_str("\n\n");
        description.push_str(
            &mentions
                .iter()
                .take(LISTED_ENTRANTS)
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        );
        if mentions.len() > LISTED_ENTRANTS {
            description.push_str(&format!(" and {} more", mentions.len() - LISTED_ENTRANTS));
        }
    }
    description
}

fn describe_active(active: &[ActiveGiveaway]) -> String {
    if active.is_empty() {
        return "There are no giveaways running right now.".to_string();
    }

    active
        .iter()
        .map(|giveaway| {
            format!(
                "`{}` **{}**: {} entries, {} left",
                giveaway.id,
                giveaway.prize,
                giveaway.entries,
                format_remaining(giveaway.remaining_seconds)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn entries(
    handler: &Handler,
    ctx: &CommandContext,
    cmd: &CommandInteraction,
) -> ResponseResult {
    let options = Options {
        options: cmd.data.options(),
    };

    let Some(id) = options.get_string("id") else {
        return ctx
            .reply(
                cmd,
                Response::new()
                    .embed(
                        CreateEmbed::new()
                            .title("Running giveaways")
                            .description(describe_active(&handler.giveaways.active().await))
                            .color(0xfdca4c),
                    )
                    .ephemeral(true),
            )
            .await;
    };

    let Some(id) = parse_id(&id) else {
        return Err(ResponseError::Execution(
            "Could not get giveaway ID",
            Some("Please use the message ID of the giveaway announcement".to_string()),
        ));
    };

    let entrants = handler.giveaways.entrants(id).await?;
    let mentions = ctx
        .user_permissions
        .contains(&Permission::GiveawayEntries)
        .then(|| {
            entrants
                .iter()
                .map(|entrant| format!("<@{entrant}>"))
                .collect::<Vec<_>>()
        });

    ctx.reply(
        cmd,
        Response::new()
            .embed(
                CreateEmbed::new()
                    .title("Giveaway entries")
                    .description(describe_entrants(entrants.len(), mentions))
                    .color(0xfdca4c),
            )
            .ephemeral(true),
    )
    .await
}
