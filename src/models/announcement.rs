use serenity::all::UserId;

use crate::{common::duration::format_remaining, models::giveaway::Giveaway};

pub const OPEN_COLOUR: u32 = 0xfdca4c;
pub const ENDED_COLOUR: u32 = 0x4752c4;

/// What the public giveaway message should look like at a given moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    pub description: String,
    pub colour: u32,
    pub entry_button: bool,
}

impl Announcement {
    pub fn open(giveaway: &Giveaway) -> Self {
        let mut description = format!(
            "Time remaining: **{}**\nEntries: {}\nHosted by <@{}>",
            format_remaining(giveaway.remaining_seconds()),
            giveaway.entrants().len(),
            giveaway.host
        );
        if let Some(ends_at) = giveaway.ends_at() {
            description.push_str(&format!(
                "\n\nGiveaway ends <t:{}:R>",
                ends_at.unix_timestamp()
            ));
        }
        description.push_str("\n\nPress **Enter** to take part!");

        Announcement {
            title: format!("🎉 {} giveaway", giveaway.prize),
            description,
            colour: OPEN_COLOUR,
            entry_button: true,
        }
    }

    pub fn ended(giveaway: &Giveaway, winner: Option<UserId>) -> Self {
        let description = match winner {
            Some(winner) => format!(
                "Winner: <@{winner}>\nEntries: {}\nHosted by <@{}>",
                giveaway.entrants().len(),
                giveaway.host
            ),
            None => format!(
                "No one entered, so there is no winner.\nHosted by <@{}>",
                giveaway.host
            ),
        };

        Announcement {
            title: format!("🎉 {} giveaway [ENDED]", giveaway.prize),
            description,
            colour: ENDED_COLOUR,
            entry_button: false,
        }
    }
}

pub fn winner_message(giveaway: &Giveaway, winner: UserId) -> String {
    format!(
        "Congratulations <@{winner}>, you won the **{}**!",
        giveaway.prize
    )
}

pub fn no_winner_message(giveaway: &Giveaway) -> String {
    format!(
        "The **{}** giveaway has ended without any entries, so no winner was drawn.",
        giveaway.prize
    )
}
