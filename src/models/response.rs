use serenity::builder::CreateEmbed;

use super::giveaway::GiveawayError;

pub struct Response {
    pub content: Option<String>,
    pub embeds: Option<Vec<CreateEmbed>>,
    pub ephemeral: bool,
}

#[derive(Debug)]
pub enum ResponseError {
    Serenity(serenity::Error),
    Execution(&'static str, Option<String>),
}

pub type ResponseResult = Result<(), ResponseError>;

impl Response {
    pub fn new() -> Self {
        Response {
            content: None,
            embeds: None,
            ephemeral: false,
        }
    }

    pub fn content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds = Some(vec![embed]);
        self
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }
}

impl From<GiveawayError> for ResponseError {
    fn from(err: GiveawayError) -> Self {
        let title = match err {
            GiveawayError::InvalidDurationFormat(_) => "Invalid duration",
            GiveawayError::Unauthorized => "You do not have permission to do this!",
            GiveawayError::ChannelUnavailable => "Could not post the giveaway",
            GiveawayError::NotEligible => "You cannot enter this giveaway",
            GiveawayError::GiveawayClosed => "This giveaway has ended",
            GiveawayError::AnnouncementUpdateFailed(_) => "Could not update the giveaway",
        };
        ResponseError::Execution(title, Some(err.to_string()))
    }
}
