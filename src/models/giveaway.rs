use serenity::all::{ChannelId, MessageId, UserId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GiveawayError {
    #[error("`{0}` is not a valid duration, use a number followed by s, m, h or d (e.g. 30m)")]
    InvalidDurationFormat(String),
    #[error("You do not have permission to start giveaways")]
    Unauthorized,
    #[error("The giveaway announcement channel is unavailable")]
    ChannelUnavailable,
    #[error("You do not have a role required to enter this giveaway")]
    NotEligible,
    #[error("This giveaway is no longer accepting entries")]
    GiveawayClosed,
    #[error("Could not update the announcement for giveaway {0}")]
    AnnouncementUpdateFailed(MessageId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GiveawayState {
    Open,
    Drawing,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Entered,
    AlreadyEntered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Winner(UserId),
    NoEntrants,
}

#[derive(Debug, Clone)]
pub struct Giveaway {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub host: UserId,
    pub prize: String,
    pub total_seconds: u64,
    pub created_at: time::OffsetDateTime,
    remaining_seconds: u64,
    entrants: Vec<UserId>,
    state: GiveawayState,
}

impl Giveaway {
    pub fn new(
        id: MessageId,
        channel_id: ChannelId,
        host: UserId,
        prize: String,
        total_seconds: u64,
        created_at: time::OffsetDateTime,
    ) -> Self {
        Giveaway {
            id,
            channel_id,
            host,
            prize,
            total_seconds,
            created_at,
            remaining_seconds: total_seconds,
            entrants: vec![],
            state: if total_seconds == 0 {
                GiveawayState::Drawing
            } else {
                GiveawayState::Open
            },
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn state(&self) -> GiveawayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == GiveawayState::Open
    }

    pub fn entrants(&self) -> &[UserId] {
        &self.entrants
    }

    pub fn has_entered(&self, user: UserId) -> bool {
        self.entrants.contains(&user)
    }

    pub fn ends_at(&self) -> Option<time::OffsetDateTime> {
        let seconds = i64::try_from(self.total_seconds).ok()?;
        self.created_at.checked_add(time::Duration::seconds(seconds))
    }

    // The announcement id only exists once the message has been posted
    pub fn with_id(mut self, id: MessageId) -> Self {
        self.id = id;
        self
    }

    /// Records an entrant. Eligibility is the caller's concern.
    pub fn add_entrant(&mut self, user: UserId) -> Result<EntryOutcome, GiveawayError> {
        if !self.is_open() {
            return Err(GiveawayError::GiveawayClosed);
        }
        if self.has_entered(user) {
            return Ok(EntryOutcome::AlreadyEntered);
        }

        self.entrants.push(user);
        Ok(EntryOutcome::Entered)
    }

    /// Counts down by `elapsed` seconds, closing the giveaway once nothing remains.
    pub fn tick(&mut self, elapsed: u64) -> GiveawayState {
        if self.is_open() {
            self.remaining_seconds = self.remaining_seconds.saturating_sub(elapsed);
            if self.remaining_seconds == 0 {
                self.state = GiveawayState::Drawing;
            }
        }
        self.state
    }

    /// Only valid while drawing; returns `None` otherwise.
    pub fn draw(&self, pick: impl FnOnce(&[UserId]) -> Option<UserId>) -> Option<DrawOutcome> {
        if self.state != GiveawayState::Drawing {
            return None;
        }

        match pick(&self.entrants) {
            Some(winner) if self.entrants.contains(&winner) => Some(DrawOutcome::Winner(winner)),
            _ if self.entrants.is_empty() => Some(DrawOutcome::NoEntrants),
            // A picker that strays outside the pool falls back to the first entrant
            _ => Some(DrawOutcome::Winner(self.entrants[0])),
        }
    }

    pub fn complete(&mut self) {
        if self.state == GiveawayState::Drawing {
            self.state = GiveawayState::Completed;
        }
    }
}
