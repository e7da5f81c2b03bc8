use std::{collections::HashMap, future::Future, sync::Arc, time::Duration};

use serenity::all::{ChannelId, MessageId, RoleId, UserId};
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, error, info, warn};

use crate::{
    common::{
        announcer::Announcer, duration::GiveawayDuration, eligibility::Eligibility,
        picker::WinnerPicker,
    },
    models::{
        announcement::{no_winner_message, winner_message, Announcement},
        giveaway::{DrawOutcome, EntryOutcome, Giveaway, GiveawayError},
        permissions::Permission,
    },
};

/// Owns every running giveaway and the collaborators they need.
#[derive(Clone)]
pub struct GiveawayManager {
    giveaways: Arc<Mutex<HashMap<MessageId, Giveaway>>>,
    announcer: Arc<dyn Announcer>,
    picker: Arc<dyn WinnerPicker>,
    eligibility: Eligibility,
    channel: Option<ChannelId>,
    tick_interval: Duration,
    network_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveGiveaway {
    pub id: MessageId,
    pub prize: String,
    pub remaining_seconds: u64,
    pub entries: usize,
}

impl GiveawayManager {
    pub fn new(
        announcer: Arc<dyn Announcer>,
        picker: Arc<dyn WinnerPicker>,
        eligibility: Eligibility,
        channel: Option<ChannelId>,
        tick_interval: Duration,
        network_timeout: Duration,
    ) -> Self {
        GiveawayManager {
            giveaways: Arc::new(Mutex::new(HashMap::new())),
            announcer,
            picker,
            eligibility,
            channel,
            // Remaining time is counted in whole seconds
            tick_interval: Duration::from_secs(tick_interval.as_secs().max(1)),
            network_timeout,
        }
    }

    /// Posts the announcement, registers the giveaway under its message id and starts the countdown.
    pub async fn create(
        &self,
        host: UserId,
        permissions: &[Permission],
        prize: &str,
        duration: &str,
    ) -> Result<MessageId, GiveawayError> {
        if !permissions.contains(&Permission::GiveawayCreate) {
            return Err(GiveawayError::Unauthorized);
        }
        let seconds = GiveawayDuration::parse(duration)?.seconds;
        if seconds == 0 {
            return Err(GiveawayError::InvalidDurationFormat(duration.to_string()));
        }
        let Some(channel) = self.channel else {
            warn!("No giveaway channel configured, refusing to start a giveaway");
            return Err(GiveawayError::ChannelUnavailable);
        };

        // Rendered before the message exists; only registered once the real id is known
        let draft = Giveaway::new(
            MessageId::new(1),
            channel,
            host,
            prize.to_string(),
            seconds,
            time::OffsetDateTime::now_utc(),
        );

        let id = match self
            .with_timeout(self.announcer.post(channel, &Announcement::open(&draft)))
            .await
        {
            Some(Ok(id)) => id,
            Some(Err(err)) => {
                error!(
                    "Could not post giveaway announcement in {}. Failed with error: {:?}",
                    channel, err
                );
                return Err(GiveawayError::ChannelUnavailable);
            }
            None => {
                error!("Posting giveaway announcement in {} timed out", channel);
                return Err(GiveawayError::ChannelUnavailable);
            }
        };

        {
            let mut giveaways = self.giveaways.lock().await;
            giveaways.insert(id, draft.with_id(id));
            tokio::spawn(self.clone().run_countdown(id));
        }
        info!("Started giveaway {} for {:?} lasting {}s", id, prize, seconds);

        Ok(id)
    }

    pub async fn submit_entry(
        &self,
        id: MessageId,
        user: UserId,
        member_roles: &[RoleId],
    ) -> Result<EntryOutcome, GiveawayError> {
        let mut giveaways = self.giveaways.lock().await;
        let Some(giveaway) = giveaways.get_mut(&id) else {
            return Err(GiveawayError::GiveawayClosed);
        };

        if !giveaway.is_open() {
            return Err(GiveawayError::GiveawayClosed);
        }
        if giveaway.has_entered(user) {
            return Ok(EntryOutcome::AlreadyEntered);
        }
        if !self.eligibility.is_eligible(member_roles) {
            debug!("User {} is not eligible for giveaway {}", user, id);
            return Err(GiveawayError::NotEligible);
        }

        let outcome = giveaway.add_entrant(user)?;
        debug!(
            "User {} entered giveaway {} ({} entries)",
            user,
            id,
            giveaway.entrants().len()
        );
        Ok(outcome)
    }

    pub async fn entrants(&self, id: MessageId) -> Result<Vec<UserId>, GiveawayError> {
        match self.giveaways.lock().await.get(&id) {
            Some(giveaway) => Ok(giveaway.entrants().to_vec()),
            None => Err(GiveawayError::GiveawayClosed),
        }
    }

    pub async fn active(&self) -> Vec<ActiveGiveaway> {
        let mut active = self
            .giveaways
            .lock()
            .await
            .values()
            .map(|giveaway| ActiveGiveaway {
                id: giveaway.id,
                prize: giveaway.prize.clone(),
                remaining_seconds: giveaway.remaining_seconds(),
                entries: giveaway.entrants().len(),
            })
            .collect::<Vec<_>>();
        active.sort_by_key(|giveaway| giveaway.id);
        active
    }

    async fn with_timeout<T>(&self, future: impl Future<Output = T>) -> Option<T> {
        tokio::time::timeout(self.network_timeout, future).await.ok()
    }

    async fn run_countdown(self, id: MessageId) {
        let mut checkpoint = Instant::now();

        loop {
            let remaining = match self.giveaways.lock().await.get(&id) {
                Some(giveaway) => giveaway.remaining_seconds(),
                None => return,
            };

            let step = self.tick_interval.min(Duration::from_secs(remaining));
            checkpoint += step;
            tokio::time::sleep_until(checkpoint).await;

            let announcement = {
                let mut giveaways = self.giveaways.lock().await;
                let Some(giveaway) = giveaways.get_mut(&id) else {
                    return;
                };
                giveaway.tick(step.as_secs());
                if !giveaway.is_open() {
                    break;
                }
                (giveaway.channel_id, Announcement::open(giveaway))
            };

            if let Err(err) = self.update_announcement(id, announcement).await {
                warn!("{}, continuing countdown", err);
            }
        }

        self.finish(id).await;
    }

    async fn update_announcement(
        &self,
        id: MessageId,
        (channel, announcement): (ChannelId, Announcement),
    ) -> Result<(), GiveawayError> {
        match self
            .with_timeout(self.announcer.edit(channel, id, &announcement))
            .await
        {
            Some(Ok(())) => Ok(()),
            Some(Err(err)) => {
                error!(
                    "Could not update giveaway message for giveaway {}. Failed with error: {:?}",
                    id, err
                );
                Err(GiveawayError::AnnouncementUpdateFailed(id))
            }
            None => Err(GiveawayError::AnnouncementUpdateFailed(id)),
        }
    }

    async fn finish(&self, id: MessageId) {
        let (giveaway, outcome) = {
            let giveaways = self.giveaways.lock().await;
            let Some(giveaway) = giveaways.get(&id) else {
                return;
            };
            let Some(outcome) = giveaway.draw(|entrants| self.picker.pick(entrants)) else {
                return;
            };
            (giveaway.clone(), outcome)
        };

        match outcome {
            DrawOutcome::NoEntrants => {
                info!("Giveaway {} ended without entries", id);
                self.announce_end(&giveaway, None, no_winner_message(&giveaway))
                    .await;
            }
            DrawOutcome::Winner(winner) => {
                info!(
                    "Giveaway {} won by {} out of {} entries",
                    id,
                    winner,
                    giveaway.entrants().len()
                );
                self.announce_end(&giveaway, Some(winner), winner_message(&giveaway, winner))
                    .await;
            }
        }

        let mut giveaways = self.giveaways.lock().await;
        if let Some(giveaway) = giveaways.get_mut(&id) {
            giveaway.complete();
            debug!("Giveaway {} is now {}", id, giveaway.state());
        }
        giveaways.remove(&id);
    }

    async fn announce_end(&self, giveaway: &Giveaway, winner: Option<UserId>, message: String) {
        if let Err(err) = self
            .update_announcement(
                giveaway.id,
                (giveaway.channel_id, Announcement::ended(giveaway, winner)),
            )
            .await
        {
            warn!("{}, posting the result anyway", err);
        }

        match self
            .with_timeout(
                self.announcer
                    .reply(giveaway.channel_id, giveaway.id, message),
            )
            .await
        {
            Some(Ok(())) => {}
            Some(Err(err)) => error!(
                "Could not send giveaway result message for giveaway {}. Failed with error: {:?}",
                giveaway.id, err
            ),
            None => error!(
                "Sending giveaway result message for giveaway {} timed out",
                giveaway.id
            ),
        }
    }
}
