use std::sync::Arc;

use serenity::{
    all::{ButtonStyle, ChannelId, MessageId},
    builder::{CreateActionRow, CreateButton, CreateEmbed, CreateMessage, EditMessage},
    http::Http,
};
use tracing::debug;

use crate::models::announcement::Announcement;

pub const ENTRY_BUTTON_ID: &str = "giveaway_enter";

/// Where giveaway announcements are posted and kept up to date.
#[async_trait::async_trait]
pub trait Announcer: Send + Sync {
    async fn post(
        &self,
        channel: ChannelId,
        announcement: &Announcement,
    ) -> serenity::Result<MessageId>;

    async fn edit(
        &self,
        channel: ChannelId,
        message: MessageId,
        announcement: &Announcement,
    ) -> serenity::Result<()>;

    async fn reply(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: String,
    ) -> serenity::Result<()>;
}

pub struct SerenityAnnouncer {
    pub http: Arc<Http>,
}

fn generate_embed(announcement: &Announcement) -> CreateEmbed {
    CreateEmbed::new()
        .title(&announcement.title)
        .description(&announcement.description)
        .color(announcement.colour)
}

fn generate_components(announcement: &Announcement) -> Vec<CreateActionRow> {
    if !announcement.entry_button {
        return vec![];
    }

    vec![CreateActionRow::Buttons(vec![CreateButton::new(
        ENTRY_BUTTON_ID,
    )
    .label("Enter")
    .style(ButtonStyle::Primary)])]
}

#[async_trait::async_trait]
impl Announcer for SerenityAnnouncer {
    async fn post(
        &self,
        channel: ChannelId,
        announcement: &Announcement,
    ) -> serenity::Result<MessageId> {
        let message = channel
            .send_message(
                &*self.http,
                CreateMessage::new()
                    .embed(generate_embed(announcement))
                    .components(generate_components(announcement)),
            )
            .await?;
        debug!("Posted giveaway announcement {} in {}", message.id, channel);
        Ok(message.id)
    }

    async fn edit(
        &self,
        channel: ChannelId,
        message: MessageId,
        announcement: &Announcement,
    ) -> serenity::Result<()> {
        channel
            .edit_message(
                &*self.http,
                message,
                EditMessage::new()
                    .embed(generate_embed(announcement))
                    .components(generate_components(announcement)),
            )
            .await?;
        Ok(())
    }

    async fn reply(
        &self,
        channel: ChannelId,
        message: MessageId,
        content: String,
    ) -> serenity::Result<()> {
        channel
            .send_message(
                &*self.http,
                CreateMessage::new()
                    .content(content)
                    .reference_message((channel, message)),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use std::{
        sync::{
            atomic::{AtomicBool, AtomicU64, Ordering},
            Mutex,
        },
        time::Duration,
    };

    use serenity::all::{ChannelId, MessageId};

    use super::Announcer;
    use crate::models::announcement::Announcement;

    /// Keeps everything it is asked to send so tests can inspect it.
    pub struct RecordingAnnouncer {
        next_id: AtomicU64,
        pub fail_post: AtomicBool,
        pub fail_edit: AtomicBool,
        /// Edits never complete while set.
        pub hang_edit: AtomicBool,
        pub post_delay: Mutex<Duration>,
        pub posts: Mutex<Vec<(ChannelId, MessageId, Announcement)>>,
        pub edits: Mutex<Vec<(MessageId, Announcement)>>,
        pub replies: Mutex<Vec<(MessageId, String)>>,
    }

    impl RecordingAnnouncer {
        pub fn new() -> Self {
            RecordingAnnouncer {
                next_id: AtomicU64::new(1000),
                fail_post: AtomicBool::new(false),
                fail_edit: AtomicBool::new(false),
                hang_edit: AtomicBool::new(false),
                post_delay: Mutex::new(Duration::ZERO),
                posts: Mutex::new(vec![]),
                edits: Mutex::new(vec![]),
                replies: Mutex::new(vec![]),
            }
        }

        pub fn edits_for(&self, message: MessageId) -> Vec<Announcement> {
            self.edits
                .lock()
                .unwrap()
                .iter()
                .filter(|(id, _)| *id == message)
                .map(|(_, announcement)| announcement.clone())
                .collect()
        }

        pub fn replies_for(&self, message: MessageId) -> Vec<String> {
            self.replies
                .lock()
                .unwrap()
                .iter()
                .filter(|(id, _)| *id == message)
                .map(|(_, content)| content.clone())
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl Announcer for RecordingAnnouncer {
        async fn post(
            &self,
            channel: ChannelId,
            announcement: &Announcement,
        ) -> serenity::Result<MessageId> {
            let delay = *self.post_delay.lock().unwrap();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if self.fail_post.load(Ordering::SeqCst) {
                return Err(serenity::Error::Other("Unknown Channel"));
            }

            let id = MessageId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            self.posts
                .lock()
                .unwrap()
                .push((channel, id, announcement.clone()));
            Ok(id)
        }

        async fn edit(
            &self,
            _channel: ChannelId,
            message: MessageId,
            announcement: &Announcement,
        ) -> serenity::Result<()> {
            if self.hang_edit.load(Ordering::SeqCst) {
                std::future::pending::<()>().await;
            }
            if self.fail_edit.load(Ordering::SeqCst) {
                return Err(serenity::Error::Other("Missing Access"));
            }

            self.edits
                .lock()
                .unwrap()
                .push((message, announcement.clone()));
            Ok(())
        }

        async fn reply(
            &self,
            _channel: ChannelId,
            message: MessageId,
            content: String,
        ) -> serenity::Result<()> {
            self.replies.lock().unwrap().push((message, content));
            Ok(())
        }
    }
}
