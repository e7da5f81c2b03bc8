use std::sync::Arc;

use crate::commands::giveaway::manager::GiveawayManager;

use super::config::GiveawayConfig;

#[derive(Clone)]
pub struct Handler {
    pub giveaways: GiveawayManager,
    pub config: Arc<GiveawayConfig>,
}
