use serenity::{all::ComponentInteraction, prelude::Context as IncomingContext};
use tracing::debug;

use crate::{
    commands::giveaway::interaction::giveaway_entry_handler,
    common::announcer::ENTRY_BUTTON_ID,
    models::{command::InteractionContext, handler::Handler},
};

impl Handler {
    pub async fn on_component(&self, ctx: IncomingContext, component: ComponentInteraction) {
        let start = std::time::Instant::now();

        if component.data.custom_id != ENTRY_BUTTON_ID {
            debug!("Ignoring component {}", component.data.custom_id);
            return;
        }

        giveaway_entry_handler(self, InteractionContext::new(ctx, component)).await;
        debug!("Took {:?} to handle a giveaway entry", start.elapsed());
    }
}
