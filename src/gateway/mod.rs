//! The gateway is the process-wide context wiring store, channel,
//! scheduler, and webhook ingress together.
//!
//! Constructed once in `main`; tests build isolated gateways with an
//! in-memory store and a mock channel.

mod auth;
mod dispatch;
mod pipeline;
mod scheduler;


use crate::ingress;
use remora_core::config::{BotConfig, ServerConfig};
use remora_core::traits::Channel;
use remora_store::Store;
use scheduler::Scheduler;
use std::sync::Arc;
use tracing::{error, info};

/// The central context owning all long-lived state.
pub struct Gateway {
    pub(crate) store: Store,
    pub(crate) channel: Arc<dyn Channel>,
    pub(crate) scheduler: Scheduler,
    pub(crate) bot: BotConfig,
    pub(crate) server: ServerConfig,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        store: Store,
        channel: Arc<dyn Channel>,
        bot: BotConfig,
        server: ServerConfig,
    ) -> Self {
        let scheduler = Scheduler::new(store.clone(), channel.clone());
        Self {
            store,
            channel,
            scheduler,
            bot,
            server,
        }
    }

    pub(crate) fn channel(&self) -> &dyn Channel {
        self.channel.as_ref()
    }

    /// Run until ctrl-c: rehydrate timers from the store, then serve the
    /// webhook ingress.
    ///
    /// Rehydration finishes before the listener binds, so no inbound
    /// command can race the startup timer registration.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        let restored = self.scheduler.rehydrate().await?;
        info!("rehydrated {restored} pending reminders");

        let server_gw = self.clone();
        let server_handle = tokio::spawn(async move {
            ingress::serve(server_gw).await;
        });

        tokio::signal::ctrl_c().await?;
        info!("Received shutdown signal");

        server_handle.abort();
        self.scheduler.shutdown().await;
        info!("Shutdown complete.");
        Ok(())
    }

    /// Reply to an inbound event. Send failures are logged, never
    /// propagated; nothing from command handling may crash the process.
    pub(crate) async fn reply(&self, reply_token: &str, text: &str) {
        if let Err(e) = self.channel.reply(reply_token, text).await {
            error!("failed to send reply: {e}");
        }
    }
}
