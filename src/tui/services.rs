use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::api::{LoreApi, LoreClient};
use crate::core::clipboard::{Clipboard, Osc52Clipboard};
use crate::core::download::ExportWriter;
use crate::core::error::ApiResult;
use crate::core::models::Faction;

use super::events::{AppEvent, Generation};

/// Centralized handle to the backend client and output sinks.
///
/// Created once at startup and owned by the controller. Trait objects let
/// tests swap in doubles for the API and clipboard.
pub struct Services {
    pub api: Arc<dyn LoreApi>,
    pub clipboard: Arc<dyn Clipboard>,
    pub exports: ExportWriter,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    pub fn new(
        api: Arc<dyn LoreApi>,
        clipboard: Arc<dyn Clipboard>,
        exports: ExportWriter,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            api,
            clipboard,
            exports,
            event_tx,
        }
    }

    /// Build the production services from config.
    pub fn init(config: &AppConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> ApiResult<Self> {
        let api = LoreClient::from_config(&config.api)?;
        log::info!("Lore API client targeting {}", api.base_url());

        let exports = ExportWriter::new(config.export_dir());
        log::info!("Exports will be written to {}", exports.dir().display());

        Ok(Self::new(
            Arc::new(api),
            Arc::new(Osc52Clipboard),
            exports,
            event_tx,
        ))
    }

    /// Request `count` factions in the background. Exactly one result event
    /// is sent back.
    pub fn spawn_factions(&self, count: u8) {
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match api.generate_factions(count).await {
                Ok(factions) => {
                    log::info!("Generated {} factions", factions.len());
                    AppEvent::FactionsGenerated(factions)
                }
                Err(e) => {
                    log::error!("Faction generation failed: {e}");
                    AppEvent::GenerationFailed {
                        kind: Generation::Factions,
                        message: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        });
    }

    /// Request a quest, optionally grounded in `factions`.
    pub fn spawn_quest(&self, factions: Option<Vec<Faction>>) {
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match api.generate_quest(factions).await {
                Ok(quest) => {
                    log::info!("Generated quest '{}'", quest.title);
                    AppEvent::QuestGenerated(quest)
                }
                Err(e) => {
                    log::error!("Quest generation failed: {e}");
                    AppEvent::GenerationFailed {
                        kind: Generation::Quest,
                        message: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        });
    }
}
