use std::sync::Arc;

use iced::{Element, Subscription, Task};

use crate::core::models::AppConfig;
use crate::core::orchestrators::capture_save_preview::CaptureSavePreview;
use crate::core::orchestrators::paste_orchestrator::{OrchestratorMessage, PasteOrchestrator};
use crate::global_constants::LOG_TAG_APP;
use crate::ports::{ArboardClipboardReader, LocalClock, PasteShortcutListener, PngFileStore};

pub struct QuickImageSaverApp {
    orchestrator: PasteOrchestrator,
}

impl QuickImageSaverApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let config = AppConfig::resolve();

        let operation = CaptureSavePreview::build(
            Arc::new(ArboardClipboardReader::initialize()),
            Arc::new(PngFileStore::initialize()),
            Arc::new(LocalClock),
            config,
        );

        (
            Self {
                orchestrator: PasteOrchestrator::build(operation),
            },
            Task::none(),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn handle_subscription(&self) -> Subscription<OrchestratorMessage> {
        PasteShortcutListener::create_subscription().map(OrchestratorMessage::PasteRequested)
    }
}
