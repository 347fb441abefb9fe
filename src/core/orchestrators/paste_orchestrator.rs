use iced::{Element, Task};

use crate::core::models::{PasteOutcome, PreviewBitmap, SavedImageRecord, StatusState};
use crate::core::orchestrators::capture_save_preview::CaptureSavePreview;
use crate::global_constants::LOG_TAG_ORCHESTRATOR;
use crate::ports::PasteTrigger;
use crate::presentation::PasteWindowView;

pub struct PasteOrchestrator {
    operation: CaptureSavePreview,
    status: StatusState,
    preview: Option<PreviewBitmap>,
    current_record: Option<SavedImageRecord>,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    PasteRequested(PasteTrigger),
}

impl PasteOrchestrator {
    pub fn build(operation: CaptureSavePreview) -> Self {
        Self {
            operation,
            status: StatusState::Idle,
            preview: None,
            current_record: None,
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);

        match message {
            OrchestratorMessage::PasteRequested(trigger) => self.handle_paste_requested(trigger),
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        PasteWindowView::render_ui(&self.status, self.preview.as_ref())
            .map(OrchestratorMessage::PasteRequested)
    }

    pub fn status(&self) -> &StatusState {
        &self.status
    }

    pub fn preview(&self) -> Option<&PreviewBitmap> {
        self.preview.as_ref()
    }

    #[allow(dead_code)]
    pub fn current_record(&self) -> Option<&SavedImageRecord> {
        self.current_record.as_ref()
    }

    fn handle_paste_requested(&mut self, trigger: PasteTrigger) -> Task<OrchestratorMessage> {
        log::info!("{} Paste requested via {:?}", LOG_TAG_ORCHESTRATOR, trigger);

        let outcome = self.operation.execute();
        self.apply_outcome(outcome);

        Task::none()
    }

    /// The only place UI state changes. Preview and record are touched on success only.
    fn apply_outcome(&mut self, outcome: PasteOutcome) {
        self.status = outcome.to_status();

        if let PasteOutcome::Saved { record, preview } = outcome {
            if let Some(previous) = &self.current_record {
                log::debug!(
                    "{} Superseding {} with {}",
                    LOG_TAG_ORCHESTRATOR,
                    previous.file_name,
                    record.file_name
                );
            }
            self.preview = Some(preview);
            self.current_record = Some(record);
        }

        if self.status.is_failure() {
            log::warn!("{} Paste did not save: {}", LOG_TAG_ORCHESTRATOR, self.status);
        } else {
            log::debug!("{} Status is now: {}", LOG_TAG_ORCHESTRATOR, self.status);
        }
    }
}
