pub mod capture_save_preview;
pub mod paste_orchestrator;
