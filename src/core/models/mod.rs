mod app_config;
mod clipboard_content;
mod paste_outcome;
mod preview_bitmap;
mod saved_image_record;
mod status_state;

pub use app_config::AppConfig;
pub use clipboard_content::ClipboardContent;
pub use paste_outcome::{PasteError, PasteOutcome};
pub use preview_bitmap::PreviewBitmap;
pub use saved_image_record::SavedImageRecord;
pub use status_state::StatusState;
