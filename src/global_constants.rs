pub const APPLICATION_TITLE: &str = "Quick Image Saver";
pub const HEADER_TITLE: &str = "Single Preview Mode";
pub const PASTE_BUTTON_LABEL: &str = "Paste New Image (Ctrl+V)";
pub const PREVIEW_PLACEHOLDER: &str = "New image will appear here";

pub const STATUS_IDLE: &str = "Last saved: None";
pub const STATUS_SAVED_PREFIX: &str = "✅ Saved as: ";
pub const STATUS_EMPTY_CLIPBOARD: &str = "❌ Nothing found in clipboard";
pub const STATUS_ERROR_PREFIX: &str = "Error: ";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_PASTE: &str = "[PASTE]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_STORE: &str = "[STORE]";
pub const LOG_TAG_KEYBOARD: &str = "[KEYBOARD]";

pub const SAVED_FILE_PREFIX: &str = "img_";
pub const SAVED_FILE_EXTENSION: &str = "png";
pub const SAVED_FILE_TIME_FORMAT: &str = "%H%M%S";
pub const DESKTOP_DIRECTORY_NAME: &str = "Desktop";

pub const WINDOW_WIDTH: f32 = 450.0;
pub const WINDOW_HEIGHT: f32 = 550.0;
pub const CONTENT_PADDING: f32 = 30.0;
pub const CONTENT_SPACING: f32 = 15.0;
pub const PASTE_BUTTON_HEIGHT: f32 = 50.0;
pub const PREVIEW_FRAME_HEIGHT: f32 = 300.0;
pub const PREVIEW_FRAME_PADDING: f32 = 10.0;

/// Region the preview bitmap is fitted into. The frame leaves a 370x280 content box
/// after padding; the region sits inside it with a 2 px margin on each side.
pub const PREVIEW_REGION_WIDTH: u32 = 366;
pub const PREVIEW_REGION_HEIGHT: u32 = 276;
