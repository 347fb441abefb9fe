use anyhow::Result;

use crate::core::models::ClipboardContent;

pub trait ClipboardReader {
    /// Reads the clipboard fresh on every call. "Nothing there" is `Ok(ClipboardContent::Empty)`.
    fn read_clipboard_content(&self) -> Result<ClipboardContent>;
}
