mod arboard_clipboard_reader;
mod local_clock;
mod paste_shortcut_listener;
mod png_file_store;

pub use arboard_clipboard_reader::ArboardClipboardReader;
pub use local_clock::LocalClock;
pub use paste_shortcut_listener::{PasteShortcutListener, PasteTrigger};
pub use png_file_store::PngFileStore;
