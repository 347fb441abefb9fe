mod clipboard_reader;
mod clock;
mod image_store;

pub use clipboard_reader::ClipboardReader;
pub use clock::Clock;
pub use image_store::ImageStore;
