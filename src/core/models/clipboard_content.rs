use std::path::PathBuf;

/// What the clipboard held at the moment it was read.
pub enum ClipboardContent {
    ImagePixels {
        width: u32,
        height: u32,
        rgba_bytes: Vec<u8>,
    },
    FileReferences(Vec<PathBuf>),
    Empty,
}

impl std::fmt::Debug for ClipboardContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardContent::ImagePixels {
                width,
                height,
                rgba_bytes,
            } => f
                .debug_struct("ImagePixels")
                .field("width", width)
                .field("height", height)
                .field("byte_count", &rgba_bytes.len())
                .finish(),
            ClipboardContent::FileReferences(paths) => {
                f.debug_tuple("FileReferences").field(paths).finish()
            }
            ClipboardContent::Empty => write!(f, "Empty"),
        }
    }
}

impl ClipboardContent {
    pub fn first_file_reference(&self) -> Option<&PathBuf> {
        match self {
            ClipboardContent::FileReferences(paths) => paths.first(),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        match self {
            ClipboardContent::Empty => true,
            ClipboardContent::FileReferences(paths) => paths.is_empty(),
            ClipboardContent::ImagePixels { .. } => false,
        }
    }
}
