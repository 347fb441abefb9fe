pub mod app_theme;
mod paste_window_view;

pub use paste_window_view::PasteWindowView;
