#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

use iced::Size;

use crate::global_constants::{APPLICATION_TITLE, LOG_TAG_APP, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::init();

    log::info!("{} Starting {}", LOG_TAG_APP, APPLICATION_TITLE);

    iced::application(
        app::QuickImageSaverApp::build,
        app::QuickImageSaverApp::handle_update,
        app::QuickImageSaverApp::render_view,
    )
    .title(APPLICATION_TITLE)
    .subscription(app::QuickImageSaverApp::handle_subscription)
    .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
    .resizable(false)
    .centered()
    .run()
}
